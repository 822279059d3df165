use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `FOLIO_PULSE__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub mailer: MailerConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Site identity used by the SEO generator and mail templates.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_twitter_handle")]
    pub twitter_handle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

/// Tracking SDK settings: collection endpoint, debounce delay, identity
/// expirations, and the dispatch queue bound.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_session_ttl_minutes")]
    pub session_ttl_minutes: u64,
    #[serde(default = "default_visitor_ttl_days")]
    pub visitor_ttl_days: u64,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailerConfig {
    #[serde(default = "default_mail_enabled")]
    pub enabled: bool,
    #[serde(default = "default_mail_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_owner_email")]
    pub owner_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// Default functions
fn default_base_url() -> String {
    "https://ismat.pro".to_string()
}
fn default_site_name() -> String {
    "Ismat Samadov | Data Analytics & AI Professional".to_string()
}
fn default_author() -> String {
    "Ismat Samadov".to_string()
}
fn default_twitter_handle() -> String {
    "@IsmatSamadov".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_endpoint() -> String {
    "http://localhost:8080/api/analytics/track".to_string()
}
fn default_debounce_ms() -> u64 {
    500
}
fn default_session_ttl_minutes() -> u64 {
    30
}
fn default_visitor_ttl_days() -> u64 {
    730
}
fn default_queue_capacity() -> usize {
    256
}
fn default_mail_enabled() -> bool {
    false
}
fn default_mail_api_url() -> String {
    "https://api.sendgrid.com/v3/mail/send".to_string()
}
fn default_from_email() -> String {
    "noreply@ismat.pro".to_string()
}
fn default_from_name() -> String {
    "ismat.pro contact form".to_string()
}
fn default_owner_email() -> String {
    "ismetsemedov@gmail.com".to_string()
}
fn default_metrics_port() -> u16 {
    9091
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_name: default_site_name(),
            author: default_author(),
            twitter_handle: default_twitter_handle(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            session_ttl_minutes: default_session_ttl_minutes(),
            visitor_ttl_days: default_visitor_ttl_days(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            enabled: default_mail_enabled(),
            api_url: default_mail_api_url(),
            api_key: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            owner_email: default_owner_email(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            api: ApiConfig::default(),
            tracker: TrackerConfig::default(),
            mailer: MailerConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("FOLIO_PULSE")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tracker.session_ttl_minutes, 30);
        assert_eq!(config.tracker.visitor_ttl_days, 730);
        assert_eq!(config.tracker.debounce_ms, 500);
        assert_eq!(config.api.http_port, 8080);
        assert!(!config.mailer.enabled);
    }
}
