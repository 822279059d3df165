//! HTTP mail provider. Builds SendGrid-style JSON payloads and posts them
//! to the configured mail API. Unlike the tracking path, failures here are
//! reported back to the caller so the API route can answer with an error.

use folio_core::config::MailerConfig;
use folio_core::error::{PulseError, PulseResult};
use tracing::{debug, info, warn};

use crate::message::ContactMessage;

/// Mail relay over an HTTP provider API.
pub struct MailProvider {
    client: reqwest::Client,
    config: MailerConfig,
}

impl MailProvider {
    pub fn new(config: MailerConfig) -> Self {
        info!(
            from = %config.from_email,
            enabled = config.enabled,
            "mail provider initialized"
        );
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Relay a validated contact message: one notification to the site
    /// owner, one acknowledgment to the sender.
    pub async fn relay(&self, message: &ContactMessage) -> PulseResult<()> {
        let notification = self.owner_notification(message);
        let acknowledgment = self.sender_acknowledgment(message);

        if !self.config.enabled {
            debug!(
                sender = %message.email,
                "mail delivery disabled, relay skipped"
            );
            return Ok(());
        }

        self.send(&notification).await?;
        self.send(&acknowledgment).await?;

        metrics::counter!("mailer.messages_relayed").increment(1);
        Ok(())
    }

    /// Notification delivered to the site owner.
    fn owner_notification(&self, message: &ContactMessage) -> serde_json::Value {
        serde_json::json!({
            "personalizations": [{
                "to": [{"email": self.config.owner_email}]
            }],
            "from": {
                "email": self.config.from_email,
                "name": self.config.from_name
            },
            "reply_to": {"email": message.email, "name": message.name},
            "subject": format!("New contact message from {}", message.name.trim()),
            "content": [{
                "type": "text/html",
                "value": format!(
                    "<h2>New contact form submission</h2>\
                     <p><strong>Name:</strong> {}</p>\
                     <p><strong>Email:</strong> {}</p>\
                     <p><strong>Message:</strong></p><p>{}</p>",
                    escape_html(message.name.trim()),
                    escape_html(message.email.trim()),
                    escape_html(message.message.trim()),
                )
            }]
        })
    }

    /// Acknowledgment delivered back to the sender.
    fn sender_acknowledgment(&self, message: &ContactMessage) -> serde_json::Value {
        serde_json::json!({
            "personalizations": [{
                "to": [{"email": message.email}]
            }],
            "from": {
                "email": self.config.from_email,
                "name": self.config.from_name
            },
            "subject": "Thanks for reaching out",
            "content": [{
                "type": "text/html",
                "value": format!(
                    "<p>Hi {},</p>\
                     <p>Thanks for your message — I read every submission and \
                     will get back to you soon.</p>\
                     <p>— {}</p>",
                    escape_html(message.name.trim()),
                    escape_html(&self.config.from_name),
                )
            }]
        })
    }

    async fn send(&self, payload: &serde_json::Value) -> PulseResult<()> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| PulseError::Mail(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "mail provider rejected message");
            metrics::counter!("mailer.delivery_errors").increment(1);
            return Err(PulseError::Mail(format!(
                "provider returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MailProvider {
        MailProvider::new(MailerConfig {
            owner_email: "owner@ismat.pro".into(),
            from_email: "noreply@ismat.pro".into(),
            from_name: "ismat.pro contact form".into(),
            ..MailerConfig::default()
        })
    }

    fn submission() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "I'd like to talk about a <project>.".into(),
        }
    }

    #[test]
    fn test_owner_notification_payload() {
        let payload = provider().owner_notification(&submission());

        assert_eq!(
            payload["personalizations"][0]["to"][0]["email"],
            "owner@ismat.pro"
        );
        assert_eq!(payload["reply_to"]["email"], "ada@example.com");
        assert_eq!(
            payload["subject"],
            "New contact message from Ada Lovelace"
        );
        let body = payload["content"][0]["value"].as_str().unwrap();
        assert!(body.contains("Ada Lovelace"));
        // Message content is HTML-escaped
        assert!(body.contains("&lt;project&gt;"));
    }

    #[test]
    fn test_sender_acknowledgment_payload() {
        let payload = provider().sender_acknowledgment(&submission());

        assert_eq!(
            payload["personalizations"][0]["to"][0]["email"],
            "ada@example.com"
        );
        assert_eq!(payload["from"]["email"], "noreply@ismat.pro");
        let body = payload["content"][0]["value"].as_str().unwrap();
        assert!(body.contains("Hi Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_disabled_provider_relays_without_network() {
        // enabled defaults to false, so no HTTP call is attempted
        assert!(provider().relay(&submission()).await.is_ok());
    }
}
