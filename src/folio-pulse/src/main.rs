//! Folio Pulse — first-party analytics and site services for a personal
//! portfolio site.
//!
//! Main entry point that wires the collector, mail relay, and API server.

use clap::Parser;
use folio_api::ApiServer;
use folio_core::config::AppConfig;
use folio_core::event_bus::LogSink;
use folio_mailer::MailProvider;
use folio_tracker::collector::EventCollector;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod simulate;

/// Sessions idle longer than this are pruned from the collector.
const SESSION_IDLE_LIMIT: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Parser, Debug)]
#[command(name = "folio-pulse")]
#[command(about = "First-party analytics and site services for a portfolio site")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "FOLIO_PULSE__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Metrics exporter port (overrides config)
    #[arg(long, env = "FOLIO_PULSE__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// Enable outbound mail delivery
    #[arg(long, default_value_t = false)]
    enable_mail: bool,

    /// Run a simulated browsing session against the collection endpoint
    /// after startup (smoke-tests the tracking SDK end to end)
    #[arg(long, default_value_t = false)]
    simulate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_pulse=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Folio Pulse starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }
    if cli.enable_mail {
        config.mailer.enabled = true;
    }

    info!(
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        mail_enabled = config.mailer.enabled,
        site = %config.site.base_url,
        "Configuration loaded"
    );

    // Initialize the collector and the mail relay
    let collector = Arc::new(EventCollector::new().with_sink(Arc::new(LogSink)));
    let mailer = Arc::new(MailProvider::new(config.mailer.clone()));

    // Start API server
    let api_server = ApiServer::new(config.clone(), collector.clone(), mailer);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    // Spawn collector maintenance task
    let collector_for_maintenance = collector.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            let pruned = collector_for_maintenance.prune_stale(SESSION_IDLE_LIMIT);
            if pruned > 0 {
                info!(pruned, "pruned idle sessions");
            }
        }
    });

    // Optionally drive a simulated visitor through the tracking SDK
    if cli.simulate {
        let tracker_config = config.tracker.clone();
        tokio::spawn(async move {
            // Give the HTTP server a moment to bind
            tokio::time::sleep(Duration::from_secs(1)).await;
            simulate::run(&tracker_config).await;
        });
    }

    info!("Folio Pulse is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
