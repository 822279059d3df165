//! API server — HTTP router, middleware, and the metrics exporter.

use crate::contact_rest;
use crate::content_rest;
use crate::rest::{self, AppState};
use crate::swagger::ApiDoc;
use axum::routing::{get, post};
use axum::Router;
use folio_core::config::AppConfig;
use folio_mailer::MailProvider;
use folio_tracker::collector::EventCollector;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Main API server for the site.
pub struct ApiServer {
    config: AppConfig,
    collector: Arc<EventCollector>,
    mailer: Arc<MailProvider>,
}

/// Build the application router. Exposed separately so tests can drive
/// the router without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Analytics collection
        .route("/api/analytics/track", post(rest::handle_track))
        .route(
            "/api/analytics/sessions/:session_id",
            get(rest::handle_session_metrics),
        )
        // Contact relay
        .route("/api/contact", post(contact_rest::handle_contact))
        // Content catalog
        .route("/api/content/profile", get(content_rest::handle_profile))
        .route(
            "/api/content/experience",
            get(content_rest::handle_experience),
        )
        .route("/api/content/skills", get(content_rest::handle_skills))
        .route("/api/content/projects", get(content_rest::handle_projects))
        // SEO surface
        .route("/api/seo/pages/:page", get(content_rest::handle_page_seo))
        .route("/sitemap.xml", get(content_rest::handle_sitemap))
        .route("/robots.txt", get(content_rest::handle_robots))
        // Operational endpoints
        .route("/health", get(rest::health_check))
        .route("/ready", get(rest::readiness))
        .route("/live", get(rest::liveness))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl ApiServer {
    pub fn new(config: AppConfig, collector: Arc<EventCollector>, mailer: Arc<MailProvider>) -> Self {
        Self {
            config,
            collector,
            mailer,
        }
    }

    /// Start the HTTP server. Blocks until shutdown.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let state = AppState {
            collector: self.collector.clone(),
            mailer: self.mailer.clone(),
            site: self.config.site.clone(),
            start_time: Instant::now(),
        };

        let app = router(state);

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the Prometheus metrics exporter on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
