//! REST handlers for the analytics collection endpoint and operational
//! probes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::TrackEvent;
use folio_mailer::MailProvider;
use folio_tracker::collector::{EventCollector, SessionMetrics};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;
use utoipa::ToSchema;

/// Maximum string field length (session id, component id, etc.).
const MAX_FIELD_LEN: usize = 256;

/// Maximum page path length.
const MAX_PATH_LEN: usize = 2048;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<EventCollector>,
    pub mailer: Arc<MailProvider>,
    pub site: folio_core::config::SiteConfig,
    pub start_time: Instant,
}

/// Validate a tracking event at the API boundary.
fn validate_track_event(event: &TrackEvent) -> Result<(), &'static str> {
    let session_id = event.session_id();
    if session_id.is_empty() {
        return Err("'sessionId' must not be empty");
    }
    if session_id.len() > MAX_FIELD_LEN {
        return Err("'sessionId' exceeds maximum length");
    }

    let page_path = event.page_path();
    if page_path.is_empty() {
        return Err("'pagePath' must not be empty");
    }
    if !page_path.starts_with('/') {
        return Err("'pagePath' must start with '/'");
    }
    if page_path.len() > MAX_PATH_LEN {
        return Err("'pagePath' exceeds maximum length");
    }

    match event {
        TrackEvent::PageView(view) => {
            if view.visitor_id.is_empty() {
                return Err("'visitorId' must not be empty");
            }
            if view.visitor_id.len() > MAX_FIELD_LEN {
                return Err("'visitorId' exceeds maximum length");
            }
        }
        TrackEvent::Click(click) => {
            if click.component_id.is_empty() {
                return Err("'componentId' must not be empty");
            }
            if click.component_id.len() > MAX_FIELD_LEN {
                return Err("'componentId' exceeds maximum length");
            }
        }
        TrackEvent::PageExit(_) => {}
    }
    Ok(())
}

/// POST /api/analytics/track — the event collection endpoint.
#[utoipa::path(
    post,
    path = "/api/analytics/track",
    tag = "Analytics",
    request_body = TrackEvent,
    responses(
        (status = 204, description = "Event accepted"),
        (status = 400, description = "Event failed boundary validation", body = ErrorResponse),
    )
)]
pub async fn handle_track(
    State(state): State<AppState>,
    Json(event): Json<TrackEvent>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    if let Err(msg) = validate_track_event(&event) {
        warn!(error = msg, "tracking event validation failed");
        metrics::counter!("api.validation_errors").increment(1);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_track_event".to_string(),
                message: msg.to_string(),
            }),
        ));
    }

    state.collector.ingest(event);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/analytics/sessions/:session_id — session metrics snapshot.
#[utoipa::path(
    get,
    path = "/api/analytics/sessions/{session_id}",
    tag = "Analytics",
    params(("session_id" = String, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session metrics", body = SessionMetricsResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
pub async fn handle_session_metrics(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionMetricsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.collector.session_metrics(&session_id) {
        Some(metrics) => Ok(Json(metrics.into())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "unknown_session".to_string(),
                message: format!("no metrics recorded for session {session_id}"),
            }),
        )),
    }
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        active_sessions: state.collector.session_count(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.start_time.elapsed().as_secs() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
    pub uptime_secs: u64,
}

#[derive(Serialize, ToSchema)]
pub struct SessionMetricsResponse {
    pub session_id: String,
    pub page_views: u64,
    pub clicks: u64,
    pub exits: u64,
    pub total_events: u64,
    pub total_dwell_ms: u64,
}

impl From<SessionMetrics> for SessionMetricsResponse {
    fn from(metrics: SessionMetrics) -> Self {
        Self {
            session_id: metrics.session_id,
            page_views: metrics.page_views,
            clicks: metrics.clicks,
            exits: metrics.exits,
            total_events: metrics.total_events,
            total_dwell_ms: metrics.total_dwell_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::{ClickEvent, PageExitEvent};

    #[test]
    fn test_validation_rejects_empty_session() {
        let event = TrackEvent::Click(ClickEvent {
            session_id: String::new(),
            page_path: "/".into(),
            component_id: "cta".into(),
            event_value: String::new(),
        });
        assert!(validate_track_event(&event).is_err());
    }

    #[test]
    fn test_validation_rejects_relative_path() {
        let event = TrackEvent::PageExit(PageExitEvent {
            session_id: "s-1".into(),
            page_path: "projects".into(),
            page_title: "Projects".into(),
            duration_ms: 10,
        });
        assert!(validate_track_event(&event).is_err());
    }

    #[test]
    fn test_validation_accepts_well_formed_exit() {
        let event = TrackEvent::PageExit(PageExitEvent {
            session_id: "s-1".into(),
            page_path: "/projects".into(),
            page_title: "Projects".into(),
            duration_ms: 10,
        });
        assert!(validate_track_event(&event).is_ok());
    }
}
