//! Contact-form REST endpoint — validates the submission and relays it
//! through the mail provider.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_mailer::ContactMessage;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::rest::{AppState, ErrorResponse};

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/contact — relay a contact-form submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactMessage,
    responses(
        (status = 201, description = "Message relayed", body = ContactResponse),
        (status = 400, description = "Submission failed validation", body = ErrorResponse),
        (status = 502, description = "Mail provider rejected the message", body = ErrorResponse),
    )
)]
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactMessage>,
) -> Result<(StatusCode, Json<ContactResponse>), (StatusCode, Json<ErrorResponse>)> {
    if let Err(msg) = submission.validate() {
        warn!(error = msg, "contact submission validation failed");
        metrics::counter!("api.contact_validation_errors").increment(1);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_contact_message".to_string(),
                message: msg.to_string(),
            }),
        ));
    }

    match state.mailer.relay(&submission).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(ContactResponse {
                message: "Contact message sent successfully".to_string(),
            }),
        )),
        Err(e) => {
            error!(error = %e, "contact relay failed");
            metrics::counter!("api.contact_relay_errors").increment(1);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "mail_relay_failed".to_string(),
                    message: "Failed to send contact message".to_string(),
                }),
            ))
        }
    }
}
