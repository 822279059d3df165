//! OpenAPI specification and Swagger UI configuration.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Pulse API",
        version = "0.1.0",
        description = "First-party analytics collection, contact relay, and site services for a personal portfolio site.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Analytics", description = "Tracking event collection and session metrics"),
        (name = "Contact", description = "Contact-form mail relay"),
        (name = "Content", description = "Static portfolio content tables"),
    ),
    paths(
        // Analytics
        crate::rest::handle_track,
        crate::rest::handle_session_metrics,
        // Contact
        crate::contact_rest::handle_contact,
        // Content
        crate::content_rest::handle_profile,
        crate::content_rest::handle_experience,
        crate::content_rest::handle_skills,
        crate::content_rest::handle_projects,
    ),
    components(schemas(
        // Tracking event types
        folio_core::types::TrackEvent,
        folio_core::types::PageViewEvent,
        folio_core::types::PageExitEvent,
        folio_core::types::ClickEvent,
        folio_core::types::UtmParams,
        folio_core::types::EventKind,
        // Contact types
        folio_mailer::ContactMessage,
        crate::contact_rest::ContactResponse,
        // Content types
        folio_content::Profile,
        folio_content::SocialLink,
        folio_content::ExperienceEntry,
        folio_content::SkillGroup,
        folio_content::Project,
        // REST error/health types
        crate::rest::ErrorResponse,
        crate::rest::HealthResponse,
        crate::rest::SessionMetricsResponse,
    ))
)]
pub struct ApiDoc;
