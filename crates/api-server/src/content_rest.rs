//! Content and SEO REST endpoints — the static data tables, per-page
//! metadata with structured data, and the sitemap/robots text routes.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use folio_content::{ExperienceEntry, Profile, Project, SkillGroup};
use folio_seo::metadata::{page_metadata, ContentKind, PageSeo, SiteMetadata};
use folio_seo::sitemap::{robots_txt, sitemap_xml, PUBLIC_PAGES};
use folio_seo::structured;
use serde::Serialize;

use crate::rest::{AppState, ErrorResponse};

/// GET /api/content/profile
#[utoipa::path(
    get,
    path = "/api/content/profile",
    tag = "Content",
    responses((status = 200, description = "Hero/profile data", body = Profile))
)]
pub async fn handle_profile() -> Json<Profile> {
    Json(folio_content::profile())
}

/// GET /api/content/experience
#[utoipa::path(
    get,
    path = "/api/content/experience",
    tag = "Content",
    responses((status = 200, description = "Experience entries", body = [ExperienceEntry]))
)]
pub async fn handle_experience() -> Json<&'static [ExperienceEntry]> {
    Json(folio_content::experience())
}

/// GET /api/content/skills
#[utoipa::path(
    get,
    path = "/api/content/skills",
    tag = "Content",
    responses((status = 200, description = "Skill groups", body = [SkillGroup]))
)]
pub async fn handle_skills() -> Json<&'static [SkillGroup]> {
    Json(folio_content::skill_groups())
}

/// GET /api/content/projects
#[utoipa::path(
    get,
    path = "/api/content/projects",
    tag = "Content",
    responses((status = 200, description = "Portfolio projects", body = [Project]))
)]
pub async fn handle_projects() -> Json<&'static [Project]> {
    Json(folio_content::projects())
}

/// Metadata descriptor plus JSON-LD payloads for one public page.
#[derive(Serialize)]
pub struct PageSeoResponse {
    pub metadata: SiteMetadata,
    pub structured_data: Vec<serde_json::Value>,
}

/// GET /api/seo/pages/:page — head metadata for a public page.
pub async fn handle_page_seo(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<PageSeoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let seo = match page.as_str() {
        "home" => PageSeo {
            title: state.site.site_name.clone(),
            description: "Data analytics and AI professional delivering value \
                          through data-driven decision making."
                .to_string(),
            content_kind: ContentKind::WebSite,
            ..Default::default()
        },
        "projects" => PageSeo::new(
            "Projects | Ismat Samadov",
            "Featured machine learning and analytics projects.",
        )
        .at_path("/projects")
        .with_keywords(folio_content::all_skills()),
        _ => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "unknown_page".to_string(),
                    message: format!("no metadata for page '{page}'"),
                }),
            ))
        }
    };

    let profile = folio_content::profile();
    let structured_data = vec![
        structured::person_schema(
            &state.site,
            profile.headline,
            "Kapital Bank",
            &folio_content::all_skills(),
            &folio_content::profile_urls(),
        ),
        structured::website_schema(&state.site, &seo.description),
        structured::breadcrumb_schema(&state.site, &[("Home", "/"), ("Projects", "/projects")]),
    ];

    Ok(Json(PageSeoResponse {
        metadata: page_metadata(&state.site, &seo),
        structured_data,
    }))
}

/// GET /sitemap.xml
pub async fn handle_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap_xml(&state.site, PUBLIC_PAGES),
    )
}

/// GET /robots.txt
pub async fn handle_robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        robots_txt(&state.site),
    )
}
