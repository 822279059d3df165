//! schema.org JSON-LD builders for the page head.

use folio_core::config::SiteConfig;
use serde_json::{json, Value};

/// Person schema for the site owner.
pub fn person_schema(
    site: &SiteConfig,
    job_title: &str,
    employer: &str,
    skills: &[String],
    profiles: &[String],
) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": site.author,
        "url": site.base_url,
        "jobTitle": job_title,
        "worksFor": {
            "@type": "Organization",
            "name": employer,
        },
        "knowsAbout": skills,
        "sameAs": profiles,
    })
}

/// WebSite schema with a search-free site description.
pub fn website_schema(site: &SiteConfig, description: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site.site_name,
        "url": site.base_url,
        "description": description,
        "author": {
            "@type": "Person",
            "name": site.author,
            "url": site.base_url,
        },
    })
}

/// ProfessionalService schema for the consulting surface of the site.
pub fn professional_service_schema(site: &SiteConfig, services: &[String]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": site.author,
        "url": site.base_url,
        "serviceType": services,
        "provider": {
            "@type": "Person",
            "name": site.author,
        },
    })
}

/// BreadcrumbList schema from `(name, path)` pairs, positions 1-based.
pub fn breadcrumb_schema(site: &SiteConfig, trail: &[(&str, &str)]) -> Value {
    let base = site.base_url.trim_end_matches('/');
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": format!("{base}{path}"),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
