//! Page metadata generation — a pure mapping from page parameters to the
//! metadata descriptor the page head is rendered from.

use chrono::{DateTime, Utc};
use folio_core::config::SiteConfig;
use serde::Serialize;

/// Site-default keywords, merged ahead of page-specific ones.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "Ismat Samadov",
    "Data Analytics",
    "Business Intelligence",
    "Machine Learning",
    "Python",
    "SQL",
    "PostgreSQL",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "Predictive Analytics",
    "Data Visualization",
    "Financial Analytics",
    "Fraud Detection",
    "Baku Data Analyst",
];

/// Content category of a page; article kinds get article OpenGraph types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ContentKind {
    WebSite,
    #[default]
    WebPage,
    BlogPosting,
    TechArticle,
    SoftwareSourceCode,
}

impl ContentKind {
    pub fn is_article(self) -> bool {
        matches!(self, ContentKind::BlogPosting | ContentKind::TechArticle)
    }
}

/// Input parameters for one page's metadata.
#[derive(Debug, Clone, Default)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    pub path: String,
    pub og_image: Option<String>,
    pub no_index: bool,
    pub keywords: Vec<String>,
    pub content_kind: ContentKind,
    pub section: Option<String>,
    pub article_tags: Vec<String>,
    pub date_published: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

impl PageSeo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// The resolved metadata descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    /// `website` or `article`.
    pub og_type: String,
    pub image: OgImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub creator: String,
    pub site: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
}

/// Join the site base URL and a page path with exactly one slash.
fn canonical_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("{base}{path}")
}

/// Resolve a possibly-relative image reference against the site base.
fn absolute_image_url(base_url: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        canonical_url(base_url, image)
    }
}

/// Merge site-default and page keywords, de-duplicating while preserving
/// order (defaults first).
fn merge_keywords(page_keywords: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for keyword in DEFAULT_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .chain(page_keywords.iter().cloned())
    {
        if !merged.contains(&keyword) {
            merged.push(keyword);
        }
    }
    merged
}

/// Generate the metadata descriptor for a page.
pub fn page_metadata(site: &SiteConfig, page: &PageSeo) -> SiteMetadata {
    let canonical = canonical_url(&site.base_url, &page.path);
    let image = absolute_image_url(
        &site.base_url,
        page.og_image.as_deref().unwrap_or("/og-image.jpg"),
    );

    let open_graph = OpenGraph {
        title: page.title.clone(),
        description: page.description.clone(),
        url: canonical.clone(),
        site_name: site.site_name.clone(),
        locale: "en_US".to_string(),
        og_type: if page.content_kind.is_article() {
            "article".to_string()
        } else {
            "website".to_string()
        },
        image: OgImage {
            url: image.clone(),
            width: 1200,
            height: 630,
            alt: page.title.clone(),
        },
        published_time: page.date_published.filter(|_| page.content_kind.is_article()),
        modified_time: page.date_modified.filter(|_| page.content_kind.is_article()),
        section: page.section.clone().filter(|_| page.content_kind.is_article()),
        tags: if page.content_kind.is_article() {
            page.article_tags.clone()
        } else {
            Vec::new()
        },
    };

    SiteMetadata {
        title: page.title.clone(),
        description: page.description.clone(),
        canonical,
        keywords: merge_keywords(&page.keywords),
        author: site.author.clone(),
        open_graph,
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: page.title.clone(),
            description: page.description.clone(),
            image,
            creator: site.twitter_handle.clone(),
            site: site.twitter_handle.clone(),
        },
        robots: Robots {
            index: !page.no_index,
            follow: !page.no_index,
            nocache: page.no_index,
        },
    }
}

/// Site-wide default metadata (the root page descriptor).
pub fn default_metadata(site: &SiteConfig) -> SiteMetadata {
    page_metadata(
        site,
        &PageSeo {
            title: site.site_name.clone(),
            description: "Data analytics and AI professional with expertise in \
                          business intelligence, machine learning, and strategic \
                          insights for banking and financial sectors."
                .to_string(),
            content_kind: ContentKind::WebSite,
            ..Default::default()
        },
    )
}
