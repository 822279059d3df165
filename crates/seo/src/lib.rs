//! SEO surface — page metadata generation, JSON-LD structured data, and
//! the sitemap/robots text endpoints.
//!
//! # Modules
//!
//! - [`metadata`] — Pure page-parameters → metadata-descriptor mapping
//! - [`structured`] — schema.org JSON-LD builders
//! - [`sitemap`] — sitemap.xml and robots.txt generation

pub mod metadata;
pub mod sitemap;
pub mod structured;

pub use metadata::{default_metadata, page_metadata, ContentKind, PageSeo, SiteMetadata};
