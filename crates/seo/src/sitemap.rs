//! sitemap.xml and robots.txt generation.

use folio_core::config::SiteConfig;

/// One sitemap entry.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub path: &'static str,
    pub priority: f32,
    pub change_freq: &'static str,
}

/// The site's public pages.
pub const PUBLIC_PAGES: &[SitemapEntry] = &[
    SitemapEntry {
        path: "/",
        priority: 1.0,
        change_freq: "weekly",
    },
    SitemapEntry {
        path: "/projects",
        priority: 0.8,
        change_freq: "weekly",
    },
];

/// Render sitemap.xml for the given entries.
pub fn sitemap_xml(site: &SiteConfig, entries: &[SitemapEntry]) -> String {
    let base = site.base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{base}{path}</loc>\n    <changefreq>{freq}</changefreq>\n    <priority>{priority:.1}</priority>\n  </url>\n",
            path = entry.path,
            freq = entry.change_freq,
            priority = entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Render robots.txt pointing crawlers at the sitemap.
pub fn robots_txt(site: &SiteConfig) -> String {
    let base = site.base_url.trim_end_matches('/');
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {base}/sitemap.xml\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_each_page_once() {
        let xml = sitemap_xml(&SiteConfig::default(), PUBLIC_PAGES);

        assert_eq!(xml.matches("<url>").count(), PUBLIC_PAGES.len());
        assert_eq!(
            xml.matches("<loc>https://ismat.pro/</loc>").count(),
            1
        );
        assert_eq!(
            xml.matches("<loc>https://ismat.pro/projects</loc>").count(),
            1
        );
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_robots_references_sitemap() {
        let robots = robots_txt(&SiteConfig::default());
        assert!(robots.contains("Sitemap: https://ismat.pro/sitemap.xml"));
        assert!(robots.contains("Disallow: /api/"));
    }
}
