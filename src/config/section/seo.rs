//! SEO configuration (OG tags, sitemap).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[site.seo]` section: OG tag injection and sitemap settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Inject OG/Twitter meta tags into fragments.
    pub auto_og: bool,

    /// Path of the OG image generation endpoint, relative to the origin.
    pub og_endpoint: String,

    /// Sitemap generation settings
    pub sitemap: SitemapConfig,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            auto_og: true,
            og_endpoint: "/api/og".into(),
            sitemap: SitemapConfig::default(),
        }
    }
}

/// `[site.seo.sitemap]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation
    pub enable: bool,
    /// Output path for sitemap file, relative to the output directory
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}
