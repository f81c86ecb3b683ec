//! `[site]` configuration.
//!
//! `[site.info]` holds the site identity used for canonical URLs and OG tag
//! defaults; `[site.seo]` lives in its own section file.

use serde::{Deserialize, Serialize};

use super::SeoConfig;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::SiteOrigin;

/// `[site]` section: identity plus SEO settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    pub info: SiteInfoConfig,
    pub seo: SeoConfig,
}

/// Site identity for canonical URLs and OG tag defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title (used as og:site_name).
    pub title: String,

    /// Site description.
    pub description: String,

    /// Absolute site origin, e.g. "https://www.example.com".
    /// Any trailing slash is trimmed when building URLs.
    pub origin: String,

    /// Locale code for og:locale (e.g. "en_US").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            origin: String::new(),
            language: "en_US".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const F_TITLE: FieldPath = FieldPath::new("site.info.title");
    pub const F_ORIGIN: FieldPath = FieldPath::new("site.info.origin");

    /// The configured origin as a [`SiteOrigin`].
    pub fn origin(&self) -> SiteOrigin {
        SiteOrigin::new(&self.origin)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `origin` must be set (everything downstream builds absolute URLs)
    /// - `origin` must be a valid http(s) URL with a host
    /// - empty `title` is a warning (og:site_name will be omitted)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.origin.is_empty() {
            diag.error_with_hint(
                Self::F_ORIGIN,
                "site origin is not configured",
                "set site.info.origin, e.g.: \"https://www.example.com\"",
            );
            return;
        }

        // Strict format check using url crate
        match url::Url::parse(&self.origin) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::F_ORIGIN,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::F_ORIGIN,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::F_ORIGIN,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if self.title.is_empty() {
            diag.warn(Self::F_TITLE, "title is empty, og:site_name will be omitted");
        }
    }
}
