//! Open Graph image URLs and default meta tag values.
//!
//! The OG image endpoint renders a share card from display text passed as
//! query parameters. Parameter order is fixed (title, subtitle, eyebrow) so
//! identical input yields byte-identical, cacheable URLs.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::core::SiteOrigin;

/// Display text for a generated OG card image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgImageSpec {
    pub title: String,
    pub subtitle: Option<String>,
    pub eyebrow: Option<String>,
}

/// Build the image-endpoint URL for a card spec.
///
/// Omitted optional fields are absent from the query string entirely, not
/// empty-string placeholders. Encoding is total over any Unicode input.
pub fn og_image_url(origin: &SiteOrigin, endpoint: &str, spec: &OgImageSpec) -> String {
    let mut url = format!("{}{}", origin.as_str(), endpoint);
    url.push_str("?title=");
    url.push_str(&encode(&spec.title));
    if let Some(subtitle) = &spec.subtitle {
        url.push_str("&subtitle=");
        url.push_str(&encode(subtitle));
    }
    if let Some(eyebrow) = &spec.eyebrow {
        url.push_str("&eyebrow=");
        url.push_str(&encode(eyebrow));
    }
    url
}

/// Percent-encode a query parameter value.
fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Site-level Open Graph tag defaults, borrowed from config.
///
/// Page-specific tags (og:title, og:url, og:image) are computed per page by
/// the fragment renderer.
pub struct OgDefaults<'a> {
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub twitter_card: &'static str,
}

impl<'a> OgDefaults<'a> {
    /// Create default OG tags from site config.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            og_type: "website",
            site_name: &config.site.info.title,
            locale: &config.site.info.language,
            twitter_card: "summary_large_image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> SiteOrigin {
        SiteOrigin::new("https://www.spanishtrailhomes.com")
    }

    fn spec(title: &str) -> OgImageSpec {
        OgImageSpec {
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_only() {
        let url = og_image_url(&origin(), "/api/og", &spec("Spanish Trail Homes"));
        assert_eq!(
            url,
            "https://www.spanishtrailhomes.com/api/og?title=Spanish%20Trail%20Homes"
        );
        assert!(!url.contains("subtitle"));
        assert!(!url.contains("eyebrow"));
    }

    #[test]
    fn test_fixed_parameter_order() {
        let spec = OgImageSpec {
            title: "Homes".into(),
            subtitle: Some("Guard-Gated Golf Community".into()),
            eyebrow: Some("Las Vegas".into()),
        };
        let url = og_image_url(&origin(), "/api/og", &spec);

        let title_pos = url.find("title=").unwrap();
        let subtitle_pos = url.find("&subtitle=").unwrap();
        let eyebrow_pos = url.find("&eyebrow=").unwrap();
        assert!(title_pos < subtitle_pos);
        assert!(subtitle_pos < eyebrow_pos);
    }

    #[test]
    fn test_idempotent() {
        let spec = OgImageSpec {
            title: "Homes".into(),
            subtitle: Some("For Sale".into()),
            eyebrow: None,
        };
        assert_eq!(
            og_image_url(&origin(), "/api/og", &spec),
            og_image_url(&origin(), "/api/og", &spec)
        );
    }

    #[test]
    fn test_eyebrow_without_subtitle() {
        let spec = OgImageSpec {
            title: "Homes".into(),
            subtitle: None,
            eyebrow: Some("Las Vegas".into()),
        };
        let url = og_image_url(&origin(), "/api/og", &spec);
        assert!(url.ends_with("?title=Homes&eyebrow=Las%20Vegas"));
        assert!(!url.contains("subtitle"));
    }

    #[test]
    fn test_encodes_reserved_characters() {
        let url = og_image_url(&origin(), "/api/og", &spec("Buy & Sell?"));
        assert!(url.ends_with("?title=Buy%20%26%20Sell%3F"));
    }

    #[test]
    fn test_encodes_unicode() {
        let url = og_image_url(&origin(), "/api/og", &spec("中文"));
        assert!(url.ends_with("?title=%E4%B8%AD%E6%96%87"));
    }
}
