//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all pages for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2026-08-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

use crate::config::SiteConfig;
use crate::log;
use crate::page::PagesFile;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig, pages: &PagesFile) -> Result<()> {
    if config.site.seo.sitemap.enable {
        let sitemap = Sitemap::build(config, pages);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig, pages: &PagesFile) -> Self {
        let origin = config.site.info.origin();

        let urls: Vec<UrlEntry> = pages
            .pages
            .iter()
            .map(|page| UrlEntry {
                loc: origin.canonical(&page.path),
                lastmod: page.lastmod.clone(),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.output_dir().join(&config.site.seo.sitemap.path);
        let xml = self.into_xml();

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_multiple_pages() {
        let sitemap = Sitemap {
            urls: vec![
                UrlEntry {
                    loc: "https://example.com/".to_string(),
                    lastmod: Some("2026-08-01".to_string()),
                },
                UrlEntry {
                    loc: "https://example.com/buyers".to_string(),
                    lastmod: None,
                },
            ],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<lastmod>2026-08-01</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/buyers</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/search?q=a&b=c".to_string(),
                lastmod: None,
            }],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_sitemap_from_pages() {
        let config = crate::config::test_config("");
        let pages = PagesFile::from_str(
            "[[pages]]\nname = \"A\"\ndescription = \"B\"\npath = \"/buyers\"\nlastmod = \"2026-08-01\"",
        )
        .unwrap();

        let sitemap = Sitemap::build(&config, &pages);
        assert_eq!(sitemap.urls.len(), 1);
        assert_eq!(sitemap.urls[0].loc, "https://example.com/buyers");
        assert_eq!(sitemap.urls[0].lastmod.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/".to_string(),
                lastmod: Some("2026-08-01".to_string()),
            }],
        };
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert!(lines.last().unwrap().trim() == "</urlset>");
    }
}
