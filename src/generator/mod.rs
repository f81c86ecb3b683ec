//! Output generation: per-route head fragments and the sitemap.
//!
//! A fragment is the SEO portion of a page's `<head>`: the canonical link,
//! OG/Twitter meta tags, and one `<script type="application/ld+json">` per
//! schema object. The surrounding templating layer includes it verbatim.

pub mod sitemap;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{SeoConfig, SiteConfig};
use crate::core::SiteOrigin;
use crate::page::{PageEntry, PagesFile};
use crate::schema::{breadcrumb_schema, webpage_schema};
use crate::seo::{OgDefaults, og_image_url};
use crate::utils::html::escape_attr;
use crate::{debug, log};

/// Name of the per-route fragment file.
const FRAGMENT_FILE: &str = "head.html";

/// Render and write fragments for every page.
pub fn build_fragments(config: &SiteConfig, pages: &PagesFile) -> Result<()> {
    let origin = config.site.info.origin();
    let defaults = OgDefaults::from_config(config);

    for page in &pages.pages {
        let html = render_fragment(&origin, &defaults, &config.site.seo, page);
        let path = fragment_path(&config.output_dir(), &page.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, html)
            .with_context(|| format!("Failed to write fragment to {}", path.display()))?;

        debug!("fragments"; "wrote {}", path.display());
    }

    log!("fragments"; "{} pages", pages.pages.len());
    Ok(())
}

/// Output file for a route: `/` -> `head.html`, `/buyers` -> `buyers/head.html`.
fn fragment_path(output_dir: &Path, route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        output_dir.join(FRAGMENT_FILE)
    } else {
        output_dir.join(trimmed).join(FRAGMENT_FILE)
    }
}

/// Render the head fragment for one page.
pub fn render_fragment(
    origin: &SiteOrigin,
    defaults: &OgDefaults<'_>,
    seo: &SeoConfig,
    page: &PageEntry,
) -> String {
    let canonical = origin.canonical(&page.path);
    let mut html = String::with_capacity(1024);

    html.push_str("<link rel=\"canonical\" href=\"");
    html.push_str(&escape_attr(&canonical));
    html.push_str("\">\n");

    if seo.auto_og {
        push_meta(&mut html, "property", "og:type", defaults.og_type);
        if !defaults.site_name.is_empty() {
            push_meta(&mut html, "property", "og:site_name", defaults.site_name);
        }
        push_meta(&mut html, "property", "og:locale", defaults.locale);
        push_meta(&mut html, "property", "og:title", &page.name);
        push_meta(&mut html, "property", "og:description", &page.description);
        push_meta(&mut html, "property", "og:url", &canonical);
        if let Some(og) = &page.og {
            let image = og_image_url(origin, &seo.og_endpoint, og);
            push_meta(&mut html, "property", "og:image", &image);
        }
        push_meta(&mut html, "name", "twitter:card", defaults.twitter_card);
    }

    push_ld_script(&mut html, &webpage_schema(origin, &page.descriptor()));
    if !page.breadcrumbs.is_empty() {
        push_ld_script(&mut html, &breadcrumb_schema(origin, &page.breadcrumbs));
    }

    html
}

/// Append a `<meta>` tag with an escaped content attribute.
fn push_meta(html: &mut String, attr: &str, key: &str, content: &str) {
    html.push_str("<meta ");
    html.push_str(attr);
    html.push_str("=\"");
    html.push_str(key);
    html.push_str("\" content=\"");
    html.push_str(&escape_attr(content));
    html.push_str("\">\n");
}

/// Append a JSON-LD script tag.
///
/// `<` inside the JSON is emitted as `\u003c` so content containing
/// `</script>` cannot terminate the tag early.
fn push_ld_script(html: &mut String, schema: &JsonValue) {
    let json = serde_json::to_string(schema)
        .unwrap_or_default()
        .replace('<', "\\u003c");
    html.push_str("<script type=\"application/ld+json\">");
    html.push_str(&json);
    html.push_str("</script>\n");
}
