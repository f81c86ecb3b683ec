//! Query command: print computed schema objects as JSON.
//!
//! For each selected route, the output carries the canonical URL, the
//! WebPage schema, the breadcrumb schema, and the OG image URL (when the
//! page declares a card). Useful for piping into SEO tooling or jq.

use anyhow::Result;
use serde_json::Value as JsonValue;
use std::fs;
use std::io::Write;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::page::{PageEntry, PagesFile};
use crate::schema::{JsonMap, breadcrumb_schema, webpage_schema};
use crate::seo::og_image_url;

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let pages = PagesFile::load(&config.pages_path())?;
    let selected = select_pages(&pages, &args.paths);

    if selected.is_empty() {
        log!("query"; "no pages match");
        return Ok(());
    }

    let origin = config.site.info.origin();
    let results: Vec<JsonValue> = selected
        .iter()
        .map(|page| {
            let mut obj = JsonMap::new();
            obj.insert("path".into(), page.path.clone().into());
            obj.insert("url".into(), origin.canonical(&page.path).into());
            obj.insert("schema".into(), webpage_schema(&origin, &page.descriptor()));
            obj.insert(
                "breadcrumbs".into(),
                breadcrumb_schema(&origin, &page.breadcrumbs),
            );
            if let Some(og) = &page.og {
                obj.insert(
                    "og_image".into(),
                    og_image_url(&origin, &config.site.seo.og_endpoint, og).into(),
                );
            }
            JsonValue::Object(obj)
        })
        .collect();

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };

    // Output to file or stdout
    if let Some(output_path) = &args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Select pages by requested routes; an empty request selects everything.
/// Trailing slashes are ignored when matching.
fn select_pages<'a>(pages: &'a PagesFile, requested: &[String]) -> Vec<&'a PageEntry> {
    if requested.is_empty() {
        return pages.pages.iter().collect();
    }

    requested
        .iter()
        .filter_map(|wanted| {
            let found = pages
                .pages
                .iter()
                .find(|page| matches_route(&page.path, wanted));
            if found.is_none() {
                log!("query"; "no page matches '{}'", wanted);
            }
            found
        })
        .collect()
}

/// Compare routes ignoring trailing slashes (`/buyers/` matches `/buyers`).
fn matches_route(path: &str, wanted: &str) -> bool {
    let path = path.trim_end_matches('/');
    let wanted = wanted.trim_end_matches('/');
    if path.is_empty() && wanted.is_empty() {
        return true;
    }
    path == wanted
}
