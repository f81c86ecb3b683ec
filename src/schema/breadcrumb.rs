//! BreadcrumbList JSON-LD builder.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use super::SCHEMA_CONTEXT;
use crate::core::SiteOrigin;

/// One navigation level: display name plus link target.
///
/// Targets are site-relative paths (resolved against the origin) or absolute
/// http(s) URLs (passed through verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub name: String,
    #[serde(alias = "url")]
    pub path: String,
}

/// Build a `BreadcrumbList` from an ordered trail.
///
/// `position` is 1-based and follows input order exactly: it encodes
/// navigation depth, so entries are never re-sorted. An empty trail yields a
/// well-formed list with an empty `itemListElement`.
pub fn breadcrumb_schema(origin: &SiteOrigin, entries: &[BreadcrumbEntry]) -> JsonValue {
    let items: Vec<JsonValue> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": entry.name,
                "item": origin.resolve(&entry.path),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
