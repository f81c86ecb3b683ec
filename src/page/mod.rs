//! Pages file (`pages.toml`): the ordered route list with SEO descriptors.
//!
//! Each `[[pages]]` entry describes one statically-rendered route: its
//! identity (`name`, `description`), its site-relative `path`, the schema.org
//! page type, the breadcrumb trail, an optional OG card block, and a
//! free-form `[pages.extra]` table carried into the WebPage schema.

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::schema::{BreadcrumbEntry, JsonMap, PageDescriptor, SchemaType};
use crate::seo::OgImageSpec;

/// One route of the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageEntry {
    /// Page title, used as JSON-LD `name` and og:title.
    pub name: String,
    /// Page description, used as JSON-LD `description` and og:description.
    pub description: String,
    /// Site-relative route, starting with `/`.
    pub path: String,
    /// Schema.org page type (default: WebPage).
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Last modification date for the sitemap (e.g. "2026-08-01").
    pub lastmod: Option<String>,
    /// Navigation trail, outermost first.
    pub breadcrumbs: Vec<BreadcrumbEntry>,
    /// OG card image text; pages without it get no og:image tag.
    pub og: Option<OgImageSpec>,
    /// Free-form JSON-LD additions (e.g. `about`, `potentialAction`).
    pub extra: toml::Table,
}

impl PageEntry {
    /// Descriptor for the WebPage schema builder.
    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor {
            name: self.name.clone(),
            description: self.description.clone(),
            path: self.path.clone(),
            schema_type: self.schema_type,
            extra: toml_table_to_json(&self.extra),
        }
    }
}

/// The parsed pages file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesFile {
    pub pages: Vec<PageEntry>,
}

impl PagesFile {
    /// Load the pages file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pages file {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Failed to parse pages file {}", path.display()))
    }

    /// Parse from TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let pages: Self = toml::from_str(content)?;
        Ok(pages)
    }

    /// Validate route invariants, collecting diagnostics.
    ///
    /// # Checks
    /// - `path` must start with `/` and be unique across entries
    /// - `name` and `description` must be non-empty
    /// - a breadcrumb trail should end at the page itself (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for (index, page) in self.pages.iter().enumerate() {
            if !page.path.starts_with('/') {
                diag.error_with_hint(
                    FieldPath::dynamic(format!("pages[{index}].path")),
                    format!("path '{}' must start with /", page.path),
                    format!("write \"/{}\"", page.path),
                );
            } else if !seen.insert(page.path.as_str()) {
                diag.error(
                    FieldPath::dynamic(format!("pages[{index}].path")),
                    format!("duplicate path '{}'", page.path),
                );
            }

            if page.name.is_empty() {
                diag.error(
                    FieldPath::dynamic(format!("pages[{index}].name")),
                    "name is empty",
                );
            }
            if page.description.is_empty() {
                diag.error(
                    FieldPath::dynamic(format!("pages[{index}].description")),
                    "description is empty",
                );
            }

            if let Some(last) = page.breadcrumbs.last()
                && last.path != page.path
            {
                diag.warn(
                    FieldPath::dynamic(format!("pages[{index}].breadcrumbs")),
                    format!(
                        "trail ends at '{}' instead of the page itself ('{}')",
                        last.path, page.path
                    ),
                );
            }
        }
    }
}

/// Convert a TOML table to a JSON object, preserving key order.
pub fn toml_table_to_json(table: &toml::Table) -> JsonMap {
    table
        .iter()
        .map(|(key, value)| (key.clone(), toml_to_json(value)))
        .collect()
}

/// Convert a TOML value to JSON. Datetimes become their string form;
/// everything else maps structurally.
fn toml_to_json(value: &toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s.clone()),
        toml::Value::Integer(i) => (*i).into(),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        toml::Value::Boolean(b) => JsonValue::Bool(*b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(arr) => JsonValue::Array(arr.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => JsonValue::Object(toml_table_to_json(table)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[pages]]
name = "Spanish Trail Homes"
description = "Guard-gated golf community in Las Vegas"
path = "/"
breadcrumbs = [{ name = "Home", path = "/" }]

[pages.og]
title = "Spanish Trail Homes"
subtitle = "Guard-Gated Golf Community"

[[pages]]
name = "Buying in Spanish Trail"
description = "Work with a buyer's agent"
path = "/buyers"
type = "CollectionPage"
lastmod = "2026-08-01"
breadcrumbs = [
    { name = "Home", path = "/" },
    { name = "Buyers", path = "/buyers" },
]

[pages.extra]
inLanguage = "en"

[pages.extra.about]
"@type" = "Place"
name = "Spanish Trail"
"#;

    #[test]
    fn test_parse_sample() {
        let file = PagesFile::from_str(SAMPLE).unwrap();
        assert_eq!(file.pages.len(), 2);

        let home = &file.pages[0];
        assert_eq!(home.path, "/");
        assert_eq!(home.schema_type, SchemaType::WebPage);
        assert_eq!(home.og.as_ref().unwrap().title, "Spanish Trail Homes");
        assert!(home.extra.is_empty());

        let buyers = &file.pages[1];
        assert_eq!(buyers.schema_type, SchemaType::CollectionPage);
        assert_eq!(buyers.lastmod.as_deref(), Some("2026-08-01"));
        assert_eq!(buyers.breadcrumbs.len(), 2);
    }

    #[test]
    fn test_descriptor_converts_extra() {
        let file = PagesFile::from_str(SAMPLE).unwrap();
        let desc = file.pages[1].descriptor();

        assert_eq!(desc.extra["inLanguage"], "en");
        assert_eq!(desc.extra["about"]["@type"], "Place");
        assert_eq!(desc.extra["about"]["name"], "Spanish Trail");
    }

    #[test]
    fn test_validate_sample_ok() {
        let file = PagesFile::from_str(SAMPLE).unwrap();
        let mut diag = ConfigDiagnostics::new();
        file.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_missing_leading_slash() {
        let file = PagesFile::from_str(
            "[[pages]]\nname = \"A\"\ndescription = \"B\"\npath = \"buyers\"",
        )
        .unwrap();
        let mut diag = ConfigDiagnostics::new();
        file.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_duplicate_path() {
        let content = r#"
[[pages]]
name = "A"
description = "B"
path = "/x"

[[pages]]
name = "C"
description = "D"
path = "/x"
"#;
        let file = PagesFile::from_str(content).unwrap();
        let mut diag = ConfigDiagnostics::new();
        file.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate"));
    }

    #[test]
    fn test_validate_empty_name_and_description() {
        let file = PagesFile::from_str("[[pages]]\npath = \"/x\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        file.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_trail_mismatch_warns() {
        let content = r#"
[[pages]]
name = "A"
description = "B"
path = "/buyers"
breadcrumbs = [{ name = "Home", path = "/" }]
"#;
        let file = PagesFile::from_str(content).unwrap();
        let mut diag = ConfigDiagnostics::new();
        file.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_toml_to_json_scalars() {
        let table: toml::Table = toml::from_str(
            "s = \"x\"\ni = 3\nf = 1.5\nb = true\nd = 2026-08-01\narr = [1, 2]",
        )
        .unwrap();
        let json = toml_table_to_json(&table);

        assert_eq!(json["s"], "x");
        assert_eq!(json["i"], 3);
        assert_eq!(json["f"], 1.5);
        assert_eq!(json["b"], true);
        assert_eq!(json["d"], "2026-08-01");
        assert_eq!(json["arr"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_toml_to_json_preserves_key_order() {
        let table: toml::Table = toml::from_str("z = 1\na = 2\nm = 3").unwrap();
        let json = toml_table_to_json(&table);
        let keys: Vec<&str> = json.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
