//! JSON-LD structured data builders.
//!
//! Each builder is a pure function from a value object to a `serde_json`
//! object, serialized by the caller into a
//! `<script type="application/ld+json">` tag. `serde_json` runs with
//! `preserve_order`, so the builders control key order and identical input
//! always serializes to identical bytes.

mod breadcrumb;
mod webpage;

pub use breadcrumb::{BreadcrumbEntry, breadcrumb_schema};
pub use webpage::webpage_schema;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// JSON object map (insertion-ordered).
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Shared `@context` for every emitted schema object.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Top-level keys the builders always compute themselves.
///
/// `extra` entries matching one of these are dropped, so a caller-supplied
/// `url` can never diverge from the canonical builder's output.
pub const RESERVED_KEYS: [&str; 5] = ["@context", "@type", "name", "description", "url"];

/// Check whether a key is reserved for builder-computed values.
#[inline]
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Schema.org page type emitted as `@type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaType {
    #[default]
    WebPage,
    CollectionPage,
    ContactPage,
    AboutPage,
}

impl SchemaType {
    /// The schema.org type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebPage => "WebPage",
            Self::CollectionPage => "CollectionPage",
            Self::ContactPage => "ContactPage",
            Self::AboutPage => "AboutPage",
        }
    }
}

/// Input to the WebPage schema builder: one page's identity and route.
///
/// Constructed per page render and discarded; never cached or mutated.
#[derive(Debug, Clone, Default)]
pub struct PageDescriptor {
    pub name: String,
    pub description: String,
    /// Site-relative route, starting with `/`.
    pub path: String,
    pub schema_type: SchemaType,
    /// Free-form additions merged after the fixed keys (e.g. `about`,
    /// `potentialAction`). Reserved keys are dropped.
    pub extra: JsonMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_default() {
        assert_eq!(SchemaType::default(), SchemaType::WebPage);
    }

    #[test]
    fn test_schema_type_as_str() {
        assert_eq!(SchemaType::WebPage.as_str(), "WebPage");
        assert_eq!(SchemaType::CollectionPage.as_str(), "CollectionPage");
        assert_eq!(SchemaType::ContactPage.as_str(), "ContactPage");
        assert_eq!(SchemaType::AboutPage.as_str(), "AboutPage");
    }

    #[test]
    fn test_schema_type_deserialize() {
        let parsed: SchemaType = serde_json::from_str("\"ContactPage\"").unwrap();
        assert_eq!(parsed, SchemaType::ContactPage);
    }

    #[test]
    fn test_reserved_keys() {
        assert!(is_reserved_key("@context"));
        assert!(is_reserved_key("@type"));
        assert!(is_reserved_key("url"));
        assert!(!is_reserved_key("about"));
        assert!(!is_reserved_key("potentialAction"));
        // Case-sensitive: schema.org keys are exact
        assert!(!is_reserved_key("URL"));
    }
}
