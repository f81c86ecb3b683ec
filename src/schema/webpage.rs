//! WebPage JSON-LD builder.

use serde_json::Value as JsonValue;

use super::{JsonMap, PageDescriptor, SCHEMA_CONTEXT, is_reserved_key};
use crate::core::SiteOrigin;

/// Build the JSON-LD object for a page.
///
/// Fixed keys come first (`@context`, `@type`, `name`, `description`, `url`
/// computed from the canonical builder), then `extra` entries in their own
/// order. Reserved keys inside `extra` are dropped: the computed values
/// always win, so a caller can never emit a `url` that disagrees with the
/// canonical one.
pub fn webpage_schema(origin: &SiteOrigin, desc: &PageDescriptor) -> JsonValue {
    let mut obj = JsonMap::new();
    obj.insert("@context".into(), SCHEMA_CONTEXT.into());
    obj.insert("@type".into(), desc.schema_type.as_str().into());
    obj.insert("name".into(), desc.name.clone().into());
    obj.insert("description".into(), desc.description.clone().into());
    obj.insert("url".into(), origin.canonical(&desc.path).into());

    for (key, value) in &desc.extra {
        if is_reserved_key(key) {
            continue;
        }
        obj.insert(key.clone(), value.clone());
    }

    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaType;
    use serde_json::json;

    fn origin() -> SiteOrigin {
        SiteOrigin::new("https://www.spanishtrailhomes.com")
    }

    fn descriptor(path: &str) -> PageDescriptor {
        PageDescriptor {
            name: "A".into(),
            description: "B".into(),
            path: path.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_type_is_webpage() {
        let schema = webpage_schema(&origin(), &descriptor("/"));
        assert_eq!(schema["@type"], "WebPage");
    }

    #[test]
    fn test_explicit_type() {
        let desc = PageDescriptor {
            schema_type: SchemaType::ContactPage,
            ..descriptor("/contact")
        };
        let schema = webpage_schema(&origin(), &desc);
        assert_eq!(schema["@type"], "ContactPage");
    }

    #[test]
    fn test_fixed_keys() {
        let schema = webpage_schema(&origin(), &descriptor("/x"));
        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["name"], "A");
        assert_eq!(schema["description"], "B");
        assert_eq!(schema["url"], "https://www.spanishtrailhomes.com/x");
    }

    #[test]
    fn test_reserved_key_protection() {
        let mut desc = descriptor("/x");
        desc.extra
            .insert("url".into(), json!("https://evil.example"));
        desc.extra.insert("@type".into(), json!("ScamPage"));
        desc.extra.insert("name".into(), json!("Other"));

        let schema = webpage_schema(&origin(), &desc);
        assert_eq!(schema["url"], "https://www.spanishtrailhomes.com/x");
        assert_eq!(schema["@type"], "WebPage");
        assert_eq!(schema["name"], "A");
    }

    #[test]
    fn test_extra_merged_after_fixed_keys() {
        let mut desc = descriptor("/buyers");
        desc.extra.insert(
            "about".into(),
            json!({"@type": "Place", "name": "Spanish Trail"}),
        );
        desc.extra.insert("inLanguage".into(), json!("en"));

        let schema = webpage_schema(&origin(), &desc);
        assert_eq!(schema["about"]["name"], "Spanish Trail");
        assert_eq!(schema["inLanguage"], "en");

        // Fixed keys serialize before extra keys
        let serialized = serde_json::to_string(&schema).unwrap();
        let url_pos = serialized.find("\"url\"").unwrap();
        let about_pos = serialized.find("\"about\"").unwrap();
        assert!(url_pos < about_pos);
    }

    #[test]
    fn test_empty_extra() {
        let schema = webpage_schema(&origin(), &descriptor("/"));
        let obj = schema.as_object().unwrap();
        assert_eq!(obj.len(), 5);
    }

    #[test]
    fn test_deterministic_output() {
        let mut desc = descriptor("/sellers");
        desc.extra.insert("inLanguage".into(), json!("en"));

        let first = webpage_schema(&origin(), &desc);
        let second = webpage_schema(&origin(), &desc);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
