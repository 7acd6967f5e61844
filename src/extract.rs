//! Flattens a converted schema's local definitions into one registry keyed by name.
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::dialect::DefinitionsKeyword;

/// Registry key used when the input file name has nothing before its first `.`.
pub const DEFAULT_ROOT_NAME: &str = "RootSchema";

/// Definition name → schema. Insertion order is output order.
pub type DefinitionRegistry = IndexMap<String, Value>;

#[derive(Debug, Clone)]
pub struct Extraction {
    pub root_name: String,
    pub registry: DefinitionRegistry,
}

/// Final path segment with every extension dropped: `a/user.schema.json` → `user`.
pub fn root_schema_name(input_path: &Path) -> String {
    let file_name = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match file_name.split_once('.') {
        Some((stem, _)) => stem,
        None => file_name.as_str(),
    };
    if stem.is_empty() {
        DEFAULT_ROOT_NAME.to_string()
    } else {
        stem.to_string()
    }
}

/// Takes the root apart: returns it without its definitions containers, plus
/// their entries (`$defs` first, then `definitions`). A container that isn't an
/// object is dropped and contributes nothing.
pub fn split_definitions(mut root: Map<String, Value>) -> (Map<String, Value>, DefinitionRegistry) {
    let mut registry = DefinitionRegistry::new();
    for kw in DefinitionsKeyword::ALL {
        match root.shift_remove(kw.key()) {
            Some(Value::Object(defs)) => registry.extend(defs),
            Some(other) => {
                tracing::debug!(
                    container = kw.key(),
                    kind = crate::dialect::kind_of(&other),
                    "ignoring non-object definitions container"
                );
            }
            None => {}
        }
    }
    (root, registry)
}

/// Registry of every local definition plus the root schema, named after the input file.
///
/// If a definition already uses the root's name, the root replaces it.
pub fn extract_definitions(root: Value, input_path: &Path) -> Extraction {
    let root_name = root_schema_name(input_path);
    let (root, mut registry) = match root {
        Value::Object(map) => {
            let (root, registry) = split_definitions(map);
            (Value::Object(root), registry)
        }
        other => (other, DefinitionRegistry::new()),
    };
    if registry.contains_key(&root_name) {
        tracing::warn!(
            name = %root_name,
            "root schema replaces a local definition with the same name"
        );
    }
    registry.insert(root_name.clone(), root);
    tracing::debug!(root = %root_name, definitions = registry.len() - 1, "extracted definitions");
    Extraction { root_name, registry }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("schemas/user.schema.json", "user")]
    #[case("user.json", "user")]
    #[case("/abs/path/order", "order")]
    #[case("dir.v2/item.json", "item")]
    #[case("nested/.json", DEFAULT_ROOT_NAME)]
    #[case(".hidden", DEFAULT_ROOT_NAME)]
    #[case("", DEFAULT_ROOT_NAME)]
    #[case("dir/..", DEFAULT_ROOT_NAME)]
    fn root_name_from_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(root_schema_name(Path::new(path)), expected);
    }

    #[test]
    fn moves_defs_into_registry_and_root_last() {
        let root = json!({
            "type": "object",
            "$defs": { "B": { "type": "string" }, "A": { "type": "integer" } },
            "properties": { "b": { "$ref": "#/$defs/B" } }
        });
        let out = extract_definitions(root, Path::new("thing.schema.json"));
        assert_eq!(out.root_name, "thing");
        let names: Vec<&str> = out.registry.keys().map(String::as_str).collect();
        assert_eq!(names, ["B", "A", "thing"]);
        let thing = out.registry["thing"].as_object().unwrap();
        assert!(!thing.contains_key("$defs"));
        assert_eq!(thing["properties"]["b"]["$ref"], "#/$defs/B");
    }

    #[test]
    fn draft07_definitions_are_extracted_after_defs() {
        let root = json!({
            "definitions": { "Old": { "type": "string" } },
            "$defs": { "New": { "type": "string" } }
        });
        let out = extract_definitions(root, Path::new("x.json"));
        let names: Vec<&str> = out.registry.keys().map(String::as_str).collect();
        assert_eq!(names, ["New", "Old", "x"]);
        assert_eq!(out.registry["x"], json!({}));
    }

    #[test]
    fn root_overwrites_same_named_definition() {
        let root = json!({
            "type": "object",
            "$defs": { "pet": { "type": "string" }, "Owner": {} }
        });
        let out = extract_definitions(root, Path::new("pet.json"));
        assert_eq!(out.registry.len(), 2);
        assert_eq!(out.registry["pet"], json!({ "type": "object" }));
    }

    #[test]
    fn non_object_container_is_dropped() {
        let input = json!({ "$defs": [1, 2], "type": "string" });
        let (root, registry) = split_definitions(input.as_object().cloned().unwrap());
        assert!(registry.is_empty());
        assert_eq!(Value::Object(root), json!({ "type": "string" }));
    }

    #[test]
    fn without_definitions_only_root() {
        let out = extract_definitions(json!({ "type": "string" }), Path::new(".json"));
        assert_eq!(out.root_name, DEFAULT_ROOT_NAME);
        assert_eq!(out.registry.len(), 1);
    }
}
