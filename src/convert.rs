//! JSON Schema → OpenAPI 3.0 Schema Object dialect conversion.
//!
//! Walks every schema position of a JSON Schema document and rewrites the
//! keywords OpenAPI 3.0 doesn't understand into ones it does:
//! - `type` arrays / `"null"` → single `type` + `nullable` (or an `anyOf` of types)
//! - `const` → one-element `enum`, `examples` → `example`
//! - numeric `exclusiveMinimum`/`exclusiveMaximum` → boolean form next to `minimum`/`maximum`
//! - `if`/`then`/`else`, `dependencies` → `allOf`/`oneOf` combinations
//! - tuple `items`/`prefixItems` → `items.anyOf`
//! - keywords with no counterpart are dropped (configurable)
//!
//! Local definitions containers (`$defs`, `definitions`) are converted in place
//! and kept; pulling them out is [`crate::extract`]'s job.
pub mod keywords;
pub mod types;

use serde_json::{Map, Value};

use crate::dialect::kind_of;

// ------------------------------- Policy ---------------------------------- //

/// Keywords whose value is a map of name → schema.
const SCHEMA_MAP_KEYWORDS: [&str; 5] =
    ["properties", "patternProperties", "$defs", "definitions", "dependentSchemas"];

/// Keywords whose value is a list of schemas.
const SCHEMA_LIST_KEYWORDS: [&str; 4] = ["allOf", "anyOf", "oneOf", "prefixItems"];

/// Keywords whose value is one schema.
const SCHEMA_KEYWORDS: [&str; 10] = [
    "additionalProperties",
    "additionalItems",
    "not",
    "if",
    "then",
    "else",
    "contains",
    "propertyNames",
    "unevaluatedProperties",
    "unevaluatedItems",
];

// ------------------------------- Options --------------------------------- //

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Keep `patternProperties` as the `x-patternProperties` extension instead of dropping it.
    pub support_pattern_properties: bool,
    /// Unsupported keywords to leave in place.
    pub keep_not_supported: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConvertError {
    #[error("schema root must be an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("invalid `type` at {pointer}: {found}")]
    InvalidType { pointer: String, found: String },
}

// ------------------------------- Front API -------------------------------- //

/// Convert a whole document. The input is deep-cloned; the caller keeps it.
pub fn convert(schema: &Value, options: &ConvertOptions) -> Result<Value, ConvertError> {
    let Some(root) = schema.as_object() else {
        return Err(ConvertError::NotAnObject { found: kind_of(schema) });
    };
    let mut root = root.clone();
    root.shift_remove("$schema");
    let mut out = Value::Object(root);
    convert_schema(&mut out, "#", options)?;
    Ok(out)
}

// -------------------------------- Walk ------------------------------------ //

/// Convert one schema position. `at` is the JSON pointer fragment used in errors.
pub fn convert_schema(
    node: &mut Value,
    at: &str,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    if let Some(b) = node.as_bool() {
        *node = boolean_schema(b);
        return Ok(());
    }
    let Some(map) = node.as_object_mut() else {
        return Ok(());
    };

    convert_children(map, at, options)?;

    types::convert_type(map, at)?;
    keywords::rewrite_const(map);
    keywords::convert_examples(map);
    keywords::rewrite_exclusive_bounds(map);
    keywords::convert_content(map);
    keywords::rewrite_conditionals(map);
    keywords::convert_dependencies(map);
    keywords::convert_tuple_items(map);
    keywords::ensure_array_items(map);
    keywords::convert_pattern_properties(map, options);
    keywords::strip_unsupported(map, options);
    Ok(())
}

fn convert_children(
    map: &mut Map<String, Value>,
    at: &str,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    for key in SCHEMA_MAP_KEYWORDS {
        if let Some(Value::Object(entries)) = map.get_mut(key) {
            let base = child_pointer(at, key);
            for (name, sub) in entries.iter_mut() {
                convert_schema(sub, &child_pointer(&base, name), options)?;
            }
        }
    }

    for key in SCHEMA_LIST_KEYWORDS {
        if let Some(Value::Array(items)) = map.get_mut(key) {
            let base = child_pointer(at, key);
            for (i, sub) in items.iter_mut().enumerate() {
                convert_schema(sub, &child_pointer(&base, &i.to_string()), options)?;
            }
        }
    }

    for key in SCHEMA_KEYWORDS {
        let Some(sub) = map.get_mut(key) else { continue };
        // OpenAPI 3.0 allows the boolean form here
        if key == "additionalProperties" && sub.is_boolean() {
            continue;
        }
        convert_schema(sub, &child_pointer(at, key), options)?;
    }

    // `items` is either one schema or a draft-07 tuple
    if let Some(items) = map.get_mut("items") {
        let base = child_pointer(at, "items");
        match items {
            Value::Array(xs) => {
                for (i, sub) in xs.iter_mut().enumerate() {
                    convert_schema(sub, &child_pointer(&base, &i.to_string()), options)?;
                }
            }
            sub => convert_schema(sub, &base, options)?,
        }
    }

    // draft-07 `dependencies`: arrays are property lists, anything else a schema
    if let Some(Value::Object(deps)) = map.get_mut("dependencies") {
        let base = child_pointer(at, "dependencies");
        for (name, dep) in deps.iter_mut() {
            if !dep.is_array() {
                convert_schema(dep, &child_pointer(&base, name), options)?;
            }
        }
    }

    Ok(())
}

// ------------------------------- Utilities -------------------------------- //

/// `true` accepts anything, `false` nothing.
pub fn boolean_schema(accept: bool) -> Value {
    if accept {
        Value::Object(Map::new())
    } else {
        serde_json::json!({ "not": {} })
    }
}

/// Append one escaped JSON pointer segment.
fn child_pointer(at: &str, segment: &str) -> String {
    format!("{at}/{}", segment.replace('~', "~0").replace('/', "~1"))
}

// ------------------------------- Tests ------------------------------------ //
