use serde_json::{Map, Value};

use super::ConvertError;

pub const TYPE_NAMES: [&str; 7] =
    ["null", "boolean", "object", "array", "number", "string", "integer"];

/// Normalize `type` to what an OpenAPI 3.0 Schema Object accepts.
///
/// `"null"` turns into `nullable: true`. One remaining type stays in `type`;
/// several become an `anyOf` of single-type schemas (nested under `allOf`
/// when the schema already has an `anyOf`).
pub fn convert_type(map: &mut Map<String, Value>, at: &str) -> Result<(), ConvertError> {
    let Some(ty) = map.get("type") else {
        return Ok(());
    };
    let mut names = type_names(ty).ok_or_else(|| ConvertError::InvalidType {
        pointer: at.to_string(),
        found: ty.to_string(),
    })?;

    let nullable = names.iter().any(|n| n == "null");
    names.retain(|n| n != "null");
    let mut seen = Vec::with_capacity(names.len());
    names.retain(|n| {
        let first = !seen.contains(n);
        if first {
            seen.push(n.clone());
        }
        first
    });

    match names.as_slice() {
        [] => {
            map.shift_remove("type");
        }
        [single] => {
            map.insert("type".into(), Value::String(single.clone()));
        }
        many => {
            let arms: Vec<Value> = many.iter().map(|n| single_type_schema(n)).collect();
            map.shift_remove("type");
            if map.contains_key("anyOf") {
                push_all_of(map, serde_json::json!({ "anyOf": arms }));
            } else {
                map.insert("anyOf".into(), Value::Array(arms));
            }
        }
    }
    if nullable {
        map.insert("nullable".into(), Value::Bool(true));
    }
    Ok(())
}

/// One arm of a multi-type union; an array arm gets the `items` OpenAPI 3.0 requires.
fn single_type_schema(name: &str) -> Value {
    if name == "array" {
        serde_json::json!({ "type": name, "items": {} })
    } else {
        serde_json::json!({ "type": name })
    }
}

/// Names listed by a `type` value, or `None` if any of them is not a JSON type.
fn type_names(ty: &Value) -> Option<Vec<String>> {
    let valid = |s: &str| TYPE_NAMES.contains(&s).then(|| s.to_string());
    match ty {
        Value::String(s) => valid(s).map(|s| vec![s]),
        Value::Array(xs) => xs.iter().map(|x| x.as_str().and_then(valid)).collect(),
        _ => None,
    }
}

/// Append to `allOf`, creating it if needed.
pub(super) fn push_all_of(map: &mut Map<String, Value>, schema: Value) {
    match map.get_mut("allOf") {
        Some(Value::Array(all)) => all.push(schema),
        _ => {
            map.insert("allOf".into(), Value::Array(vec![schema]));
        }
    }
}
