//! Per-keyword rewrites applied to one schema object after its children are converted.
use serde_json::{json, Map, Value};

use super::ConvertOptions;
use super::types::push_all_of;

/// Keywords with no OpenAPI 3.0 counterpart.
pub const NOT_SUPPORTED: [&str; 13] = [
    "$comment",
    "$anchor",
    "$dynamicAnchor",
    "$dynamicRef",
    "$vocabulary",
    "id",
    "additionalItems",
    "contains",
    "minContains",
    "maxContains",
    "propertyNames",
    "unevaluatedItems",
    "unevaluatedProperties",
];

/// `const: v` → `enum: [v]`
pub fn rewrite_const(map: &mut Map<String, Value>) {
    if let Some(value) = map.shift_remove("const") {
        map.insert("enum".into(), Value::Array(vec![value]));
    }
}

/// `examples: [a, ..]` → `example: a`
pub fn convert_examples(map: &mut Map<String, Value>) {
    match map.shift_remove("examples") {
        Some(Value::Array(mut xs)) if !xs.is_empty() => {
            map.insert("example".into(), xs.swap_remove(0));
        }
        _ => {}
    }
}

/// 2019-09 numeric bounds → OpenAPI 3.0 boolean flags next to `minimum`/`maximum`.
pub fn rewrite_exclusive_bounds(map: &mut Map<String, Value>) {
    for (flag, bound) in [("exclusiveMinimum", "minimum"), ("exclusiveMaximum", "maximum")] {
        if map.get(flag).is_some_and(Value::is_number) {
            if let Some(limit) = map.insert(flag.into(), Value::Bool(true)) {
                map.insert(bound.into(), limit);
            }
        }
    }
}

/// `contentEncoding: base64` → `format: byte`,
/// `contentMediaType: application/octet-stream` → `format: binary`.
pub fn convert_content(map: &mut Map<String, Value>) {
    let encoding = map.shift_remove("contentEncoding");
    let media_type = map.shift_remove("contentMediaType");
    if encoding.as_ref().and_then(Value::as_str) == Some("base64") {
        map.insert("format".into(), Value::from("byte"));
    } else if media_type.as_ref().and_then(Value::as_str) == Some("application/octet-stream") {
        map.insert("format".into(), Value::from("binary"));
    }
}

/// `if`/`then`/`else` →
/// `allOf: [{ oneOf: [{ allOf: [if, then] }, { allOf: [{ not: if }, else] }] }]`
pub fn rewrite_conditionals(map: &mut Map<String, Value>) {
    let then_ = map.shift_remove("then");
    let else_ = map.shift_remove("else");
    let Some(if_) = map.shift_remove("if") else {
        return;
    };
    let then_ = then_.unwrap_or_else(|| json!({}));
    let else_ = else_.unwrap_or_else(|| json!({}));
    push_all_of(
        map,
        json!({
            "oneOf": [
                { "allOf": [if_.clone(), then_] },
                { "allOf": [{ "not": if_ }, else_] }
            ]
        }),
    );
}

/// `dependencies`, `dependentSchemas` and `dependentRequired` → one `allOf`
/// entry per trigger property: either the property is absent, or it is present
/// together with what it depends on.
pub fn convert_dependencies(map: &mut Map<String, Value>) {
    for keyword in ["dependencies", "dependentSchemas", "dependentRequired"] {
        let Some(Value::Object(deps)) = map.shift_remove(keyword) else {
            continue;
        };
        for (name, dep) in deps {
            let present = match dep {
                Value::Array(also) => {
                    let mut required = vec![Value::String(name.clone())];
                    required.extend(also);
                    json!({ "required": required })
                }
                Value::Object(mut schema) => {
                    let mut required = vec![Value::String(name.clone())];
                    if let Some(Value::Array(more)) = schema.shift_remove("required") {
                        required.extend(more);
                    }
                    let mut present = Map::new();
                    present.insert("required".into(), Value::Array(required));
                    present.extend(schema);
                    Value::Object(present)
                }
                _ => json!({ "required": [name.clone()] }),
            };
            push_all_of(map, json!({ "oneOf": [{ "not": { "required": [name] } }, present] }));
        }
    }
}

/// Tuple forms → `items: { anyOf: [...] }`; a one-element tuple becomes that element.
pub fn convert_tuple_items(map: &mut Map<String, Value>) {
    let Some(mut elems) = take_array(map, "prefixItems").or_else(|| take_array(map, "items"))
    else {
        return;
    };
    let items = match elems.len() {
        0 => return,
        1 => elems.swap_remove(0),
        _ => json!({ "anyOf": elems }),
    };
    // 2020-12 `items` next to `prefixItems` describes the tail; the tuple wins
    map.insert("items".into(), items);
}

/// An array schema must carry `items` in OpenAPI 3.0; default to any item.
pub fn ensure_array_items(map: &mut Map<String, Value>) {
    if map.get("type").and_then(Value::as_str) == Some("array") && !map.contains_key("items") {
        map.insert("items".into(), Value::Object(Map::new()));
    }
}

/// `patternProperties` → `x-patternProperties` (when supported) or dropped.
pub fn convert_pattern_properties(map: &mut Map<String, Value>, options: &ConvertOptions) {
    let Some(patterns) = map.shift_remove("patternProperties") else {
        return;
    };
    if options.support_pattern_properties {
        map.insert("x-patternProperties".into(), patterns);
        if !map.contains_key("additionalProperties") {
            map.insert("additionalProperties".into(), Value::Bool(true));
        }
    }
}

pub fn strip_unsupported(map: &mut Map<String, Value>, options: &ConvertOptions) {
    for keyword in NOT_SUPPORTED {
        if !options.keep_not_supported.iter().any(|k| k == keyword) {
            map.shift_remove(keyword);
        }
    }
}

fn take_array(map: &mut Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    if !map.get(key).is_some_and(Value::is_array) {
        return None;
    }
    match map.shift_remove(key) {
        Some(Value::Array(xs)) => Some(xs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(v: Value, f: impl FnOnce(&mut Map<String, Value>)) -> Value {
        let mut map = v.as_object().cloned().unwrap();
        f(&mut map);
        Value::Object(map)
    }

    #[test]
    fn const_becomes_single_enum() {
        assert_eq!(apply(json!({ "const": "a" }), rewrite_const), json!({ "enum": ["a"] }));
        assert_eq!(apply(json!({ "const": null }), rewrite_const), json!({ "enum": [null] }));
    }

    #[test]
    fn examples_keep_first() {
        let out = apply(json!({ "examples": [1, 2] }), convert_examples);
        assert_eq!(out, json!({ "example": 1 }));
        assert_eq!(apply(json!({ "examples": [] }), convert_examples), json!({}));
        assert_eq!(apply(json!({ "examples": "x" }), convert_examples), json!({}));
    }

    #[test]
    fn exclusive_bounds() {
        let out = apply(
            json!({ "exclusiveMinimum": 1, "maximum": 9, "exclusiveMaximum": true }),
            rewrite_exclusive_bounds,
        );
        let expected = json!({
            "exclusiveMinimum": true,
            "minimum": 1,
            "maximum": 9,
            "exclusiveMaximum": true
        });
        assert_eq!(out, expected);
    }

    #[test]
    fn content_to_format() {
        assert_eq!(
            apply(json!({ "type": "string", "contentEncoding": "base64" }), convert_content),
            json!({ "type": "string", "format": "byte" })
        );
        assert_eq!(
            apply(json!({ "contentMediaType": "application/octet-stream" }), convert_content),
            json!({ "format": "binary" })
        );
        assert_eq!(apply(json!({ "contentMediaType": "text/html" }), convert_content), json!({}));
    }

    #[test]
    fn conditionals_become_one_of() {
        let out = apply(
            json!({
                "if": { "minimum": 0 },
                "then": { "maximum": 10 },
                "allOf": [{ "type": "integer" }]
            }),
            rewrite_conditionals,
        );
        assert_eq!(out, json!({
            "allOf": [
                { "type": "integer" },
                { "oneOf": [
                    { "allOf": [{ "minimum": 0 }, { "maximum": 10 }] },
                    { "allOf": [{ "not": { "minimum": 0 } }, {}] }
                ]}
            ]
        }));
    }

    #[test]
    fn then_without_if_is_dropped() {
        assert_eq!(apply(json!({ "then": {}, "else": {} }), rewrite_conditionals), json!({}));
    }

    #[test]
    fn dependencies_both_forms() {
        let out = apply(
            json!({
                "dependencies": { "card": ["billing"] },
                "dependentSchemas": {
                    "vip": { "required": ["tier"], "properties": { "tier": {} } }
                }
            }),
            convert_dependencies,
        );
        assert_eq!(out["allOf"][0], json!({
            "oneOf": [{ "not": { "required": ["card"] } }, { "required": ["card", "billing"] }]
        }));
        assert_eq!(out["allOf"][1], json!({
            "oneOf": [
                { "not": { "required": ["vip"] } },
                { "required": ["vip", "tier"], "properties": { "tier": {} } }
            ]
        }));
        assert!(out.get("dependencies").is_none());
        assert!(out.get("dependentSchemas").is_none());
    }

    #[test]
    fn tuples_collapse_to_any_of() {
        assert_eq!(
            apply(
                json!({ "items": [{ "type": "string" }, { "type": "number" }] }),
                convert_tuple_items
            ),
            json!({ "items": { "anyOf": [{ "type": "string" }, { "type": "number" }] } })
        );
        assert_eq!(
            apply(
                json!({ "prefixItems": [{ "type": "string" }], "items": false }),
                convert_tuple_items
            ),
            json!({ "items": { "type": "string" } })
        );
        let single = json!({ "items": { "type": "string" } });
        assert_eq!(apply(single.clone(), convert_tuple_items), single);
    }

    #[test]
    fn array_without_items_accepts_anything() {
        assert_eq!(
            apply(json!({ "type": "array" }), ensure_array_items),
            json!({ "type": "array", "items": {} })
        );
        let typed = json!({ "type": "array", "items": { "type": "string" } });
        assert_eq!(apply(typed.clone(), ensure_array_items), typed);
        assert_eq!(apply(json!({ "maxItems": 2 }), ensure_array_items), json!({ "maxItems": 2 }));
    }

    #[test]
    fn pattern_properties() {
        let input = json!({ "patternProperties": { "^x-": { "type": "string" } } });
        let dropped = apply(input.clone(), |m| {
            convert_pattern_properties(m, &ConvertOptions::default())
        });
        assert_eq!(dropped, json!({}));
        let options = ConvertOptions {
            support_pattern_properties: true,
            ..ConvertOptions::default()
        };
        assert_eq!(
            apply(input, |m| convert_pattern_properties(m, &options)),
            json!({
                "x-patternProperties": { "^x-": { "type": "string" } },
                "additionalProperties": true
            })
        );
    }

    #[test]
    fn strip_respects_keep_list() {
        let input = json!({ "$comment": "c", "contains": {}, "type": "array" });
        let stripped = apply(input.clone(), |m| strip_unsupported(m, &ConvertOptions::default()));
        assert_eq!(stripped, json!({ "type": "array" }));
        let options = ConvertOptions {
            keep_not_supported: vec!["$comment".into()],
            ..ConvertOptions::default()
        };
        let kept = apply(input, |m| strip_unsupported(m, &options));
        assert_eq!(kept, json!({ "$comment": "c", "type": "array" }));
    }
}
