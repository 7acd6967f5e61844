//! Recursive cleanup of converted schemas before they go into `components.schemas`.
//!
//! Drops keywords we never emit and points local `$ref`s at the registry.
//! Pure: the input is borrowed, a fresh tree is returned. Applying it twice is
//! the same as applying it once (denied keys are gone after the first pass and
//! rewritten refs no longer carry a definitions prefix).
use serde_json::{Map, Value};

use crate::dialect::{DefinitionsKeyword, COMPONENTS_SCHEMAS_PREFIX, REF};
use crate::extract::DefinitionRegistry;

/// Keys removed at every depth.
pub const DENIED_KEYS: [&str; 6] = ["$id", "$schema", "const", "title", "required", "enum"];

pub fn is_denied(key: &str) -> bool {
    DENIED_KEYS.contains(&key)
}

pub fn sanitize(node: &Value) -> Value {
    match node {
        Value::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        Value::Object(map) => Value::Object(sanitize_entries(map).collect::<Map<_, _>>()),
        scalar => scalar.clone(),
    }
}

/// Same rules as [`sanitize`], applied to the registry as a whole object: a
/// definition whose name is a denied key is dropped too.
pub fn sanitize_registry(registry: &DefinitionRegistry) -> DefinitionRegistry {
    sanitize_entries(registry).collect()
}

/// `#/$defs/Foo` → `#/components/schemas/Foo`. `None` when `reference` does
/// not point into a local definitions container.
pub fn rewrite_local_ref(reference: &str) -> Option<String> {
    DefinitionsKeyword::ALL.iter().find_map(|kw| {
        reference
            .strip_prefix(kw.ref_prefix())
            .map(|name| format!("{COMPONENTS_SCHEMAS_PREFIX}{name}"))
    })
}

fn sanitize_entries<'a, I>(entries: I) -> impl Iterator<Item = (String, Value)> + 'a
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
    I::IntoIter: 'a,
{
    entries
        .into_iter()
        .filter(|(key, _)| !is_denied(key))
        .map(|(key, value)| (key.clone(), sanitize_entry(key, value)))
}

fn sanitize_entry(key: &str, value: &Value) -> Value {
    if key == REF {
        // rewritten refs are kept as-is, no recursion
        if let Some(rewritten) = value.as_str().and_then(rewrite_local_ref) {
            return Value::String(rewritten);
        }
    }
    sanitize(value)
}

// ------------------------------- Tests ------------------------------------ //
