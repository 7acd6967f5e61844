//! Keyword names shared by every stage of the pipeline.

/// Local-reference keyword.
pub const REF: &str = "$ref";

/// Where definitions live once they are moved into the OpenAPI document.
pub const COMPONENTS_SCHEMAS_PREFIX: &str = "#/components/schemas/";

/// The named sub-schema containers a JSON Schema document may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionsKeyword {
    /// 2019-09 and later.
    Defs,
    /// draft-07 and earlier.
    Definitions,
}

impl DefinitionsKeyword {
    /// Extraction order: `$defs` entries land in the registry first.
    pub const ALL: [DefinitionsKeyword; 2] =
        [DefinitionsKeyword::Defs, DefinitionsKeyword::Definitions];

    pub fn key(self) -> &'static str {
        match self {
            Self::Defs => "$defs",
            Self::Definitions => "definitions",
        }
    }

    /// Pointer prefix of a local `$ref` into this container.
    pub fn ref_prefix(self) -> &'static str {
        match self {
            Self::Defs => "#/$defs/",
            Self::Definitions => "#/definitions/",
        }
    }
}

/// Short name of a value's kind, for diagnostics.
pub fn kind_of(v: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
