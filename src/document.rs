//! The OpenAPI envelope around the generated schemas.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::DefinitionRegistry;

pub const OPENAPI_VERSION: &str = "3.0.3";
pub const DOCUMENT_TITLE: &str = "Generated OpenAPI Spec";
pub const DOCUMENT_VERSION: &str = "1.0.0";
pub const LICENSE_NAME: &str = "MIT";
pub const LICENSE_URL: &str = "https://opensource.org/licenses/MIT";

/// Minimal OpenAPI document: only `components.schemas` carries content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    /// Always empty; no operations are ever discovered.
    pub paths: IndexMap<String, Value>,
    pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: String,
    pub license: License,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub schemas: DefinitionRegistry,
}

/// Wrap already-sanitized schemas. `root_name` doubles as the description.
///
/// `root_name` is the derived name, so a schema file without a base name gets
/// `RootSchema` here rather than an empty description.
pub fn assemble(schemas: DefinitionRegistry, root_name: &str) -> OpenApiDocument {
    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: DOCUMENT_TITLE.to_string(),
            version: DOCUMENT_VERSION.to_string(),
            description: root_name.to_string(),
            license: License {
                name: LICENSE_NAME.to_string(),
                url: LICENSE_URL.to_string(),
            },
        },
        paths: IndexMap::new(),
        components: Components { schemas },
    }
}

impl OpenApiDocument {
    /// Plain tree serialization: no anchors/aliases, long scalars are not folded,
    /// YAML 1.1 boolean words stay strings.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self).map(|yaml| crate::yaml::quote_yaml11_booleans(&yaml))
    }
}
