//! Parse → convert → extract → sanitize → assemble → serialize → write.
//!
//! One linear pass; the first failing stage aborts the run.
use std::path::Path;

use serde_json::Value;

use crate::config::Config;
use crate::convert::{convert, ConvertOptions};
use crate::document::{assemble, OpenApiDocument};
use crate::error::{Error, Result};
use crate::extract::{extract_definitions, Extraction};
use crate::sanitize::sanitize_registry;

/// Build the OpenAPI document for an already-parsed schema read from `input_path`.
pub fn generate(
    schema: &Value,
    input_path: &Path,
    options: &ConvertOptions,
) -> Result<OpenApiDocument> {
    let converted = convert(schema, options)?;
    let Extraction { root_name, registry } = extract_definitions(converted, input_path);
    let schemas = sanitize_registry(&registry);
    tracing::debug!(
        schemas = schemas.len(),
        dropped = registry.len() - schemas.len(),
        "sanitized registry"
    );
    Ok(assemble(schemas, &root_name))
}

pub fn read_schema(path: &Path) -> Result<Value> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    crate::path_de::from_str_with_path(&source).map_err(|source| Error::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// The whole run for one configuration.
#[tracing::instrument(
    skip_all,
    fields(
        input = %config.input_schema.display(),
        output = %config.output_file.display(),
    )
)]
pub fn run(config: &Config) -> Result<()> {
    let schema = read_schema(&config.input_schema)?;
    let document = generate(&schema, &config.input_schema, &ConvertOptions::default())?;
    let yaml = document.to_yaml()?;
    write_output(&config.output_file, &yaml)?;
    tracing::info!(schemas = document.components.schemas.len(), "wrote OpenAPI document");
    Ok(())
}

// ------------------------------- Tests ------------------------------------ //
