//! # jsonschema-openapi
//!
//! Turn one JSON Schema document into an OpenAPI 3.0.3 document whose only
//! content is `components.schemas`.
//!
//! ```text
//! parse → convert → extract → sanitize → assemble → YAML
//! ```
//!
//! - [`convert`] rewrites JSON Schema keywords into the OpenAPI Schema Object dialect
//! - [`extract`] flattens `$defs` / `definitions` plus the root into one registry
//! - [`sanitize`] strips keywords we don't emit and repoints local `$ref`s
//!   at `#/components/schemas/`
//! - [`document`] wraps the registry in the OpenAPI envelope
//! - [`yaml`] quotes strings a YAML 1.1 reader would load as booleans
//! - [`pipeline`] wires the stages to the filesystem
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use serde_json::json;
//! use jsonschema_openapi::{convert::ConvertOptions, pipeline::generate};
//!
//! let schema = json!({
//!     "$defs": { "Owner": { "type": "object" } },
//!     "type": "object",
//!     "properties": { "owner": { "$ref": "#/$defs/Owner" } }
//! });
//! let doc = generate(&schema, Path::new("pet.schema.json"), &ConvertOptions::default())?;
//! println!("{}", doc.to_yaml()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The binary reads `INPUT_SCHEMA` and `OUTPUT_FILE` from the environment:
//!
//! ```bash
//! INPUT_SCHEMA=src/user.schema.json OUTPUT_FILE=gen/openapi/user.yaml jsonschema-openapi
//! ```
pub mod cli;
pub mod config;
pub mod convert;
pub mod dialect;
pub mod document;
pub mod error;
pub mod extract;
pub mod path_de;
pub mod pipeline;
pub mod sanitize;
pub mod yaml;

pub use error::{Error, Result};
