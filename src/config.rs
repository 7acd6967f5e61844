use std::path::PathBuf;

use clap::Args;

/// Where to read the schema and where to write the OpenAPI document.
///
/// Read once at startup from the environment and passed down as a plain value.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON Schema document to convert
    #[arg(long, env = "INPUT_SCHEMA", value_name = "PATH")]
    pub input_schema: PathBuf,

    /// YAML file to write (parent directories are created)
    #[arg(long, env = "OUTPUT_FILE", value_name = "PATH")]
    pub output_file: PathBuf,
}
