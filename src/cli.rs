//! Process front: environment → `Config` → pipeline.
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;

const USAGE: &str = "\
Missing required env vars: INPUT_SCHEMA and OUTPUT_FILE
Example usage: INPUT_SCHEMA=src/user.schema.json OUTPUT_FILE=gen/openapi/user.yaml jsonschema-openapi";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert a JSON Schema document into an OpenAPI 3.0.3 `components.schemas` YAML document
#[derive(Parser, Debug)]
#[command(name = "jsonschema-openapi", version)]
pub struct CommandLineInterface {
    #[command(flatten)]
    pub config: Config,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    /// Reads the environment once. Exits with status 1 on missing configuration,
    /// before anything is read or written.
    pub fn load() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(error)
                if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
            {
                error.exit()
            }
            Err(error) if is_missing_config(error.kind()) => {
                eprintln!("{USAGE}");
                std::process::exit(1)
            }
            Err(error) => {
                eprintln!("{}", error.to_string().trim_end());
                std::process::exit(1)
            }
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        crate::pipeline::run(&self.config).context("Failed to generate OpenAPI YAML")?;
        println!("OpenAPI 3.0.3 YAML written to: {}", self.config.output_file.display());
        Ok(())
    }
}

/// Unset and set-but-empty variables both count as missing.
fn is_missing_config(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument | ErrorKind::InvalidValue
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flags_fill_config() {
        let cli = CommandLineInterface::try_parse_from([
            "jsonschema-openapi",
            "--input-schema",
            "src/user.schema.json",
            "--output-file",
            "gen/user.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config.input_schema, PathBuf::from("src/user.schema.json"));
        assert_eq!(cli.config.output_file, PathBuf::from("gen/user.yaml"));
    }

    #[test]
    fn positional_arguments_rejected() {
        let err = CommandLineInterface::try_parse_from(["jsonschema-openapi", "a.json", "b.yaml"])
            .unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!is_missing_config(err.kind()));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = CommandLineInterface::try_parse_from([
            "jsonschema-openapi",
            "--input-schema",
            "src/user.schema.json",
            "--output-file",
            "",
        ])
        .unwrap_err();
        assert!(is_missing_config(err.kind()), "{:?}", err.kind());

        let err = CommandLineInterface::try_parse_from(["jsonschema-openapi"]).unwrap_err();
        assert!(is_missing_config(err.kind()), "{:?}", err.kind());
    }
}
