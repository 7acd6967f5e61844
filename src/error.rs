use std::path::PathBuf;

use crate::convert::ConvertError;
use crate::path_de::PathError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input schema {}", .path.display())]
    ReadInput { path: PathBuf, source: std::io::Error },

    #[error("input schema {} is not valid JSON", .path.display())]
    ParseInput { path: PathBuf, source: PathError },

    #[error("failed to convert JSON Schema")]
    Convert(#[from] ConvertError),

    #[error("failed to serialize OpenAPI document")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to create output directory {}", .path.display())]
    CreateOutputDir { path: PathBuf, source: std::io::Error },

    #[error("failed to write output file {}", .path.display())]
    WriteOutput { path: PathBuf, source: std::io::Error },
}
