use serde::de::DeserializeOwned;

/// Deserialization failure with the JSON path it happened at.
#[derive(Debug, thiserror::Error)]
#[error("at JSON path {path} → {message}")]
pub struct PathError {
    pub path: String,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl PathError {
    fn new(path: String, inner: serde_json::Error) -> Self {
        Self {
            path,
            line: inner.line(),
            column: inner.column(),
            message: inner.to_string(),
        }
    }
}

/// Deserialize a whole document with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut *de).map_err(|err| {
        let path = err.path().to_string();
        PathError::new(path, err.into_inner())
    })?;
    // only whitespace may follow the document
    de.end().map_err(|err| PathError::new(".".to_string(), err))?;
    Ok(value)
}
