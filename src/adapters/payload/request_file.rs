//! Loading requests from JSON or YAML files.

use std::path::Path;
use thiserror::Error;

use super::dto::FuzzyTopsisRequest;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while reading a request file.
#[derive(Debug, Error)]
pub enum RequestFileError {
    #[error("Failed to read request file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML request: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported request file extension '{0}' (expected json, yaml, or yml)")]
    UnsupportedExtension(String),
}

impl From<RequestFileError> for DomainError {
    fn from(err: RequestFileError) -> Self {
        DomainError::new(ErrorCode::InvalidRequest, err.to_string())
    }
}

/// Serialization format of a request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    Yaml,
}

impl RequestFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, RequestFileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(RequestFormat::Json),
            "yaml" | "yml" => Ok(RequestFormat::Yaml),
            _ => Err(RequestFileError::UnsupportedExtension(extension)),
        }
    }
}

/// Parses a request document in the given format.
pub fn parse_request(contents: &str, format: RequestFormat) -> Result<FuzzyTopsisRequest, RequestFileError> {
    match format {
        RequestFormat::Json => Ok(serde_json::from_str(contents)?),
        RequestFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
    }
}

/// Reads and parses a request file, choosing the format by extension.
pub fn load_request(path: impl AsRef<Path>) -> Result<FuzzyTopsisRequest, RequestFileError> {
    let path = path.as_ref();
    let format = RequestFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| RequestFileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?format, "Loaded request file");
    parse_request(&contents, format)
}
