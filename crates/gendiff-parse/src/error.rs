use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported file type {extension:?}: {}", .path.display())]
    UnsupportedFileType { path: PathBuf, extension: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its root is not a mapping.
    #[error("document root must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

pub type ParseResult<T> = Result<T, ParseError>;
