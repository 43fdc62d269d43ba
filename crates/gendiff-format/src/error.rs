use thiserror::Error;

/// Errors produced while selecting or running a formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The requested output format is not one of the registered names.
    #[error("unrecognized format: {0}")]
    UnknownFormat(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type FormatResult<T> = Result<T, FormatError>;
