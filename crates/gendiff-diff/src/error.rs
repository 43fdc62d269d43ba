//! Error types for the diff crate.

/// Errors that can occur when reading a diff back from its structured form.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The `type` field named something other than the five node kinds.
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    /// A required field was missing or had the wrong shape.
    #[error("malformed diff node: {0}")]
    MalformedNode(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
