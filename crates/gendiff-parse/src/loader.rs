//! Reading documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use gendiff_diff::Document;
use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::format::{parse_document, DocumentFormat};

/// Resolve `path` against `base`; absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Load a document, resolving relative paths against the working directory.
pub fn load_document(path: impl AsRef<Path>) -> ParseResult<Document> {
    let path = path.as_ref();
    let cwd = std::env::current_dir().map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_document_from(path, &cwd)
}

/// Load a document, resolving relative paths against `base`.
///
/// The format is chosen from the extension before the file is touched, so an
/// unsupported file type is reported even when the file does not exist.
pub fn load_document_from(path: impl AsRef<Path>, base: &Path) -> ParseResult<Document> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let resolved = resolve_path(path, base);

    let content = fs::read_to_string(&resolved).map_err(|source| ParseError::Io {
        path: resolved.clone(),
        source,
    })?;

    let document = parse_document(&content, format)?;
    debug!(
        path = %resolved.display(),
        %format,
        keys = document.len(),
        "document loaded"
    );
    Ok(document)
}
