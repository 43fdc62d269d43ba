//! Document loading for gendiff.
//!
//! Turns a file path into a [`Document`]: the path is resolved against a base
//! directory, the file is read as UTF-8 text, and the extension picks the
//! parser (`.json`, or `.yml`/`.yaml`). YAML documents are converted into the
//! same JSON value model so the diff engine sees one representation.
//!
//! [`Document`]: gendiff_diff::Document

pub mod error;
pub mod format;
pub mod loader;
mod yaml;

pub use error::{ParseError, ParseResult};
pub use format::{parse_document, DocumentFormat};
pub use loader::{load_document, load_document_from, resolve_path};
