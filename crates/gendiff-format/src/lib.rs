//! Output formatters for gendiff.
//!
//! Every formatter consumes the same ordered [`DiffNode`] sequence produced by
//! [`gendiff_diff::build_diff`] and returns a single string:
//!
//! - `stylish` -- brace-delimited blocks with `+`/`-` markers, 4 columns per level
//! - `plain` -- one sentence per changed property, addressed by dotted path
//! - `json` -- the structured projection of every node, pretty-printed
//!
//! [`DiffNode`]: gendiff_diff::DiffNode

pub mod error;
pub mod formatter;
pub mod json;
pub mod plain;
pub mod stylish;

pub use error::{FormatError, FormatResult};
pub use formatter::{get_formatter, Formatter};
