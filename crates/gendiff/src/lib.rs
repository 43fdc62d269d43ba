//! Compare two configuration files and describe how they differ.
//!
//! This is the main entry point for applications embedding gendiff. It
//! composes the three stages of a run: loading both documents, building the
//! diff tree, and rendering it with the selected formatter.
//!
//! ```no_run
//! let text = gendiff::gen_diff("file1.json", "file2.yml", "plain")?;
//! println!("{text}");
//! # Ok::<(), gendiff::GenDiffError>(())
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::GenDiffConfig;
pub use error::{GenDiffError, GenDiffResult};
pub use pipeline::{diff_documents, gen_diff, gen_diff_with_config, DEFAULT_FORMAT};

// Re-export key types
pub use gendiff_diff::{build_diff, DiffNode, DiffStats, Document, NodeKind};
pub use gendiff_format::{get_formatter, FormatError, Formatter};
pub use gendiff_parse::{load_document, DocumentFormat, ParseError};
