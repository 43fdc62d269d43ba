//! The load → build → render pipeline.

use std::path::Path;

use gendiff_diff::{build_diff, DiffStats, Document};
use gendiff_format::{get_formatter, Formatter};
use gendiff_parse::{load_document, load_document_from};
use tracing::{debug, info};

use crate::config::GenDiffConfig;
use crate::error::GenDiffResult;

/// The format used when none is requested.
pub const DEFAULT_FORMAT: &str = "stylish";

/// Compare two files and render the difference as `format_name`.
///
/// Relative paths are resolved against the working directory. The format
/// name is validated before either file is read.
pub fn gen_diff(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
    format_name: &str,
) -> GenDiffResult<String> {
    let config = GenDiffConfig::default().with_format(format_name);
    gen_diff_with_config(old_path, new_path, &config)
}

/// Compare two files using the settings in `config`.
pub fn gen_diff_with_config(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
    config: &GenDiffConfig,
) -> GenDiffResult<String> {
    let formatter = get_formatter(&config.format)?;

    let (old, new) = match &config.base_dir {
        Some(base) => (
            load_document_from(old_path, base)?,
            load_document_from(new_path, base)?,
        ),
        None => (load_document(old_path)?, load_document(new_path)?),
    };

    render(&old, &new, formatter)
}

/// Compare two already-parsed documents.
pub fn diff_documents(old: &Document, new: &Document, format_name: &str) -> GenDiffResult<String> {
    let formatter = get_formatter(format_name)?;
    render(old, new, formatter)
}

fn render(old: &Document, new: &Document, formatter: Formatter) -> GenDiffResult<String> {
    debug!(formatter = %formatter, "formatter selected");

    let diff = build_diff(old, new);
    let stats = DiffStats::collect(&diff);
    info!(
        added = stats.added,
        removed = stats.removed,
        updated = stats.updated,
        unchanged = stats.unchanged,
        nested = stats.nested,
        "diff built"
    );

    Ok(formatter.format(&diff)?)
}
