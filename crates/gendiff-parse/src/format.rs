//! Source document formats and extension dispatch.

use std::fmt;
use std::path::Path;

use gendiff_diff::Document;
use serde_json::Value;

use crate::error::{ParseError, ParseResult};
use crate::yaml::yaml_to_json;

/// A supported source document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Match a file extension (without the dot, any case).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Pick the format for `path` from its extension.
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&extension).ok_or_else(|| ParseError::UnsupportedFileType {
            path: path.to_path_buf(),
            extension,
        })
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parse `content` as `format` into a document.
///
/// The root of the document must be a mapping.
pub fn parse_document(content: &str, format: DocumentFormat) -> ParseResult<Document> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str::<Value>(content)?,
        DocumentFormat::Yaml => {
            let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
            yaml.apply_merge()?;
            yaml_to_json(yaml)
        }
    };

    match normalize_numbers(value) {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::NotAMapping(kind_name(&other))),
    }
}

/// Floats with an exact integer value become integers, so `50.0` and `50`
/// compare equal and both print as `50`.
fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
