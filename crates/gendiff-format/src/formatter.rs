//! Formatter selection by name.

use std::fmt;
use std::str::FromStr;

use gendiff_diff::DiffNode;
use tracing::debug;

use crate::error::{FormatError, FormatResult};
use crate::{json, plain, stylish};

/// One of the three output renderings of a diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formatter {
    Stylish,
    Plain,
    Json,
}

/// The recognised format names, in the order they are offered to users.
const REGISTRY: [(&str, Formatter); 3] = [
    ("stylish", Formatter::Stylish),
    ("plain", Formatter::Plain),
    ("json", Formatter::Json),
];

/// Look up a formatter by name.
///
/// Names are matched exactly; anything other than `stylish`, `plain` or
/// `json` fails with [`FormatError::UnknownFormat`].
pub fn get_formatter(name: &str) -> FormatResult<Formatter> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, formatter)| *formatter)
        .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
}

impl Formatter {
    /// The name this formatter is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stylish => "stylish",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }

    /// All registered format names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(name, _)| *name)
    }

    /// Render `diff` in this format.
    pub fn format(&self, diff: &[DiffNode]) -> FormatResult<String> {
        debug!(formatter = self.name(), nodes = diff.len(), "rendering diff");
        match self {
            Self::Stylish => Ok(stylish::render(diff)),
            Self::Plain => Ok(plain::render(diff)),
            Self::Json => json::render(diff),
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formatter {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_formatter(s)
    }
}
