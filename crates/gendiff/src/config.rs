use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenDiffError, GenDiffResult};
use crate::pipeline::DEFAULT_FORMAT;

/// Settings for a diff run.
///
/// Can be loaded from a TOML file:
///
/// ```toml
/// format = "plain"
/// base_dir = "configs"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenDiffConfig {
    /// Output format name: `stylish`, `plain` or `json`.
    pub format: String,
    /// Directory relative input paths are resolved against.
    /// When unset, the process working directory is used.
    pub base_dir: Option<PathBuf>,
}

impl Default for GenDiffConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            base_dir: None,
        }
    }
}

impl GenDiffConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> GenDiffResult<Self> {
        toml::from_str(text).map_err(|e| GenDiffError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> GenDiffResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| GenDiffError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}
