//! Configuration structures and loading logic.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fs::DEFAULT_SENTINEL;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Cleaning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Name used when nothing is left of a name after cleaning.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,

    /// Report planned renames without touching the tree.
    #[serde(default)]
    pub dry_run: bool,

    /// Whether to print one line per rename.
    #[serde(default = "default_true")]
    pub show_renames: bool,

    /// Whether to print one line per already-clean entry.
    #[serde(default)]
    pub show_skipped: bool,

    /// Whether to descend into symlinked folders.
    #[serde(default)]
    pub follow_links: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            dry_run: false,
            show_renames: true,
            show_skipped: false,
            follow_links: false,
        }
    }
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
