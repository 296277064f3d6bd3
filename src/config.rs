//! Tool configuration: where to scan and where to write.
//!
//! The three paths the builder depends on are explicit configuration, not
//! module-level constants, so any temporary directory can serve as a project
//! root in tests. Defaults match the conventional gallery layout; an optional
//! sparse `config.toml` at the project root overrides just the values it
//! names.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! albums_dir = "assets/images/albums"         # Required input tree
//! selections_dir = "assets/images/selections" # Optional input tree
//! output_dir = "data"                         # Where the JSON indexes land
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Paths the index builder reads from and writes to, relative to the
/// project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Required input tree: one subdirectory per album.
    pub albums_dir: String,
    /// Optional input tree: one subdirectory per selection. A missing
    /// directory yields an empty index, not an error.
    pub selections_dir: String,
    /// Output directory for `albums.json` and `selections.json`.
    pub output_dir: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            albums_dir: "assets/images/albums".to_string(),
            selections_dir: "assets/images/selections".to_string(),
            output_dir: "data".to_string(),
        }
    }
}

impl IndexConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("albums_dir", &self.albums_dir),
            ("selections_dir", &self.selections_dir),
            ("output_dir", &self.output_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Albums root resolved against the project root.
    pub fn albums_root(&self, root: &Path) -> PathBuf {
        root.join(&self.albums_dir)
    }

    /// Selections root resolved against the project root.
    pub fn selections_root(&self, root: &Path) -> PathBuf {
        root.join(&self.selections_dir)
    }

    /// Output directory resolved against the project root.
    pub fn output_root(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }
}

/// Load configuration for a project root.
///
/// Reads `<root>/config.toml` if present; otherwise returns the defaults.
/// The file is sparse — only the keys it names override the defaults.
pub fn load_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    let path = root.join("config.toml");
    let config: IndexConfig = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        IndexConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml` with all options at their defaults.
///
/// Printed by the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    "\
# album-index configuration. All options are optional - the values below
# are the defaults. Paths are relative to the project root.

# Required input tree: one subdirectory per album.
albums_dir = \"assets/images/albums\"

# Optional input tree: one subdirectory per selection. When the directory
# is absent, selections.json is written as an empty object.
selections_dir = \"assets/images/selections\"

# Output directory for albums.json and selections.json.
output_dir = \"data\"
"
    .to_string()
}
