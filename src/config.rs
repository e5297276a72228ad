//! Optional configuration file with defaults for repeated runs.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CommitplotError, Result};

/// Parsed config.json structure. Every field is optional and command line
/// arguments take precedence over values found here.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub repo_url: Option<String>,
    pub ssh_key: Option<PathBuf>,
    pub clone_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub show: Option<bool>,
}

impl Config {
    /// Default location: `<config dir>/commitplot/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("commitplot/config.json"))
    }

    /// Load the config from a specific path. The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CommitplotError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| CommitplotError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the config from the default location, falling back to an empty
    /// config when no file exists there.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
