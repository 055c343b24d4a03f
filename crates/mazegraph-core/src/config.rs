//! User configuration for mazegraph (stored in ~/.config/mazegraph/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MazeGraphError, Result};
use crate::format::OutputFormat;
use crate::graph::Algorithm;

const CONFIG_DIR: &str = "mazegraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MAZEGRAPH_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Algorithm run by `mazegraph solve`
    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default)]
    pub format: OutputFormat,

    /// Log filter used when neither `--log-level` nor `--verbose` is given
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Default config location, honoring `MAZEGRAPH_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    MazeGraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            MazeGraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            MazeGraphError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }
}
