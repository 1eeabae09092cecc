//! Configuration loading for the generator.
//!
//! Configuration is optional. Resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `./golden.toml` (working directory)
//! 3. built-in defaults
//!
//! CLI overrides are applied on top by the binary.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::golden::DEFAULT_OUTPUT;
use crate::tokenizer::{DEFAULT_MODEL, TokenizerSource};
use crate::{GoldenError, Result};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "golden.toml";

/// Generator configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Hub repository id, or path to a `tokenizer.json`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Golden file destination (default: testdata/tokenizer_golden.json).
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            output: default_output(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Config {
    /// Load configuration from the standard locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the config file path, `None` meaning defaults.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(GoldenError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        Ok(local.exists().then_some(local))
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GoldenError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            GoldenError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Tokenizer source for the configured model.
    pub fn source(&self) -> TokenizerSource {
        TokenizerSource::parse(&self.model)
    }
}
