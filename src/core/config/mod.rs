//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Lectern configuration names the two backing files the process serves for
//! its lifetime: the installed text module and the module registry. Both are
//! fixed at startup; there is no hot reload.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$LECTERN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/lectern/config.toml`
//! 3. `~/.lectern/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use lectern::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! if let Some(path) = config.text_module() {
//!     println!("Text module: {}", path.display());
//! }
//! ```

pub mod schema;

pub use schema::{FileConfig, StorageConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with its source path.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: FileConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly supplied `path` must exist and parse; the standard
    /// locations are only consulted when no explicit path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if
    /// an explicitly supplied path cannot be read. Missing files at the
    /// standard locations are not an error (defaults are used).
    pub fn load(path: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (file, found) = match path {
            Some(explicit) => {
                let config = Self::read_config(explicit)?;
                (config, Some(explicit.to_path_buf()))
            }
            None => Self::load_from_standard_locations(&mut warnings)?,
        };

        file.validate()?;

        Ok(ConfigLoadResult {
            config: Config { file, path: found },
            warnings,
        })
    }

    /// Load configuration from the standard locations.
    fn load_from_standard_locations(
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $LECTERN_CONFIG
        if let Ok(path) = std::env::var("LECTERN_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
            warnings.push(ConfigWarning {
                message: "LECTERN_CONFIG is set but the file does not exist; using defaults"
                    .to_string(),
                path: path.clone(),
            });
        }

        // 2. Check $XDG_CONFIG_HOME/lectern/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("lectern/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.lectern/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".lectern/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // No config found, use defaults
        Ok((FileConfig::default(), None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.lectern/config.toml`.
    pub fn canonical_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".lectern/config.toml"))
    }

    /// Get the configured text module path.
    pub fn text_module(&self) -> Option<&Path> {
        self.file
            .storage
            .as_ref()
            .and_then(|s| s.text_module.as_deref())
    }

    /// Get the configured registry path.
    pub fn registry(&self) -> Option<&Path> {
        self.file.storage.as_ref().and_then(|s| s.registry.as_deref())
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
