//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: storage paths, when present,
//! must be non-empty.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;

/// Parsed configuration file.
///
/// # Example
///
/// ```toml
/// [storage]
/// text_module = "/opt/modules/RST+.SQLite3"
/// registry = "/opt/modules/Registry.SQLite3"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Backing storage locations
    pub storage: Option<StorageConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(storage) = &self.storage {
            storage.validate()?;
        }
        Ok(())
    }
}

/// Backing storage locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the installed text module (MyBible SQLite file)
    pub text_module: Option<PathBuf>,

    /// Path to the module registry database
    pub registry: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate the storage configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.text_module {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "storage.text_module cannot be empty".to_string(),
                ));
            }
        }
        if let Some(path) = &self.registry {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "storage.registry cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
