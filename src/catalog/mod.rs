//! catalog
//!
//! Installed-module catalog: filtered search and batch fetch over the
//! registry of text modules known to this installation.
//!
//! # Architecture
//!
//! The [`Registry`] trait defines the capability interface over the backing
//! row store. [`ModuleCatalog`] layers argument validation on top and is the
//! surface the CLI talks to.
//!
//! # Modules
//!
//! - `traits`: Core `Registry` trait, `ModuleFilter`, `RegistryError`
//! - [`sqlite`]: SQLite registry implementation
//! - [`mock`]: Mock implementation for deterministic testing

use thiserror::Error;

pub mod mock;
pub mod sqlite;
mod traits;

pub use sqlite::SqliteRegistry;
pub use traits::{ModuleFilter, Registry, RegistryError};

use crate::core::types::{Module, ModuleId};

/// Errors from catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The caller's arguments are rejected before touching storage.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing registry engine failed.
    #[error(transparent)]
    Storage(#[from] RegistryError),
}

impl CatalogError {
    /// Check if this error is an argument-validation rejection rather than
    /// an engine failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CatalogError::InvalidArgument(_))
    }
}

/// Read-only view over the installed-module registry.
///
/// Constructed once at process start against a fixed backing registry and
/// held for the process lifetime. Safe for concurrent readers.
pub struct ModuleCatalog {
    registry: Box<dyn Registry>,
}

impl ModuleCatalog {
    /// Create a catalog over a backing registry.
    pub fn new(registry: Box<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Search for modules matching the filter.
    ///
    /// Present filter fields compose conjunctively; an empty filter returns
    /// the whole catalog. Results are ordered by identifier, and an empty
    /// result is a successful outcome.
    pub fn search(&self, filter: &ModuleFilter) -> Result<Vec<Module>, CatalogError> {
        Ok(self.registry.search(filter)?)
    }

    /// Fetch the catalog entries for a batch of identifiers.
    ///
    /// Unknown identifiers are silently omitted from the result, which is
    /// ordered by identifier.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `ids` is empty; an empty batch is a caller
    /// mistake, not an empty result.
    pub fn fetch(&self, ids: &[ModuleId]) -> Result<Vec<Module>, CatalogError> {
        if ids.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "at least one module id is required".to_string(),
            ));
        }
        Ok(self.registry.fetch(ids)?)
    }
}
