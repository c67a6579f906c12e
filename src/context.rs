//! context
//!
//! Process-wide application context.
//!
//! # Design
//!
//! `AppContext` owns the two long-lived read-only stores for the process
//! lifetime: the reference store over the active text module and the module
//! catalog over the registry. Both are opened once at startup from resolved
//! configuration; command handlers borrow the context and never open storage
//! themselves.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::catalog::{ModuleCatalog, SqliteRegistry};
use crate::text::{ReferenceStore, SqliteTextSource};

/// The opened stores shared by every command in one invocation.
pub struct AppContext {
    // Fields hold `Box<dyn Trait>` backends without a `Debug` bound, so
    // `Debug` is implemented manually below rather than derived.
    /// Reference resolution over the active text module.
    pub store: ReferenceStore,
    /// Search and fetch over the installed-module registry.
    pub catalog: ModuleCatalog,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Open both backing stores read-only.
    ///
    /// # Errors
    ///
    /// Fails if either file cannot be opened as a SQLite database; the
    /// error names which store failed.
    pub fn open(text_module: &Path, registry: &Path) -> Result<Self> {
        let source = SqliteTextSource::open(text_module)
            .with_context(|| format!("opening text module '{}'", text_module.display()))?;
        let registry = SqliteRegistry::open(registry)
            .with_context(|| format!("opening module registry '{}'", registry.display()))?;
        Ok(Self {
            store: ReferenceStore::new(Box::new(source)),
            catalog: ModuleCatalog::new(Box::new(registry)),
        })
    }

    /// Assemble a context from already-built stores. Used by tests to
    /// substitute mock backends.
    pub fn from_parts(store: ReferenceStore, catalog: ModuleCatalog) -> Self {
        Self { store, catalog }
    }
}
