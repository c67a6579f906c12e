//! catalog::mock
//!
//! Mock registry implementation for deterministic testing.
//!
//! # Example
//!
//! ```
//! use lectern::catalog::mock::MockRegistry;
//! use lectern::catalog::{ModuleFilter, Registry};
//!
//! let registry = MockRegistry::new();
//! registry.add_module("RST+", "Russian Synodal Translation", None, "ru", None);
//!
//! let all = registry.search(&ModuleFilter::default()).unwrap();
//! assert_eq!(all.len(), 1);
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::traits::{ModuleFilter, Registry, RegistryError};
use crate::core::types::{Module, ModuleId};

/// Mock registry for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockRegistryInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockRegistryInner {
    /// Modules keyed by identifier; BTreeMap keeps identifier ordering.
    modules: BTreeMap<ModuleId, Module>,
    /// Operation to fail on (for testing error paths).
    fail_on: Option<FailOn>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail search with the given error.
    Search(RegistryError),
    /// Fail fetch with the given error.
    Fetch(RegistryError),
}

impl MockRegistry {
    /// Create a new empty mock registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module entry.
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty; tests construct identifiers, so an invalid
    /// one is a test bug.
    pub fn add_module(
        &self,
        id: &str,
        description: &str,
        origin: Option<&str>,
        language: &str,
        region: Option<&str>,
    ) {
        let id = ModuleId::new(id).expect("valid module id");
        let mut inner = self.inner.lock().unwrap();
        inner.modules.insert(
            id.clone(),
            Module {
                id,
                description: description.to_string(),
                origin: origin.map(str::to_string),
                language: language.to_string(),
                region: region.map(str::to_string),
            },
        );
    }

    /// Configure one operation to fail.
    pub fn fail_on(&self, fail: FailOn) {
        self.inner.lock().unwrap().fail_on = Some(fail);
    }

    /// Clear any configured failure.
    pub fn clear_failure(&self) {
        self.inner.lock().unwrap().fail_on = None;
    }
}

impl Registry for MockRegistry {
    fn search(&self, filter: &ModuleFilter) -> Result<Vec<Module>, RegistryError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::Search(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner
            .modules
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    fn fetch(&self, ids: &[ModuleId]) -> Result<Vec<Module>, RegistryError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::Fetch(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner
            .modules
            .values()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }
}
