//! catalog::traits
//!
//! Registry trait definition for the installed-module catalog.
//!
//! # Design
//!
//! The `Registry` trait is the capability boundary around the opaque row
//! store that holds installed-module metadata. It exposes filtered search
//! and batch fetch; argument validation and ordering guarantees live in
//! [`crate::catalog::ModuleCatalog`] on top.
//!
//! Filters compose conjunctively: each present field contributes one
//! independent equality predicate, absent fields are wildcards. This keeps
//! every field-presence combination independently testable and rules out
//! query string concatenation.

use thiserror::Error;

use crate::core::types::{Module, ModuleId};

/// Failure of the backing registry engine.
///
/// An empty search result is not an error; this type covers I/O and
/// engine-level failures only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("registry failure: {0}")]
pub struct RegistryError(pub String);

/// Optional equality constraints over catalog fields.
///
/// Only present fields constrain the result; an absent field matches all
/// stored values for that field, including rows where the stored value is
/// itself absent. A present field with an empty string still constrains —
/// it matches exactly the rows whose stored value is the unset
/// representation.
///
/// # Example
///
/// ```
/// use lectern::catalog::ModuleFilter;
///
/// let filter = ModuleFilter {
///     language: Some("ru".to_string()),
///     ..Default::default()
/// };
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFilter {
    /// Constrain to one module identifier.
    pub id: Option<String>,
    /// Constrain to one language code.
    pub language: Option<String>,
    /// Constrain to one region.
    pub region: Option<String>,
}

impl ModuleFilter {
    /// Check whether any field is present.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.language.is_none() && self.region.is_none()
    }

    /// Evaluate the conjunction of present predicates against one module.
    ///
    /// This is the reference semantics every backend must agree with.
    pub fn matches(&self, module: &Module) -> bool {
        self.id
            .as_ref()
            .map_or(true, |id| module.id.as_str() == id)
            && self
                .language
                .as_ref()
                .map_or(true, |language| &module.language == language)
            && self
                .region
                .as_ref()
                .map_or(true, |region| module.region.as_deref() == Some(region.as_str()))
    }
}

/// The capability interface over the installed-module row store.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the catalog is shared read-only
/// across concurrent requests.
pub trait Registry: Send + Sync {
    /// Return all modules matching the filter, ordered by identifier.
    ///
    /// A filter with no present fields returns every catalog entry. An
    /// empty result is `Ok(vec![])`, never an error.
    fn search(&self, filter: &ModuleFilter) -> Result<Vec<Module>, RegistryError>;

    /// Return the subset of the catalog whose identifier is in `ids`,
    /// ordered by identifier.
    ///
    /// Unknown identifiers are silently omitted; callers detect "not found"
    /// by absence from the result. `ids` is guaranteed non-empty by the
    /// catalog layer.
    fn fetch(&self, ids: &[ModuleId]) -> Result<Vec<Module>, RegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, language: &str, region: Option<&str>) -> Module {
        Module {
            id: ModuleId::new(id).unwrap(),
            description: format!("{} description", id),
            origin: None,
            language: language.to_string(),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ModuleFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&module("RST+", "ru", None)));
        assert!(filter.matches(&module("X", "", Some("US"))));
    }

    #[test]
    fn single_field_filters() {
        let by_id = ModuleFilter {
            id: Some("RST+".to_string()),
            ..Default::default()
        };
        assert!(by_id.matches(&module("RST+", "ru", None)));
        assert!(!by_id.matches(&module("KJV", "en", None)));

        let by_language = ModuleFilter {
            language: Some("ru".to_string()),
            ..Default::default()
        };
        assert!(by_language.matches(&module("RST+", "ru", None)));
        // Module with unset language is excluded by a present filter
        assert!(!by_language.matches(&module("X", "", None)));

        let by_region = ModuleFilter {
            region: Some("US".to_string()),
            ..Default::default()
        };
        assert!(by_region.matches(&module("KJV", "en", Some("US"))));
        assert!(!by_region.matches(&module("RST+", "ru", None)));
    }

    #[test]
    fn conjunction_of_all_fields() {
        let filter = ModuleFilter {
            id: Some("KJV".to_string()),
            language: Some("en".to_string()),
            region: Some("US".to_string()),
        };
        assert!(filter.matches(&module("KJV", "en", Some("US"))));
        assert!(!filter.matches(&module("KJV", "en", Some("GB"))));
        assert!(!filter.matches(&module("KJV", "ru", Some("US"))));
        assert!(!filter.matches(&module("RST+", "en", Some("US"))));
    }

    #[test]
    fn empty_string_filter_is_not_a_wildcard() {
        let filter = ModuleFilter {
            language: Some(String::new()),
            ..Default::default()
        };
        // Matches exactly the rows whose stored language is unset
        assert!(filter.matches(&module("X", "", None)));
        assert!(!filter.matches(&module("RST+", "ru", None)));
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError("database is locked".into());
        assert_eq!(err.to_string(), "registry failure: database is locked");
    }
}
