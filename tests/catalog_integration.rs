//! Integration tests for module catalog search and fetch over a real
//! SQLite registry.

mod common;

use lectern::catalog::{CatalogError, ModuleCatalog, ModuleFilter, SqliteRegistry};
use lectern::core::types::ModuleId;

fn open_catalog() -> (common::Fixture, ModuleCatalog) {
    let fixture = common::fixture();
    let registry = SqliteRegistry::open(&fixture.registry).expect("open registry");
    (fixture, ModuleCatalog::new(Box::new(registry)))
}

fn id(s: &str) -> ModuleId {
    ModuleId::new(s).unwrap()
}

fn ids(modules: &[lectern::core::types::Module]) -> Vec<&str> {
    modules.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn empty_filter_returns_whole_catalog_ordered() {
    let (_fixture, catalog) = open_catalog();
    let all = catalog.search(&ModuleFilter::default()).unwrap();
    assert_eq!(ids(&all), ["KJV", "RST+", "UNTAGGED"]);
}

#[test]
fn every_filter_presence_combination() {
    let (_fixture, catalog) = open_catalog();

    // Each case: (id, language, region) presence -> expected ids
    let cases: &[(Option<&str>, Option<&str>, Option<&str>, &[&str])] = &[
        (None, None, None, &["KJV", "RST+", "UNTAGGED"]),
        (Some("RST+"), None, None, &["RST+"]),
        (None, Some("en"), None, &["KJV"]),
        (None, None, Some("US"), &["KJV"]),
        (Some("KJV"), Some("en"), None, &["KJV"]),
        (Some("KJV"), None, Some("US"), &["KJV"]),
        (None, Some("en"), Some("US"), &["KJV"]),
        (Some("KJV"), Some("en"), Some("US"), &["KJV"]),
    ];

    for (id, language, region, expected) in cases {
        let filter = ModuleFilter {
            id: id.map(str::to_string),
            language: language.map(str::to_string),
            region: region.map(str::to_string),
        };
        let found = catalog.search(&filter).unwrap();
        assert_eq!(&ids(&found), expected, "filter {:?}", filter);
    }
}

#[test]
fn conjunction_with_one_mismatched_field_is_empty() {
    let (_fixture, catalog) = open_catalog();
    let filter = ModuleFilter {
        id: Some("KJV".to_string()),
        language: Some("ru".to_string()),
        region: None,
    };
    assert!(catalog.search(&filter).unwrap().is_empty());
}

#[test]
fn language_filter_and_unset_language_rows() {
    let (_fixture, catalog) = open_catalog();

    // A present language filter excludes rows with no language
    let filter = ModuleFilter {
        language: Some("ru".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter).unwrap()), ["RST+"]);

    // An empty-string language filter matches exactly those rows; it is
    // not a wildcard
    let filter = ModuleFilter {
        language: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter).unwrap()), ["UNTAGGED"]);

    // An absent language filter matches everything
    let all = catalog.search(&ModuleFilter::default()).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn no_match_is_ok_empty_not_error() {
    let (_fixture, catalog) = open_catalog();
    let filter = ModuleFilter {
        language: Some("fr".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.search(&filter).unwrap(), vec![]);
}

#[test]
fn nullable_columns_surface_as_optionals() {
    let (_fixture, catalog) = open_catalog();
    let all = catalog.search(&ModuleFilter::default()).unwrap();

    let rst = all.iter().find(|m| m.id.as_str() == "RST+").unwrap();
    assert_eq!(rst.origin.as_deref(), Some("Synodal text, public domain"));
    assert!(rst.region.is_none());

    let untagged = all.iter().find(|m| m.id.as_str() == "UNTAGGED").unwrap();
    assert!(untagged.origin.is_none());
    assert_eq!(untagged.language, "");
    assert!(untagged.region.is_none());
}

#[test]
fn fetch_returns_known_subset_ordered() {
    let (_fixture, catalog) = open_catalog();
    let found = catalog
        .fetch(&[id("RST+"), id("KJV"), id("NoSuchModule")])
        .unwrap();
    assert_eq!(ids(&found), ["KJV", "RST+"]);
}

#[test]
fn fetch_all_unknown_is_ok_empty() {
    let (_fixture, catalog) = open_catalog();
    let found = catalog.fetch(&[id("Nope"), id("AlsoNope")]).unwrap();
    assert!(found.is_empty());
}

#[test]
fn fetch_empty_batch_is_invalid_argument() {
    let (_fixture, catalog) = open_catalog();
    let err = catalog.fetch(&[]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert!(err.is_invalid_argument());
}
