//! Property-based tests.
//!
//! The SQLite registry's filtered search must agree with the in-memory
//! reference semantics (`ModuleFilter::matches`), and the verse existence
//! predicate must agree with verse retrieval, for arbitrary data.

use proptest::prelude::*;
use rusqlite::Connection;
use tempfile::TempDir;

use lectern::catalog::{ModuleFilter, Registry, SqliteRegistry};
use lectern::core::types::{BookNumber, Module, ModuleId, VerseRef};
use lectern::text::mock::MockTextSource;
use lectern::text::ReferenceStore;

const LANGUAGES: &[&str] = &["ru", "en", "de", ""];
const REGIONS: &[&str] = &["US", "GB"];

/// A generated registry row: (language, region, has_origin).
type RowSpec = (Option<usize>, Option<usize>, bool);

fn row_spec() -> impl Strategy<Value = RowSpec> {
    (
        proptest::option::of(0..LANGUAGES.len()),
        proptest::option::of(0..REGIONS.len()),
        any::<bool>(),
    )
}

fn filter_field(pool: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of((0..pool.len()).prop_map(move |i| pool[i].to_string()))
}

/// Build the domain-level view of a generated row, mirroring the mapping
/// the SQLite backend performs (absent language becomes the empty string).
fn expected_module(index: usize, spec: &RowSpec) -> Module {
    let (language, region, has_origin) = *spec;
    Module {
        id: ModuleId::new(format!("MOD{:03}", index)).unwrap(),
        description: format!("module {}", index),
        origin: has_origin.then(|| format!("origin {}", index)),
        language: language.map(|i| LANGUAGES[i].to_string()).unwrap_or_default(),
        region: region.map(|i| REGIONS[i].to_string()),
    }
}

fn write_registry(dir: &TempDir, rows: &[RowSpec]) -> SqliteRegistry {
    let path = dir.path().join("Registry.SQLite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE modules (filename TEXT, description TEXT, detailed_info TEXT, language TEXT, region TEXT)",
    )
    .unwrap();
    for (index, &(language, region, has_origin)) in rows.iter().enumerate() {
        conn.execute(
            "INSERT INTO modules VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                format!("MOD{:03}", index),
                format!("module {}", index),
                has_origin.then(|| format!("origin {}", index)),
                language.map(|i| LANGUAGES[i]),
                region.map(|i| REGIONS[i]),
            ],
        )
        .unwrap();
    }
    drop(conn);
    SqliteRegistry::open(&path).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The SQLite search result equals the naive filter over all rows.
    #[test]
    fn sqlite_search_matches_reference_semantics(
        rows in proptest::collection::vec(row_spec(), 0..12),
        id_index in proptest::option::of(0usize..14),
        language in filter_field(LANGUAGES),
        region in filter_field(REGIONS),
    ) {
        let dir = TempDir::new().unwrap();
        let registry = write_registry(&dir, &rows);

        let filter = ModuleFilter {
            id: id_index.map(|i| format!("MOD{:03}", i)),
            language,
            region,
        };

        let expected: Vec<Module> = rows
            .iter()
            .enumerate()
            .map(|(i, spec)| expected_module(i, spec))
            .filter(|m| filter.matches(m))
            .collect();

        let found = registry.search(&filter).unwrap();
        prop_assert_eq!(found, expected);
    }

    /// Fetch returns exactly the requested rows that exist, in id order.
    #[test]
    fn sqlite_fetch_is_membership(
        rows in proptest::collection::vec(row_spec(), 1..12),
        requested in proptest::collection::btree_set(0usize..14, 1..6),
    ) {
        let dir = TempDir::new().unwrap();
        let registry = write_registry(&dir, &rows);

        let ids: Vec<ModuleId> = requested
            .iter()
            .map(|i| ModuleId::new(format!("MOD{:03}", i)).unwrap())
            .collect();

        let expected: Vec<Module> = rows
            .iter()
            .enumerate()
            .filter(|(i, _)| requested.contains(i))
            .map(|(i, spec)| expected_module(i, spec))
            .collect();

        let found = registry.fetch(&ids).unwrap();
        prop_assert_eq!(found, expected);
    }

    /// verse_exists is true exactly when verse_text succeeds.
    #[test]
    fn verse_exists_agrees_with_verse_text(
        verses in proptest::collection::btree_set((1u32..5, 1u32..4, 1u32..6), 0..10),
        queries in proptest::collection::vec((1u32..6, 1u32..5, 1u32..7), 1..10),
    ) {
        let source = MockTextSource::new();
        for (book, chapter, verse) in &verses {
            let book = BookNumber::new(*book * 10).unwrap();
            source.add_book(book, "b", "book");
            source.add_verse(VerseRef::new(book, *chapter, *verse), "text");
        }
        let store = ReferenceStore::new(Box::new(source));

        for (book, chapter, verse) in &queries {
            let reference = VerseRef::new(BookNumber::new(*book * 10).unwrap(), *chapter, *verse);
            let exists = store.verse_exists(&reference).unwrap();
            prop_assert_eq!(exists, store.verse_text(&reference).is_ok());
            prop_assert_eq!(exists, verses.contains(&(*book, *chapter, *verse)));
        }
    }
}
