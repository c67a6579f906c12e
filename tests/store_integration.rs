//! Integration tests for reference resolution over a real SQLite module.

mod common;

use lectern::core::types::{BookNumber, VerseRef};
use lectern::text::{ReferenceError, ReferenceStore, SqliteTextSource};

fn open_store() -> (common::Fixture, ReferenceStore) {
    let fixture = common::fixture();
    let source = SqliteTextSource::open(&fixture.text_module).expect("open text module");
    (fixture, ReferenceStore::new(Box::new(source)))
}

fn number(n: u32) -> BookNumber {
    BookNumber::new(n).unwrap()
}

#[test]
fn books_are_listed_in_canonical_order() {
    let (_fixture, store) = open_store();
    let books = store.books().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].number, number(10));
    assert_eq!(books[0].long_name, "Бытие");
    assert_eq!(books[1].number, number(40));
}

#[test]
fn book_lookup_and_chapter_count() {
    let (_fixture, store) = open_store();

    let genesis = store.book(number(10)).unwrap();
    assert_eq!(genesis.short_name, "Быт");
    assert_eq!(store.book_chapter_count(number(10)).unwrap(), 2);
    assert_eq!(store.book_chapter_count(number(40)).unwrap(), 1);
}

#[test]
fn missing_book_is_not_found_at_every_operation() {
    let (_fixture, store) = open_store();
    let absent = number(9999);

    let err = store.book(absent).unwrap_err();
    assert_eq!(err, ReferenceError::BookNotFound(absent));
    assert!(err.is_not_found());

    let err = store.book_chapter_count(absent).unwrap_err();
    assert_eq!(err, ReferenceError::BookNotFound(absent));

    let err = store.chapter_verse_count(absent, 1).unwrap_err();
    assert_eq!(err, ReferenceError::BookNotFound(absent));
}

#[test]
fn chapter_presence_requires_verses() {
    let (_fixture, store) = open_store();

    assert!(store.chapter_exists(number(10), 1).unwrap());
    assert!(store.chapter_exists(number(10), 2).unwrap());
    assert!(!store.chapter_exists(number(10), 3).unwrap());

    assert_eq!(store.chapter_verse_count(number(10), 1).unwrap(), 31);
    let err = store.chapter_verse_count(number(10), 3).unwrap_err();
    assert_eq!(
        err,
        ReferenceError::ChapterNotFound {
            book: number(10),
            chapter: 3
        }
    );
}

#[test]
fn verse_resolution_end_to_end() {
    let (_fixture, store) = open_store();

    let reference = VerseRef::new(number(10), 1, 1);
    assert!(store.verse_exists(&reference).unwrap());
    assert_eq!(store.verse_text(&reference).unwrap(), common::GEN_1_1);
}

#[test]
fn absent_verse_collapses_to_verse_not_found() {
    let (_fixture, store) = open_store();

    // Missing verse, missing chapter, missing book: all the same kind
    for reference in [
        VerseRef::new(number(10), 1, 999),
        VerseRef::new(number(10), 99, 1),
        VerseRef::new(number(9999), 1, 1),
    ] {
        assert!(!store.verse_exists(&reference).unwrap());
        let err = store.verse_text(&reference).unwrap_err();
        assert_eq!(err, ReferenceError::VerseNotFound(reference));
        assert!(err.is_not_found());
    }
}

#[test]
fn store_is_shareable_across_threads() {
    let (_fixture, store) = open_store();
    let store = std::sync::Arc::new(store);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                store
                    .verse_text(&VerseRef::new(number(10), 1, 1))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), common::GEN_1_1);
    }
}
