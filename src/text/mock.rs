//! text::mock
//!
//! Mock text source implementation for deterministic testing.
//!
//! # Design
//!
//! The mock source provides a deterministic implementation of the
//! [`TextSource`] trait for use in tests. It stores books and verses in
//! ordered maps and allows configuring failure scenarios.
//!
//! # Example
//!
//! ```
//! use lectern::text::mock::MockTextSource;
//! use lectern::text::TextSource;
//! use lectern::core::types::{BookNumber, VerseRef};
//!
//! let source = MockTextSource::new();
//! let genesis = BookNumber::new(10).unwrap();
//! source.add_book(genesis, "Быт", "Бытие");
//! source.add_verse(VerseRef::new(genesis, 1, 1), "В начале...");
//!
//! assert_eq!(source.chapter_count(genesis).unwrap(), 1);
//! assert!(source.get_verse(&VerseRef::new(genesis, 1, 2)).unwrap().is_none());
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::traits::{SourceError, TextSource};
use crate::core::types::{Book, BookNumber, VerseRef};

/// Mock text source for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockTextSource {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockTextSourceInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockTextSourceInner {
    /// Books keyed by number; BTreeMap keeps canonical ordering.
    books: BTreeMap<BookNumber, Book>,
    /// Verse text keyed by full coordinate.
    verses: BTreeMap<(BookNumber, u32, u32), String>,
    /// Operation to fail on (for testing error paths).
    fail_on: Option<FailOn>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_books with the given error.
    ListBooks(SourceError),
    /// Fail get_book with the given error.
    GetBook(SourceError),
    /// Fail chapter_count with the given error.
    ChapterCount(SourceError),
    /// Fail verse_count with the given error.
    VerseCount(SourceError),
    /// Fail get_verse with the given error.
    GetVerse(SourceError),
}

impl MockTextSource {
    /// Create a new empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book.
    pub fn add_book(&self, number: BookNumber, short_name: &str, long_name: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.books.insert(
            number,
            Book {
                number,
                short_name: short_name.to_string(),
                long_name: long_name.to_string(),
            },
        );
    }

    /// Register a verse. The containing book must be added separately;
    /// the mock does not enforce containment so tests can construct
    /// malformed sources.
    pub fn add_verse(&self, reference: VerseRef, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.verses.insert(
            (reference.book, reference.chapter, reference.verse),
            text.to_string(),
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

impl TextSource for MockTextSource {
    fn list_books(&self) -> Result<Vec<Book>, SourceError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::ListBooks(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.books.values().cloned().collect())
    }

    fn get_book(&self, number: BookNumber) -> Result<Option<Book>, SourceError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::GetBook(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.books.get(&number).cloned())
    }

    fn chapter_count(&self, number: BookNumber) -> Result<u32, SourceError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::ChapterCount(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        let chapters: std::collections::BTreeSet<u32> = inner
            .verses
            .keys()
            .filter(|(book, _, _)| *book == number)
            .map(|(_, chapter, _)| *chapter)
            .collect();
        Ok(chapters.len() as u32)
    }

    fn verse_count(&self, number: BookNumber, chapter: u32) -> Result<u32, SourceError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::VerseCount(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        let count = inner
            .verses
            .keys()
            .filter(|(book, ch, _)| *book == number && *ch == chapter)
            .count();
        Ok(count as u32)
    }

    fn get_verse(&self, reference: &VerseRef) -> Result<Option<String>, SourceError> {
        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::GetVerse(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner
            .verses
            .get(&(reference.book, reference.chapter, reference.verse))
            .cloned())
    }
}
