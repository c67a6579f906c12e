//! text::store
//!
//! Reference resolution over one text source.
//!
//! # Design
//!
//! `ReferenceStore` owns the structural view of a single text source for the
//! process lifetime and enforces hierarchical containment: a verse reference
//! is valid only if its chapter is present, which is present only if its book
//! exists. Lookups are existence checks followed by direct retrieval against
//! the source's indexed access, never scans.
//!
//! # Error granularity
//!
//! `chapter_verse_count` distinguishes `BookNotFound` from `ChapterNotFound`,
//! but `verse_text` collapses every absence to a single `VerseNotFound`,
//! matching the source's flat verse-lookup contract. Callers that need to
//! know which level is missing use the `chapter_exists` / `verse_exists`
//! predicates.

use thiserror::Error;

use super::traits::{SourceError, TextSource};
use crate::core::types::{Book, BookNumber, VerseRef};

/// Errors from reference resolution.
///
/// The not-found kinds are expected outcomes of valid queries against absent
/// data and are never promoted to a process-level failure. `Storage` wraps a
/// backing engine failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// No book with this number exists in the source.
    #[error("book {0} not found")]
    BookNotFound(BookNumber),

    /// The book exists but has no such chapter.
    #[error("chapter {chapter} not found in book {book}")]
    ChapterNotFound { book: BookNumber, chapter: u32 },

    /// The full hierarchical path is absent at some level.
    #[error("verse {0} not found")]
    VerseNotFound(VerseRef),

    /// The backing text engine failed.
    #[error(transparent)]
    Storage(#[from] SourceError),
}

impl ReferenceError {
    /// Check if this error is a not-found condition rather than an engine failure.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, ReferenceError::Storage(_))
    }
}

/// Read-only resolution of (book, chapter, verse) references.
///
/// Constructed once at process start against a fixed backing source and held
/// for the process lifetime. Safe for concurrent readers.
pub struct ReferenceStore {
    source: Box<dyn TextSource>,
}

impl ReferenceStore {
    /// Create a store over a backing text source.
    pub fn new(source: Box<dyn TextSource>) -> Self {
        Self { source }
    }

    /// List all books in the source's canonical ordering.
    pub fn books(&self) -> Result<Vec<Book>, ReferenceError> {
        Ok(self.source.list_books()?)
    }

    /// Fetch one book by number.
    ///
    /// # Errors
    ///
    /// `BookNotFound` if no book with that number exists.
    pub fn book(&self, number: BookNumber) -> Result<Book, ReferenceError> {
        self.source
            .get_book(number)?
            .ok_or(ReferenceError::BookNotFound(number))
    }

    /// The number of chapters reported for a book.
    ///
    /// This is the count of chapter groups present in the source, which
    /// matches the chapter count only under dense 1..N numbering.
    ///
    /// # Errors
    ///
    /// `BookNotFound` if the book does not exist.
    pub fn book_chapter_count(&self, number: BookNumber) -> Result<u32, ReferenceError> {
        if self.source.get_book(number)?.is_none() {
            return Err(ReferenceError::BookNotFound(number));
        }
        Ok(self.source.chapter_count(number)?)
    }

    /// Check whether a chapter is present.
    ///
    /// True iff the book exists and the chapter has at least one verse.
    pub fn chapter_exists(&self, number: BookNumber, chapter: u32) -> Result<bool, ReferenceError> {
        Ok(self.source.verse_count(number, chapter)? > 0)
    }

    /// Count of verses present in one chapter.
    ///
    /// # Errors
    ///
    /// `BookNotFound` if the book is absent, else `ChapterNotFound` if the
    /// chapter is absent within an existing book.
    pub fn chapter_verse_count(
        &self,
        number: BookNumber,
        chapter: u32,
    ) -> Result<u32, ReferenceError> {
        if self.source.get_book(number)?.is_none() {
            return Err(ReferenceError::BookNotFound(number));
        }
        match self.source.verse_count(number, chapter)? {
            0 => Err(ReferenceError::ChapterNotFound {
                book: number,
                chapter,
            }),
            count => Ok(count),
        }
    }

    /// Check whether the full hierarchical path exists.
    ///
    /// Derived from the same flat lookup as [`ReferenceStore::verse_text`],
    /// so the two can never disagree.
    pub fn verse_exists(&self, reference: &VerseRef) -> Result<bool, ReferenceError> {
        Ok(self.source.get_verse(reference)?.is_some())
    }

    /// Fetch one verse's text.
    ///
    /// # Errors
    ///
    /// `VerseNotFound` if any level of the path (book, chapter, or verse) is
    /// absent. The lower-level kinds are distinguishable only through the
    /// separate predicates.
    pub fn verse_text(&self, reference: &VerseRef) -> Result<String, ReferenceError> {
        self.source
            .get_verse(reference)?
            .ok_or(ReferenceError::VerseNotFound(*reference))
    }
}
