//! text::traits
//!
//! Text source trait definition for reading installed scripture modules.
//!
//! # Design
//!
//! The `TextSource` trait is the capability boundary around one opaque text
//! module. It exposes exactly the operations the resolution layer needs:
//! list books, fetch one book, count chapters and verses, and fetch one
//! verse by its full coordinate. The concrete storage engine behind it is
//! swappable without touching the resolution logic.
//!
//! Absence is reported structurally (`Option`, zero counts), never as an
//! error; only engine failures surface as [`SourceError`]. The store layer
//! on top translates absence into the caller-facing not-found kinds.
//!
//! # Example
//!
//! ```ignore
//! use lectern::text::{TextSource, SourceError};
//! use lectern::core::types::VerseRef;
//!
//! fn first_verse(source: &dyn TextSource, reference: VerseRef) -> Result<bool, SourceError> {
//!     Ok(source.get_verse(&reference)?.is_some())
//! }
//! ```

use thiserror::Error;

use crate::core::types::{Book, BookNumber, VerseRef};

/// Failure of the backing text engine (I/O, corrupt file, poisoned session).
///
/// Distinct from data absence: a missing book, chapter, or verse is an
/// expected outcome and never produces a `SourceError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("text source failure: {0}")]
pub struct SourceError(pub String);

/// The capability interface over one installed text module.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; many request-handling tasks read
/// through a single source concurrently. If the underlying session is not
/// safe for concurrent use, the implementation serializes access internally
/// rather than exposing that constraint to callers.
///
/// # Determinism
///
/// All operations are read-only. Running the same query twice against a
/// fixed source must yield bit-identical results.
pub trait TextSource: Send + Sync {
    /// List all books in the source's canonical ordering.
    ///
    /// Never empty for a well-formed source.
    fn list_books(&self) -> Result<Vec<Book>, SourceError>;

    /// Fetch one book by number.
    ///
    /// Returns `Ok(None)` if no book with that number exists.
    fn get_book(&self, number: BookNumber) -> Result<Option<Book>, SourceError>;

    /// Count of chapter groups present for a book.
    ///
    /// Returns 0 when the book is absent or has no verses. The count is the
    /// number of distinct chapter numbers with at least one verse; it equals
    /// the book's chapter count only under dense 1..N chapter numbering.
    fn chapter_count(&self, number: BookNumber) -> Result<u32, SourceError>;

    /// Count of verses present in one chapter.
    ///
    /// Returns 0 when the book or chapter is absent. A chapter is present
    /// exactly when this count is positive.
    fn verse_count(&self, number: BookNumber, chapter: u32) -> Result<u32, SourceError>;

    /// Fetch one verse's text by its full coordinate.
    ///
    /// This is a flat lookup: `Ok(None)` means the path is absent at some
    /// level (book, chapter, or verse) without saying which.
    fn get_verse(&self, reference: &VerseRef) -> Result<Option<String>, SourceError>;
}
