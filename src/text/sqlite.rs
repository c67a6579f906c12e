//! text::sqlite
//!
//! MyBible-format SQLite text source.
//!
//! # Format
//!
//! MyBible modules are SQLite files with (at least) two tables:
//!
//! - `books(book_number, short_name, long_name)`
//! - `verses(book_number, chapter, verse, text)`
//!
//! Book numbers encode canonical ordering; chapters are the distinct
//! chapter values present in `verses` for a book.
//!
//! # Concurrency
//!
//! The file is opened read-only and the connection is guarded by a mutex,
//! so one source can be shared across concurrent request-handling tasks
//! without external locking.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags, OptionalExtension};

use super::traits::{SourceError, TextSource};
use crate::core::types::{Book, BookNumber, VerseRef};

/// Text source backed by a MyBible SQLite module.
pub struct SqliteTextSource {
    conn: Mutex<Connection>,
}

impl SqliteTextSource {
    /// Open a MyBible module read-only.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the file cannot be opened as a SQLite
    /// database. Schema problems surface on first query.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| SourceError(format!("cannot open text module '{}': {}", path.display(), e)))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, SourceError> {
        self.conn
            .lock()
            .map_err(|_| SourceError("text module session poisoned".into()))
    }
}

/// Map one `books` row to a [`Book`].
fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<(u32, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn book_from_columns(
    (number, short_name, long_name): (u32, String, String),
) -> Result<Book, SourceError> {
    let number = BookNumber::new(number)
        .map_err(|e| SourceError(format!("malformed book row: {}", e)))?;
    Ok(Book {
        number,
        short_name,
        long_name,
    })
}

impl TextSource for SqliteTextSource {
    fn list_books(&self) -> Result<Vec<Book>, SourceError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT book_number, short_name, long_name FROM books ORDER BY book_number")
            .map_err(|e| SourceError(e.to_string()))?;
        let rows = stmt
            .query_map([], row_to_book)
            .map_err(|e| SourceError(e.to_string()))?;

        let mut books = Vec::new();
        for row in rows {
            let columns = row.map_err(|e| SourceError(e.to_string()))?;
            books.push(book_from_columns(columns)?);
        }
        Ok(books)
    }

    fn get_book(&self, number: BookNumber) -> Result<Option<Book>, SourceError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT book_number, short_name, long_name FROM books WHERE book_number = ?1",
                [number.get()],
                row_to_book,
            )
            .optional()
            .map_err(|e| SourceError(e.to_string()))?;
        row.map(book_from_columns).transpose()
    }

    fn chapter_count(&self, number: BookNumber) -> Result<u32, SourceError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT COUNT(DISTINCT chapter) FROM verses WHERE book_number = ?1",
            [number.get()],
            |row| row.get(0),
        )
        .map_err(|e| SourceError(e.to_string()))
    }

    fn verse_count(&self, number: BookNumber, chapter: u32) -> Result<u32, SourceError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT COUNT(*) FROM verses WHERE book_number = ?1 AND chapter = ?2",
            [number.get(), chapter],
            |row| row.get(0),
        )
        .map_err(|e| SourceError(e.to_string()))
    }

    fn get_verse(&self, reference: &VerseRef) -> Result<Option<String>, SourceError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT text FROM verses WHERE book_number = ?1 AND chapter = ?2 AND verse = ?3",
            [reference.book.get(), reference.chapter, reference.verse],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| SourceError(e.to_string()))
    }
}
