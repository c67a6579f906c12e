//! text
//!
//! Text source abstraction and reference resolution.
//!
//! # Architecture
//!
//! The [`TextSource`] trait defines the capability interface over one
//! installed text module. [`ReferenceStore`] layers the hierarchical
//! containment contract on top: book existence, chapter presence, verse
//! resolution, each with its own not-found condition.
//!
//! # Modules
//!
//! - `traits`: Core `TextSource` trait and `SourceError`
//! - [`sqlite`]: MyBible-format SQLite implementation
//! - [`mock`]: Mock implementation for deterministic testing
//! - `store`: The `ReferenceStore` resolution layer
//!
//! # Example
//!
//! ```ignore
//! use lectern::text::{ReferenceStore, SqliteTextSource};
//! use lectern::core::types::{BookNumber, VerseRef};
//!
//! let source = SqliteTextSource::open("RST+.SQLite3".as_ref())?;
//! let store = ReferenceStore::new(Box::new(source));
//!
//! let genesis = BookNumber::new(10)?;
//! let text = store.verse_text(&VerseRef::new(genesis, 1, 1))?;
//! ```

pub mod mock;
pub mod sqlite;
mod store;
mod traits;

pub use sqlite::SqliteTextSource;
pub use store::{ReferenceError, ReferenceStore};
pub use traits::{SourceError, TextSource};
