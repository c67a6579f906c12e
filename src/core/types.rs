//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BookNumber`] - Stable, externally assigned book identifier
//! - [`Book`] - One book of a text source (number plus display names)
//! - [`VerseRef`] - A (book, chapter, verse) coordinate
//! - [`ModuleId`] - Identifier of an installed text module
//! - [`Module`] - Catalog entry for an installed text module
//!
//! # Validation
//!
//! Identifier types enforce validity at construction time. A book number is
//! always positive and a module id is never empty; invalid values cannot be
//! represented.
//!
//! # Examples
//!
//! ```
//! use lectern::core::types::{BookNumber, ModuleId, VerseRef};
//!
//! let book = BookNumber::new(10).unwrap();
//! let reference = VerseRef::new(book, 1, 1);
//! assert_eq!(reference.to_string(), "10:1:1");
//!
//! assert!(BookNumber::new(0).is_err());
//! assert!(ModuleId::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid book number: {0}")]
    InvalidBookNumber(String),

    #[error("invalid module id: {0}")]
    InvalidModuleId(String),
}

/// A stable book number as assigned by the text source.
///
/// Book numbers are positive integers, unique within one source, and encode
/// the canonical book ordering (MyBible numbering: Genesis is 10, Exodus 20,
/// and so on).
///
/// # Example
///
/// ```
/// use lectern::core::types::BookNumber;
///
/// let genesis = BookNumber::new(10).unwrap();
/// assert_eq!(genesis.get(), 10);
///
/// assert!(BookNumber::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BookNumber(u32);

impl BookNumber {
    /// Create a new validated book number.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBookNumber` if the number is zero.
    pub fn new(number: u32) -> Result<Self, TypeError> {
        if number == 0 {
            return Err(TypeError::InvalidBookNumber(
                "book number must be positive".into(),
            ));
        }
        Ok(Self(number))
    }

    /// The raw book number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for BookNumber {
    type Error = TypeError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<BookNumber> for u32 {
    fn from(number: BookNumber) -> u32 {
        number.0
    }
}

impl std::fmt::Display for BookNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One book of a text source.
///
/// Short and long names are human-readable, language-dependent strings and
/// are not guaranteed unique across sources. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable book number within the source
    #[serde(rename = "id")]
    pub number: BookNumber,
    /// Abbreviated display name (e.g. "Быт")
    pub short_name: String,
    /// Full display name (e.g. "Бытие")
    pub long_name: String,
}

/// A (book, chapter, verse) coordinate identifying one unit of text.
///
/// Chapter and verse numbering starts at 1 and has no fixed upper bound;
/// validity is determined solely by presence in the backing source, never by
/// a numeric range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    /// Containing book
    pub book: BookNumber,
    /// Chapter number within the book (1-based)
    pub chapter: u32,
    /// Verse number within the chapter (1-based)
    pub verse: u32,
}

impl VerseRef {
    /// Create a verse reference.
    pub fn new(book: BookNumber, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }
}

impl std::fmt::Display for VerseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.book, self.chapter, self.verse)
    }
}

/// Identifier of an installed text module.
///
/// Module ids are the file stem of the installed module (e.g. "RST+") and
/// are unique within the registry.
///
/// # Example
///
/// ```
/// use lectern::core::types::ModuleId;
///
/// let id = ModuleId::new("RST+").unwrap();
/// assert_eq!(id.as_str(), "RST+");
///
/// assert!(ModuleId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a new validated module id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidModuleId` if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidModuleId(
                "module id cannot be empty".into(),
            ));
        }
        Ok(Self(id))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleId {
    type Error = TypeError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> String {
        id.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog entry for one installed text module.
///
/// Created by the ingestion process and read-only at query time. `origin`
/// carries provenance or license text and may be absent, as may `region`.
/// A module whose registry row has no language value is represented with an
/// empty `language` string; a present (even empty) language filter still
/// constrains against that stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module identifier (module file stem)
    pub id: ModuleId,
    /// Human-readable description
    pub description: String,
    /// Provenance or license text, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// ISO-like language code (empty when the registry row has none)
    pub language: String,
    /// Region qualifier, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
