//! catalog::sqlite
//!
//! SQLite-backed module registry.
//!
//! # Format
//!
//! The registry is a SQLite file with one table:
//!
//! - `modules(filename, description, detailed_info, language, region)`
//!
//! `filename` is the module identifier. `detailed_info`, `language`, and
//! `region` are nullable; an absent language is normalized to the empty
//! string at the row boundary so the domain type stays non-optional.
//!
//! # Query construction
//!
//! Filtered search builds a list of parameter-bound equality clauses, one
//! per present filter field, joined conjunctively. Filter values are never
//! spliced into SQL text.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::types::ToSql;
use rusqlite::{Connection, OpenFlags};

use super::traits::{ModuleFilter, Registry, RegistryError};
use crate::core::types::{Module, ModuleId};

const MODULE_COLUMNS: &str = "filename, description, detailed_info, language, region";

/// Registry backed by a SQLite catalog file.
pub struct SqliteRegistry {
    conn: Mutex<Connection>,
}

impl SqliteRegistry {
    /// Open a registry file read-only.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the file cannot be opened as a SQLite
    /// database. Schema problems surface on first query.
    pub fn open(path: &Path) -> Result<Self, RegistryError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| RegistryError(format!("cannot open registry '{}': {}", path.display(), e)))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, RegistryError> {
        self.conn
            .lock()
            .map_err(|_| RegistryError("registry session poisoned".into()))
    }
}

/// Map one `modules` row to a [`Module`].
fn row_to_module(row: &rusqlite::Row<'_>) -> rusqlite::Result<(String, Option<String>, Option<String>, Option<String>, Option<String>)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn module_from_columns(
    (filename, description, detailed_info, language, region): (
        String,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
    ),
) -> Result<Module, RegistryError> {
    let id = ModuleId::new(&filename)
        .map_err(|e| RegistryError(format!("malformed module row: {}", e)))?;
    Ok(Module {
        id,
        description: description.unwrap_or_default(),
        origin: detailed_info,
        language: language.unwrap_or_default(),
        region,
    })
}

impl Registry for SqliteRegistry {
    fn search(&self, filter: &ModuleFilter) -> Result<Vec<Module>, RegistryError> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<&dyn ToSql> = Vec::new();

        if let Some(id) = &filter.id {
            clauses.push("filename = ?");
            params.push(id);
        }
        if let Some(language) = &filter.language {
            // Stored NULL means "unset", same as the empty string, so the
            // predicate must see them as equal
            clauses.push("COALESCE(language, '') = ?");
            params.push(language);
        }
        if let Some(region) = &filter.region {
            clauses.push("region = ?");
            params.push(region);
        }

        let mut sql = format!("SELECT {} FROM modules", MODULE_COLUMNS);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY filename");

        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| RegistryError(e.to_string()))?;
        let rows = stmt
            .query_map(params.as_slice(), row_to_module)
            .map_err(|e| RegistryError(e.to_string()))?;

        let mut modules = Vec::new();
        for row in rows {
            let columns = row.map_err(|e| RegistryError(e.to_string()))?;
            modules.push(module_from_columns(columns)?);
        }
        Ok(modules)
    }

    fn fetch(&self, ids: &[ModuleId]) -> Result<Vec<Module>, RegistryError> {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM modules WHERE filename IN ({}) ORDER BY filename",
            MODULE_COLUMNS, placeholders
        );

        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| RegistryError(e.to_string()))?;
        let rows = stmt
            .query_map(
                rusqlite::params_from_iter(ids.iter().map(ModuleId::as_str)),
                row_to_module,
            )
            .map_err(|e| RegistryError(e.to_string()))?;

        let mut modules = Vec::new();
        for row in rows {
            let columns = row.map_err(|e| RegistryError(e.to_string()))?;
            modules.push(module_from_columns(columns)?);
        }
        Ok(modules)
    }
}
