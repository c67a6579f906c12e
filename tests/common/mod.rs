//! Shared fixtures for integration tests.
//!
//! Builds throwaway MyBible text modules and registry databases on disk so
//! tests exercise the real SQLite backends.

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

/// On-disk fixture databases. Dropping the struct removes them.
pub struct Fixture {
    pub dir: TempDir,
    pub text_module: PathBuf,
    pub registry: PathBuf,
}

/// Genesis 1:1 in the Synodal translation; the canonical smoke-test verse.
pub const GEN_1_1: &str = "В начале сотворил Бог небо и землю.";

/// Build a small text module and registry.
///
/// The text module has Genesis (book 10; chapter 1 with its full 31 verses,
/// chapter 2 with one) and Matthew (book 40, chapter 1). The registry has
/// three entries: RST+ (ru, origin recorded), KJV (en/US), and UNTAGGED with
/// no language, origin, or region.
pub fn fixture() -> Fixture {
    let dir = TempDir::new().expect("create temp dir");
    let text_module = dir.path().join("RST+.SQLite3");
    let registry = dir.path().join("Registry.SQLite3");

    let conn = Connection::open(&text_module).expect("create text module");
    conn.execute_batch(&format!(
        "CREATE TABLE books (book_number INTEGER, short_name TEXT, long_name TEXT);
         CREATE TABLE verses (book_number INTEGER, chapter INTEGER, verse INTEGER, text TEXT);
         INSERT INTO books VALUES (10, 'Быт', 'Бытие');
         INSERT INTO books VALUES (40, 'Мат', 'От Матфея');
         INSERT INTO verses VALUES (10, 1, 1, '{}');
         INSERT INTO verses VALUES (10, 2, 1, 'Так совершены небо и земля.');
         INSERT INTO verses VALUES (40, 1, 1, 'Родословие Иисуса Христа.');",
        GEN_1_1
    ))
    .expect("seed text module");
    for verse in 2..=31 {
        conn.execute(
            "INSERT INTO verses VALUES (10, 1, ?1, ?2)",
            rusqlite::params![verse, format!("Бытие 1:{}", verse)],
        )
        .expect("seed verse");
    }
    drop(conn);

    let conn = Connection::open(&registry).expect("create registry");
    conn.execute_batch(
        "CREATE TABLE modules (filename TEXT, description TEXT, detailed_info TEXT, language TEXT, region TEXT);
         INSERT INTO modules VALUES ('RST+', 'Russian Synodal Translation', 'Synodal text, public domain', 'ru', NULL);
         INSERT INTO modules VALUES ('KJV', 'King James Version', NULL, 'en', 'US');
         INSERT INTO modules VALUES ('UNTAGGED', 'No metadata', NULL, NULL, NULL);",
    )
    .expect("seed registry");
    drop(conn);

    Fixture {
        dir,
        text_module,
        registry,
    }
}
