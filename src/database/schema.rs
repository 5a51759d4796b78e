//! The subset of the Chromium `urls` table this crate reads.
//!
//! Real history files carry many more columns; only the ones queried here are
//! created for in-memory stores and test fixtures.

use rusqlite::{params, Connection};

/// Creates the `urls` table if it does not already exist.
pub fn create_urls_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS urls (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             url LONGVARCHAR,
             title LONGVARCHAR,
             visit_count INTEGER DEFAULT 0 NOT NULL,
             last_visit_time INTEGER NOT NULL
         );
         CREATE INDEX IF NOT EXISTS urls_url_index ON urls (url);",
    )
}

/// Inserts one visit row. `last_visit_time` is in the browser's own encoding
/// (microseconds since 1601-01-01).
pub fn insert_url(
    conn: &Connection,
    url: &str,
    title: Option<&str>,
    last_visit_time: i64,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO urls (url, title, visit_count, last_visit_time) VALUES (?1, ?2, 1, ?3)",
        params![url, title, last_visit_time],
    )?;
    Ok(())
}
