//! Connection management for the history store.
//!
//! Provides the [`HistoryStore`] struct that owns a `rusqlite::Connection`
//! opened read-only, with the crate's SQL helper functions registered.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use super::{functions, schema};

/// Owned handle on the browser history database.
///
/// One store is opened per process (or per request context) and passed by
/// reference to whatever needs to query it. The file is never written.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Opens an existing history database read-only.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the file does not exist or cannot be opened.
    /// A file that exists but is not a SQLite database only fails once queried.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store containing an empty `urls` table.
    ///
    /// Useful for testing: rows can be inserted through [`HistoryStore::connection`].
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        schema::create_urls_table(&conn)?;
        Self::from_connection(conn)
    }

    /// Wraps an already-open connection, registering the SQL helper functions.
    pub fn from_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        functions::register(&conn)?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
