//! Read-only access to a Chromium-format browser history database.
//!
//! # Usage
//!
//! ```no_run
//! use history_fzf::database::HistoryStore;
//!
//! // Open the copy the launcher placed on disk
//! let store = HistoryStore::open("/tmp/chrome-history.db").expect("failed to open history");
//!
//! // Or an empty in-memory store with the `urls` table, for tests
//! let store = HistoryStore::open_in_memory().expect("failed to open in-memory store");
//! ```

pub mod connection;
pub mod functions;
pub mod schema;

pub use connection::HistoryStore;
