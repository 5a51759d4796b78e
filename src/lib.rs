//! history-fzf: domain-filtered fuzzy search over a local browser history database.
//!
//! This library crate exposes all modules for use by the RPC binary and integration tests.

pub mod app;
pub mod cache;
pub mod database;
pub mod fuzzy;
pub mod logging;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
