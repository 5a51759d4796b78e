use std::fmt;

// === HistoryQueryError ===

/// Errors surfaced by history lookups and matcher construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryQueryError {
    /// The history database could not be opened or queried.
    StoreUnavailable(String),
    /// A caller-supplied argument was out of range. No query was attempted.
    InvalidArgument(String),
}

impl fmt::Display for HistoryQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryQueryError::StoreUnavailable(msg) => {
                write!(f, "History store unavailable: {}", msg)
            }
            HistoryQueryError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for HistoryQueryError {}

impl From<rusqlite::Error> for HistoryQueryError {
    fn from(err: rusqlite::Error) -> Self {
        HistoryQueryError::StoreUnavailable(err.to_string())
    }
}

// === CacheError ===

/// Errors related to row cache storage.
#[derive(Debug)]
pub enum CacheError {
    /// Reading or writing a cache file failed.
    Io(String),
    /// A cache entry could not be encoded or decoded.
    Serialization(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Io(msg) => write!(f, "Cache I/O error: {}", msg),
            CacheError::Serialization(msg) => write!(f, "Cache serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CacheError {}

// === SettingsError ===

/// Errors related to settings operations.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}
