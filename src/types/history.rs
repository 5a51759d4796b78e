use serde::{Deserialize, Serialize};

/// A single visited page as read from the browser history store.
///
/// `visit_time` is Unix milliseconds. Records are deduplicated by title, so
/// at most one record per distinct title comes out of a history query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub title: String,
    pub url: String,
    pub visit_time: i64,
}
