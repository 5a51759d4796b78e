//! Hostname extraction and timestamp conversion, exposed to SQL.
//!
//! `url_host(url)` is registered on every store connection so that host
//! filtering happens inside the query and the filter text is only ever a
//! bound parameter.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Seconds between 1601-01-01 and 1970-01-01.
const WINDOWS_TO_UNIX_EPOCH_SECS: i64 = 11_644_473_600;

/// Returns the hostname portion of `url`: the text between the first `//`
/// and the next `/`, or to the end of the URL when no `/` follows.
///
/// Returns `None` for URLs without a `//` (e.g. `about:blank`); such rows are
/// skipped rather than failing the query.
pub fn extract_hostname(url: &str) -> Option<&str> {
    let start = url.find("//")? + 2;
    let rest = &url[start..];
    Some(match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Converts a browser visit timestamp (µs since 1601-01-01) to Unix milliseconds.
///
/// Truncates to whole seconds first, matching the browser's own export format.
pub fn chrome_time_to_unix_ms(last_visit_time: i64) -> i64 {
    (last_visit_time / 1_000_000 - WINDOWS_TO_UNIX_EPOCH_SECS) * 1000
}

/// Inverse of [`chrome_time_to_unix_ms`], at second precision.
pub fn unix_ms_to_chrome_time(unix_ms: i64) -> i64 {
    (unix_ms / 1000 + WINDOWS_TO_UNIX_EPOCH_SECS) * 1_000_000
}

/// Registers `url_host(url)` on `conn`. Returns NULL for NULL or malformed URLs.
pub fn register(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.create_scalar_function(
        "url_host",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let url: Option<String> = ctx.get(0)?;
            let host = url.as_deref().and_then(|u| {
                let host = extract_hostname(u);
                if host.is_none() {
                    tracing::trace!(url = u, "Skipping history row without a hostname");
                }
                host
            });
            Ok(host.map(str::to_owned))
        },
    )
}
