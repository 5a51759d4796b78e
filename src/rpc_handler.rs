//! RPC method handler for the history-fzf JSON protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches one request to the [`App`] and returns the JSON
//! result, or an error string for the response's `error` field.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;

/// Reads an optional positive-or-zero integer parameter, falling back to `default`.
fn limit_param(params: &Value, name: &str, default: usize) -> Result<usize, String> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| format!("invalid {}: expected a non-negative integer", name)),
    }
}

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    tracing::debug!(method, "Dispatching RPC method");
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── History ───
        "history.search" => {
            let domain = params.get("domain").and_then(|v| v.as_str()).ok_or("missing domain")?;
            let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let history_limit = limit_param(params, "history_limit", a.settings.history_limit)?;
            let result_limit = limit_param(params, "result_limit", a.settings.result_limit)?;
            let hits = a
                .search(domain, query, history_limit, result_limit)
                .map_err(|e| e.to_string())?;
            let items: Vec<Value> = hits
                .iter()
                .map(|h| {
                    json!({
                        "title": h.title,
                        "subtitle": h.url,
                        "arg": h.url,
                        "visit_time": h.visit_time,
                        "score": h.score,
                    })
                })
                .collect();
            Ok(json!({"items": items}))
        }
        "history.rows" => {
            let domain = params.get("domain").and_then(|v| v.as_str()).ok_or("missing domain")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let history_limit = limit_param(params, "history_limit", a.settings.history_limit)?;
            let rows = a.rows(domain, history_limit).map_err(|e| e.to_string())?;
            serde_json::to_value(rows).map_err(|e| e.to_string())
        }

        // ─── Cache ───
        "cache.clear" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            a.cache.clear().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(&a.settings).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
