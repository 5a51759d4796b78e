//! history-fzf RPC Server: JSON over stdin/stdout for launcher integration.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"history.search", "params":{"domain":"github.com","query":"rust"}}
//! Response: {"id":1, "result":{"items":[...]}} or {"id":1, "error":"..."}
//!
//! Usage: `history-fzf-rpc [settings.json]`. Logs go to stderr (`RUST_LOG`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use history_fzf::app::App;
use history_fzf::logging;
use history_fzf::rpc_handler::handle_method;
use history_fzf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

use serde_json::{json, Value};

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> ExitCode {
    logging::init();

    let mut engine = SettingsEngine::new(std::env::args().nth(1));
    let settings = match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(path = engine.get_config_path(), error = %e, "Failed to load settings");
            return ExitCode::FAILURE;
        }
    };

    let app = match App::new(settings) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize history-fzf");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    if write_line(&mut out, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => {
                        tracing::warn!(method, error = %err, "RPC method failed");
                        json!({"id": id, "error": err})
                    }
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if write_line(&mut out, &response).is_err() {
            break;
        }
    }

    ExitCode::SUCCESS
}
