//! Per-OS locations for the settings file and the row cache.
//!
//! - **Linux**: `$XDG_CONFIG_HOME/history-fzf`, `$XDG_CACHE_HOME/history-fzf`
//!   (falling back to `~/.config` and `~/.cache`)
//! - **macOS**: `~/Library/Application Support/history-fzf`, `~/Library/Caches/history-fzf`
//! - **Windows**: `%APPDATA%\history-fzf`, `%LOCALAPPDATA%\history-fzf\cache`

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "history-fzf";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    } else if cfg!(target_os = "windows") {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    } else {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
            _ => home_dir().join(".config").join(APP_DIR),
        }
    }
}

/// Returns the directory the file-backed row cache writes into.
pub fn get_cache_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir().join("Library").join("Caches").join(APP_DIR)
    } else if cfg!(target_os = "windows") {
        let local_appdata = env::var("LOCALAPPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
        PathBuf::from(local_appdata).join(APP_DIR).join("cache")
    } else {
        match env::var("XDG_CACHE_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
            _ => home_dir().join(".cache").join(APP_DIR),
        }
    }
}
