use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;

use crate::config::LogSettings;

/// `$XDG_STATE_HOME/vinyl/vinyl.log`, or `~/.local/state/vinyl/vinyl.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("vinyl").join("vinyl.log"))
}

/// Send `tracing` output to the log file; the terminal belongs to the UI.
///
/// Returns the file in use, or `None` when logging is off or the file
/// could not be opened.
pub fn init(settings: &LogSettings, level: LevelFilter) -> Option<PathBuf> {
    if level == LevelFilter::OFF {
        return None;
    }
    let path = settings.path.clone().or_else(default_log_path)?;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("vinyl: cannot create log directory {}: {e}", parent.display());
            return None;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("vinyl: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if installed.is_err() {
        return None;
    }
    Some(path)
}
