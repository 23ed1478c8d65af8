use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vinyl/config.toml` or `~/.config/vinyl/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VINYL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub animation: AnimationSettings,
    pub library: LibrarySettings,
    pub share: ShareSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Locale tag for UI strings (`en`, `vi`, `vi_VN.UTF-8`...).
    /// Unset means: read `LC_ALL` / `LC_MESSAGES` / `LANG`.
    pub locale: Option<String>,
    /// Frame interval of the event loop (milliseconds).
    pub frame_ms: u64,
    /// Whether to capture mouse clicks.
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            locale: None,
            frame_ms: 33,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Time for one full turn of the record while playing (milliseconds).
    pub period_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self { period_ms: 8000 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Optional TOML playlist with `[[songs]]` entries.
    /// Unset means the built-in playlist.
    pub playlist_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShareSettings {
    /// Notes file for "share as note".
    /// Unset means `$XDG_DATA_HOME/vinyl/notes.md`.
    pub notes_path: Option<PathBuf>,
    /// Optional external command offered as a second share target,
    /// e.g. `["wl-copy"]`.
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Log file. Unset means `$XDG_STATE_HOME/vinyl/vinyl.log`.
    pub path: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
        }
    }
}
