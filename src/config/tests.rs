use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_vinyl_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("VINYL_CONFIG_PATH", "/tmp/vinyl-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/vinyl-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("vinyl")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("vinyl")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_documented_values() {
    let s = Settings::default();
    assert_eq!(s.spin_period(), Duration::from_millis(8000));
    assert_eq!(s.frame_interval(), Duration::from_millis(33));
    assert!(s.ui.mouse);
    assert!(s.ui.locale.is_none());
    assert!(s.library.playlist_path.is_none());
    assert!(s.share.command.is_empty());
    assert_eq!(s.log.level, "info");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
locale = "vi"
frame_ms = 16
mouse = false

[animation]
period_ms = 4000

[library]
playlist_path = "/tmp/playlist.toml"

[share]
notes_path = "/tmp/notes.md"
command = ["wl-copy", "--type", "text/plain"]

[log]
level = "debug"
path = "/tmp/vinyl.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VINYL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("VINYL__ANIMATION__PERIOD_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.locale.as_deref(), Some("vi"));
    assert_eq!(s.frame_interval(), Duration::from_millis(16));
    assert!(!s.ui.mouse);
    assert_eq!(s.spin_period(), Duration::from_millis(4000));
    assert_eq!(
        s.library.playlist_path,
        Some(std::path::PathBuf::from("/tmp/playlist.toml"))
    );
    assert_eq!(
        s.share.notes_path,
        Some(std::path::PathBuf::from("/tmp/notes.md"))
    );
    assert_eq!(s.share.command, vec!["wl-copy", "--type", "text/plain"]);
    assert_eq!(s.log.level, "debug");
    assert_eq!(s.log.path, Some(std::path::PathBuf::from("/tmp/vinyl.log")));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[animation]
period_ms = 4000
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VINYL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("VINYL__ANIMATION__PERIOD_MS", "2000");

    let s = Settings::load().unwrap();
    assert_eq!(s.animation.period_ms, 2000);
}

#[test]
fn missing_config_file_uses_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "VINYL_CONFIG_PATH",
        dir.path().join("absent.toml").to_str().unwrap(),
    );
    let _g2 = EnvGuard::remove("VINYL__ANIMATION__PERIOD_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.animation.period_ms, 8000);
    assert_eq!(s.ui.frame_ms, 33);
}

#[test]
fn validate_rejects_zero_intervals_and_bad_levels() {
    let mut s = Settings::default();
    s.ui.frame_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.animation.period_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.log.level = "chatty".to_string();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.log.level = " WARN ".to_string();
    assert!(s.validate().is_ok());
}
