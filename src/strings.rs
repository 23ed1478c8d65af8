//! Localized string resources, looked up by key.

use std::env;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    /// Parse a locale tag such as `vi`, `vi-VN` or `vi_VN.UTF-8`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" | "c" | "posix" => Some(Self::En),
            "vi" => Some(Self::Vi),
            _ => None,
        }
    }

    /// Resolve from the configured tag, then `LC_ALL`, `LC_MESSAGES` and
    /// `LANG`, falling back to English.
    pub fn detect(configured: Option<&str>) -> Self {
        if let Some(locale) = configured.and_then(Self::from_tag) {
            return locale;
        }
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .filter(|v| !v.is_empty())
            .find_map(|v| Self::from_tag(&v))
            .unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StringKey {
    Playlist,
    NoteTheSong,
    EmptyPlaylist,
    PlaylistHints,
    SongHints,
    ChooserHints,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Strings {
    locale: Locale,
}

impl Strings {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[cfg(test)]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: StringKey) -> &'static str {
        match self.locale {
            Locale::En => en(key),
            Locale::Vi => vi(key),
        }
    }
}

fn en(key: StringKey) -> &'static str {
    match key {
        StringKey::Playlist => "Playlist",
        StringKey::NoteTheSong => "Note the song",
        StringKey::EmptyPlaylist => "No songs",
        StringKey::PlaylistHints => "[j/k] move | [enter] open | [n] note | [q] quit",
        StringKey::SongHints => "[space/p] play/pause | [esc/h] back | [q] quit",
        StringKey::ChooserHints => "[j/k] choose | [enter] send | [esc] cancel",
    }
}

fn vi(key: StringKey) -> &'static str {
    match key {
        StringKey::Playlist => "Danh sách phát",
        StringKey::NoteTheSong => "Ghi chú bài hát",
        StringKey::EmptyPlaylist => "Không có bài hát",
        StringKey::PlaylistHints => "[j/k] di chuyển | [enter] mở | [n] ghi chú | [q] thoát",
        StringKey::SongHints => "[space/p] phát/dừng | [esc/h] quay lại | [q] thoát",
        StringKey::ChooserHints => "[j/k] chọn | [enter] gửi | [esc] hủy",
    }
}
