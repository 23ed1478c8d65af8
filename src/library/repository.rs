use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::Song;
use super::sample::sample_songs;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read playlist at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse playlist at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read-only source of the songs shown on the list screen.
pub trait SongRepository {
    /// Songs in display order.
    fn list(&self) -> Vec<Song>;
}

/// Repository over the built-in sample playlist.
#[derive(Debug, Clone)]
pub struct StaticSongRepository {
    songs: Vec<Song>,
}

impl StaticSongRepository {
    pub fn new() -> Self {
        Self::with_songs(sample_songs())
    }

    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }
}

impl Default for StaticSongRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SongRepository for StaticSongRepository {
    fn list(&self) -> Vec<Song> {
        self.songs.clone()
    }
}

#[derive(Debug, Default, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    songs: Vec<Song>,
}

/// Repository backed by a TOML playlist file with `[[songs]]` entries.
///
/// The file is read once on `open`; the repository does not watch it.
#[derive(Debug, Clone)]
pub struct TomlSongRepository {
    songs: Vec<Song>,
}

impl TomlSongRepository {
    pub fn open(path: &Path) -> Result<Self, LibraryError> {
        let text = fs::read_to_string(path).map_err(|source| LibraryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let songs = Self::parse(&text).map_err(|source| LibraryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), count = songs.len(), "loaded playlist");
        Ok(Self { songs })
    }

    fn parse(text: &str) -> Result<Vec<Song>, toml::de::Error> {
        let file: PlaylistFile = toml::from_str(text)?;
        Ok(file.songs)
    }
}

impl SongRepository for TomlSongRepository {
    fn list(&self) -> Vec<Song> {
        self.songs.clone()
    }
}

/// Pick the playlist source: a TOML file when one is given and readable,
/// otherwise the built-in sample.
pub fn open_repository(path: Option<&Path>) -> Box<dyn SongRepository> {
    match path {
        Some(p) => match TomlSongRepository::open(p) {
            Ok(repo) => Box::new(repo),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to the built-in playlist");
                eprintln!("vinyl: {e}; using the built-in playlist");
                Box::new(StaticSongRepository::new())
            }
        },
        None => Box::new(StaticSongRepository::new()),
    }
}
