//! Screen state: the playlist (list) screen and the song (detail) screen.
//!
//! Screens hold state and answer "what happens on this input"; drawing and
//! hit geometry live in `ui`.

mod playlist;
mod song;

pub use playlist::{PlaylistAction, PlaylistScreen};
pub use song::{SongAction, SongScreen};

/// The screen currently on top of the navigator.
#[derive(Copy, Clone, Debug)]
pub enum Screen<'a> {
    Playlist(&'a PlaylistScreen),
    Song(&'a SongScreen),
}

#[cfg(test)]
mod tests;
