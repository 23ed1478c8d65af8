use std::time::{Duration, Instant};

use crate::animation::Spin;
use crate::library::{Song, joined_authors};

/// Inputs the song screen reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SongAction {
    Back,
    Toggle,
}

/// The detail screen for one song.
///
/// Built fresh on every entry, so a re-opened song always starts paused at
/// angle 0.
#[derive(Debug, Clone)]
pub struct SongScreen {
    song: Song,
    authors: String,
    spin: Spin,
}

impl SongScreen {
    pub fn new(song: Song, spin_period: Duration) -> Self {
        let authors = joined_authors(&song);
        Self {
            song,
            authors,
            spin: Spin::new(spin_period),
        }
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn is_playing(&self) -> bool {
        self.spin.is_playing()
    }

    pub fn angle_at(&self, now: Instant) -> f64 {
        self.spin.angle_at(now)
    }

    /// Flip play/pause at `now`. Returns the angle after the flip.
    pub fn toggle(&mut self, now: Instant) -> f64 {
        let angle = self.spin.toggle(now);
        tracing::debug!(
            title = %self.song.title,
            playing = self.spin.is_playing(),
            angle,
            "toggled playback"
        );
        angle
    }

    /// Glyph for the toggle button: play while paused, pause while playing.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.spin.is_playing() { "❚❚" } else { "▶" }
    }
}
