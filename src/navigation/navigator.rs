use std::time::Duration;

use crate::library::Song;
use crate::screens::{PlaylistScreen, Screen, SongScreen};

use super::intent::{Intent, NavError, Route, SONG_EXTRA};

/// Screen stack rooted at the playlist screen.
#[derive(Debug)]
pub struct Navigator {
    root: PlaylistScreen,
    stack: Vec<SongScreen>,
    spin_period: Duration,
}

impl Navigator {
    pub fn new(root: PlaylistScreen, spin_period: Duration) -> Self {
        Self {
            root,
            stack: Vec::new(),
            spin_period,
        }
    }

    /// Number of screens, root included.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn playlist(&self) -> &PlaylistScreen {
        &self.root
    }

    pub fn playlist_mut(&mut self) -> &mut PlaylistScreen {
        &mut self.root
    }

    pub fn current(&self) -> Screen<'_> {
        match self.stack.last() {
            Some(song) => Screen::Song(song),
            None => Screen::Playlist(&self.root),
        }
    }

    /// The song screen on top of the stack, if that is what is showing.
    pub fn song_screen(&self) -> Option<&SongScreen> {
        self.stack.last()
    }

    pub fn song_screen_mut(&mut self) -> Option<&mut SongScreen> {
        self.stack.last_mut()
    }

    /// Push the screen `intent` targets. The payload is decoded into a
    /// value owned by the new screen.
    pub fn open(&mut self, intent: &Intent) -> Result<(), NavError> {
        match intent.route() {
            Route::Song => {
                let song: Song = intent.extra(SONG_EXTRA)?;
                tracing::info!(title = %song.title, "opening song screen");
                self.stack.push(SongScreen::new(song, self.spin_period));
                Ok(())
            }
        }
    }

    /// Drop the top screen. Returns false when already at the root.
    pub fn close(&mut self) -> bool {
        match self.stack.pop() {
            Some(_) => {
                tracing::debug!(depth = self.depth(), "closed screen");
                true
            }
            None => false,
        }
    }
}
