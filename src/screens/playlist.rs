use std::ops::Range;

use crate::library::{Song, share_body};
use crate::navigation::{Intent, NavError, Route, SONG_EXTRA};
use crate::share::ShareContent;

/// What a tap on a playlist row resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaylistAction {
    /// Tap on the row body: open the song screen for that row.
    Open(usize),
    /// Tap on the row's note button: share the row as a note.
    Share(usize),
}

/// The list screen: the playlist in repository order plus a cursor.
#[derive(Debug, Clone)]
pub struct PlaylistScreen {
    songs: Vec<Song>,
    selected: usize,
}

impl PlaylistScreen {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs, selected: 0 }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor to `index` when it names a row.
    pub fn select(&mut self, index: usize) {
        if index < self.songs.len() {
            self.selected = index;
        }
    }

    /// Move the cursor down, wrapping to the first row.
    pub fn next(&mut self) {
        if !self.songs.is_empty() {
            self.selected = (self.selected + 1) % self.songs.len();
        }
    }

    /// Move the cursor up, wrapping to the last row.
    pub fn prev(&mut self) {
        if !self.songs.is_empty() {
            self.selected = match self.selected {
                0 => self.songs.len() - 1,
                n => n - 1,
            };
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.songs.len().saturating_sub(1);
    }

    /// Rows visible in a viewport of `capacity` rows, keeping the cursor
    /// centered once the list overflows.
    pub fn window(&self, capacity: usize) -> Range<usize> {
        let total = self.songs.len();
        if capacity == 0 {
            return 0..0;
        }
        if total <= capacity {
            return 0..total;
        }
        let half = capacity / 2;
        let mut start = self.selected.saturating_sub(half);
        if start + capacity > total {
            start = total - capacity;
        }
        start..start + capacity
    }

    /// Intent that opens the song screen with a copy of row `index`.
    pub fn open_intent(&self, index: usize) -> Result<Option<Intent>, NavError> {
        match self.songs.get(index) {
            Some(song) => Intent::new(Route::Song).put_extra(SONG_EXTRA, song).map(Some),
            None => Ok(None),
        }
    }

    /// Note payload for row `index`.
    pub fn share_content(&self, index: usize) -> Option<ShareContent> {
        self.songs
            .get(index)
            .map(|song| ShareContent::note(song.title.clone(), share_body(song)))
    }
}
