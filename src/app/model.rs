//! Application model: `App`.
//!
//! `App` routes screen actions to the navigator and the share targets. It
//! never reads the clock itself; every time-dependent call takes the frame
//! instant from the runtime.

use std::time::{Duration, Instant};

use crate::artwork::ArtworkLoader;
use crate::library::Song;
use crate::navigation::{NavError, Navigator};
use crate::screens::{PlaylistAction, PlaylistScreen, Screen, SongAction};
use crate::share::{ShareChooser, ShareTarget};
use crate::strings::{StringKey, Strings};

/// The main application model.
pub struct App {
    navigator: Navigator,
    strings: Strings,
    artwork: Box<dyn ArtworkLoader>,
    share_targets: Vec<Box<dyn ShareTarget>>,
    chooser: Option<ShareChooser>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create a new `App` showing `songs` on the playlist screen.
    pub fn new(
        songs: Vec<Song>,
        strings: Strings,
        spin_period: Duration,
        artwork: Box<dyn ArtworkLoader>,
        share_targets: Vec<Box<dyn ShareTarget>>,
    ) -> Self {
        Self {
            navigator: Navigator::new(PlaylistScreen::new(songs), spin_period),
            strings,
            artwork,
            share_targets,
            chooser: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn playlist_mut(&mut self) -> &mut PlaylistScreen {
        self.navigator.playlist_mut()
    }

    pub fn text(&self, key: StringKey) -> &'static str {
        self.strings.get(key)
    }

    pub fn artwork(&self) -> &dyn ArtworkLoader {
        self.artwork.as_ref()
    }

    pub fn chooser(&self) -> Option<&ShareChooser> {
        self.chooser.as_ref()
    }

    /// Labels of the share targets, in chooser order.
    pub fn share_labels(&self) -> Vec<String> {
        self.share_targets.iter().map(|t| t.label()).collect()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a tap on the playlist screen.
    pub fn apply_playlist_action(&mut self, action: PlaylistAction) -> Result<(), NavError> {
        match action {
            PlaylistAction::Open(index) => self.open_song(index),
            PlaylistAction::Share(index) => {
                self.share_song(index);
                Ok(())
            }
        }
    }

    /// Apply an input on the song screen at frame instant `now`.
    pub fn apply_song_action(&mut self, action: SongAction, now: Instant) {
        match action {
            SongAction::Back => self.back(),
            SongAction::Toggle => {
                if let Some(screen) = self.navigator.song_screen_mut() {
                    screen.toggle(now);
                }
            }
        }
    }

    /// Navigate to the song screen for playlist row `index`.
    pub fn open_song(&mut self, index: usize) -> Result<(), NavError> {
        let intent = self.navigator.playlist().open_intent(index)?;
        if let Some(intent) = intent {
            self.navigator.playlist_mut().select(index);
            self.navigator.open(&intent)?;
        }
        Ok(())
    }

    /// Leave the current screen; leaving the playlist quits.
    pub fn back(&mut self) {
        if !self.navigator.close() {
            self.quit();
        }
    }

    /// Open the share chooser for playlist row `index`.
    pub fn share_song(&mut self, index: usize) {
        let Some(content) = self.navigator.playlist().share_content(index) else {
            return;
        };
        self.navigator.playlist_mut().select(index);
        self.chooser = ShareChooser::new(content, self.share_targets.len());
        if self.chooser.is_none() {
            tracing::warn!("no share targets configured");
            self.status = Some("No share targets available".to_string());
        }
    }

    pub fn chooser_next(&mut self) {
        if let Some(chooser) = self.chooser.as_mut() {
            chooser.next();
        }
    }

    pub fn chooser_prev(&mut self) {
        if let Some(chooser) = self.chooser.as_mut() {
            chooser.prev();
        }
    }

    pub fn dismiss_chooser(&mut self) {
        self.chooser = None;
    }

    /// Hand the pending note to the selected target and close the chooser.
    pub fn confirm_share(&mut self) {
        let Some(chooser) = self.chooser.take() else {
            return;
        };
        let Some(target) = self.share_targets.get(chooser.selected()) else {
            return;
        };
        self.status = Some(match target.share(chooser.content()) {
            Ok(()) => format!("Noted \"{}\"", chooser.content().subject),
            Err(e) => {
                tracing::error!(error = %e, "share failed");
                format!("Share failed: {e}")
            }
        });
    }
}
