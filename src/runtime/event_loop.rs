use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::app::App;
use crate::navigation::NavError;
use crate::screens::{PlaylistAction, Screen, SongAction};
use crate::ui::{self, Hit};

/// Main terminal event loop: draws a frame, then waits up to one frame
/// interval for input. Returns `Ok(())` when the app asks to quit.
///
/// Each iteration samples the clock once for drawing. A pause freezes the
/// record at that frame instant, so it stops at the angle last on screen; a
/// resume starts from the instant the input was read.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, app, now))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(frame_interval)? {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let event = event::read()?;
            let at = InputTime {
                frame: now,
                read: Instant::now(),
            };
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, app, at)?;
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, area, at)?,
                _ => {}
            }
        }
    }
}

/// When an input was handled: the frame it arrived during, and the moment
/// it was read.
#[derive(Copy, Clone, Debug)]
struct InputTime {
    frame: Instant,
    read: Instant,
}

impl InputTime {
    fn for_song_action(self, app: &App, action: SongAction) -> Instant {
        let playing = app
            .navigator()
            .song_screen()
            .is_some_and(|screen| screen.is_playing());
        match action {
            SongAction::Toggle if !playing => self.read,
            _ => self.frame,
        }
    }
}

fn apply_song_action(app: &mut App, action: SongAction, at: InputTime) {
    let now = at.for_song_action(app, action);
    app.apply_song_action(action, now);
}

fn handle_key_event(key: KeyEvent, app: &mut App, at: InputTime) -> Result<(), NavError> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.chooser().is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.dismiss_chooser(),
            KeyCode::Char('j') | KeyCode::Down => app.chooser_next(),
            KeyCode::Char('k') | KeyCode::Up => app.chooser_prev(),
            KeyCode::Enter => app.confirm_share(),
            _ => {}
        }
        return Ok(());
    }

    // Any other key replaces a stale status line with the hints again.
    app.clear_status();

    match app.screen() {
        Screen::Playlist(screen) => {
            let selected = screen.selected();
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                KeyCode::Char('j') | KeyCode::Down => app.playlist_mut().next(),
                KeyCode::Char('k') | KeyCode::Up => app.playlist_mut().prev(),
                KeyCode::Char('g') | KeyCode::Home => app.playlist_mut().first(),
                KeyCode::Char('G') | KeyCode::End => app.playlist_mut().last(),
                KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                    app.apply_playlist_action(PlaylistAction::Open(selected))?;
                }
                KeyCode::Char('n') => {
                    app.apply_playlist_action(PlaylistAction::Share(selected))?;
                }
                _ => {}
            }
        }
        Screen::Song(_) => match key.code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                apply_song_action(app, SongAction::Back, at);
            }
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Enter => {
                apply_song_action(app, SongAction::Toggle, at);
            }
            _ => {}
        },
    }

    Ok(())
}

fn handle_mouse_event(
    mouse: MouseEvent,
    app: &mut App,
    area: Rect,
    at: InputTime,
) -> Result<(), NavError> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match ui::hit_test(app, area, mouse.column, mouse.row) {
                Some(Hit::Playlist(action)) => {
                    app.clear_status();
                    app.apply_playlist_action(action)?;
                }
                Some(Hit::Song(action)) => apply_song_action(app, action, at),
                None => {}
            }
        }
        MouseEventKind::ScrollDown if app.chooser().is_none() => {
            if let Screen::Playlist(_) = app.screen() {
                app.playlist_mut().next();
            }
        }
        MouseEventKind::ScrollUp if app.chooser().is_none() => {
            if let Screen::Playlist(_) = app.screen() {
                app.playlist_mut().prev();
            }
        }
        _ => {}
    }
    Ok(())
}
