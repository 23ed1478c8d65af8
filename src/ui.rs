//! UI rendering helpers for the terminal user interface.
//!
//! Each screen has a `layout` function that both drawing and mouse
//! hit-testing use, so a click always lands on what was drawn there.

mod playlist;
mod song;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::screens::{PlaylistAction, Screen, SongAction};
use crate::strings::StringKey;

/// Which control a click landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    Playlist(PlaylistAction),
    Song(SongAction),
}

/// Render the current screen, plus the share chooser when it is open.
/// `now` is the frame instant the record angle is sampled at.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    match app.screen() {
        Screen::Playlist(screen) => playlist::draw(frame, area, app, screen),
        Screen::Song(screen) => song::draw(frame, area, app, screen, now),
    }

    if app.chooser().is_some() {
        draw_chooser(frame, area, app);
    }
}

/// Resolve a click at (`column`, `row`) on a terminal of size `area`.
pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<Hit> {
    if app.chooser().is_some() {
        return None;
    }
    match app.screen() {
        Screen::Playlist(screen) => {
            playlist::hit_test(screen, area, column, row).map(Hit::Playlist)
        }
        Screen::Song(_) => song::hit_test(area, column, row).map(Hit::Song),
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    r.width > 0
        && r.height > 0
        && column >= r.x
        && column < r.x + r.width
        && row >= r.y
        && row < r.y + r.height
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    height = height.min(r.height.saturating_sub(2)).max(5).min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Bottom box: the status message when there is one, key hints otherwise.
fn draw_footer(frame: &mut Frame, area: Rect, app: &App, hints: StringKey) {
    let text = app.status().unwrap_or_else(|| app.text(hints));
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn draw_chooser(frame: &mut Frame, area: Rect, app: &App) {
    let Some(chooser) = app.chooser() else {
        return;
    };
    let labels = app.share_labels();
    let height = labels.len() as u16 + 7;
    let popup = centered_rect_sized(64, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.text(StringKey::NoteTheSong)))
        .title_bottom(format!(" {} ", app.text(StringKey::ChooserHints)))
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        });
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let content = chooser.content();
    let preview = Paragraph::new(vec![
        Line::styled(
            content.subject.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(content.body.clone()),
    ])
    .wrap(Wrap { trim: true });
    let preview_area = Rect {
        height: inner.height.min(3),
        ..inner
    };
    frame.render_widget(preview, preview_area);

    let list_area = Rect {
        y: inner.y + preview_area.height,
        height: inner.height.saturating_sub(preview_area.height),
        ..inner
    };
    let items: Vec<ListItem> = labels.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(chooser.selected()));
    frame.render_stateful_widget(list, list_area, &mut state);
}
