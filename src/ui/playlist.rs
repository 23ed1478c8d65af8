use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::library::{Song, joined_authors};
use crate::screens::{PlaylistAction, PlaylistScreen};
use crate::strings::StringKey;

use super::{contains, draw_footer};

/// Lines per song row: title, then authors.
const ROW_HEIGHT: u16 = 2;
const THUMB_WIDTH: u16 = 4;
const NOTE_WIDTH: u16 = 5;
const NOTE_GLYPH: &str = "[✎]";

pub(super) struct PlaylistLayout {
    pub title: Rect,
    pub list: Rect,
    pub rows: Rect,
    pub footer: Rect,
}

struct RowLayout {
    thumb: Rect,
    text: Rect,
    note: Rect,
}

pub(super) fn layout(area: Rect) -> PlaylistLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    let rows = Block::default().borders(Borders::ALL).inner(chunks[1]);
    PlaylistLayout {
        title: chunks[0],
        list: chunks[1],
        rows,
        footer: chunks[2],
    }
}

fn capacity(rows: Rect) -> usize {
    (rows.height / ROW_HEIGHT) as usize
}

fn row_rect(rows: Rect, slot: usize) -> Rect {
    Rect {
        x: rows.x,
        y: rows.y + slot as u16 * ROW_HEIGHT,
        width: rows.width,
        height: ROW_HEIGHT,
    }
}

fn split_row(row: Rect) -> RowLayout {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(THUMB_WIDTH),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(NOTE_WIDTH),
        ])
        .split(row);
    RowLayout {
        thumb: parts[0],
        text: parts[2],
        note: parts[3],
    }
}

/// Map a click to a row action. The note button takes precedence over the
/// row body, so a click on it never opens the song.
pub(super) fn hit_test(
    screen: &PlaylistScreen,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<PlaylistAction> {
    let rows = layout(area).rows;
    if !contains(rows, column, row) {
        return None;
    }

    let window = screen.window(capacity(rows));
    let slot = ((row - rows.y) / ROW_HEIGHT) as usize;
    let index = window.start + slot;
    if index >= window.end {
        return None;
    }

    let parts = split_row(row_rect(rows, slot));
    if contains(parts.note, column, row) {
        Some(PlaylistAction::Share(index))
    } else {
        Some(PlaylistAction::Open(index))
    }
}

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, screen: &PlaylistScreen) {
    let lay = layout(area);

    let title = Paragraph::new(app.text(StringKey::Playlist))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, lay.title);

    frame.render_widget(Block::default().borders(Borders::ALL), lay.list);

    if screen.is_empty() {
        let empty = Paragraph::new(app.text(StringKey::EmptyPlaylist))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, lay.rows);
    } else {
        let window = screen.window(capacity(lay.rows));
        for (slot, index) in window.enumerate() {
            if let Some(song) = screen.song(index) {
                let selected = index == screen.selected();
                draw_row(frame, row_rect(lay.rows, slot), app, song, selected);
            }
        }
    }

    draw_footer(frame, lay.footer, app, StringKey::PlaylistHints);
}

fn draw_row(frame: &mut Frame, rect: Rect, app: &App, song: &Song, selected: bool) {
    let parts = split_row(rect);

    // Missing artwork leaves the thumbnail blank.
    if let Some(art) = app.artwork().load(&song.avatar_url) {
        let block = "█".repeat(parts.thumb.width as usize);
        let thumb = Paragraph::new(vec![Line::from(block.clone()), Line::from(block)])
            .style(Style::default().fg(art.accent));
        frame.render_widget(thumb, parts.thumb);
    }

    let text_style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let text = Paragraph::new(vec![
        Line::styled(
            song.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(joined_authors(song), Style::default().fg(Color::Gray)),
    ])
    .style(text_style);
    frame.render_widget(text, parts.text);

    let note = Paragraph::new(NOTE_GLYPH).alignment(Alignment::Center);
    frame.render_widget(note, parts.note);
}
