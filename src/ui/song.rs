use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Context, Line as Stroke},
    },
};

use crate::app::App;
use crate::screens::{SongAction, SongScreen};
use crate::strings::StringKey;

use super::{contains, draw_footer};

const BACK_GLYPH: &str = "‹";
const BACK_WIDTH: u16 = 2;
const TOGGLE_WIDTH: u16 = 8;
const SPOKES: usize = 3;

pub(super) struct SongLayout {
    pub top_bar: Rect,
    pub back: Rect,
    pub heading: Rect,
    pub disc: Rect,
    pub caption: Rect,
    pub bottom_bar: Rect,
    pub toggle: Rect,
    pub footer: Rect,
}

pub(super) fn layout(area: Rect) -> SongLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    let (top_bar, body, bottom_bar, footer) = (chunks[0], chunks[1], chunks[2], chunks[3]);

    let top_inner = Block::default().borders(Borders::ALL).inner(top_bar);
    let back = Rect {
        width: BACK_WIDTH.min(top_inner.width),
        ..top_inner
    };
    let heading = Rect {
        x: top_inner.x + back.width,
        width: top_inner.width - back.width,
        ..top_inner
    };

    // Spare line above the disc, the angle caption below it, and the last
    // line left free for the toggle notch.
    let disc_height = body.height.saturating_sub(3);
    let disc_width = (disc_height * 2).min(body.width);
    let disc = Rect {
        x: body.x + (body.width - disc_width) / 2,
        y: body.y + 1.min(body.height),
        width: disc_width,
        height: disc_height,
    };
    let caption = Rect {
        x: body.x,
        y: (disc.y + disc.height).min(body.y + body.height.saturating_sub(1)),
        width: body.width,
        height: 1.min(body.height),
    };

    // The toggle sits in a notch cut into the bottom bar's top edge.
    let toggle_width = TOGGLE_WIDTH.min(bottom_bar.width);
    let toggle = Rect {
        x: bottom_bar.x + (bottom_bar.width - toggle_width) / 2,
        y: bottom_bar.y.saturating_sub(1).max(area.y),
        width: toggle_width,
        height: 3.min(bottom_bar.height + 1),
    };

    SongLayout {
        top_bar,
        back,
        heading,
        disc,
        caption,
        bottom_bar,
        toggle,
        footer,
    }
}

pub(super) fn hit_test(area: Rect, column: u16, row: u16) -> Option<SongAction> {
    let lay = layout(area);
    if contains(lay.toggle, column, row) {
        Some(SongAction::Toggle)
    } else if contains(lay.back, column, row) {
        Some(SongAction::Back)
    } else {
        None
    }
}

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, screen: &SongScreen, now: Instant) {
    let lay = layout(area);
    let angle = screen.angle_at(now);

    frame.render_widget(Block::default().borders(Borders::ALL), lay.top_bar);
    frame.render_widget(
        Paragraph::new(BACK_GLYPH).style(Style::default().add_modifier(Modifier::BOLD)),
        lay.back,
    );
    let heading = Paragraph::new(vec![
        Line::styled(
            screen.song().title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(screen.authors().to_string(), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(heading, lay.heading);

    let accent = app
        .artwork()
        .load(&screen.song().avatar_url)
        .map_or(Color::Gray, |art| art.accent);
    let record = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| paint_record(ctx, angle, accent));
    frame.render_widget(record, lay.disc);

    let caption = Paragraph::new(format!("{:.0}°", angle))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(caption, lay.caption);

    frame.render_widget(Block::default().borders(Borders::ALL), lay.bottom_bar);
    frame.render_widget(Clear, lay.toggle);
    let toggle = Paragraph::new(screen.toggle_glyph())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, lay.toggle);

    draw_footer(frame, lay.footer, app, StringKey::SongHints);
}

/// The record, turned clockwise by `angle` degrees. Spokes make the
/// rotation visible; without artwork the record is drawn in plain gray.
fn paint_record(ctx: &mut Context<'_>, angle: f64, accent: Color) {
    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: 0.98,
        color: accent,
    });
    for radius in [0.55, 0.75] {
        ctx.draw(&Circle {
            x: 0.0,
            y: 0.0,
            radius,
            color: Color::DarkGray,
        });
    }
    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: 0.3,
        color: accent,
    });
    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: 0.04,
        color: Color::White,
    });
    for k in 0..SPOKES {
        let theta = (angle + k as f64 * 360.0 / SPOKES as f64).to_radians();
        let (sin, cos) = theta.sin_cos();
        ctx.draw(&Stroke {
            x1: 0.32 * sin,
            y1: 0.32 * cos,
            x2: 0.95 * sin,
            y2: 0.95 * cos,
            color: accent,
        });
    }
}
