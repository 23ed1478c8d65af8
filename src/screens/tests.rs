use super::*;
use crate::library::Song;
use crate::navigation::{Route, SONG_EXTRA};
use std::time::{Duration, Instant};

fn s(title: &str) -> Song {
    Song::new(title, ["X", "Y"], "u")
}

fn playlist(n: usize) -> PlaylistScreen {
    PlaylistScreen::new((0..n).map(|i| s(&format!("Song {i}"))).collect())
}

#[test]
fn cursor_wraps_both_ways() {
    let mut p = playlist(3);
    assert_eq!(p.selected(), 0);
    p.prev();
    assert_eq!(p.selected(), 2);
    p.next();
    assert_eq!(p.selected(), 0);
    p.last();
    assert_eq!(p.selected(), 2);
    p.first();
    assert_eq!(p.selected(), 0);
    p.select(9);
    assert_eq!(p.selected(), 0);
    p.select(1);
    assert_eq!(p.selected(), 1);
}

#[test]
fn empty_playlist_cursor_is_inert() {
    let mut p = playlist(0);
    p.next();
    p.prev();
    p.last();
    assert_eq!(p.selected(), 0);
    assert!(p.is_empty());
    assert_eq!(p.window(5), 0..0);
    assert!(p.open_intent(0).unwrap().is_none());
    assert!(p.share_content(0).is_none());
}

#[test]
fn window_keeps_cursor_centered_when_overflowing() {
    let mut p = playlist(12);
    assert_eq!(p.window(20), 0..12);
    assert_eq!(p.window(4), 0..4);

    p.select(6);
    assert_eq!(p.window(4), 4..8);

    p.select(11);
    assert_eq!(p.window(4), 8..12);
    assert_eq!(p.window(0), 0..0);
}

#[test]
fn open_intent_carries_a_copy_of_the_row() {
    let p = PlaylistScreen::new(vec![Song::new("A", ["X", "Y"], "u")]);
    let intent = p.open_intent(0).unwrap().unwrap();
    assert_eq!(intent.route(), Route::Song);
    let song: Song = intent.extra(SONG_EXTRA).unwrap();
    assert_eq!(&song, p.song(0).unwrap());
}

#[test]
fn share_content_uses_title_and_authors_line() {
    let p = PlaylistScreen::new(vec![Song::new("A", ["X", "Y"], "u")]);
    let content = p.share_content(0).unwrap();
    assert_eq!(content.subject, "A");
    assert_eq!(content.body, "Authors: X, Y");
}

#[test]
fn song_screen_starts_paused_and_toggles_glyph() {
    let mut screen = SongScreen::new(Song::new("A", ["X", "Y"], "u"), Duration::from_millis(8_000));
    let t0 = Instant::now();
    assert_eq!(screen.authors(), "X, Y");
    assert!(!screen.is_playing());
    assert_eq!(screen.toggle_glyph(), "▶");
    assert_eq!(screen.angle_at(t0), 0.0);

    assert_eq!(screen.toggle(t0), 0.0);
    assert_eq!(screen.toggle_glyph(), "❚❚");
    let frozen = screen.toggle(t0 + Duration::from_millis(1_000));
    assert_eq!(frozen, 45.0);
    assert_eq!(screen.toggle_glyph(), "▶");
}
