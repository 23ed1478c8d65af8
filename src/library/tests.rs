use super::repository::{
    LibraryError, SongRepository, StaticSongRepository, TomlSongRepository,
};
use super::*;
use std::fs;
use tempfile::tempdir;

fn song(title: &str, authors: &[&str], url: &str) -> Song {
    Song::new(title, authors.iter().copied(), url)
}

#[test]
fn joined_authors_uses_comma_space() {
    let s = song("A", &["X", "Y"], "u");
    assert_eq!(joined_authors(&s), "X, Y");
    assert_eq!(share_body(&s), "Authors: X, Y");
}

#[test]
fn joined_authors_handles_single_and_empty_lists() {
    assert_eq!(joined_authors(&song("A", &["Changg"], "u")), "Changg");
    assert_eq!(joined_authors(&song("A", &[], "u")), "");
    assert_eq!(share_body(&song("A", &[], "u")), "Authors: ");
}

#[test]
fn static_repository_keeps_sample_order_and_duplicates() {
    let songs = StaticSongRepository::new().list();
    assert_eq!(songs.len(), 12);
    assert_eq!(songs[0].title, "Thằng điên");
    assert_eq!(songs[1].title, "Em không hiểu");
    assert_eq!(songs[2].title, "Liệu giờ");
    assert_eq!(songs[2].authors, vec!["2T".to_string(), "Venn".to_string()]);

    // Duplicates are kept as independent, structurally equal rows.
    assert_eq!(songs[0], songs[3]);
    assert!(songs[3..].iter().all(|s| s == &songs[0]));
}

#[test]
fn static_repository_list_is_stable_across_calls() {
    let repo = StaticSongRepository::with_songs(vec![song("B", &["Y"], "b"), song("A", &["X"], "a")]);
    let first = repo.list();
    let second = repo.list();
    assert_eq!(first, second);
    assert_eq!(first[0].title, "B");
}

#[test]
fn toml_repository_reads_songs_in_file_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.toml");
    fs::write(
        &path,
        r#"
[[songs]]
title = "Zeta"
authors = ["X", "Y"]
avatar_url = "https://example.com/z.jpg"

[[songs]]
title = "Alpha"
authors = []
avatar_url = ""
"#,
    )
    .unwrap();

    let repo = TomlSongRepository::open(&path).unwrap();
    let songs = repo.list();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0], song("Zeta", &["X", "Y"], "https://example.com/z.jpg"));
    assert_eq!(songs[1].title, "Alpha");
    assert!(songs[1].authors.is_empty());
}

#[test]
fn toml_repository_accepts_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    assert!(TomlSongRepository::open(&path).unwrap().list().is_empty());
}

#[test]
fn toml_repository_reports_missing_and_malformed_files() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        TomlSongRepository::open(&missing),
        Err(LibraryError::Read { .. })
    ));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[[songs]]\ntitle = 3\n").unwrap();
    assert!(matches!(
        TomlSongRepository::open(&bad),
        Err(LibraryError::Parse { .. })
    ));
}

#[test]
fn open_repository_falls_back_to_sample_playlist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let repo = open_repository(Some(&missing));
    assert_eq!(repo.list(), StaticSongRepository::new().list());

    let repo = open_repository(None);
    assert_eq!(repo.list().len(), 12);
}
