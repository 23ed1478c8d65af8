use super::model::Song;

const AUTHOR_SEPARATOR: &str = ", ";

/// Authors joined the way every screen shows them: `"X, Y"`.
pub fn joined_authors(song: &Song) -> String {
    song.authors.join(AUTHOR_SEPARATOR)
}

/// Body text used when a song is shared as a note.
pub fn share_body(song: &Song) -> String {
    format!("Authors: {}", joined_authors(song))
}
