use serde::{Deserialize, Serialize};

/// A single playlist entry.
///
/// Songs are plain values: screens receive their own copy and never share
/// or mutate one. Equality is structural, and duplicates are valid rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub authors: Vec<String>,
    pub avatar_url: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        authors: impl IntoIterator<Item = impl Into<String>>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            avatar_url: avatar_url.into(),
        }
    }
}
