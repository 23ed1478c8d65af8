//! Artwork lookup for thumbnails and the record label.
//!
//! Fetching and decoding real cover images is left to whatever implements
//! `ArtworkLoader`. The built-in loader gives every URL a stable accent
//! colour so rows and the record are distinguishable without any I/O.

use ratatui::style::Color;

/// Something displayable for a cover URL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub accent: Color,
}

pub trait ArtworkLoader {
    /// Artwork for `url`, or `None` when there is nothing to show yet.
    fn load(&self, url: &str) -> Option<Artwork>;
}

const PALETTE: [Color; 8] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightBlue,
];

#[derive(Copy, Clone, Debug, Default)]
pub struct PlaceholderArtwork;

impl ArtworkLoader for PlaceholderArtwork {
    fn load(&self, url: &str) -> Option<Artwork> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        let idx = (fnv1a(url.as_bytes()) % PALETTE.len() as u64) as usize;
        Some(Artwork {
            accent: PALETTE[idx],
        })
    }
}

// FNV-1a, so the colour for a URL does not change between runs.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}
