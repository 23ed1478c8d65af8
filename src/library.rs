//! Song library: the `Song` record and the repositories that supply the
//! playlist shown on the list screen.

mod display;
mod model;
mod repository;
mod sample;

pub use display::{joined_authors, share_body};
pub use model::Song;
pub use repository::open_repository;

#[cfg(test)]
mod tests;
