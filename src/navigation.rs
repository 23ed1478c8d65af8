//! Screen transitions.
//!
//! An `Intent` names a target route and carries serialized extras, so the
//! receiving screen gets its own copy of the data rather than a reference
//! into the sender. The `Navigator` keeps the screen stack.

mod intent;
mod navigator;

pub use intent::{Intent, NavError, Route, SONG_EXTRA};
pub use navigator::Navigator;
