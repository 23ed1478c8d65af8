//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and owns the screen stack, the
//! share chooser popup and the transient status line.

mod model;

pub use model::*;
