//! "Share as note": the payload built from a playlist row, the chooser
//! popup state, and the targets a note can be handed to.

mod chooser;
mod content;
mod targets;

pub use chooser::ShareChooser;
pub use content::ShareContent;
#[cfg(test)]
pub use targets::ShareError;
pub use targets::{ShareTarget, targets_from_settings};
