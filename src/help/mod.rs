//! Help text capture and section extraction.
//!
//! Capture and parsing are split so pages can also be rendered from help
//! text saved to a file.
mod capture;
mod model;
mod sections;

pub use capture::HelpCommand;
pub use model::UtilHelp;
pub use sections::{Section, SectionPatterns};
