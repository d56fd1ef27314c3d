//! Workflow commands behind the CLI.
//!
//! `generate` runs the whole utility list; `render` shows a single page.
mod context;
mod generate;
mod page;

pub use generate::run_generate;
pub use page::run_render;
