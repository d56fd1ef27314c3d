//! Sphinx project wiring: toctree index stubs and `conf.py` records.
mod conf;
mod index;

pub use conf::{ConfPatch, ManPageEntry};
pub use index::index_stub;
