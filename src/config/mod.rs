//! Configuration loading for the Court Order Interest Engine.
//!
//! Rate tables are consumed as pre-sorted period lists published per
//! jurisdiction; this module loads them from YAML files on disk together
//! with the regime metadata.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateTableFile, RegimeMetadata};
