//! Configuration module for Swatchbook
//!
//! This module handles the import/export settings, including
//! serialization/deserialization to/from JSON and persistent storage to
//! platform-specific directories.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
