//! Swatchbook - colors panel with palette file import/export
//!
//! The [`transfer`] module is the heart of the crate: it moves colors between
//! a [`panel::ColorsPanel`] and literal-data (`.pyl`) files, collecting
//! colors from several files at once on import and writing exactly one file
//! on export. Every failure is absorbed and reported to the user instead of
//! propagating to the host.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod files;
pub mod literal;
pub mod logging;
pub mod panel;
pub mod transfer;

pub use color::{Color, ColorFormat};
pub use error::{Error, Result};
pub use panel::{ColorsPanel, Palette};
pub use transfer::{ColorTransfer, TransferOutcome};
