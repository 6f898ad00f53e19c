//! Color import/export for the colors panel
//!
//! Import lets the user pick one or more literal-data files and replaces the
//! panel's colors with everything they contain. Export writes the panel's
//! colors to exactly one file. Failures never escape: they are logged to the
//! diagnostic and user logs and shown in a single dialog.
//!
//! # Architecture
//!
//! - `collaborators.rs` - Traits for path selection, file storage and dialogs
//! - `operations.rs` - `ColorTransfer` with the import and export operations
//! - `report.rs` - Failure messages and the shared reporting path

mod collaborators;
mod operations;
mod report;

pub use collaborators::{DialogLevel, DialogPresenter, LiteralStore, PathSelector, PylStore};
pub use operations::{ColorTransfer, TransferOutcome, EXPORT_CAPTION, IMPORT_CAPTION};
pub use report::{failure_message, EXPORT_FAILURE, IMPORT_FAILURE, SINGLE_PATH_REQUIRED};
