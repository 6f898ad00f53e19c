//! Shared failure reporting for import and export.

use super::collaborators::{DialogLevel, DialogPresenter};
use crate::config::TransferSettings;
use crate::error::Error;
use crate::logging::LogSink;

pub const IMPORT_FAILURE: &str = "An error occurred while loading colors.";
pub const EXPORT_FAILURE: &str = "An error occurred while saving the colors.";
pub const SINGLE_PATH_REQUIRED: &str = "must provide a single file path";

/// Dialog text for a failure: the summary plus where to find the details.
pub fn failure_message(summary: &str, settings: &TransferSettings) -> String {
    format!(
        "{} For more info check the user log (on the graph/canvas, press <{}> \
         or access the \"{}\" option on the menubar).",
        summary, settings.user_log_shortcut, settings.user_log_menu_path
    )
}

/// The dialog presenter and both log sinks, used together on failure.
pub struct Reporter {
    dialogs: Box<dyn DialogPresenter>,
    diagnostic_log: Box<dyn LogSink>,
    user_log: Box<dyn LogSink>,
}

impl Reporter {
    pub fn new(
        dialogs: Box<dyn DialogPresenter>,
        diagnostic_log: Box<dyn LogSink>,
        user_log: Box<dyn LogSink>,
    ) -> Self {
        Self {
            dialogs,
            diagnostic_log,
            user_log,
        }
    }

    /// Record `err` in both logs and show one error dialog.
    pub fn failure(&mut self, summary: &str, err: &Error, settings: &TransferSettings) {
        self.diagnostic_log.exception(summary, err);
        self.user_log.exception(summary, err);
        self.dialogs
            .show(&failure_message(summary, settings), DialogLevel::Error);
    }

    /// Show a warning dialog. Nothing is logged.
    pub fn warning(&mut self, message: &str) {
        self.dialogs.show(message, DialogLevel::Warning);
    }
}
