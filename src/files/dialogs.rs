//! Native dialog integration using the rfd crate
//!
//! `NativePathSelector` opens the system file pickers for choosing palette
//! files, and `NativeDialogs` shows system message boxes.

use crate::transfer::{DialogLevel, DialogPresenter, PathSelector};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Title of every message box.
const DIALOG_TITLE: &str = "Colors";

/// File pickers filtered to palette files.
#[derive(Debug, Clone)]
pub struct NativePathSelector {
    initial_dir: Option<PathBuf>,
    extensions: Vec<String>,
}

impl NativePathSelector {
    pub fn new(initial_dir: Option<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            initial_dir,
            extensions,
        }
    }

    fn dialog(&self, caption: &str) -> FileDialog {
        let mut dialog = FileDialog::new()
            .set_title(caption)
            .add_filter("Palette Files", self.extensions.as_slice())
            .add_filter("All Files", &["*"]);

        if let Some(dir) = &self.initial_dir {
            dialog = dialog.set_directory(dir);
        }

        dialog
    }

    /// Open later dialogs in the directory of the first selected path.
    fn remember(&mut self, paths: &[PathBuf]) {
        if let Some(parent) = paths.first().and_then(|p| p.parent()) {
            self.initial_dir = Some(parent.to_path_buf());
        }
    }
}

impl PathSelector for NativePathSelector {
    /// Multi-file open dialog. Empty if the dialog was cancelled.
    fn select_paths(&mut self, caption: &str) -> Vec<PathBuf> {
        let paths = self.dialog(caption).pick_files().unwrap_or_default();
        self.remember(&paths);
        paths
    }

    /// Save dialog; at most one path.
    fn select_destination(&mut self, caption: &str) -> Vec<PathBuf> {
        let paths: Vec<PathBuf> = self.dialog(caption).save_file().into_iter().collect();
        self.remember(&paths);
        paths
    }
}

/// Blocking system message boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

impl DialogPresenter for NativeDialogs {
    fn show(&mut self, message: &str, level: DialogLevel) {
        let level = match level {
            DialogLevel::Error => MessageLevel::Error,
            DialogLevel::Warning => MessageLevel::Warning,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
