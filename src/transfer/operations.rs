//! Import and export of the panel's colors.

use super::collaborators::{DialogPresenter, LiteralStore, PathSelector};
use super::report::{Reporter, EXPORT_FAILURE, IMPORT_FAILURE, SINGLE_PATH_REQUIRED};
use crate::color::{normalize, Color};
use crate::config::TransferSettings;
use crate::error::{Error, Result};
use crate::literal::Literal;
use crate::logging::LogSink;
use crate::panel::ColorsPanel;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub const IMPORT_CAPTION: &str = "Select path(s)";
pub const EXPORT_CAPTION: &str = "Provide a single path wherein to save colors";

/// What an import or export ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// No path was selected
    Cancelled,
    /// The panel now holds the colors of every selected file
    Imported { files: usize, colors: usize },
    /// The panel's colors were written to `path`
    Exported { path: PathBuf, colors: usize },
    /// More than one export destination was selected; nothing was written
    Rejected,
    /// A load, normalize or save step failed and was reported to the user
    Failed,
}

/// Moves colors between a [`ColorsPanel`] and literal-data files.
///
/// Every collaborator is injected, so the operations hold no global state
/// and never let an error escape to the caller.
pub struct ColorTransfer {
    selector: Box<dyn PathSelector>,
    store: Box<dyn LiteralStore>,
    reporter: Reporter,
    settings: TransferSettings,
}

impl ColorTransfer {
    pub fn new(
        selector: Box<dyn PathSelector>,
        store: Box<dyn LiteralStore>,
        dialogs: Box<dyn DialogPresenter>,
        diagnostic_log: Box<dyn LogSink>,
        user_log: Box<dyn LogSink>,
        settings: TransferSettings,
    ) -> Self {
        Self {
            selector,
            store,
            reporter: Reporter::new(dialogs, diagnostic_log, user_log),
            settings,
        }
    }

    pub fn settings(&self) -> &TransferSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut TransferSettings {
        &mut self.settings
    }

    /// Replace the panel's colors with those of the files the user picks.
    ///
    /// Colors from all files are concatenated in selection order. If any
    /// file fails to load or normalize, the panel is left untouched and the
    /// failure is reported.
    pub fn import_colors(&mut self, panel: &mut dyn ColorsPanel) -> TransferOutcome {
        let paths = self.selector.select_paths(IMPORT_CAPTION);
        if paths.is_empty() {
            debug!("Color import cancelled");
            return TransferOutcome::Cancelled;
        }
        self.remember_directory(&paths);

        match self.load_colors(&paths) {
            Ok(colors) => {
                info!(
                    "Imported {} colors from {} file(s)",
                    colors.len(),
                    paths.len()
                );
                let outcome = TransferOutcome::Imported {
                    files: paths.len(),
                    colors: colors.len(),
                };
                panel.set_colors(colors);
                outcome
            }
            Err(err) => {
                self.reporter.failure(IMPORT_FAILURE, &err, &self.settings);
                TransferOutcome::Failed
            }
        }
    }

    /// Write the panel's colors to the single file the user picks.
    pub fn export_colors(&mut self, panel: &dyn ColorsPanel) -> TransferOutcome {
        let paths = self.selector.select_destination(EXPORT_CAPTION);
        let path = match paths.as_slice() {
            [] => {
                debug!("Color export cancelled");
                return TransferOutcome::Cancelled;
            }
            [path] => {
                self.remember_directory(&paths);
                path
            }
            _ => {
                self.reporter.warning(SINGLE_PATH_REQUIRED);
                return TransferOutcome::Rejected;
            }
        };

        let colors = panel.get_colors();
        match self.save_colors(&colors, path) {
            Ok(()) => {
                info!("Exported {} colors to {}", colors.len(), path.display());
                TransferOutcome::Exported {
                    path: path.clone(),
                    colors: colors.len(),
                }
            }
            Err(err) => {
                self.reporter.failure(EXPORT_FAILURE, &err, &self.settings);
                TransferOutcome::Failed
            }
        }
    }

    /// Record the directory of the first selected path as `last_directory`.
    fn remember_directory(&mut self, paths: &[PathBuf]) {
        let parent = paths.first().and_then(|p| p.parent());
        if let Some(dir) = parent.filter(|dir| !dir.as_os_str().is_empty()) {
            self.settings.last_directory = Some(dir.to_path_buf());
        }
    }

    fn load_colors(&self, paths: &[PathBuf]) -> Result<Vec<Color>> {
        let mut colors = Vec::new();
        for path in paths {
            let value = self.store.load(path)?;
            let normalized =
                normalize(&value, self.settings.import_format, false).map_err(|e| {
                    Error::Validation {
                        path: path.clone(),
                        source: e,
                    }
                })?;
            debug!("Loaded {} colors from {}", normalized.len(), path.display());
            colors.extend(normalized.into_vec());
        }
        Ok(colors)
    }

    fn save_colors(&self, colors: &[Color], path: &Path) -> Result<()> {
        let format = self.settings.export_format;
        let value = Literal::Tuple(colors.iter().map(|c| c.to_literal(format)).collect());
        self.store.save(&value, path, self.settings.export_width)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
