//! Transfer settings
//!
//! This module defines the `TransferSettings` struct holding the
//! user-configurable options of color import/export, with serde support for
//! JSON persistence.

use crate::color::ColorFormat;
use crate::logging::UserLog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-configurable options for color import/export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSettings {
    /// Column width exported files are wrapped at
    pub export_width: usize,
    /// Alpha policy applied to imported colors
    pub import_format: ColorFormat,
    /// Shape colors are written in
    pub export_format: ColorFormat,
    /// Shortcut named in failure dialogs for opening the user log
    pub user_log_shortcut: String,
    /// Menu path named in failure dialogs for opening the user log
    pub user_log_menu_path: String,
    /// Extensions offered by the file dialogs (without the dot)
    pub file_extensions: Vec<String>,
    /// Entries kept by the user log
    pub user_log_capacity: usize,
    /// Directory the file dialogs open in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            export_width: Self::DEFAULT_EXPORT_WIDTH,
            import_format: ColorFormat::RgbTuple,
            export_format: ColorFormat::RgbTuple,
            user_log_shortcut: Self::DEFAULT_SHORTCUT.to_string(),
            user_log_menu_path: Self::DEFAULT_MENU_PATH.to_string(),
            file_extensions: vec![Self::DEFAULT_EXTENSION.to_string()],
            user_log_capacity: UserLog::DEFAULT_CAPACITY,
            last_directory: None,
        }
    }
}

impl TransferSettings {
    pub const DEFAULT_EXPORT_WIDTH: usize = 10;
    pub const DEFAULT_SHORTCUT: &'static str = "Ctrl+Shift+J";
    pub const DEFAULT_MENU_PATH: &'static str = "Help > Show user log";
    pub const DEFAULT_EXTENSION: &'static str = "pyl";
    /// Minimum export width.
    pub const MIN_EXPORT_WIDTH: usize = 1;
    /// Maximum export width.
    pub const MAX_EXPORT_WIDTH: usize = 200;
    /// Minimum user log capacity.
    pub const MIN_LOG_CAPACITY: usize = 10;
    /// Maximum user log capacity.
    pub const MAX_LOG_CAPACITY: usize = 10_000;

    /// Sanitize settings by clamping values to valid ranges and restoring
    /// defaults for empty strings.
    ///
    /// This is useful after loading settings from a file that might have
    /// been edited by hand.
    pub fn sanitize(&mut self) {
        self.export_width = self
            .export_width
            .clamp(Self::MIN_EXPORT_WIDTH, Self::MAX_EXPORT_WIDTH);

        self.user_log_capacity = self
            .user_log_capacity
            .clamp(Self::MIN_LOG_CAPACITY, Self::MAX_LOG_CAPACITY);

        if self.user_log_shortcut.trim().is_empty() {
            self.user_log_shortcut = Self::DEFAULT_SHORTCUT.to_string();
        }
        if self.user_log_menu_path.trim().is_empty() {
            self.user_log_menu_path = Self::DEFAULT_MENU_PATH.to_string();
        }

        // Extensions are stored without the leading dot
        self.file_extensions = self
            .file_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if self.file_extensions.is_empty() {
            self.file_extensions = vec![Self::DEFAULT_EXTENSION.to_string()];
        }
    }

    /// Parse settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
