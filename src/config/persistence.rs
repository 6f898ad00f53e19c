//! Configuration file persistence for Swatchbook
//!
//! Settings live in a JSON file in the platform configuration directory.
//! Loading never fails: a missing, empty or corrupted file falls back to
//! defaults with a warning.

use crate::config::TransferSettings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "swatchbook";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Backup configuration file name (used during atomic writes)
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\swatchbook\`
/// - **macOS**: `~/Library/Application Support/swatchbook/`
/// - **Linux**: `~/.config/swatchbook/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be determined
/// (e.g., if the HOME environment variable is not set).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from the default config file location, falling back to
/// defaults on any error.
pub fn load_config() -> TransferSettings {
    get_config_dir()
        .and_then(|dir| load_config_from(&dir))
        .unwrap_or_warn_default(TransferSettings::default(), "Failed to load configuration")
}

/// Load settings from `config_dir`.
///
/// A missing or empty file yields defaults.
///
/// # Errors
///
/// - `Error::ConfigLoad`: the file exists but cannot be read
/// - `Error::ConfigParse`: the file is not valid settings JSON
pub fn load_config_from(config_dir: &Path) -> Result<TransferSettings> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(TransferSettings::default());
    }

    debug!("Loading config from: {}", config_path.display());

    let contents = fs::read_to_string(&config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(TransferSettings::default());
    }

    let settings = TransferSettings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Configuration loaded successfully from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to the default config file location.
///
/// # Errors
///
/// - `Error::ConfigDirNotFound`: Config directory cannot be determined
/// - `Error::ConfigSave`: Failed to write the config file
pub fn save_config(settings: &TransferSettings) -> Result<()> {
    save_config_to(settings, &get_config_dir()?)
}

/// Save settings into `config_dir`, creating it if needed.
///
/// Writes to a backup file first and renames it over the config file, so
/// an interrupted save never leaves a half-written config behind.
///
/// # Errors
///
/// Returns `Error::ConfigSave` if the directory or file cannot be written.
pub fn save_config_to(settings: &TransferSettings, config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(config_dir).map_err(|e| Error::ConfigSave {
            path: config_dir.to_path_buf(),
            source: Box::new(e),
        })?;
    }

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let backup_path = config_dir.join(CONFIG_BACKUP_NAME);

    debug!("Saving config to: {}", config_path.display());

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, &config_path).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    info!(
        "Configuration saved successfully to {}",
        config_path.display()
    );
    Ok(())
}

/// Save settings, ignoring errors.
///
/// Used on exit, where a failed save shouldn't interrupt shutdown.
/// Returns `true` if the save was successful.
pub fn save_config_silent(settings: &TransferSettings) -> bool {
    match save_config(settings) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save configuration: {}", e);
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorFormat;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILE_NAME), content).expect("Failed to write config");
    }

    #[test]
    fn test_get_config_dir_names_app() {
        if let Ok(path) = get_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings, TransferSettings::default());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_config(dir.path(), "   \n");
        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings, TransferSettings::default());
    }

    #[test]
    fn test_load_corrupted_config_returns_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_config(dir.path(), "{ invalid json }");
        assert!(matches!(
            load_config_from(dir.path()),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_config_sanitizes_values() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_config(dir.path(), r#"{"export_width": 0, "user_log_capacity": 1000000}"#);
        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings.export_width, TransferSettings::MIN_EXPORT_WIDTH);
        assert_eq!(settings.user_log_capacity, TransferSettings::MAX_LOG_CAPACITY);
    }

    #[test]
    fn test_config_with_unknown_fields_ignored() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_config(dir.path(), r#"{"export_width": 12, "future_feature": true}"#);
        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings.export_width, 12);
    }

    #[test]
    fn test_save_creates_directory_and_roundtrips() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = dir.path().join("nested").join(APP_NAME);
        let original = TransferSettings {
            export_width: 32,
            export_format: ColorFormat::HexString,
            ..TransferSettings::default()
        };

        save_config_to(&original, &config_dir).unwrap();

        assert!(config_dir.join(CONFIG_FILE_NAME).exists());
        assert!(!config_dir.join(CONFIG_BACKUP_NAME).exists());
        assert_eq!(load_config_from(&config_dir).unwrap(), original);
    }

    #[test]
    fn test_save_overwrites_existing_config() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_config(dir.path(), r#"{"export_width": 50}"#);

        let settings = TransferSettings::default();
        save_config_to(&settings, dir.path()).unwrap();

        assert_eq!(load_config_from(dir.path()).unwrap(), settings);
    }

    #[test]
    fn test_load_config_graceful_fallback() {
        // Always returns valid settings, whatever is on disk
        let settings = load_config();
        assert!(settings.export_width >= TransferSettings::MIN_EXPORT_WIDTH);
    }
}
