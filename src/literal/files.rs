//! Loading and saving literal-data files.

use super::{parse, pretty, Literal};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Read and parse the literal stored at `path`.
///
/// # Errors
///
/// - `Error::Io` if the file cannot be read as UTF-8 text
/// - `Error::Parse` if the contents are not a single valid literal
pub fn load_pyl(path: &Path) -> Result<Literal> {
    debug!("Loading literal from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&contents).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `value` to `path`, wrapping containers at `width` columns.
///
/// The file is overwritten in place; a failed write may leave it truncated.
///
/// # Errors
///
/// - `Error::Serialize` if the value holds a NaN or infinite float
/// - `Error::Io` if the file cannot be written
pub fn save_pyl(value: &Literal, path: &Path, width: usize) -> Result<()> {
    if value.has_non_finite() {
        return Err(Error::Serialize {
            path: path.to_path_buf(),
            message: "non-finite floats have no literal form".to_string(),
        });
    }

    let mut text = pretty(value, width);
    text.push('\n');

    debug!("Saving literal to: {}", path.display());
    fs::write(path, text).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn palette() -> Literal {
        Literal::Tuple(vec![
            Literal::Tuple(vec![Literal::Int(255), Literal::Int(0), Literal::Int(0)]),
            Literal::Tuple(vec![Literal::Int(0), Literal::Int(0), Literal::Int(255)]),
        ])
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("palette.pyl");

        save_pyl(&palette(), &path, 10).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("255))\n"));
        assert!(text.lines().all(|line| line.len() <= 10));

        assert_eq!(load_pyl(&path).unwrap(), palette());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing.pyl");
        let err = load_pyl(&path).unwrap_err();
        assert!(matches!(err, Error::Io { path: p, .. } if p == path));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.pyl");
        fs::write(&path, "((255, 0, 0),").unwrap();
        assert!(matches!(load_pyl(&path), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("no_such_dir").join("palette.pyl");
        assert!(matches!(
            save_pyl(&palette(), &path, 10),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_save_rejects_non_finite_float() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nan.pyl");
        let value = Literal::List(vec![Literal::Float(f64::INFINITY)]);
        assert!(matches!(
            save_pyl(&value, &path, 10),
            Err(Error::Serialize { .. })
        ));
        assert!(!path.exists());
    }
}
