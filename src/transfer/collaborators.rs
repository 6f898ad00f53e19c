//! Seams between the transfer operations and the host.

use crate::error::Result;
use crate::literal::{load_pyl, save_pyl, Literal};
use std::path::{Path, PathBuf};

/// Asks the user for filesystem paths.
pub trait PathSelector {
    /// Paths chosen by the user, in selection order. Empty when cancelled.
    fn select_paths(&mut self, caption: &str) -> Vec<PathBuf>;

    /// Paths chosen as a save destination. The caller still checks that
    /// exactly one was returned.
    fn select_destination(&mut self, caption: &str) -> Vec<PathBuf> {
        self.select_paths(caption)
    }
}

/// Reads and writes literal-data files.
pub trait LiteralStore {
    fn load(&self, path: &Path) -> Result<Literal>;

    /// Write `value` to `path` with lines bounded to `width` columns.
    fn save(&self, value: &Literal, path: &Path, width: usize) -> Result<()>;
}

/// `.pyl` files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PylStore;

impl LiteralStore for PylStore {
    fn load(&self, path: &Path) -> Result<Literal> {
        load_pyl(path)
    }

    fn save(&self, value: &Literal, path: &Path, width: usize) -> Result<()> {
        save_pyl(value, path, width)
    }
}

/// Severity of a user notification. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Error,
    Warning,
}

/// Shows notifications to the user.
pub trait DialogPresenter {
    fn show(&mut self, message: &str, level: DialogLevel);
}
