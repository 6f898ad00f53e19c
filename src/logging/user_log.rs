//! User-facing activity log.

use super::{error_detail, LogSink};
use crate::error::Error;
use log::Level;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One line of the user log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogEntry {
    pub level: Level,
    pub message: String,
    /// Error chain for failures
    pub detail: Option<String>,
}

#[derive(Debug)]
struct Inner {
    entries: VecDeque<UserLogEntry>,
    capacity: usize,
}

/// Shared handle to the user log.
///
/// Clones point at the same entries, so the transfer can write while the
/// host UI reads. Single-threaded by construction (`Rc`).
#[derive(Debug, Clone)]
pub struct UserLog {
    inner: Rc<RefCell<Inner>>,
}

impl Default for UserLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl UserLog {
    pub const DEFAULT_CAPACITY: usize = 500;

    /// Create a log keeping at most `capacity` entries (oldest dropped first).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: VecDeque::with_capacity(capacity.min(64)),
                capacity,
            })),
        }
    }

    pub fn push(&self, level: Level, message: impl Into<String>, detail: Option<String>) {
        let mut inner = self.inner.borrow_mut();
        if inner.entries.len() == inner.capacity {
            inner.entries.pop_front();
        }
        inner.entries.push_back(UserLogEntry {
            level,
            message: message.into(),
            detail,
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Level::Info, message, None);
    }

    /// Snapshot of the current entries, oldest first.
    pub fn entries(&self) -> Vec<UserLogEntry> {
        self.inner.borrow().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }

    /// Plain-text rendering, one entry per line followed by its detail.
    pub fn render(&self) -> String {
        let inner = self.inner.borrow();
        let mut text = String::new();
        for entry in &inner.entries {
            text.push_str(&format!("[{}] {}\n", entry.level, entry.message));
            if let Some(detail) = &entry.detail {
                for line in detail.lines() {
                    text.push_str("    ");
                    text.push_str(line);
                    text.push('\n');
                }
            }
        }
        text
    }
}

impl LogSink for UserLog {
    fn exception(&mut self, message: &str, err: &Error) {
        self.push(Level::Error, message, Some(error_detail(err)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let log = UserLog::default();
        let mut writer = log.clone();
        writer.exception("failed", &Error::ConfigDirNotFound);

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(entries[0].message, "failed");
        assert_eq!(
            entries[0].detail.as_deref(),
            Some("Configuration directory not found")
        );
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let log = UserLog::new(2);
        log.info("one");
        log.info("two");
        log.info("three");
        let messages: Vec<String> = log.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_render_indents_detail() {
        let log = UserLog::default();
        log.push(Level::Error, "oops", Some("first\nsecond".to_string()));
        assert_eq!(log.render(), "[ERROR] oops\n    first\n    second\n");
    }

    #[test]
    fn test_clear() {
        let log = UserLog::new(0);
        log.info("kept until cleared");
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }
}
