//! Log sinks for reporting failures
//!
//! Failures are recorded to two independent destinations: the diagnostic
//! log (the `log` facade, for developers) and the user log (kept in memory
//! and shown in the host's "User log" window).

mod diagnostic;
mod user_log;

pub use diagnostic::DiagnosticLog;
pub use user_log::{UserLog, UserLogEntry};

use crate::error::Error;
use std::error::Error as StdError;

/// A destination for failure records.
pub trait LogSink {
    /// Record `message` together with the full detail of `error`.
    fn exception(&mut self, message: &str, error: &Error);
}

/// The error followed by its `source()` chain, one cause per line.
pub fn error_detail(error: &Error) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        detail.push_str("\n  caused by: ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_detail_walks_source_chain() {
        let err = Error::Io {
            path: PathBuf::from("palette.pyl"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        let detail = error_detail(&err);
        let lines: Vec<&str> = detail.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("palette.pyl"));
        assert_eq!(lines[1], "  caused by: access denied");
    }

    #[test]
    fn test_error_detail_without_source() {
        let err = Error::Serialize {
            path: PathBuf::from("out.pyl"),
            message: "boom".to_string(),
        };
        assert_eq!(error_detail(&err), "Cannot serialize to 'out.pyl': boom");
    }
}
