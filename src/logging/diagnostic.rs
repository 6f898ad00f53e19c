//! Diagnostic sink backed by the `log` facade.

use super::{error_detail, LogSink};
use crate::error::Error;
use log::error;

/// Forwards failure records to whatever logger the binary installed.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticLog {
    target: &'static str,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new("swatchbook::transfer")
    }
}

impl DiagnosticLog {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl LogSink for DiagnosticLog {
    fn exception(&mut self, message: &str, err: &Error) {
        error!(target: self.target, "{}\n{}", message, error_detail(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Mutex, Once};

    /// Captures every record as `(level, target, message)`.
    struct CapturingLogger {
        records: Mutex<Vec<(Level, String, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((
                    record.level(),
                    record.target().to_string(),
                    record.args().to_string(),
                ));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn install_logger() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("Failed to install test logger");
            log::set_max_level(LevelFilter::Trace);
        });
    }

    #[test]
    fn test_exception_emits_one_error_record() {
        install_logger();
        let err = Error::Io {
            path: PathBuf::from("diagnostic_sink.pyl"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        DiagnosticLog::default().exception("Loading colors failed.", &err);

        let records = LOGGER.records.lock().expect("logger poisoned");
        let matching: Vec<_> = records
            .iter()
            .filter(|(_, _, message)| message.contains("diagnostic_sink.pyl"))
            .collect();
        assert_eq!(matching.len(), 1);

        let (level, target, message) = matching[0];
        assert_eq!(*level, Level::Error);
        assert_eq!(target, "swatchbook::transfer");
        assert_eq!(
            message,
            &format!("Loading colors failed.\n{}", error_detail(&err))
        );
        assert!(message.ends_with("  caused by: no such file"));
    }
}
