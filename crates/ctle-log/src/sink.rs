//! The global log sink that receives finished log entries.

use std::fmt;

use parking_lot::RwLock;

use crate::LogLevel;

/// A finished log entry, as handed to the [`LogFunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub file: &'a str,
    pub line: u32,
    /// Trimmed function path, e.g. `store::Store::open()`
    pub function: &'a str,
    pub message: &'a str,
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} log: {}: {}", self.level, self.function, self.message)
    }
}

/// Receives every log entry that passed the global threshold.
pub type LogFunction = fn(&LogRecord<'_>);

static GLOBAL_LOG_FUNCTION: RwLock<LogFunction> =
    parking_lot::const_rwlock(default_log_function as LogFunction);

/// Forward a record into `tracing` under the `ctle` target.
///
/// `Verbose` maps to the `TRACE` level.
pub fn default_log_function(record: &LogRecord<'_>) {
    let LogRecord {
        level,
        file,
        line,
        function,
        message,
    } = *record;
    match level {
        LogLevel::Error => tracing::error!(target: "ctle", function, file, line, "{message}"),
        LogLevel::Warning => tracing::warn!(target: "ctle", function, file, line, "{message}"),
        LogLevel::Info => tracing::info!(target: "ctle", function, file, line, "{message}"),
        LogLevel::Debug => tracing::debug!(target: "ctle", function, file, line, "{message}"),
        LogLevel::Verbose => tracing::trace!(target: "ctle", function, file, line, "{message}"),
    }
}

/// Replace the global log function.
pub fn set_global_log_function(func: LogFunction) {
    *GLOBAL_LOG_FUNCTION.write() = func;
}

/// Get the global log function.
pub fn global_log_function() -> LogFunction {
    *GLOBAL_LOG_FUNCTION.read()
}

/// Restore [`default_log_function`] as the global log function.
pub fn reset_global_log_function() {
    set_global_log_function(default_log_function);
}

/// Hand a record to the current global log function.
pub fn submit(record: &LogRecord<'_>) {
    // Copy the pointer out so a sink may itself call set_global_log_function.
    let func = global_log_function();
    func(record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serial_test::serial;
    use std::io;
    use std::sync::Arc;
    use tracing_subscriber::fmt::MakeWriter;

    static SEEN: Mutex<Vec<String>> = parking_lot::const_mutex(Vec::new());

    fn remember(record: &LogRecord<'_>) {
        SEEN.lock().push(record.to_string());
    }

    fn record<'a>(level: LogLevel, message: &'a str) -> LogRecord<'a> {
        LogRecord {
            level,
            file: "src/store.rs",
            line: 42,
            function: "store::open()",
            message,
        }
    }

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_record_display() {
        let rec = record(LogLevel::Warning, "disk almost full");
        assert_eq!(rec.to_string(), "Warning log: store::open(): disk almost full");
    }

    #[test]
    #[serial]
    fn test_custom_log_function() {
        SEEN.lock().clear();
        set_global_log_function(remember);

        submit(&record(LogLevel::Error, "cant open"));
        submit(&record(LogLevel::Info, "opened"));

        reset_global_log_function();
        submit(&record(LogLevel::Error, "not captured"));

        let seen = SEEN.lock().clone();
        assert_eq!(
            seen,
            vec![
                "Error log: store::open(): cant open".to_string(),
                "Info log: store::open(): opened".to_string(),
            ]
        );
    }

    #[test]
    #[serial]
    fn test_default_log_function_emits_tracing_events() {
        reset_global_log_function();
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            submit(&record(LogLevel::Error, "checksum mismatch"));
            submit(&record(LogLevel::Verbose, "block 7 read"));
        });

        let output = String::from_utf8(writer.0.lock().clone()).unwrap();
        assert!(output.contains("ERROR"));
        assert!(output.contains("checksum mismatch"));
        assert!(output.contains("TRACE"));
        assert!(output.contains("block 7 read"));
        assert!(output.contains("store::open()"));
    }
}
