use ctle::LogLevel;
use ctle::log::{
    LogRecord, global_log_level, reset_global_log_function, set_global_log_function,
    set_global_log_level,
};
use parking_lot::Mutex;

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub level: LogLevel,
    pub file: String,
    pub function: String,
    pub message: String,
}

static CAPTURED: Mutex<Vec<Captured>> = parking_lot::const_mutex(Vec::new());

fn capture(record: &LogRecord<'_>) {
    CAPTURED.lock().push(Captured {
        level: record.level,
        file: record.file.to_string(),
        function: record.function.to_string(),
        message: record.message.to_string(),
    });
}

/// Run `f` with the global sink replaced by a capture buffer and the
/// threshold set to `level`. Callers must be `#[serial]`.
#[allow(dead_code)]
pub fn with_captured_logs<R>(level: LogLevel, f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let previous = global_log_level();
    CAPTURED.lock().clear();
    set_global_log_level(level);
    set_global_log_function(capture);

    let result = f();

    reset_global_log_function();
    set_global_log_level(previous);
    let logs = std::mem::take(&mut *CAPTURED.lock());
    (result, logs)
}
