//! Log levels and the process-wide log threshold.

use std::sync::atomic::{AtomicU8, Ordering};

use strum_macros::{Display, EnumString, FromRepr, IntoStaticStr};

/// Environment variable read by [`init_from_env`].
pub const LOG_LEVEL_ENV: &str = "CTLE_LOG_LEVEL";

/// Severity of a log entry, from always shown to most verbose.
///
/// An entry is emitted when its level is less than or equal to the global
/// threshold, so `Error` is shown whenever logging is on at all and
/// `Verbose` only at the maximum threshold.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum LogLevel {
    /// Errors
    Error = 0,
    /// Warnings
    Warning = 1,
    /// Important info, the default threshold
    #[default]
    Info = 2,
    /// Debug messages
    Debug = 3,
    /// Extra verbose debug info
    Verbose = 4,
}

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

impl LogLevel {
    /// Get the level name ("Error", "Warning", ...)
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether an entry at this level passes the global threshold.
    #[inline]
    pub fn enabled(self) -> bool {
        self <= global_log_level()
    }

    /// Read the threshold from [`LOG_LEVEL_ENV`], if set and valid.
    pub fn from_env() -> Option<LogLevel> {
        level_from_env_value(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
    }
}

fn level_from_env_value(value: Option<&str>) -> Option<LogLevel> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<LogLevel>() {
        Ok(level) => Some(level),
        Err(_) => {
            tracing::warn!(
                target: "ctle",
                env = LOG_LEVEL_ENV,
                value,
                "ignoring unknown log level"
            );
            None
        }
    }
}

/// Set the global log threshold.
pub fn set_global_log_level(level: LogLevel) {
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Get the global log threshold.
pub fn global_log_level() -> LogLevel {
    LogLevel::from_repr(GLOBAL_LOG_LEVEL.load(Ordering::Relaxed)).unwrap_or_default()
}

/// Apply [`LOG_LEVEL_ENV`] to the global threshold and return the level in effect.
pub fn init_from_env() -> LogLevel {
    if let Some(level) = LogLevel::from_env() {
        set_global_log_level(level);
    }
    global_log_level()
}
