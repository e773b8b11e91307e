//! # ctle-log
//!
//! The logging side of ctle: leveled entries, a process-wide threshold and
//! a replaceable sink. Entries reach the sink as [`LogRecord`]s; the default
//! sink forwards them to `tracing` under the `ctle` target, so installing a
//! `tracing_subscriber` is all an application needs to see them.
//!
//! Entries are normally written with the `ct_log_*!` macros of the `ctle`
//! crate, which check the threshold before building a [`LogMsg`].
//!
//! ```rust
//! use ctle_log::{LogLevel, LogMsg, set_global_log_level};
//!
//! set_global_log_level(LogLevel::Debug);
//! if LogLevel::Debug.enabled() {
//!     LogMsg::new(LogLevel::Debug, file!(), line!(), "app::load")
//!         .append(format_args!("loaded {} items", 3));
//! }
//! ```

mod level;
mod msg;
mod sink;

pub use level::{LOG_LEVEL_ENV, LogLevel, global_log_level, init_from_env, set_global_log_level};
pub use msg::{LogMsg, SIGNATURE_MARKER, trim_function_signature};
pub use sink::{
    LogFunction, LogRecord, default_log_function, global_log_function, reset_global_log_function,
    set_global_log_function, submit,
};
