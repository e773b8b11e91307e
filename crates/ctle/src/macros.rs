//! Call-site macros: leveled logging, guards and status propagation.
//!
//! Every propagation macro follows the same policy: log once, at the point
//! where the failure is detected, then return right away. Callers further up
//! that merely forward the status with another macro log their own call
//! site, never the original failure twice from the same place.

/// Path of the enclosing function, as a `&'static str`.
///
/// The path ends in a marker segment that
/// [`trim_function_signature`](crate::log::trim_function_signature) removes.
#[doc(hidden)]
#[macro_export]
macro_rules! function_signature {
    () => {{
        fn __ctle_signature_marker() {}
        ::core::any::type_name_of_val(&__ctle_signature_marker)
    }};
}

/// Write a log entry at `level` if the global threshold lets it through.
///
/// The format arguments are only evaluated when the level is enabled. The
/// entry records the file, line and enclosing function.
///
/// ```
/// use ctle::ct_log;
///
/// fn load(count: usize) {
///     ct_log!(Debug, "loading {count} items");
/// }
/// load(3);
/// ```
#[macro_export]
macro_rules! ct_log {
    ($level:ident, $($arg:tt)+) => {
        if $crate::LogLevel::$level.enabled() {
            $crate::log::LogMsg::new(
                $crate::LogLevel::$level,
                ::core::file!(),
                ::core::line!(),
                $crate::function_signature!(),
            )
            .append(::core::format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! ct_log_error {
    ($($arg:tt)+) => { $crate::ct_log!(Error, $($arg)+) };
}

#[macro_export]
macro_rules! ct_log_warning {
    ($($arg:tt)+) => { $crate::ct_log!(Warning, $($arg)+) };
}

#[macro_export]
macro_rules! ct_log_info {
    ($($arg:tt)+) => { $crate::ct_log!(Info, $($arg)+) };
}

#[macro_export]
macro_rules! ct_log_debug {
    ($($arg:tt)+) => { $crate::ct_log!(Debug, $($arg)+) };
}

#[macro_export]
macro_rules! ct_log_verbose {
    ($($arg:tt)+) => { $crate::ct_log!(Verbose, $($arg)+) };
}

/// Log the address of an instance at info level, for tracing object lifetimes.
///
/// Pass a reference, usually `self` inside a `&self` method.
#[macro_export]
macro_rules! ct_log_this {
    ($this:expr $(,)?) => {
        $crate::ct_log!(Info, "{:p}", $this)
    };
}

/// Return `code` from the enclosing function unless `cond` holds.
///
/// Logs an error first: the given message, or the failed condition.
///
/// ```
/// use ctle::{Status, ct_validate};
///
/// fn reserve(count: usize) -> Status {
///     ct_validate!(count > 0, Status::InvalidParam);
///     ct_validate!(count <= 64, Status::CantAllocate, "cannot reserve {count} slots");
///     Status::Ok
/// }
///
/// assert_eq!(reserve(0), Status::InvalidParam);
/// assert_eq!(reserve(100), Status::CantAllocate);
/// assert_eq!(reserve(8), Status::Ok);
/// ```
#[macro_export]
macro_rules! ct_validate {
    ($cond:expr, $code:expr $(,)?) => {
        $crate::ct_validate!($cond, $code, "Validate failed: {}", ::core::stringify!($cond))
    };
    ($cond:expr, $code:expr, $($arg:tt)+) => {
        if !($cond) {
            let __ctle_error_code = $code;
            $crate::ct_log_error!($($arg)+);
            return $crate::FromStatus::from_status(__ctle_error_code);
        }
    };
}

/// Check an invariant in builds with debug assertions.
///
/// A violation logs an error and panics with the expression text, file,
/// line and function. Without debug assertions the check is compiled out
/// and `cond` is never evaluated. Use it as a statement.
#[macro_export]
macro_rules! ct_sanity_check {
    ($cond:expr $(,)?) => {
        #[cfg(debug_assertions)]
        {
            if !($cond) {
                $crate::ct_log_error!("SanityCheck failed: {}", ::core::stringify!($cond));
                ::core::panic!(
                    "SanityCheck {} failed in {} line {} function {}",
                    ::core::stringify!($cond),
                    ::core::file!(),
                    ::core::line!(),
                    $crate::log::trim_function_signature($crate::function_signature!()),
                );
            }
        }
    };
}

/// Evaluate a call that returns a status and return the status if it failed.
///
/// The call may return a bare status code, a [`StatusOnly`](crate::StatusOnly)
/// or a [`StatusReturn`](crate::StatusReturn) (whose value is then ignored).
///
/// ```
/// use ctle::{Status, ct_status_call};
///
/// fn flush(dirty: bool) -> Status {
///     if dirty { Status::CantWrite } else { Status::Ok }
/// }
///
/// fn close(dirty: bool) -> Status {
///     ct_status_call!(flush(dirty));
///     Status::Ok
/// }
///
/// assert_eq!(close(true), Status::CantWrite);
/// assert_eq!(close(false), Status::Ok);
/// ```
#[macro_export]
macro_rules! ct_status_call {
    ($call:expr $(,)?) => {{
        let __ctle_call_status = $crate::AsStatus::as_status(&$call);
        if $crate::StatusCode::is_err(&__ctle_call_status) {
            $crate::ct_log_error!(
                "Call: {} failed, returned status_code: {}",
                ::core::stringify!($call),
                __ctle_call_status
            );
            return $crate::FromStatus::from_status(__ctle_call_status);
        }
    }};
}

/// Evaluate a call that returns a [`StatusReturn`](crate::StatusReturn) and
/// move its value into the existing `retval`.
///
/// On failure only the status is returned from the enclosing function; the
/// value is dropped and `retval` is left untouched.
#[macro_export]
macro_rules! ct_status_return_call {
    ($retval:expr, $call:expr $(,)?) => {{
        let (__ctle_call_status, __ctle_call_value) = $crate::StatusReturn::into_parts($call);
        if $crate::StatusCode::is_err(&__ctle_call_status) {
            $crate::ct_log_error!(
                "Call: {} failed, returned status_code: {}",
                ::core::stringify!($call),
                __ctle_call_status
            );
            return $crate::FromStatus::from_status(__ctle_call_status);
        }
        $retval = __ctle_call_value;
    }};
}

/// Like [`ct_status_return_call!`], but declares `retval` first, with the
/// type of the call's value.
///
/// ```
/// use ctle::{StatusReturn, ct_status_auto_return_call};
///
/// fn parse(text: &str) -> StatusReturn<bool, u32> {
///     match text.parse() {
///         Ok(n) => StatusReturn::new(true, n),
///         Err(_) => StatusReturn::from_status(false),
///     }
/// }
///
/// fn double(text: &str) -> StatusReturn<bool, u32> {
///     ct_status_auto_return_call!(n, parse(text));
///     StatusReturn::new(true, n * 2)
/// }
///
/// assert_eq!(*double("21").value(), 42);
/// assert!(!double("x"));
/// ```
#[macro_export]
macro_rules! ct_status_auto_return_call {
    (mut $retval:ident, $call:expr $(,)?) => {
        let mut $retval;
        $crate::ct_status_return_call!($retval, $call);
    };
    ($retval:ident, $call:expr $(,)?) => {
        let $retval;
        $crate::ct_status_return_call!($retval, $call);
    };
}

/// Evaluate a call that returns a status and turn a failure into
/// `Err(StatusError)` returned from the enclosing function.
///
/// The error type of the enclosing function only needs
/// `From<StatusError>`.
///
/// ```
/// use ctle::{Status, StatusError, ct_status_call_throw};
///
/// fn open(path: &str) -> Status {
///     if path.is_empty() { Status::CantOpen } else { Status::Ok }
/// }
///
/// fn load(path: &str) -> Result<usize, StatusError> {
///     ct_status_call_throw!(open(path));
///     Ok(path.len())
/// }
///
/// assert_eq!(load("a.db").unwrap(), 4);
/// assert_eq!(load("").unwrap_err().status(), Status::CantOpen);
/// ```
#[macro_export]
macro_rules! ct_status_call_throw {
    ($call:expr $(,)?) => {{
        let __ctle_call_status = $crate::AsStatus::as_status(&$call);
        if $crate::StatusCode::is_err(&__ctle_call_status) {
            $crate::ct_log_error!(
                "Call: {} failed, returned status_code: {}, returning a status error",
                ::core::stringify!($call),
                __ctle_call_status
            );
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::StatusError::from_code(__ctle_call_status)
                    .with_context("call", ::core::stringify!($call)),
            ));
        }
    }};
}
