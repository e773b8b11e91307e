//! Status codes for ctle operations

use strum_macros::{Display, EnumString, IntoStaticStr};

/// The outcome of an operation.
///
/// `Ok` is the only success value; every other variant names a failure so
/// callers can match on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Status {
    /// The operation succeeded
    #[default]
    Ok,

    // =========================================================================
    // General errors
    // =========================================================================
    /// An unspecified failure, the status of falsy codes without a richer mapping
    Undefined,

    /// A parameter passed to the function is invalid
    InvalidParam,

    /// The object is not in a state where the operation is allowed
    InvalidState,

    /// Feature or operation not yet implemented
    NotImplemented,

    /// The requested item was not found
    NotFound,

    /// The item to create already exists
    AlreadyExists,

    // =========================================================================
    // Initialization errors
    // =========================================================================
    /// The object must be initialized first
    NotInitialized,

    /// The object is already initialized
    AlreadyInitialized,

    // =========================================================================
    // Resource errors
    // =========================================================================
    /// Memory or another resource could not be allocated
    CantAllocate,

    /// Timeout occurred
    Timeout,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// A file or stream could not be opened
    CantOpen,

    /// Reading failed
    CantRead,

    /// Writing failed
    CantWrite,

    // =========================================================================
    // Data errors
    // =========================================================================
    /// The data read is corrupted or malformed
    Corrupted,

    /// An unexpected condition, catch-all for unhandled cases
    Unexpected,
}

impl Status {
    /// Returns true only for [`Status::Ok`]
    pub fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Returns the status as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
