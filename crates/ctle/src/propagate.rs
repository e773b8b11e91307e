//! Conversions the propagation macros use on both ends of a call.
//!
//! [`AsStatus`] reads the status out of whatever a call returned, and
//! [`FromStatus`] turns a failing status back into whatever the enclosing
//! function returns. Both are implemented for bare status codes,
//! [`StatusOnly`] and [`StatusReturn`], so one macro serves all three shapes.

use crate::{StatusCode, StatusOnly, StatusReturn};

/// A value that carries a status.
pub trait AsStatus {
    type Status: StatusCode;

    fn as_status(&self) -> Self::Status;
}

impl<S: StatusCode> AsStatus for S {
    type Status = S;

    #[inline]
    fn as_status(&self) -> S {
        *self
    }
}

impl<S: StatusCode> AsStatus for StatusOnly<S> {
    type Status = S;

    #[inline]
    fn as_status(&self) -> S {
        self.status()
    }
}

impl<S: StatusCode, V> AsStatus for StatusReturn<S, V> {
    type Status = S;

    #[inline]
    fn as_status(&self) -> S {
        self.status()
    }
}

/// A return type a status can be propagated into.
///
/// For [`StatusReturn`] the value half is default-initialized; the caller
/// must not read it since the status is not ok.
pub trait FromStatus<S: StatusCode> {
    fn from_status(status: S) -> Self;
}

impl<S: StatusCode> FromStatus<S> for S {
    #[inline]
    fn from_status(status: S) -> S {
        status
    }
}

impl<S: StatusCode> FromStatus<S> for StatusOnly<S> {
    #[inline]
    fn from_status(status: S) -> Self {
        StatusOnly::new(status)
    }
}

impl<S: StatusCode, V: Default> FromStatus<S> for StatusReturn<S, V> {
    #[inline]
    fn from_status(status: S) -> Self {
        StatusReturn::from_status(status)
    }
}
