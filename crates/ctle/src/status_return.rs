//! A status paired with the value an operation produced.

use std::ops::Not;

use crate::StatusCode;

/// The status of an operation together with its value.
///
/// Return this from functions that produce a value along with a status, and
/// read it back with [`status`](Self::status) and [`value`](Self::value), or
/// let [`ct_status_return_call!`](crate::ct_status_return_call) do it.
///
/// There is no empty state: every pair has a status and a value, and the half
/// a constructor does not take is default-initialized.
///
/// The status type must be a [`StatusCode`], which requires `Copy`:
///
/// ```compile_fail
/// use ctle::StatusReturn;
///
/// // String owns heap data and cannot be a status code.
/// let pair: StatusReturn<String, u32> = StatusReturn::from_value(7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusReturn<S: StatusCode, V> {
    status: S,
    value: V,
}

impl<S: StatusCode, V> StatusReturn<S, V> {
    #[inline]
    pub fn new(status: S, value: V) -> Self {
        Self { status, value }
    }

    /// Wrap a value; the status is `S::default()`.
    #[inline]
    pub fn from_value(value: V) -> Self {
        Self {
            status: S::default(),
            value,
        }
    }

    /// The status, by value.
    #[inline]
    pub fn status(&self) -> S {
        self.status
    }

    /// The value. Only meaningful when the status is ok, which is not checked.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (S, V) {
        (self.status, self.value)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.status.is_err()
    }

    /// `Ok(value)` on success, `Err(status)` otherwise.
    pub fn into_result(self) -> Result<V, S> {
        if self.status.is_ok() {
            Ok(self.value)
        } else {
            Err(self.status)
        }
    }

    /// The value on success, dropping it otherwise.
    pub fn ok(self) -> Option<V> {
        self.into_result().ok()
    }
}

impl<S: StatusCode, V: Default> StatusReturn<S, V> {
    /// Wrap a bare status; the value is `V::default()`.
    #[inline]
    pub fn from_status(status: S) -> Self {
        Self {
            status,
            value: V::default(),
        }
    }
}

impl<S: StatusCode, V> From<(S, V)> for StatusReturn<S, V> {
    fn from((status, value): (S, V)) -> Self {
        Self::new(status, value)
    }
}

impl<S: StatusCode, V> From<&StatusReturn<S, V>> for bool {
    fn from(pair: &StatusReturn<S, V>) -> bool {
        pair.is_ok()
    }
}

impl<S: StatusCode, V> Not for &StatusReturn<S, V> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_err()
    }
}

impl<S: StatusCode, V> Not for StatusReturn<S, V> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_err()
    }
}
