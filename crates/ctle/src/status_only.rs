//! The status-only form, for operations with nothing to return.

use std::ops::Not;

use crate::StatusCode;

/// A bare status in the same shape as [`StatusReturn`](crate::StatusReturn).
///
/// ```compile_fail
/// use ctle::StatusOnly;
///
/// let status = StatusOnly::new(vec![1u8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusOnly<S: StatusCode> {
    status: S,
}

impl<S: StatusCode> StatusOnly<S> {
    #[inline]
    pub fn new(status: S) -> Self {
        Self { status }
    }

    #[inline]
    pub fn status(&self) -> S {
        self.status
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.status.is_err()
    }

    pub fn into_result(self) -> Result<(), S> {
        if self.status.is_ok() {
            Ok(())
        } else {
            Err(self.status)
        }
    }
}

impl<S: StatusCode> From<S> for StatusOnly<S> {
    fn from(status: S) -> Self {
        Self::new(status)
    }
}

impl<S: StatusCode> From<&StatusOnly<S>> for bool {
    fn from(status: &StatusOnly<S>) -> bool {
        status.is_ok()
    }
}

impl<S: StatusCode> Not for StatusOnly<S> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_err()
    }
}

impl<S: StatusCode> Not for &StatusOnly<S> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_status_only() {
        let ok = StatusOnly::new(Status::Ok);
        let failed: StatusOnly<Status> = Status::NotInitialized.into();

        assert_eq!(ok.status(), Status::Ok);
        assert_eq!(failed.status(), Status::NotInitialized);
        assert!(bool::from(&ok));
        assert!(!failed);
        assert!(!(!ok));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(StatusOnly::new(1u16).into_result(), Ok(()));
        assert_eq!(StatusOnly::new(0u16).into_result(), Err(0));
    }
}
