//! The contract shared by every status type

use std::fmt;

use crate::Status;

/// A status or result code: a small value passed by copy up a call chain.
///
/// The `Copy` supertrait is what keeps status codes cheap. Owning types
/// (`String`, `Vec<_>`, boxed errors) can never implement this trait, so a
/// `StatusReturn<String, _>` is rejected at compile time instead of quietly
/// cloning heap data at every propagation step.
///
/// Truthiness follows the usual convention: `true` for `bool`, non-zero for
/// integers, [`Status::Ok`] for [`Status`].
///
/// ```compile_fail
/// use ctle_error::StatusCode;
///
/// #[derive(Default)]
/// struct Message(String);
///
/// impl std::fmt::Display for Message {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// impl StatusCode for Message {
///     fn is_ok(&self) -> bool {
///         self.0.is_empty()
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a status code",
    label = "not a status code",
    note = "status codes must be `Copy + Default + Display`, like bool, an integer, a fieldless enum, or a struct of those"
)]
pub trait StatusCode: Copy + Default + fmt::Display {
    /// Returns true if this status denotes success.
    fn is_ok(&self) -> bool;

    /// Returns true if this status denotes a failure.
    fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Map onto the ctle [`Status`] taxonomy.
    ///
    /// Types without a richer mapping only know success from failure.
    fn to_status(&self) -> Status {
        if self.is_ok() {
            Status::Ok
        } else {
            Status::Undefined
        }
    }
}

impl StatusCode for bool {
    #[inline]
    fn is_ok(&self) -> bool {
        *self
    }
}

macro_rules! impl_status_code_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StatusCode for $ty {
                #[inline]
                fn is_ok(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_status_code_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl StatusCode for Status {
    #[inline]
    fn is_ok(&self) -> bool {
        Status::is_ok(*self)
    }

    #[inline]
    fn to_status(&self) -> Status {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_truthiness() {
        assert!(true.is_ok());
        assert!(false.is_err());
        assert_eq!(StatusCode::to_status(&false), Status::Undefined);
    }

    #[test]
    fn test_integer_truthiness() {
        assert!(1i32.is_ok());
        assert!((-7i64).is_ok());
        assert!(0u8.is_err());
        assert_eq!(StatusCode::to_status(&3usize), Status::Ok);
    }

    #[test]
    fn test_status_maps_to_itself() {
        assert!(StatusCode::is_ok(&Status::Ok));
        assert!(StatusCode::is_err(&Status::CantRead));
        assert_eq!(StatusCode::to_status(&Status::Corrupted), Status::Corrupted);
    }

    #[test]
    fn test_defaults() {
        // The default falls on opposite sides for bool and Status.
        assert!(bool::default().is_err());
        assert!(i32::default().is_err());
        assert!(StatusCode::is_ok(&Status::default()));
    }
}
