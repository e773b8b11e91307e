//! # ctle-error
//!
//! Status codes for ctle: the [`StatusCode`] contract every status type
//! satisfies, a concrete [`Status`] enum, and [`StatusError`], the error a
//! failing status becomes when a caller prefers `Result` propagation.
//!
//! ## Design Philosophy
//!
//! - **StatusCode**: a status is a small `Copy` value with a truthiness
//!   (`true`, non-zero, `Status::Ok` mean success)
//! - **Status**: know what went wrong (e.g., CantOpen, InvalidParam)
//! - **StatusError**: carry the status up a `Result` chain with context
//!
//! ## Usage
//!
//! ```rust
//! use ctle_error::{Status, StatusCode, StatusError};
//!
//! fn open(path: &str) -> Result<(), StatusError> {
//!     Err(StatusError::new(Status::CantOpen, "no such file")
//!         .with_operation("store::open")
//!         .with_context("path", path))
//! }
//!
//! assert!(Status::Ok.is_ok());
//! assert!(!0u32.is_ok());
//! assert_eq!(open("a.db").unwrap_err().status(), Status::CantOpen);
//! ```

mod code;
mod error;
mod status;

pub use code::StatusCode;
pub use error::StatusError;
pub use status::Status;

/// Result type alias using ctle StatusError
pub type Result<T> = std::result::Result<T, StatusError>;
