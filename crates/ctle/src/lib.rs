//! # ctle
//!
//! Status returns and call-site status propagation with structured logging.
//!
//! - [`StatusReturn<S, V>`] pairs a status code with the value an operation
//!   produced; [`StatusOnly<S>`] is the form without a value.
//! - The `ct_status_*!` macros check a returned status, log a failure once at
//!   the call site that detected it, and return the status to the caller.
//! - The `ct_log_*!` macros write leveled entries through [`log`], whose
//!   default sink forwards to `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use ctle::{Status, StatusReturn, ct_status_return_call, ct_validate};
//!
//! fn read_header(bytes: &[u8]) -> StatusReturn<Status, u16> {
//!     ct_validate!(bytes.len() >= 2, Status::Corrupted, "header needs 2 bytes, got {}", bytes.len());
//!     StatusReturn::new(Status::Ok, u16::from_le_bytes([bytes[0], bytes[1]]))
//! }
//!
//! fn block_count(bytes: &[u8]) -> StatusReturn<Status, usize> {
//!     let mut header = 0u16;
//!     ct_status_return_call!(header, read_header(bytes));
//!     StatusReturn::new(Status::Ok, usize::from(header))
//! }
//!
//! assert_eq!(*block_count(&[3, 0]).value(), 3);
//! assert_eq!(block_count(&[3]).status(), Status::Corrupted);
//! ```
//!
//! ## Principles
//!
//! - A status type is any [`StatusCode`]: `Copy`, with a truthiness
//! - Detect a failure once, log it there, propagate it unchanged
//! - [`ct_sanity_check!`] is for programming defects and only exists in
//!   debug builds

mod macros;
mod propagate;
mod status_only;
mod status_return;

pub use ctle_error::{Result, Status, StatusCode, StatusError};
pub use ctle_log as log;
pub use ctle_log::LogLevel;
pub use propagate::{AsStatus, FromStatus};
pub use status_only::StatusOnly;
pub use status_return::StatusReturn;
