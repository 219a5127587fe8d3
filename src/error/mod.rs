//! Warning and error types.
//!
//! [`Warning`] is the validation outcome: an ordered list of messages where
//! the empty list means valid. [`CheckError`] is the only failure raised by
//! this crate's checks, and it is raised while building a check, never while
//! evaluating one.

mod check_error;
mod warning;

pub use check_error::CheckError;
pub use warning::Warning;
