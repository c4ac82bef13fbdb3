//! Method-call form of [`compose::cast_error`](crate::compose::cast_error).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeExt;
//! use outcome_rail::Outcome;
//!
//! fn load_name() -> Outcome<String> {
//!     let checked: Outcome = Outcome::error_with("user not found", ["id 7"]);
//!     if checked.is_failure() {
//!         return checked.cast_error().unwrap();
//!     }
//!     Outcome::success_with("alice".to_string())
//! }
//!
//! assert!(load_name().is_failure());
//! ```
use crate::compose;
use crate::types::{InvalidArgument, Outcome};

/// Extension methods for re-typing outcomes.
pub trait OutcomeExt {
    /// Re-wraps the error of a failed outcome as `Outcome<U>`.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument`] on a successful outcome.
    fn cast_error<U>(self) -> Result<Outcome<U>, InvalidArgument>;
}

impl<T> OutcomeExt for Outcome<T> {
    #[inline]
    fn cast_error<U>(self) -> Result<Outcome<U>, InvalidArgument> {
        compose::cast_error(self)
    }
}
