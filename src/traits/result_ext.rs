//! Extension trait for lifting standard `Result`s into [`Outcome`]s.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//!
//! let parsed = "forty-two".parse::<u32>().or_fail("reading the answer");
//! let error = parsed.error_obj().unwrap();
//!
//! assert_eq!(error.message(), Some("reading the answer"));
//! assert_eq!(error.details().unwrap()[0].message(), Some("invalid digit found in string"));
//! ```
use core::fmt::Display;

use crate::traits::IntoMessage;
use crate::types::alloc_type::ToString;
use crate::types::{Error, Outcome};

/// Extension trait turning `Result<T, E>` into `Outcome<T>`.
pub trait ResultExt<T, E> {
    /// On `Err`, fails with `general` as the root message and the error's
    /// `Display` text as its single detail.
    fn or_fail<M: IntoMessage>(self, general: M) -> Outcome<T>;

    /// Like [`or_fail`](ResultExt::or_fail), building the general message
    /// only when an error occurred.
    fn or_fail_with<M, F>(self, general: F) -> Outcome<T>
    where
        M: IntoMessage,
        F: FnOnce() -> M;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn or_fail<M: IntoMessage>(self, general: M) -> Outcome<T> {
        match self {
            Ok(data) => Outcome::success_with(data),
            Err(error) => Outcome::error(Error::with_details(general, [error.to_string()])),
        }
    }

    #[inline]
    fn or_fail_with<M, F>(self, general: F) -> Outcome<T>
    where
        M: IntoMessage,
        F: FnOnce() -> M,
    {
        match self {
            Ok(data) => Outcome::success_with(data),
            Err(error) => Outcome::error(Error::with_details(general(), [error.to_string()])),
        }
    }
}
