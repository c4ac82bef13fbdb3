//! Method-call form of the [`compose`](crate::compose) combinators for [`Error`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ErrorExt;
//! use outcome_rail::Error;
//!
//! let merged = Error::with_details("m1", ["a", "b"])
//!     .concat(Error::with_details("m2", ["c", "d"]), "merged");
//!
//! assert_eq!(merged.detail_count(), 4);
//! assert_eq!(merged.detail_messages().unwrap().len(), 4);
//! ```
use crate::compose::{self, DetailMessages};
use crate::traits::IntoMessage;
use crate::types::Error;

/// Extension methods for merging and inspecting error trees.
pub trait ErrorExt {
    /// Merges `self` and `other` under a new root. See [`compose::concat`].
    fn concat<M: IntoMessage>(self, other: Error, general: M) -> Error;

    /// Messages of the direct details, or `None` without a detail list.
    /// See [`compose::detail_messages`].
    fn detail_messages(&self) -> Option<DetailMessages<'_>>;
}

impl ErrorExt for Error {
    #[inline]
    fn concat<M: IntoMessage>(self, other: Error, general: M) -> Error {
        compose::concat(self, other, general)
    }

    #[inline]
    fn detail_messages(&self) -> Option<DetailMessages<'_>> {
        compose::detail_messages(self)
    }
}
