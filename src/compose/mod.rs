//! Combinators over [`Error`] trees and [`Outcome`]s.
//!
//! These operate on the types from the outside: merging two failures into
//! one reported error, projecting detail messages, and re-typing a failed
//! outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::compose::{concat, detail_messages};
//! use outcome_rail::Error;
//!
//! let merged = concat(
//!     Error::with_details("m1", ["a", "b"]),
//!     Error::with_details("m2", ["c", "d"]),
//!     "merged",
//! );
//!
//! assert_eq!(merged.message(), Some("merged"));
//! let messages: Vec<_> = detail_messages(&merged).unwrap().flatten().collect();
//! assert_eq!(messages, ["a", "b", "c", "d"]);
//! ```
use core::iter::FusedIterator;

use crate::traits::IntoMessage;
use crate::types::outcome::State;
use crate::types::{Error, InvalidArgument, Outcome};

/// Merges two error trees under a new root.
///
/// The root takes `general` as its message and the identifier of `first`;
/// the identifier of `second` is discarded even when `first` has none. Its
/// details are those of `first` followed by those of `second`. A side with
/// no details contributes nothing.
///
/// # Examples
///
/// ```
/// use outcome_rail::compose::concat;
/// use outcome_rail::Error;
///
/// let merged = concat(Error::with_id("m1", 123), Error::with_details("m2", ["x"]), "both");
///
/// assert_eq!(merged.id(), Some(123));
/// assert_eq!(merged.detail_count(), 1);
/// ```
pub fn concat<M: IntoMessage>(first: Error, second: Error, general: M) -> Error {
    let mut merged = Error::with_id(general, first.id);
    for detail in first.details.into_iter().chain(second.details).flatten() {
        merged.add_error_detail(detail);
    }
    merged
}

/// [`concat`] for operands that may be absent.
///
/// # Errors
///
/// Returns [`InvalidArgument`] naming `first` or `second`, whichever is
/// `None` first.
///
/// # Examples
///
/// ```
/// use outcome_rail::compose::try_concat;
/// use outcome_rail::Error;
///
/// let err = try_concat(Some(Error::new("a")), None, "merged").unwrap_err();
/// assert_eq!(err.parameter(), "second");
/// ```
pub fn try_concat<M: IntoMessage>(
    first: Option<Error>,
    second: Option<Error>,
    general: M,
) -> Result<Error, InvalidArgument> {
    let first = first.ok_or(InvalidArgument::new("first"))?;
    let second = second.ok_or(InvalidArgument::new("second"))?;
    Ok(concat(first, second, general))
}

/// Projects the message of each direct detail, in order.
///
/// Returns `None` when the error has no detail list at all, which callers can
/// tell apart from details whose messages are absent.
///
/// # Examples
///
/// ```
/// use outcome_rail::compose::detail_messages;
/// use outcome_rail::Error;
///
/// assert!(detail_messages(&Error::new("root only")).is_none());
///
/// let err = Error::with_details("root", [Some("one"), None]);
/// let messages: Vec<_> = detail_messages(&err).unwrap().collect();
/// assert_eq!(messages, [Some("one"), None]);
/// ```
#[inline]
pub fn detail_messages(error: &Error) -> Option<DetailMessages<'_>> {
    error.details().map(|details| DetailMessages { inner: details.iter() })
}

/// Re-types a failed outcome as an `Outcome<U>` carrying the same error.
///
/// Only the error tree moves across; warnings of the input are not carried.
///
/// # Errors
///
/// A successful outcome has no error to carry and yields
/// [`InvalidArgument`] naming `outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::compose::cast_error;
/// use outcome_rail::Outcome;
///
/// let failed: Outcome = Outcome::error_with("error text", ["detail"]);
/// let expected = failed.error_obj().cloned();
///
/// let typed: Outcome<String> = cast_error(failed).unwrap();
/// assert!(typed.is_failure());
/// assert_eq!(typed.error_obj().cloned(), expected);
///
/// assert!(cast_error::<(), String>(Outcome::success()).is_err());
/// ```
pub fn cast_error<T, U>(outcome: Outcome<T>) -> Result<Outcome<U>, InvalidArgument> {
    match outcome.state {
        State::Failure(error) => Ok(Outcome::error(error)),
        State::Success(_) => Err(InvalidArgument::new("outcome")),
    }
}

/// Iterator over the messages of an error's direct details.
///
/// Created by [`detail_messages`].
#[derive(Debug, Clone)]
pub struct DetailMessages<'a> {
    inner: core::slice::Iter<'a, Error>,
}

impl<'a> Iterator for DetailMessages<'a> {
    type Item = Option<&'a str>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Error::message)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for DetailMessages<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Error::message)
    }
}

impl ExactSizeIterator for DetailMessages<'_> {}

impl FusedIterator for DetailMessages<'_> {}
