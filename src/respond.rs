//! Transport-agnostic mapping of an [`Outcome`] to a status code and body.
//!
//! A success becomes `policy.success` with the whole outcome as body; a
//! failure becomes `policy.error` with only the error tree as body. The
//! mapping reads nothing but [`Outcome::is_success`] and
//! [`Outcome::error_obj`], so any HTTP framework can wrap a [`Reply`] in its
//! own response type.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::respond::{ReplyBody, StatusPolicy};
//! use outcome_rail::Outcome;
//!
//! let failed: Outcome = Outcome::error_with("g", ["d1", "d2"]);
//! let reply = StatusPolicy::default().reply(&failed);
//!
//! assert_eq!(reply.status, 400);
//! assert!(matches!(reply.body, ReplyBody::Error(error) if error.detail_count() == 2));
//! ```
use crate::types::{Error, Outcome};
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Status codes used for successful and failed outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusPolicy {
    pub success: u16,
    pub error: u16,
}

impl StatusPolicy {
    /// `200` for success, `400` for failure.
    pub const DEFAULT: Self = Self::new(200, 400);

    #[inline]
    pub const fn new(success: u16, error: u16) -> Self {
        Self { success, error }
    }

    /// Overrides the success status.
    #[inline]
    pub const fn with_success(self, status: u16) -> Self {
        Self::new(status, self.error)
    }

    /// Overrides the failure status.
    #[inline]
    pub const fn with_error(self, status: u16) -> Self {
        Self::new(self.success, status)
    }

    /// Maps `outcome` to a status code and a borrowed body.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::respond::{ReplyBody, StatusPolicy};
    /// use outcome_rail::Outcome;
    ///
    /// let created = Outcome::success_with(7_u64);
    /// let reply = StatusPolicy::default().with_success(201).reply(&created);
    ///
    /// assert_eq!(reply.status, 201);
    /// assert!(matches!(reply.body, ReplyBody::Outcome(_)));
    /// ```
    pub fn reply<'a, T>(&self, outcome: &'a Outcome<T>) -> Reply<'a, T> {
        match outcome.error_obj() {
            None => Reply { status: self.success, body: ReplyBody::Outcome(outcome) },
            Some(error) => Reply { status: self.error, body: ReplyBody::Error(error) },
        }
    }
}

impl Default for StatusPolicy {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Status code plus body produced by [`StatusPolicy::reply`].
#[derive(Debug)]
pub struct Reply<'a, T> {
    pub status: u16,
    pub body: ReplyBody<'a, T>,
}

/// Body of a [`Reply`].
///
/// Serializes as the referenced value itself, without a variant tag.
#[derive(Debug)]
pub enum ReplyBody<'a, T> {
    Outcome(&'a Outcome<T>),
    Error(&'a Error),
}

impl<T> Clone for ReplyBody<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReplyBody<'_, T> {}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for ReplyBody<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Outcome(outcome) => outcome.serialize(serializer),
            Self::Error(error) => error.serialize(serializer),
        }
    }
}

#[cfg(all(feature = "serde", feature = "std"))]
impl<T: Serialize> Reply<'_, T> {
    /// Renders the body as JSON.
    ///
    /// # Errors
    ///
    /// Propagates the payload's serialization failure.
    pub fn to_json(&self) -> Result<crate::types::alloc_type::String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
