//! Recursive error tree carried by failed outcomes.
//!
//! An [`Error`] is a node with an optional numeric identifier, an optional
//! message, optional opaque message parameters and an ordered list of child
//! detail errors. Nodes are created through the named constructors and only
//! grow afterwards, through [`Error::add_error_detail`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Error;
//!
//! let err = Error::with_details("request rejected", ["name is empty", "age is negative"]);
//!
//! assert_eq!(err.message(), Some("request rejected"));
//! assert_eq!(err.detail_count(), 2);
//! assert_eq!(err.to_string(), "request rejected (name is empty; age is negative)");
//! ```
use core::fmt;

use crate::traits::IntoMessage;
use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::{InvalidArgument, MessageParams};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an error tree.
///
/// Field order on the wire is `id`, `message`, `messageParams`, `details`;
/// absent values serialize as `null`.
///
/// Cycles are not detected. A node must never be added as its own
/// descendant.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub(crate) id: Option<i32>,
    pub(crate) message: Option<String>,
    pub(crate) message_params: Option<MessageParams>,
    pub(crate) details: Option<Vec<Error>>,
}

impl Error {
    #[inline]
    fn node(message: Option<String>, id: Option<i32>) -> Self {
        Self { id, message, message_params: None, details: None }
    }

    /// Creates a root error with a message and no identifier or details.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::new("timeout");
    /// assert_eq!(err.message(), Some("timeout"));
    /// assert!(err.details().is_none());
    ///
    /// let silent = Error::new(None::<&str>);
    /// assert_eq!(silent.message(), None);
    /// ```
    #[inline]
    pub fn new<M: IntoMessage>(message: M) -> Self {
        Self::node(message.into_message(), None)
    }

    /// Creates a root error with one child per detail message, in order.
    ///
    /// Children carry only their message. An empty iterator leaves the root
    /// without details.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::with_details("general", ["d1", "d2"]);
    /// let details = err.details().unwrap();
    ///
    /// assert_eq!(details[0].message(), Some("d1"));
    /// assert_eq!(details[1].message(), Some("d2"));
    /// assert_eq!(details[1].id(), None);
    /// ```
    pub fn with_details<M, I>(general: M, details: I) -> Self
    where
        M: IntoMessage,
        I: IntoIterator,
        I::Item: IntoMessage,
    {
        let mut error = Self::new(general);
        for detail in details {
            error.add_error_detail(Self::new(detail));
        }
        error
    }

    /// Creates a root error with a general message plus exactly one detail.
    ///
    /// Root and detail share `id`; `message_params` is attached to the
    /// detail only.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, MessageParams};
    ///
    /// let mut params = MessageParams::new();
    /// params.insert("field".into(), "email".into());
    ///
    /// let err = Error::with_detail("invalid input", "field is required", 42, Some(params.clone()));
    /// let detail = &err.details().unwrap()[0];
    ///
    /// assert_eq!(err.id(), Some(42));
    /// assert_eq!(detail.id(), Some(42));
    /// assert_eq!(detail.message_params(), Some(&params));
    /// assert!(err.message_params().is_none());
    /// ```
    pub fn with_detail<M, D>(
        general: M,
        detail: D,
        id: impl Into<Option<i32>>,
        message_params: Option<MessageParams>,
    ) -> Self
    where
        M: IntoMessage,
        D: IntoMessage,
    {
        let id = id.into();
        let mut error = Self::node(general.into_message(), id);
        let mut child = Self::node(detail.into_message(), id);
        child.message_params = message_params;
        error.add_error_detail(child);
        error
    }

    /// Creates a root-only error with an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::with_id("quota exceeded", 429);
    /// assert_eq!(err.id(), Some(429));
    /// assert!(!err.has_details());
    /// ```
    #[inline]
    pub fn with_id<M: IntoMessage>(general: M, id: impl Into<Option<i32>>) -> Self {
        Self::node(general.into_message(), id.into())
    }

    /// Builds a tree from a standard error: the root holds its `Display`
    /// text and each element of its `source()` chain becomes a detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let parse = "x".parse::<i32>().unwrap_err();
    /// let err = Error::from_source(&parse);
    ///
    /// assert_eq!(err.message(), Some("invalid digit found in string"));
    /// assert!(err.details().is_none());
    /// ```
    pub fn from_source(error: &(dyn core::error::Error + 'static)) -> Self {
        let mut root = Self::new(error.to_string());
        let mut source = error.source();
        while let Some(cause) = source {
            root.add_error_detail(Self::new(cause.to_string()));
            source = cause.source();
        }
        root
    }

    /// Appends `detail` as the last child.
    ///
    /// Not synchronized; concurrent callers need exclusive access, which the
    /// `&mut self` receiver already enforces.
    #[inline]
    pub fn add_error_detail(&mut self, detail: Error) {
        self.details.get_or_insert_with(Vec::new).push(detail);
    }

    /// Appends `detail` if present, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] naming `error` when `detail` is `None`;
    /// the tree is left untouched.
    #[inline]
    pub fn try_add_error_detail(&mut self, detail: Option<Error>) -> Result<(), InvalidArgument> {
        let detail = detail.ok_or(InvalidArgument::new("error"))?;
        self.add_error_detail(detail);
        Ok(())
    }

    /// Builder form of [`Error::add_error_detail`].
    #[inline]
    pub fn and_detail(mut self, detail: Error) -> Self {
        self.add_error_detail(detail);
        self
    }

    /// Returns the identifier, if one was assigned.
    #[inline]
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Returns the message, if one was given.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the opaque message parameters.
    #[inline]
    pub fn message_params(&self) -> Option<&MessageParams> {
        self.message_params.as_ref()
    }

    /// Returns the child errors, or `None` when none were ever added.
    #[inline]
    pub fn details(&self) -> Option<&[Error]> {
        self.details.as_deref()
    }

    /// Number of direct children.
    #[inline]
    pub fn detail_count(&self) -> usize {
        self.details.as_ref().map_or(0, Vec::len)
    }

    #[inline]
    pub fn has_details(&self) -> bool {
        self.detail_count() > 0
    }

    /// Iterates over direct children; empty when there are none.
    #[inline]
    pub fn iter_details(&self) -> core::slice::Iter<'_, Error> {
        self.details().unwrap_or_default().iter()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.id {
            write!(f, "[{id}] ")?;
        }
        f.write_str(self.message().unwrap_or("<no message>"))?;

        if self.has_details() {
            f.write_str(" (")?;
            for (index, detail) in self.iter_details().enumerate() {
                if index > 0 {
                    f.write_str("; ")?;
                }
                fmt::Display::fmt(detail, f)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
