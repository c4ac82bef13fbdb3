//! Trait for converting types into optional message text.
//!
//! Messages on [`Error`](crate::Error) nodes and warnings on
//! [`Outcome`](crate::Outcome) are stored as `Option<String>`: a missing
//! message is not the same thing as an empty one. This trait lets the
//! constructors accept plain strings while still allowing callers to pass an
//! explicitly absent message.
//!
//! # Implementations
//!
//! - `String`, `&String`, `&str`, `Cow<str>` - always present
//! - `Option<M>` where `M: IntoMessage` - `None` stays absent
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoMessage;
//!
//! assert_eq!("disk full".into_message().as_deref(), Some("disk full"));
//! assert_eq!("".into_message().as_deref(), Some(""));
//! assert_eq!(None::<&str>.into_message(), None);
//! ```
use crate::types::alloc_type::{Cow, String, ToString};

/// Converts a type into an optional message string.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a message",
    label = "this type does not implement `IntoMessage`",
    note = "pass a `&str`, `String`, or an `Option` of either"
)]
pub trait IntoMessage {
    /// Converts `self` into a message, `None` meaning "no message".
    fn into_message(self) -> Option<String>;
}

impl IntoMessage for String {
    #[inline]
    fn into_message(self) -> Option<String> {
        Some(self)
    }
}

impl IntoMessage for &String {
    #[inline]
    fn into_message(self) -> Option<String> {
        Some(self.clone())
    }
}

impl IntoMessage for &str {
    #[inline]
    fn into_message(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoMessage for Cow<'_, str> {
    #[inline]
    fn into_message(self) -> Option<String> {
        Some(self.into_owned())
    }
}

impl<M: IntoMessage> IntoMessage for Option<M> {
    #[inline]
    fn into_message(self) -> Option<String> {
        self.and_then(IntoMessage::into_message)
    }
}
