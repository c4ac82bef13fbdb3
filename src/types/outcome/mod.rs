//! Success/failure outcome with advisory warnings.
//!
//! [`Outcome<T>`] is exactly one of two states fixed at construction:
//! success carrying a payload of type `T`, or failure carrying an
//! [`Error`] tree. Warnings are orthogonal to the state and are the only part
//! that may change afterwards. The untyped form is `Outcome<()>`, which is
//! also the default type parameter.

use crate::traits::IntoMessage;
use crate::types::alloc_type::String;
use crate::types::{Error, InvalidArgument, MessageParams, WarningVec};

#[cfg(feature = "serde")]
mod wire;

/// Outcome of an operation: a payload or an error tree, plus warnings.
///
/// There is no constructor that sets both a payload and an error, so a
/// failed outcome never holds data.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16> {
///     match raw.parse::<u16>() {
///         Ok(port) if port < 1024 => Outcome::success_with(port).with_warnings(["privileged port"]),
///         Ok(port) => Outcome::success_with(port),
///         Err(_) => Outcome::error_with("invalid port", [raw]),
///     }
/// }
///
/// assert_eq!(parse_port("80").warnings(), ["privileged port"]);
/// assert!(parse_port("http").is_failure());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    pub(crate) warnings: Option<WarningVec>,
    pub(crate) state: State<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum State<T> {
    Success(T),
    Failure(Error),
}

impl Outcome<()> {
    /// Creates a successful outcome without payload or warnings.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::success().with_warnings(["w1", "w2"]);
    /// assert!(ok.is_success());
    /// assert!(ok.error_obj().is_none());
    /// ```
    #[inline]
    pub fn success() -> Self {
        Self::success_with(())
    }
}

impl<T> Outcome<T> {
    #[inline]
    fn from_state(state: State<T>) -> Self {
        Self { warnings: None, state }
    }

    /// Creates a successful outcome carrying `data`.
    #[inline]
    pub fn success_with(data: T) -> Self {
        Self::from_state(State::Success(data))
    }

    /// Wraps a pre-built error tree as a failed outcome.
    #[inline]
    pub fn error(error: Error) -> Self {
        Self::from_state(State::Failure(error))
    }

    /// Wraps `error` as a failed outcome, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] naming `error` when it is `None`. An
    /// outcome is never told to fail without failure content.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// assert!(Outcome::<()>::try_error(None).is_err());
    /// assert!(Outcome::<()>::try_error(Some(Error::new("x"))).unwrap().is_failure());
    /// ```
    #[inline]
    pub fn try_error(error: Option<Error>) -> Result<Self, InvalidArgument> {
        error.map(Self::error).ok_or(InvalidArgument::new("error"))
    }

    /// Fails with a general message and one detail error per message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome = Outcome::error_with("g", ["d1", "d2"]);
    /// let error = failed.error_obj().unwrap();
    ///
    /// assert_eq!(error.message(), Some("g"));
    /// assert_eq!(error.detail_count(), 2);
    /// ```
    #[inline]
    pub fn error_with<M, I>(general: M, details: I) -> Self
    where
        M: IntoMessage,
        I: IntoIterator,
        I::Item: IntoMessage,
    {
        Self::error(Error::with_details(general, details))
    }

    /// Fails with a general message, one detail, an identifier shared by
    /// both, and parameters on the detail. See [`Error::with_detail`].
    #[inline]
    pub fn error_with_id<M, D>(
        general: M,
        detail: D,
        id: impl Into<Option<i32>>,
        message_params: Option<MessageParams>,
    ) -> Self
    where
        M: IntoMessage,
        D: IntoMessage,
    {
        Self::error(Error::with_detail(general, detail, id, message_params))
    }

    /// Unions `warnings` into the current set, keeping first-occurrence
    /// order. Duplicates collapse and absent entries are skipped; an empty
    /// input leaves the outcome untouched.
    ///
    /// Permitted in both states.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut ok = Outcome::success();
    /// ok.add_warnings(["w1", "w2"]);
    /// ok.add_warnings(["w2", "w3"]);
    ///
    /// assert_eq!(ok.warnings(), ["w1", "w2", "w3"]);
    /// ```
    pub fn add_warnings<I>(&mut self, warnings: I)
    where
        I: IntoIterator,
        I::Item: IntoMessage,
    {
        let mut incoming = warnings.into_iter().filter_map(IntoMessage::into_message).peekable();
        if incoming.peek().is_none() {
            return;
        }

        let current = self.warnings.get_or_insert_with(WarningVec::new);
        for warning in incoming {
            if !current.contains(&warning) {
                current.push(warning);
            }
        }
    }

    /// Builder form of [`Outcome::add_warnings`].
    #[inline]
    pub fn with_warnings<I>(mut self, warnings: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoMessage,
    {
        self.add_warnings(warnings);
        self
    }

    /// `true` iff no error is present.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the error tree of a failed outcome.
    #[inline]
    pub fn error_obj(&self) -> Option<&Error> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    /// Returns the payload of a successful outcome.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            State::Success(data) => Some(data),
            State::Failure(_) => None,
        }
    }

    /// Returns the warnings; empty when none were ever added.
    #[inline]
    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings().is_empty()
    }

    /// Consumes the outcome, returning the payload if it succeeded.
    #[inline]
    pub fn into_data(self) -> Option<T> {
        match self.state {
            State::Success(data) => Some(data),
            State::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the error tree if it failed.
    #[inline]
    pub fn into_error(self) -> Option<Error> {
        match self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`, dropping warnings.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self.state {
            State::Success(data) => Ok(data),
            State::Failure(error) => Err(error),
        }
    }

    /// Transforms the payload, keeping the error and warnings.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        let state = match self.state {
            State::Success(data) => State::Success(f(data)),
            State::Failure(error) => State::Failure(error),
        };
        Outcome { warnings: self.warnings, state }
    }

    /// Chains a dependent step on success.
    ///
    /// Warnings of `self` come first, followed by those of the next
    /// outcome, with duplicates collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let chained = Outcome::success_with(2)
    ///     .with_warnings(["slow"])
    ///     .and_then(|n| Outcome::success_with(n * 21).with_warnings(["slow", "stale"]));
    ///
    /// assert_eq!(chained.data(), Some(&42));
    /// assert_eq!(chained.warnings(), ["slow", "stale"]);
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Success(data) => {
                let next = f(data);
                let mut merged = Outcome { warnings: self.warnings, state: next.state };
                merged.add_warnings(next.warnings.into_iter().flatten());
                merged
            },
            State::Failure(error) => Outcome { warnings: self.warnings, state: State::Failure(error) },
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success_with(data),
            Err(error) => Self::error(error.into()),
        }
    }
}
