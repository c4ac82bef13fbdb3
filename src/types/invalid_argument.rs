use core::fmt;

/// Raised when a required argument was absent.
///
/// This signals a programmer error at the call site, not a business failure,
/// so it is returned through `core::result::Result` and never folded into a
/// failed [`Outcome`](crate::Outcome).
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, InvalidArgument};
///
/// let mut root = Error::new("validation failed");
/// let err = root.try_add_error_detail(None).unwrap_err();
///
/// assert_eq!(err, InvalidArgument::new("error"));
/// assert_eq!(err.parameter(), "error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidArgument {
    parameter: &'static str,
}

impl InvalidArgument {
    /// Creates the failure for the named parameter.
    #[inline]
    pub const fn new(parameter: &'static str) -> Self {
        Self { parameter }
    }

    /// Name of the parameter that was absent.
    #[inline]
    pub const fn parameter(&self) -> &'static str {
        self.parameter
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "argument `{}` must be present", self.parameter)
    }
}

impl core::error::Error for InvalidArgument {}
