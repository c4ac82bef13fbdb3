//! Extension traits and input conversions.
//!
//! - [`IntoMessage`]: accepted message inputs, including explicitly absent ones
//! - [`ErrorExt`]: `concat` / `detail_messages` as methods on [`Error`](crate::Error)
//! - [`OutcomeExt`]: `cast_error` as a method on [`Outcome`](crate::Outcome)
//! - [`ResultExt`]: lifting `Result<T, E: Display>` into an outcome
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorExt, OutcomeExt};
//! use outcome_rail::{Error, Outcome};
//!
//! let merged = Error::with_id("first", 1).concat(Error::with_id("second", 2), "both");
//! assert_eq!(merged.id(), Some(1));
//!
//! let typed: Outcome<u8> = Outcome::<()>::error(merged).cast_error().unwrap();
//! assert!(typed.data().is_none());
//! ```

pub mod error_ext;
pub mod into_message;
pub mod outcome_ext;
pub mod result_ext;

pub use error_ext::ErrorExt;
pub use into_message::IntoMessage;
pub use outcome_ext::OutcomeExt;
pub use result_ext::ResultExt;
