//! Serializable operation outcomes with warnings and nested error trees.
//!
//! An [`Outcome<T>`] is either a success carrying a payload of type `T` or a
//! failure carrying an [`Error`] tree; both may carry warnings. Expected
//! failures travel as data through return values, across a wire if needed,
//! instead of being raised.
//!
//! # Examples
//!
//! ## Building Error Trees
//!
//! ```
//! use outcome_rail::Error;
//!
//! let err = Error::with_details("general", ["d1", "d2"]);
//!
//! assert_eq!(err.message(), Some("general"));
//! assert_eq!(err.details().unwrap()[1].message(), Some("d2"));
//! ```
//!
//! ## Outcomes With Warnings
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let ok = Outcome::success_with(42).with_warnings(["careful"]);
//!
//! assert_eq!(ok.data(), Some(&42));
//! assert_eq!(ok.warnings(), ["careful"]);
//! ```
//!
//! ## Merging Failures
//!
//! ```
//! use outcome_rail::traits::ErrorExt;
//! use outcome_rail::Error;
//!
//! let merged = Error::with_details("m1", ["a", "b"])
//!     .concat(Error::with_details("m2", ["c", "d"]), "merged");
//!
//! let messages: Vec<_> = merged.detail_messages().unwrap().flatten().collect();
//! assert_eq!(messages, ["a", "b", "c", "d"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Combinators over errors and outcomes
pub mod compose;
/// `fail!` and `ensure!` macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Status-code mapping for transport adapters
pub mod respond;
/// Extension traits and message conversions
pub mod traits;
/// Outcome, Error and supporting types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use traits::*;
pub use types::{
    Error, InvalidArgument, MessageParams, Outcome, ValidationError, WarningVec,
};
