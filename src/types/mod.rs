//! Outcome and error-tree types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let ok = Outcome::success_with(42).with_warnings(["served from cache"]);
//! assert_eq!(ok.data(), Some(&42));
//! assert_eq!(ok.warnings(), ["served from cache"]);
//!
//! let failed: Outcome<i32> = Outcome::error(Error::with_details("lookup failed", ["no such key"]));
//! assert!(!failed.is_success());
//! ```
use smallvec::SmallVec;

use crate::types::alloc_type::{BTreeMap, String};

pub mod alloc_type;
pub mod error;
pub mod invalid_argument;
pub mod outcome;
pub mod validation_error;

pub use error::*;
pub use invalid_argument::*;
pub use outcome::*;
pub use validation_error::*;

/// SmallVec-backed warning list.
///
/// Uses inline storage for up to 2 warnings, which covers most outcomes
/// without a heap allocation.
pub type WarningVec = SmallVec<[String; 2]>;

/// Opaque structured data attached to an [`Error`] for message templating.
///
/// Values are passed through untouched.
pub type MessageParams = BTreeMap<String, serde_json::Value>;
