//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(id: u32) -> Outcome<String> {
//!     ensure!(id != 0, "load failed", "id must be non-zero");
//!     Outcome::success_with(format!("record {id}"))
//! }
//!
//! assert!(load(0).is_failure());
//! ```

// Macros
pub use crate::{ensure, fail};

// Core types
pub use crate::types::{Error, InvalidArgument, MessageParams, Outcome};

// Traits
pub use crate::traits::{ErrorExt, IntoMessage, OutcomeExt, ResultExt};
