//! Tracing integration for outcome-rail.
//!
//! Emits one event per inspected outcome: `debug` for successes and `warn`
//! for failures, with the error tree flattened into fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::compose::detail_messages;
use crate::types::alloc_type::Vec;
use crate::types::Outcome;

/// Extension trait recording outcomes as tracing events.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
///
/// fn register(name: &str) -> Outcome<u64> {
///     repository.insert(name).trace_outcome("register")
/// }
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits an event describing `self` and returns it unchanged.
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T> OutcomeTraceExt for Outcome<T> {
    fn trace_outcome(self, operation: &str) -> Self {
        match self.error_obj() {
            None => tracing::debug!(
                operation,
                warnings = self.warnings().len(),
                "operation succeeded"
            ),
            Some(error) => {
                let details: Option<Vec<&str>> =
                    detail_messages(error).map(|messages| messages.flatten().collect());
                tracing::warn!(
                    operation,
                    error_id = ?error.id(),
                    error_message = error.message().unwrap_or_default(),
                    details = ?details,
                    warnings = self.warnings().len(),
                    "operation failed"
                );
            },
        }
        self
    }
}
