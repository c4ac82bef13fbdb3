use crate::types::alloc_type::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Passive record describing a failed property check.
///
/// Nothing in this crate produces or inspects it; it exists so validation
/// layers can ship property-level findings in the same wire format.
///
/// # Examples
///
/// ```
/// use outcome_rail::ValidationError;
///
/// let finding = ValidationError::new("email", "error");
/// assert_eq!(finding.property_name(), "email");
/// assert_eq!(finding.severity(), "error");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    property_name: String,
    severity: String,
}

impl ValidationError {
    #[inline]
    pub fn new(property_name: impl Into<String>, severity: impl Into<String>) -> Self {
        Self { property_name: property_name.into(), severity: severity.into() }
    }

    #[inline]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    #[inline]
    pub fn severity(&self) -> &str {
        &self.severity
    }
}
