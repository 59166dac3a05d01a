//! Validation error type definition

use thiserror::Error;

/// Struct representing a validation error
///
/// Used commonly by all constrained types and by the fee functions when a
/// non-positive value reaches them directly. Holds a field name and an error
/// message.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::simple_types::ValidationError;
///
/// let error = ValidationError::new("cart_value", "Must be positive");
/// assert_eq!(error.field_name, "cart_value");
/// assert_eq!(error.message, "Must be positive");
/// assert_eq!(error.to_string(), "cart_value: Must be positive");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field that failed validation
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    ///
    /// # Arguments
    ///
    /// * `field_name` - Name of the field that failed validation
    /// * `message` - Error message
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
