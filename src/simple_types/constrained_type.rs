//! Helper functions for generating constrained types
//!
//! Each function is generic over the newtype constructor so that every
//! constrained type in the crate shares the same validation path.

use super::error::ValidationError;

/// Creates an integer type constrained to strictly positive values
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes an integer and produces type T
/// * `value` - Input integer
///
/// # Returns
///
/// * `Ok(T)` - On successful validation
/// * `Err(ValidationError)` - For zero or negative input
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is less than or equal to zero.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::simple_types::ValidationError;
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(i64);
///
/// fn create_meters(value: i64) -> Result<Meters, ValidationError> {
///     delivery_fee_service::simple_types::constrained_type::create_positive_integer(
///         "meters", Meters, value,
///     )
/// }
///
/// assert!(create_meters(100).is_ok());
/// assert!(create_meters(0).is_err());
/// assert!(create_meters(-1).is_err());
/// ```
pub fn create_positive_integer<T, F>(
    field_name: &str,
    constructor: F,
    value: i64,
) -> Result<T, ValidationError>
where
    F: FnOnce(i64) -> T,
{
    if value <= 0 {
        Err(ValidationError::new(field_name, "Must be positive"))
    } else {
        Ok(constructor(value))
    }
}
