//! Cart field type definitions
//!
//! Defines `CartValue`, `DeliveryDistance`, and `ItemCount`.

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// CartValue
// =============================================================================

/// Integer type representing a cart value in currency minor units
///
/// Constrained to strictly positive values.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::simple_types::CartValue;
///
/// let value = CartValue::create("cart_value", 790).unwrap();
/// assert_eq!(value.value(), 790);
///
/// // Non-positive input causes an error
/// assert!(CartValue::create("cart_value", 0).is_err());
/// assert!(CartValue::create("cart_value", -1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CartValue(i64);

impl CartValue {
    /// Creates a `CartValue` from an integer
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input integer in currency minor units
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is zero or negative.
    pub fn create(field_name: &str, value: i64) -> Result<Self, ValidationError> {
        constrained_type::create_positive_integer(field_name, Self, value)
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

// =============================================================================
// DeliveryDistance
// =============================================================================

/// Integer type representing a delivery distance in meters
///
/// Constrained to strictly positive values.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::simple_types::DeliveryDistance;
///
/// let distance = DeliveryDistance::create("delivery_distance", 2235).unwrap();
/// assert_eq!(distance.value(), 2235);
///
/// assert!(DeliveryDistance::create("delivery_distance", 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeliveryDistance(i64);

impl DeliveryDistance {
    /// Creates a `DeliveryDistance` from an integer
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input integer in meters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is zero or negative.
    pub fn create(field_name: &str, value: i64) -> Result<Self, ValidationError> {
        constrained_type::create_positive_integer(field_name, Self, value)
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

// =============================================================================
// ItemCount
// =============================================================================

/// Integer type representing the number of items in a cart
///
/// Constrained to strictly positive values.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::simple_types::ItemCount;
///
/// let count = ItemCount::create("number_of_items", 4).unwrap();
/// assert_eq!(count.value(), 4);
///
/// assert!(ItemCount::create("number_of_items", -5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemCount(i64);

impl ItemCount {
    /// Creates an `ItemCount` from an integer
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input integer
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is zero or negative.
    pub fn create(field_name: &str, value: i64) -> Result<Self, ValidationError> {
        constrained_type::create_positive_integer(field_name, Self, value)
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}
