//! Input DTO
//!
//! Defines the DTO type used to deserialize delivery fee requests.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::simple_types::{CartValue, DeliveryDistance, ItemCount, ValidationError};

/// Request body of the delivery fee endpoint
///
/// Numeric fields are deserialized as plain integers; the positivity
/// invariants are enforced by [`CartDto::to_cart`], not by serde. The `time`
/// field must be an RFC 3339 datetime with a UTC offset; a date without a
/// time component fails deserialization.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::dto::CartDto;
///
/// let json = r#"{
///     "cart_value": 790,
///     "delivery_distance": 2235,
///     "number_of_items": 4,
///     "time": "2024-01-15T13:00:00Z"
/// }"#;
///
/// let dto: CartDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.cart_value, 790);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartDto {
    /// Cart value in currency minor units
    pub cart_value: i64,
    /// Delivery distance in meters
    pub delivery_distance: i64,
    /// Number of items in the cart
    pub number_of_items: i64,
    /// Order time with UTC offset
    pub time: DateTime<FixedOffset>,
}

impl CartDto {
    /// Validates the DTO into a domain `Cart`
    ///
    /// Runs each numeric field through its smart constructor. The first
    /// failing field short-circuits the conversion.
    ///
    /// # Returns
    ///
    /// * `Ok(Cart)` - When every field is positive
    /// * `Err(ValidationError)` - Naming the first non-positive field
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `cart_value`, `delivery_distance`, or
    /// `number_of_items` is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::DateTime;
    /// use delivery_fee_service::dto::CartDto;
    ///
    /// let dto = CartDto {
    ///     cart_value: 790,
    ///     delivery_distance: 2235,
    ///     number_of_items: 4,
    ///     time: DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap(),
    /// };
    ///
    /// assert!(dto.to_cart().is_ok());
    ///
    /// let invalid = CartDto { cart_value: 0, ..dto };
    /// assert!(invalid.to_cart().is_err());
    /// ```
    pub fn to_cart(&self) -> Result<Cart, ValidationError> {
        let cart_value = CartValue::create("cart_value", self.cart_value)?;
        let delivery_distance = DeliveryDistance::create("delivery_distance", self.delivery_distance)?;
        let number_of_items = ItemCount::create("number_of_items", self.number_of_items)?;
        Ok(Cart::new(
            cart_value,
            delivery_distance,
            number_of_items,
            self.time,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn create_dto() -> CartDto {
        CartDto {
            cart_value: 790,
            delivery_distance: 2235,
            number_of_items: 4,
            time: DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap(),
        }
    }

    #[rstest]
    fn test_cart_dto_deserializes_valid_json() {
        let json = r#"{
            "cart_value": 790,
            "delivery_distance": 2235,
            "number_of_items": 4,
            "time": "2024-01-15T13:00:00Z"
        }"#;

        let dto: CartDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto, create_dto());
    }

    #[rstest]
    #[case(r#"{"delivery_distance": 2235, "number_of_items": 4, "time": "2024-01-15T13:00:00Z"}"#)]
    #[case(r#"{"cart_value": 790, "number_of_items": 4, "time": "2024-01-15T13:00:00Z"}"#)]
    #[case(r#"{"cart_value": 790, "delivery_distance": 2235, "time": "2024-01-15T13:00:00Z"}"#)]
    #[case(r#"{"cart_value": 790, "delivery_distance": 2235, "number_of_items": 4}"#)]
    fn test_cart_dto_rejects_missing_field(#[case] json: &str) {
        assert!(serde_json::from_str::<CartDto>(json).is_err());
    }

    #[rstest]
    fn test_cart_dto_rejects_date_without_time() {
        let json = r#"{
            "cart_value": 790,
            "delivery_distance": 2235,
            "number_of_items": 4,
            "time": "2024-01-15"
        }"#;

        assert!(serde_json::from_str::<CartDto>(json).is_err());
    }

    #[rstest]
    fn test_to_cart_valid() {
        let cart = create_dto().to_cart().unwrap();

        assert_eq!(cart.cart_value().value(), 790);
        assert_eq!(cart.delivery_distance().value(), 2235);
        assert_eq!(cart.number_of_items().value(), 4);
    }

    #[rstest]
    #[case(CartDto { cart_value: 0, ..create_dto() }, "cart_value")]
    #[case(CartDto { cart_value: -1, ..create_dto() }, "cart_value")]
    #[case(CartDto { delivery_distance: 0, ..create_dto() }, "delivery_distance")]
    #[case(CartDto { delivery_distance: -1, ..create_dto() }, "delivery_distance")]
    #[case(CartDto { number_of_items: 0, ..create_dto() }, "number_of_items")]
    #[case(CartDto { number_of_items: -1, ..create_dto() }, "number_of_items")]
    fn test_to_cart_rejects_non_positive_field(#[case] dto: CartDto, #[case] field: &str) {
        let error = dto.to_cart().unwrap_err();

        assert_eq!(error.field_name, field);
    }
}
