//! Output DTO
//!
//! Defines the DTO type used to serialize the computed delivery fee.

use serde::{Deserialize, Serialize};

/// Response body of the delivery fee endpoint
///
/// # Examples
///
/// ```
/// use delivery_fee_service::dto::DeliveryFeeDto;
///
/// let dto = DeliveryFeeDto::from_fee(710);
/// let json = serde_json::to_string(&dto).unwrap();
/// assert_eq!(json, r#"{"delivery_fee":710}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFeeDto {
    /// Delivery fee in currency minor units, non-negative
    pub delivery_fee: i64,
}

impl DeliveryFeeDto {
    /// Creates a `DeliveryFeeDto` from a computed fee
    #[must_use]
    pub const fn from_fee(delivery_fee: i64) -> Self {
        Self { delivery_fee }
    }
}
