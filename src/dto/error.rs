//! Error DTOs
//!
//! Defines the type serialized into 422 response bodies.

use serde::{Deserialize, Serialize};

use crate::simple_types::ValidationError;

/// Delivery fee endpoint error DTO
///
/// Discriminated by the `type` field. `Validation` covers well-formed
/// requests whose fields violate a domain invariant; `MalformedRequest`
/// covers bodies that never deserialized into a cart (invalid JSON, missing
/// fields, malformed datetimes).
///
/// # Examples
///
/// ```
/// use delivery_fee_service::dto::DeliveryFeeErrorDto;
/// use delivery_fee_service::simple_types::ValidationError;
///
/// let error = ValidationError::new("cart_value", "Must be positive");
/// let dto = DeliveryFeeErrorDto::from_domain(&error);
///
/// let json = serde_json::to_string(&dto).unwrap();
/// assert!(json.contains("\"type\":\"Validation\""));
/// assert!(json.contains("\"field_name\":\"cart_value\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeliveryFeeErrorDto {
    /// Domain validation error
    Validation {
        /// Field name
        field_name: String,
        /// Error message
        message: String,
    },
    /// Request body could not be deserialized
    MalformedRequest {
        /// Error message
        message: String,
    },
}

impl DeliveryFeeErrorDto {
    /// Creates a `DeliveryFeeErrorDto` from the domain `ValidationError`
    ///
    /// Converts to DTO as a pure function.
    #[must_use]
    pub fn from_domain(error: &ValidationError) -> Self {
        Self::Validation {
            field_name: error.field_name.clone(),
            message: error.message.clone(),
        }
    }

    /// Creates a `DeliveryFeeErrorDto` for an undeserializable request body
    #[must_use]
    pub fn malformed(message: &str) -> Self {
        Self::MalformedRequest {
            message: message.to_string(),
        }
    }
}
