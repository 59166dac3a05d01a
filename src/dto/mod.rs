//! DTO module
//!
//! Defines the serialization types used at the HTTP boundary.
//!
//! # Type List
//!
//! - [`CartDto`] - Request body for the delivery fee endpoint
//! - [`DeliveryFeeDto`] - Response body carrying the computed fee
//! - [`DeliveryFeeErrorDto`] - Error response body
//!
//! DTO-to-domain conversions are pure functions; deserialization itself never
//! runs domain validation, so a structurally well-formed request with a
//! non-positive field is only rejected by [`CartDto::to_cart`].

pub mod error;
pub mod input;
pub mod output;

// Re-exports
pub use error::DeliveryFeeErrorDto;
pub use input::CartDto;
pub use output::DeliveryFeeDto;
