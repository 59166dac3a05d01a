//! Simple types module
//!
//! Defines the constrained primitive types of the cart domain. Each type wraps
//! a single integer and can only be constructed through a smart constructor
//! that enforces its invariant.
//!
//! # Type List
//!
//! - [`CartValue`] - Cart value in currency minor units (positive)
//! - [`DeliveryDistance`] - Delivery distance in meters (positive)
//! - [`ItemCount`] - Number of items in the cart (positive)
//! - [`ValidationError`] - Error type shared by all smart constructors

pub mod cart_types;
pub mod constrained_type;
pub mod error;

// Re-exports
pub use cart_types::{CartValue, DeliveryDistance, ItemCount};
pub use error::ValidationError;
