//! Cart compound type
//!
//! A `Cart` can only be built from already-validated simple types, so any
//! instance reaching the fee calculator satisfies the positivity invariants.

use chrono::{DateTime, FixedOffset};

use crate::simple_types::{CartValue, DeliveryDistance, ItemCount};

/// A validated order cart
///
/// Combines the three positive integer fields with the order time. The time
/// carries its original UTC offset; conversion to UTC happens inside the
/// rush-hour predicate, not here.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use delivery_fee_service::cart::Cart;
/// use delivery_fee_service::simple_types::{CartValue, DeliveryDistance, ItemCount};
///
/// let cart = Cart::new(
///     CartValue::create("cart_value", 790).unwrap(),
///     DeliveryDistance::create("delivery_distance", 2235).unwrap(),
///     ItemCount::create("number_of_items", 4).unwrap(),
///     DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap(),
/// );
///
/// assert_eq!(cart.cart_value().value(), 790);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cart {
    cart_value: CartValue,
    delivery_distance: DeliveryDistance,
    number_of_items: ItemCount,
    time: DateTime<FixedOffset>,
}

impl Cart {
    /// Creates a new `Cart` from validated components
    #[must_use]
    pub const fn new(
        cart_value: CartValue,
        delivery_distance: DeliveryDistance,
        number_of_items: ItemCount,
        time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            cart_value,
            delivery_distance,
            number_of_items,
            time,
        }
    }

    /// Returns the cart value
    #[must_use]
    pub const fn cart_value(&self) -> CartValue {
        self.cart_value
    }

    /// Returns the delivery distance
    #[must_use]
    pub const fn delivery_distance(&self) -> DeliveryDistance {
        self.delivery_distance
    }

    /// Returns the number of items
    #[must_use]
    pub const fn number_of_items(&self) -> ItemCount {
        self.number_of_items
    }

    /// Returns the order time
    #[must_use]
    pub const fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn create_cart() -> Cart {
        Cart::new(
            CartValue::create("cart_value", 790).unwrap(),
            DeliveryDistance::create("delivery_distance", 2235).unwrap(),
            ItemCount::create("number_of_items", 4).unwrap(),
            DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap(),
        )
    }

    #[rstest]
    fn test_cart_accessors() {
        let cart = create_cart();

        assert_eq!(cart.cart_value().value(), 790);
        assert_eq!(cart.delivery_distance().value(), 2235);
        assert_eq!(cart.number_of_items().value(), 4);
        assert_eq!(
            cart.time(),
            DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap()
        );
    }

    #[rstest]
    fn test_cart_preserves_offset() {
        let cart = Cart::new(
            CartValue::create("cart_value", 100).unwrap(),
            DeliveryDistance::create("delivery_distance", 100).unwrap(),
            ItemCount::create("number_of_items", 1).unwrap(),
            DateTime::parse_from_rfc3339("2024-01-26T19:00:00+01:00").unwrap(),
        );

        assert_eq!(cart.time().offset().local_minus_utc(), 3600);
    }
}
