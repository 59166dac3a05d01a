//! Fee calculator module
//!
//! Pure functions computing the delivery fee for a cart against a
//! [`FeeTariff`]. The total is the sum of three independent components (cart
//! value, distance, items), scaled by the rush-hour multiplier, truncated, and
//! clamped to the tariff cap.
//!
//! # Function List
//!
//! - [`compute_cart_value_fee`] - Small-order surcharge
//! - [`compute_distance_fee`] - Distance-based fee
//! - [`compute_items_fee`] - Item-count surcharge
//! - [`compute_rush_hour_multiplier`] - Time-of-week multiplier
//! - [`compute_total_fee`] - Composition, waiver, and clamping
//!
//! The component functions take raw integers rather than the constrained cart
//! types so that they stay independently callable; each one re-checks the
//! positivity invariant and fails with a [`ValidationError`] instead of
//! producing a fee from an out-of-domain input.

use chrono::{DateTime, FixedOffset};

use crate::cart::Cart;
use crate::simple_types::ValidationError;
use crate::tariff::FeeTariff;

/// Ceiling division rounding toward positive infinity
///
/// `div_euclid` rounds toward negative infinity; adding one whenever a
/// remainder exists turns that into the ceiling, for negative numerators
/// included. The divisor must be positive.
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    numerator.div_euclid(divisor) + i64::from(numerator.rem_euclid(divisor) != 0)
}

/// Computes the cart value component of the delivery fee
///
/// Carts cheaper than `cart_value_min` are charged the difference between the
/// cart value and the minimum; carts at or above it are charged nothing.
///
/// # Arguments
///
/// * `tariff` - Fee tariff in effect
/// * `cart_value` - Cart value in currency minor units, must be positive
///
/// # Returns
///
/// * `Ok(fee)` - `max(0, cart_value_min - cart_value)`
/// * `Err(ValidationError)` - For non-positive input
///
/// # Errors
///
/// Returns [`ValidationError`] when `cart_value` is zero or negative.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::fee::compute_cart_value_fee;
/// use delivery_fee_service::tariff::FeeTariff;
///
/// let tariff = FeeTariff::standard();
/// assert_eq!(compute_cart_value_fee(&tariff, 890).unwrap(), 110);
/// assert_eq!(compute_cart_value_fee(&tariff, 1000).unwrap(), 0);
/// ```
pub fn compute_cart_value_fee(tariff: &FeeTariff, cart_value: i64) -> Result<i64, ValidationError> {
    if cart_value <= 0 {
        return Err(ValidationError::new("cart_value", "Must be positive"));
    }
    Ok(tariff.cart_value_min.saturating_sub(cart_value).max(0))
}

/// Computes the distance component of the delivery fee
///
/// The first `distance_min` meters cost the flat `fee_distance_min`; every
/// started `distance_step` beyond that adds `fee_distance_step`. The step
/// count uses ceiling division that rounds toward positive infinity, so a
/// distance below `distance_min` yields zero or negative steps; very short
/// distances therefore come out below the flat fee, exactly as the ceiling
/// formula dictates.
///
/// # Arguments
///
/// * `tariff` - Fee tariff in effect
/// * `delivery_distance` - Distance in meters, must be positive
///
/// # Returns
///
/// * `Ok(fee)` - `fee_distance_min + steps * fee_distance_step`
/// * `Err(ValidationError)` - For non-positive input
///
/// # Errors
///
/// Returns [`ValidationError`] when `delivery_distance` is zero or negative.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::fee::compute_distance_fee;
/// use delivery_fee_service::tariff::FeeTariff;
///
/// let tariff = FeeTariff::standard();
/// assert_eq!(compute_distance_fee(&tariff, 999).unwrap(), 200);
/// assert_eq!(compute_distance_fee(&tariff, 1501).unwrap(), 400);
/// ```
pub fn compute_distance_fee(
    tariff: &FeeTariff,
    delivery_distance: i64,
) -> Result<i64, ValidationError> {
    if delivery_distance <= 0 {
        return Err(ValidationError::new(
            "delivery_distance",
            "Must be positive",
        ));
    }
    let distance_steps = ceil_div(
        delivery_distance.saturating_sub(tariff.distance_min),
        tariff.distance_step,
    );
    Ok(tariff
        .fee_distance_min
        .saturating_add(distance_steps.saturating_mul(tariff.fee_distance_step)))
}

/// Computes the item count component of the delivery fee
///
/// Items above `items_max` cost `fee_item` each. Carts with more than
/// `items_bulk` items additionally pay the flat `fee_bulk`; the two surcharges
/// stack rather than replace each other. The arithmetic saturates at the
/// integer bounds, so absurdly large counts stay finite and non-negative and
/// end up clamped by the total-fee cap.
///
/// # Arguments
///
/// * `tariff` - Fee tariff in effect
/// * `number_of_items` - Item count, must be positive
///
/// # Returns
///
/// * `Ok(fee)` - Bulk surcharge plus per-item surcharge
/// * `Err(ValidationError)` - For non-positive input
///
/// # Errors
///
/// Returns [`ValidationError`] when `number_of_items` is zero or negative.
///
/// # Examples
///
/// ```
/// use delivery_fee_service::fee::compute_items_fee;
/// use delivery_fee_service::tariff::FeeTariff;
///
/// let tariff = FeeTariff::standard();
/// assert_eq!(compute_items_fee(&tariff, 4).unwrap(), 0);
/// assert_eq!(compute_items_fee(&tariff, 13).unwrap(), 570);
/// ```
pub fn compute_items_fee(tariff: &FeeTariff, number_of_items: i64) -> Result<i64, ValidationError> {
    if number_of_items <= 0 {
        return Err(ValidationError::new("number_of_items", "Must be positive"));
    }
    let bulk_surcharge = if number_of_items > tariff.items_bulk {
        tariff.fee_bulk
    } else {
        0
    };
    let per_item_surcharge = tariff
        .fee_item
        .saturating_mul(number_of_items.saturating_sub(tariff.items_max).max(0));
    Ok(bulk_surcharge.saturating_add(per_item_surcharge))
}

/// Computes the rush-hour multiplier for an order time
///
/// Returns `mult_rush_hour` if the UTC projection of the time falls inside any
/// configured window, else 1.0. A single match is enough; overlapping windows
/// do not compound.
///
/// # Arguments
///
/// * `tariff` - Fee tariff in effect
/// * `time` - Order time with its original UTC offset
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use delivery_fee_service::fee::compute_rush_hour_multiplier;
/// use delivery_fee_service::tariff::FeeTariff;
///
/// let tariff = FeeTariff::standard();
/// let friday_rush = DateTime::parse_from_rfc3339("2024-01-26T16:00:00Z").unwrap();
/// assert!((compute_rush_hour_multiplier(&tariff, &friday_rush) - 1.2).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn compute_rush_hour_multiplier(tariff: &FeeTariff, time: &DateTime<FixedOffset>) -> f64 {
    let is_rush_hour = tariff.rush_hours.iter().any(|rush| rush.contains(time));
    if is_rush_hour { tariff.mult_rush_hour } else { 1.0 }
}

/// Computes the total delivery fee for a validated cart
///
/// Carts valued at or above `cart_value_max` get the fee waived outright; the
/// waiver short-circuits every other rule, rush hour included. Otherwise the
/// three components are summed, scaled by the rush-hour multiplier, truncated
/// toward zero, and clamped to `fee_total_max`.
///
/// # Arguments
///
/// * `tariff` - Fee tariff in effect
/// * `cart` - Validated cart
///
/// # Returns
///
/// The delivery fee in currency minor units, in `[0, fee_total_max]`
///
/// # Errors
///
/// Returns [`ValidationError`] if a component function rejects its input.
/// Cannot happen for a [`Cart`] built through the smart constructors, but the
/// error is propagated rather than swallowed.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use delivery_fee_service::cart::Cart;
/// use delivery_fee_service::fee::compute_total_fee;
/// use delivery_fee_service::simple_types::{CartValue, DeliveryDistance, ItemCount};
/// use delivery_fee_service::tariff::FeeTariff;
///
/// let tariff = FeeTariff::standard();
/// let cart = Cart::new(
///     CartValue::create("cart_value", 790).unwrap(),
///     DeliveryDistance::create("delivery_distance", 2235).unwrap(),
///     ItemCount::create("number_of_items", 4).unwrap(),
///     DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap(),
/// );
///
/// assert_eq!(compute_total_fee(&tariff, &cart).unwrap(), 710);
/// ```
pub fn compute_total_fee(tariff: &FeeTariff, cart: &Cart) -> Result<i64, ValidationError> {
    if cart.cart_value().value() >= tariff.cart_value_max {
        return Ok(0);
    }
    let total = compute_cart_value_fee(tariff, cart.cart_value().value())?
        .saturating_add(compute_distance_fee(tariff, cart.delivery_distance().value())?)
        .saturating_add(compute_items_fee(tariff, cart.number_of_items().value())?);
    let multiplier = compute_rush_hour_multiplier(tariff, &cart.time());
    // `as i64` truncates toward zero and saturates at the integer bounds;
    // rounding would overcharge by one
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let multiplied = (multiplier * total as f64) as i64;
    Ok(multiplied.min(tariff.fee_total_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::{CartValue, DeliveryDistance, ItemCount};
    use rstest::rstest;

    fn create_cart(cart_value: i64, distance: i64, items: i64, time: &str) -> Cart {
        Cart::new(
            CartValue::create("cart_value", cart_value).unwrap(),
            DeliveryDistance::create("delivery_distance", distance).unwrap(),
            ItemCount::create("number_of_items", items).unwrap(),
            DateTime::parse_from_rfc3339(time).unwrap(),
        )
    }

    #[rstest]
    #[case(890, 110)]
    #[case(999, 1)]
    #[case(1000, 0)]
    #[case(1001, 0)]
    fn test_compute_cart_value_fee(#[case] cart_value: i64, #[case] expected: i64) {
        let tariff = FeeTariff::standard();

        assert_eq!(compute_cart_value_fee(&tariff, cart_value), Ok(expected));
    }

    #[rstest]
    #[case(-999, 500, -1)]
    #[case(-500, 500, -1)]
    #[case(-499, 500, 0)]
    #[case(0, 500, 0)]
    #[case(1, 500, 1)]
    #[case(500, 500, 1)]
    #[case(501, 500, 2)]
    fn test_ceil_div_rounds_toward_positive_infinity(
        #[case] numerator: i64,
        #[case] divisor: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(ceil_div(numerator, divisor), expected);
    }

    #[rstest]
    #[case(1, 100)]
    #[case(500, 100)]
    #[case(501, 200)]
    #[case(999, 200)]
    #[case(1000, 200)]
    #[case(1499, 300)]
    #[case(1500, 300)]
    #[case(1501, 400)]
    fn test_compute_distance_fee(#[case] distance: i64, #[case] expected: i64) {
        let tariff = FeeTariff::standard();

        assert_eq!(compute_distance_fee(&tariff, distance), Ok(expected));
    }

    #[rstest]
    #[case(4, 0)]
    #[case(5, 50)]
    #[case(10, 300)]
    #[case(13, 570)]
    #[case(14, 620)]
    fn test_compute_items_fee(#[case] items: i64, #[case] expected: i64) {
        let tariff = FeeTariff::standard();

        assert_eq!(compute_items_fee(&tariff, items), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn test_component_functions_reject_non_positive(#[case] input: i64) {
        let tariff = FeeTariff::standard();

        assert!(compute_cart_value_fee(&tariff, input).is_err());
        assert!(compute_distance_fee(&tariff, input).is_err());
        assert!(compute_items_fee(&tariff, input).is_err());
    }

    #[rstest]
    #[case("2024-01-26T14:59:59+00:00", 1.0)]
    #[case("2024-01-26T15:00:00+00:00", 1.2)]
    #[case("2024-01-26T18:59:59+00:00", 1.2)]
    #[case("2024-01-26T19:00:00+00:00", 1.0)]
    #[case("2024-01-26T19:00:00+01:00", 1.2)]
    fn test_compute_rush_hour_multiplier(#[case] time: &str, #[case] expected: f64) {
        let tariff = FeeTariff::standard();
        let time = DateTime::parse_from_rfc3339(time).unwrap();

        let multiplier = compute_rush_hour_multiplier(&tariff, &time);

        assert!((multiplier - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_compute_total_fee_known_cart() {
        let tariff = FeeTariff::standard();
        let cart = create_cart(790, 2235, 4, "2024-01-15T13:00:00Z");

        assert_eq!(compute_total_fee(&tariff, &cart), Ok(710));
    }

    #[rstest]
    fn test_compute_total_fee_waives_expensive_cart() {
        let tariff = FeeTariff::standard();
        let cart = create_cart(20000, 1000, 10, "2024-01-15T13:00:00Z");

        assert_eq!(compute_total_fee(&tariff, &cart), Ok(0));
    }

    #[rstest]
    fn test_compute_total_fee_clamps_to_cap() {
        let tariff = FeeTariff::standard();
        // Friday 18:00 UTC, rush hour; components far above the cap
        let cart = create_cart(100, 10000, 20, "2024-01-26T18:00:00Z");

        assert_eq!(compute_total_fee(&tariff, &cart), Ok(1500));
    }

    #[rstest]
    fn test_compute_items_fee_saturates_on_extreme_count() {
        let tariff = FeeTariff::standard();

        // 50 * (2e17 - 4) exceeds i64::MAX, the fee saturates instead of wrapping
        assert_eq!(
            compute_items_fee(&tariff, 200_000_000_000_000_000),
            Ok(i64::MAX)
        );
    }

    #[rstest]
    fn test_compute_distance_fee_extreme_distance_stays_non_negative() {
        let tariff = FeeTariff::standard();

        assert!(compute_distance_fee(&tariff, i64::MAX).unwrap() > 0);
    }

    #[rstest]
    fn test_compute_total_fee_extreme_cart_is_clamped() {
        let tariff = FeeTariff::standard();
        let cart = create_cart(100, i64::MAX, i64::MAX, "2024-01-26T18:00:00Z");

        assert_eq!(compute_total_fee(&tariff, &cart), Ok(1500));
    }

    #[rstest]
    fn test_compute_total_fee_truncates_after_multiplier() {
        let tariff = FeeTariff::standard();
        // 999 value + 999 distance + 4 items on Friday 16:00 UTC:
        // (1 + 200 + 0) * 1.2 = 241.2, truncated to 241
        let cart = create_cart(999, 999, 4, "2024-01-26T16:00:00Z");

        assert_eq!(compute_total_fee(&tariff, &cart), Ok(241));
    }
}
