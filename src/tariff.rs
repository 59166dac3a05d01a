//! Fee tariff configuration
//!
//! Defines the immutable configuration the fee calculator reads: the
//! [`FeeTariff`] constants table and the [`RushHour`] interval list. A tariff
//! is built once at startup and shared read-only across request handlers.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

// =============================================================================
// RushHour
// =============================================================================

/// A weekly time window during which the rush-hour multiplier applies
///
/// `day` uses Monday=0 weekday numbering (so 4 is Friday). The hour range is
/// half-open: `hour_start` is included, `hour_end` is excluded. Matching is
/// done against the UTC projection of the order time, never against its local
/// wall-clock fields.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use delivery_fee_service::tariff::RushHour;
///
/// // Friday 15:00-19:00 UTC
/// let rush = RushHour::new(4, 15, 19);
///
/// let friday_afternoon = DateTime::parse_from_rfc3339("2024-01-26T15:00:00Z").unwrap();
/// assert!(rush.contains(&friday_afternoon));
///
/// let friday_evening = DateTime::parse_from_rfc3339("2024-01-26T19:00:00Z").unwrap();
/// assert!(!rush.contains(&friday_evening));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RushHour {
    /// Weekday, Monday=0 through Sunday=6
    day: u32,
    /// First hour of the window, inclusive (0-23)
    hour_start: u32,
    /// End hour of the window, exclusive (1-24)
    hour_end: u32,
}

impl RushHour {
    /// Creates a new `RushHour` window
    ///
    /// # Arguments
    ///
    /// * `day` - Weekday, Monday=0 through Sunday=6
    /// * `hour_start` - First hour of the window, inclusive
    /// * `hour_end` - End hour of the window, exclusive
    #[must_use]
    pub const fn new(day: u32, hour_start: u32, hour_end: u32) -> Self {
        Self {
            day,
            hour_start,
            hour_end,
        }
    }

    /// Checks whether an instant falls inside this window
    ///
    /// The instant is converted to UTC before its weekday and hour are
    /// extracted, so equivalent instants written with different offsets give
    /// the same answer.
    ///
    /// # Arguments
    ///
    /// * `time` - Order time with its original UTC offset
    ///
    /// # Returns
    ///
    /// `true` if the UTC weekday matches and the UTC hour lies in
    /// `[hour_start, hour_end)`
    #[must_use]
    pub fn contains(&self, time: &DateTime<FixedOffset>) -> bool {
        let utc = time.with_timezone(&Utc);
        utc.weekday().num_days_from_monday() == self.day
            && utc.hour() >= self.hour_start
            && utc.hour() < self.hour_end
    }
}

// =============================================================================
// FeeTariff
// =============================================================================

/// The complete set of constants the fee calculator reads
///
/// Fees and thresholds are integers in currency minor units or meters; the
/// rush-hour multiplier is the only floating-point entry. Construct via
/// [`FeeTariff::standard`] for the reference tariff, or build a custom value
/// directly in tests to exercise the calculator against alternate tables.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeTariff {
    /// Minor units, cart values below this incur a small-order surcharge
    pub cart_value_min: i64,
    /// Minor units, cart values at or above this waive the fee entirely
    pub cart_value_max: i64,
    /// Meters, distance covered by the flat distance fee
    pub distance_min: i64,
    /// Meters, step size charged beyond `distance_min`
    pub distance_step: i64,
    /// Maximum number of items with no surcharge
    pub items_max: i64,
    /// Maximum number of items before the bulk surcharge applies
    pub items_bulk: i64,
    /// Minor units, flat fee for the first `distance_min` meters
    pub fee_distance_min: i64,
    /// Minor units, fee per started `distance_step` beyond `distance_min`
    pub fee_distance_step: i64,
    /// Minor units, fee per item above `items_max`
    pub fee_item: i64,
    /// Minor units, flat surcharge for carts above `items_bulk` items
    pub fee_bulk: i64,
    /// Minor units, cap on the total fee
    pub fee_total_max: i64,
    /// Multiplier applied when the order time falls in a rush hour
    pub mult_rush_hour: f64,
    /// Rush-hour windows; any single match triggers the multiplier
    pub rush_hours: Vec<RushHour>,
}

impl FeeTariff {
    /// Returns the reference tariff
    ///
    /// One rush-hour window is configured: Friday 15:00-19:00 UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_fee_service::tariff::FeeTariff;
    ///
    /// let tariff = FeeTariff::standard();
    /// assert_eq!(tariff.cart_value_min, 1000);
    /// assert_eq!(tariff.fee_total_max, 1500);
    /// assert_eq!(tariff.rush_hours.len(), 1);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cart_value_min: 1000,
            cart_value_max: 20000,
            distance_min: 1000,
            distance_step: 500,
            items_max: 4,
            items_bulk: 12,
            fee_distance_min: 200,
            fee_distance_step: 100,
            fee_item: 50,
            fee_bulk: 120,
            fee_total_max: 1500,
            mult_rush_hour: 1.2,
            rush_hours: vec![RushHour::new(4, 15, 19)],
        }
    }
}

impl Default for FeeTariff {
    fn default() -> Self {
        Self::standard()
    }
}
