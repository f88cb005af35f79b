//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no shared state. Safe to call on
//! every form change from any number of callers.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::rates::{
    base_rate_for, eco_multiplier, neighborhood_adjustment_for, quality_multiplier_for,
    HIGH_FACTOR, LOW_FACTOR, ROOM_RATE,
};
use super::requests::QuoteRequest;

/// Round to whole currency units, halves away from zero.
///
/// For the non-negative amounts produced by the engine this matches the
/// browser's `Math.round`, so estimates agree with the live form display.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use urbanbrush_web::pricing::round_whole;
///
/// assert_eq!(round_whole(dec!(2.5)), dec!(3));
/// assert_eq!(round_whole(dec!(1222.536)), dec!(1223));
/// assert_eq!(round_whole(dec!(924.4275)), dec!(924));
/// ```
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Negative room counts bill as zero rooms.
pub fn billable_rooms(room_count: i64) -> i64 {
    room_count.max(0)
}

/// Low/high estimate in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: u64,
    pub high: u64,
}

/// Intermediate values of a quote calculation
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub base: Decimal,
    pub billable_rooms: i64,
    pub rooms_cost: Decimal,
    pub quality_multiplier: Decimal,
    pub eco_multiplier: Decimal,
    pub neighborhood_multiplier: Decimal,
    pub subtotal: Decimal,
}

/// Resolve every rate for a request and compute the unrounded subtotal.
pub fn quote_breakdown(request: &QuoteRequest) -> QuoteBreakdown {
    let base = base_rate_for(&request.apartment_size);
    let rooms = billable_rooms(request.room_count);
    let rooms_cost = Decimal::from(rooms) * ROOM_RATE;
    let quality_multiplier = quality_multiplier_for(&request.paint_quality);
    let eco_multiplier = eco_multiplier(request.eco_friendly);
    let neighborhood_multiplier = neighborhood_adjustment_for(&request.neighborhood);

    let subtotal =
        (base + rooms_cost) * quality_multiplier * eco_multiplier * neighborhood_multiplier;

    QuoteBreakdown {
        base,
        billable_rooms: rooms,
        rooms_cost,
        quality_multiplier,
        eco_multiplier,
        neighborhood_multiplier,
        subtotal,
    }
}

/// Derive the displayed range from a subtotal.
pub fn price_range_from_subtotal(subtotal: Decimal) -> PriceRange {
    PriceRange {
        low: to_whole_units(subtotal * LOW_FACTOR),
        high: to_whole_units(subtotal * HIGH_FACTOR),
    }
}

/// Compute the estimated price range for a quote request.
///
/// Never fails: unknown labels resolve to neutral rates and negative room
/// counts are clamped. `low <= high` holds for every input.
pub fn compute_price_range(request: &QuoteRequest) -> PriceRange {
    price_range_from_subtotal(quote_breakdown(request).subtotal)
}

/// Amounts past `u64::MAX` saturate so ordering between bounds is kept.
fn to_whole_units(amount: Decimal) -> u64 {
    let rounded = round_whole(amount);
    if rounded.is_sign_negative() {
        return 0;
    }
    rounded.to_u64().unwrap_or(u64::MAX)
}
