//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{PriceRange, QuoteBreakdown};
use super::catalog::{AddOn, Package};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Response for a live estimate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimateResponse {
    pub low: u64,
    pub high: u64,
    pub currency: String,
    pub breakdown: BreakdownResponse,
}

/// Rates the estimate was computed from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base: Decimal,
    pub billable_rooms: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub rooms_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quality_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub eco_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub neighborhood_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
}

impl PriceEstimateResponse {
    pub fn new(range: PriceRange, breakdown: QuoteBreakdown, currency: &str) -> Self {
        Self {
            low: range.low,
            high: range.high,
            currency: currency.to_string(),
            breakdown: BreakdownResponse {
                base: breakdown.base,
                billable_rooms: breakdown.billable_rooms,
                rooms_cost: breakdown.rooms_cost,
                quality_multiplier: breakdown.quality_multiplier,
                eco_multiplier: breakdown.eco_multiplier,
                neighborhood_multiplier: breakdown.neighborhood_multiplier,
                subtotal: breakdown.subtotal,
            },
        }
    }
}

/// One label/value row of a rate table
#[derive(Debug, Clone, Serialize)]
pub struct RateEntry {
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

impl RateEntry {
    pub fn new(label: &'static str, value: Decimal) -> Self {
        Self { label, value }
    }
}

/// Response for the rate card
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCardResponse {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub room_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub eco_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low_factor: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high_factor: Decimal,
    pub base_rates: Vec<RateEntry>,
    pub quality_multipliers: Vec<RateEntry>,
    pub neighborhood_adjustments: Vec<RateEntry>,
}

/// Response for the pricing page catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub packages: Vec<Package>,
    pub add_ons: Vec<AddOn>,
}
