//! Request DTOs for booking endpoints.

use serde::Deserialize;

/// Query string for slot lookups
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

/// Request to reserve a slot with a deposit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub slot: String,
    /// Whole dollars; the configured default applies when omitted
    #[serde(default)]
    pub deposit: Option<i64>,
}
