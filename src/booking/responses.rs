//! Response DTOs for booking endpoints.

use serde::Serialize;
use uuid::Uuid;

/// Response for slot lookups
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<String>,
}

/// Response for a created checkout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub ok: bool,
    pub url: String,
    pub reservation_id: Uuid,
    pub reference: String,
    pub date: String,
    pub slot: String,
    pub deposit: u32,
    /// PNG data URI of the reservation reference
    pub qr_code: String,
}
