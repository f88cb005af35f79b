//! Response DTOs for lead intake endpoints.

use serde::Serialize;
use uuid::Uuid;

use crate::pricing::PriceRange;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendQuoteResponse {
    pub ok: bool,
    pub lead_id: Uuid,
    pub price: PriceRange,
    pub currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub ok: bool,
    pub message_id: Uuid,
}
