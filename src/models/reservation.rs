//! Deposit reservation model

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    PendingPayment,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::PendingPayment => "pending_payment",
        }
    }
}

/// A held date/slot awaiting its deposit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    pub slot: String,
    /// Whole dollars
    pub deposit: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(date: NaiveDate, slot: String, deposit: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            slot,
            deposit,
            status: ReservationStatus::PendingPayment,
            created_at: Utc::now(),
        }
    }

    /// Key used for slot lookups on this reservation's day
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Reference printed on the confirmation and encoded in its QR code
    pub fn reference(&self) -> String {
        format!("URBANBRUSH-{}", self.id.simple()).to_uppercase()
    }
}
