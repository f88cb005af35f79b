//! Checkout gateway.
//!
//! Payment processing is not wired up: sessions are logged and answered
//! with the configured checkout URL.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::Reservation;

/// Result of opening a checkout session
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    pub ok: bool,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct CheckoutGateway {
    checkout_url: String,
}

impl CheckoutGateway {
    pub fn new(checkout_url: impl Into<String>) -> Self {
        Self {
            checkout_url: checkout_url.into(),
        }
    }

    /// Open a deposit checkout for a reservation
    pub async fn create_session(&self, reservation: &Reservation) -> Result<CheckoutSession> {
        info!(
            reservation_id = %reservation.id,
            date = %reservation.date,
            slot = %reservation.slot,
            deposit = reservation.deposit,
            "Checkout session requested"
        );

        Ok(CheckoutSession {
            ok: true,
            url: self.checkout_url.clone(),
        })
    }
}

impl Default for CheckoutGateway {
    fn default() -> Self {
        Self::new("#")
    }
}
