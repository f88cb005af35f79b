//! Deposit checkout flow.

use chrono::NaiveDate;
use tracing::info;

use crate::cache::AppCache;
use crate::config::DepositPolicy;
use crate::db::LeadStore;
use crate::error::{AppError, Result};
use crate::models::Reservation;

use super::gateway::CheckoutGateway;
use super::qr;
use super::requests::CheckoutRequest;
use super::responses::CheckoutResponse;
use super::slots::get_slots_for_date;

/// Validate a checkout request, hold the slot and open a deposit checkout.
///
/// # Errors
/// `AppError::Validation` when the date does not parse, the slot is not
/// offered or already held, or the deposit is outside the configured bounds.
pub async fn create_checkout(
    store: &LeadStore,
    cache: &AppCache,
    gateway: &CheckoutGateway,
    policy: &DepositPolicy,
    request: CheckoutRequest,
) -> Result<CheckoutResponse> {
    let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::validation(
            "A valid date is required",
            vec![format!("date: expected YYYY-MM-DD, got {:?}", request.date)],
        )
    })?;
    let deposit = request.deposit.unwrap_or(i64::from(policy.default));
    let mut errors = Vec::new();

    let date_key = date.format("%Y-%m-%d").to_string();
    let slots = get_slots_for_date(store, cache, &date_key).await?;
    if request.slot.is_empty() {
        errors.push("slot: required".to_string());
    } else if !slots.contains(&request.slot) {
        errors.push(format!("slot: {} is not available on {}", request.slot, date_key));
    }

    if !policy.allows(deposit) {
        errors.push(format!(
            "deposit: must be between {} and {}",
            policy.min, policy.max
        ));
    }

    if !errors.is_empty() {
        return Err(AppError::validation("Invalid checkout request", errors));
    }

    let deposit = u32::try_from(deposit)
        .map_err(|_| AppError::Internal(format!("deposit out of range: {}", deposit)))?;
    let reservation = Reservation::new(date, request.slot, deposit);

    // A refused slot means the cached day is stale too
    let saved = store.save_reservation(&reservation).await;
    cache.invalidate_date(&date_key).await;
    saved?;

    let session = gateway.create_session(&reservation).await?;
    let reference = reservation.reference();
    let qr_code = qr::png_data_uri(&reference)?;

    info!(
        reservation_id = %reservation.id,
        date = %date_key,
        slot = %reservation.slot,
        "Reservation held pending deposit"
    );

    Ok(CheckoutResponse {
        ok: session.ok,
        url: session.url,
        reservation_id: reservation.id,
        reference,
        date: date_key,
        slot: reservation.slot,
        deposit: reservation.deposit,
        qr_code,
    })
}
