//! Booking API route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::extract::{ApiJson, ApiQuery};
use crate::AppState;

use super::requests::{AvailabilityQuery, CheckoutRequest};
use super::responses::{CheckoutResponse, SlotsResponse};
use super::services;
use super::slots::get_slots_for_date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/availability", get(availability))
        .route("/checkout", post(checkout))
}

/// Slots offered on a date
async fn availability(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AvailabilityQuery>,
) -> Result<Json<SlotsResponse>> {
    let slots = get_slots_for_date(&state.store, &state.cache, &query.date).await?;
    Ok(Json(SlotsResponse {
        date: query.date,
        slots: slots.to_vec(),
    }))
}

/// Hold a slot and open a deposit checkout
async fn checkout(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let response = services::create_checkout(
        &state.store,
        &state.cache,
        &state.gateway,
        &state.config.deposit,
        request,
    )
    .await?;
    Ok(Json(response))
}
