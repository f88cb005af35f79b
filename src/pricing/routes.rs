//! Pricing API route handlers

use axum::{routing::get, routing::post, Json, Router};

use crate::extract::ApiJson;
use crate::AppState;

use super::calculators::{compute_price_range, quote_breakdown};
use super::catalog;
use super::rates::CURRENCY;
use super::requests::QuoteRequest;
use super::responses::{CatalogResponse, PriceEstimateResponse, RateCardResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote/estimate", post(estimate))
        .route("/rates", get(rates))
        .route("/packages", get(packages))
}

/// Live estimate for the quote form
async fn estimate(ApiJson(request): ApiJson<QuoteRequest>) -> Json<PriceEstimateResponse> {
    let range = compute_price_range(&request);
    tracing::debug!(
        size = %request.apartment_size,
        rooms = request.room_count,
        low = range.low,
        high = range.high,
        "Computed estimate"
    );
    Json(PriceEstimateResponse::new(
        range,
        quote_breakdown(&request),
        CURRENCY,
    ))
}

async fn rates() -> Json<RateCardResponse> {
    Json(catalog::rate_card())
}

async fn packages() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        packages: catalog::packages(),
        add_ons: catalog::add_ons(),
    })
}
