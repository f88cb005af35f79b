//! Lead intake route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::extract::ApiJson;
use crate::AppState;

use super::requests::{ContactRequest, SendQuoteRequest};
use super::responses::{ContactResponse, SendQuoteResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send-quote", post(send_quote))
        .route("/contact", post(contact))
}

async fn send_quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SendQuoteRequest>,
) -> Result<Json<SendQuoteResponse>> {
    let response = services::send_quote(&state.store, &state.notifier, request).await?;
    Ok(Json(response))
}

async fn contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<Json<ContactResponse>> {
    let response = services::submit_contact(&state.store, &state.notifier, request).await?;
    Ok(Json(response))
}
