//! Urban Brush web backend.
//!
//! JSON API behind the marketing site: live price estimates, quote and
//! contact intake, slot availability and deposit checkout.

pub mod booking;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod leads;
pub mod models;
pub mod pricing;

use std::sync::Arc;

use axum::{extract::State, http::Method, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::booking::CheckoutGateway;
use crate::cache::AppCache;
use crate::config::Config;
use crate::db::LeadStore;
use crate::error::AppError;
use crate::leads::Notifier;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: LeadStore,
    pub cache: AppCache,
    pub notifier: Notifier,
    pub gateway: CheckoutGateway,
}

impl AppState {
    pub fn new(config: Config, store: LeadStore) -> Self {
        Self {
            cache: AppCache::new(config.availability_cache_ttl),
            notifier: Notifier::new(config.operations_email.clone()),
            gateway: CheckoutGateway::new(config.checkout_url.clone()),
            config: Arc::new(config),
            store,
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON endpoints, mounted under `/api`
fn api_router() -> Router<AppState> {
    Router::new()
        .merge(pricing::router())
        .merge(booking::router())
        .merge(leads::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "store": state.store.backend_name(),
        "cache": state.cache.stats(),
    }))
}
