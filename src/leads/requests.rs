//! Request DTOs for lead intake endpoints.

use serde::Deserialize;

use crate::pricing::QuoteRequest;

/// Quote form submission: contact details plus the priced selections
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendQuoteRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub preferred_window: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub quote: QuoteRequest,
}

/// Contact page submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}
