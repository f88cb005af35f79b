//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Validation failed: {message}")]
    Validation { message: String, errors: Vec<String> },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure with one message per offending field
    pub fn validation(message: impl Into<String>, errors: Vec<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("Invalid request body", vec![rejection.body_text()])
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation("Invalid query string", vec![rejection.body_text()])
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::NotFound => ErrorResponse {
                error_type: "not_found".to_string(),
                message: "Not found".to_string(),
                details: None,
            },
            AppError::Validation { message, errors } => ErrorResponse {
                error_type: "validation".to_string(),
                message: message.clone(),
                details: Some(serde_json::json!(errors)),
            },
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                internal("Database error")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                internal("Template error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal("Internal error")
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal(message: &str) -> ErrorResponse {
    ErrorResponse {
        error_type: "internal".to_string(),
        message: message.to_string(),
        details: None,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
