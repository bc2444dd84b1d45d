use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::ValidationError;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    AuthError(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("document store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "validation", "field": err.field, "detail": err.message }),
            ),
            AppError::AuthError(msg) => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "auth", "detail": msg }))
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "bad_request", "detail": msg }),
            ),
            AppError::Store(err) => {
                tracing::error!("Store error: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "store_unavailable", "detail": truncate(&err.to_string(), 80) }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal", "detail": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Bound error text surfaced to clients so internal detail does not leak.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_bounds_long_text() {
        let long = "x".repeat(200);
        let out = truncate(&long, 80);
        assert!(out.starts_with(&"x".repeat(80)));
        assert!(out.len() < long.len());
        assert_eq!(truncate("short", 80), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "é".repeat(50);
        let out = truncate(&s, 81);
        assert!(out.ends_with('…'));
    }
}
