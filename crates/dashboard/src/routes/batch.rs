//! Batch Prediction Stub
//!
//! Batch prediction has no defined input or output format yet; this
//! surface exists only to say so.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Batch stub response
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Always reports the feature as unavailable
pub async fn not_implemented() -> impl IntoResponse {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(BatchResponse {
            status: "not_implemented",
            message:
                "This feature is under development. Please use the Single Student prediction for now.",
        }),
    )
}
