//! Decorative Asset Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Asset payload for the page; every field is optional by design
#[derive(Debug, Serialize)]
pub struct AssetsResponse {
    /// Base64-encoded background image, if found at startup
    pub background: Option<String>,
    pub education_animation: Option<serde_json::Value>,
    pub success_animation: Option<serde_json::Value>,
    pub warning_animation: Option<serde_json::Value>,
}

/// Hand the page whatever decorative assets resolved at startup
pub async fn get_assets(State(state): State<Arc<AppState>>) -> Json<AssetsResponse> {
    Json(AssetsResponse {
        background: state.background.clone(),
        education_animation: state.animations.education.clone(),
        success_animation: state.animations.success.clone(),
        warning_animation: state.animations.warning.clone(),
    })
}
