//! Single Prediction Route

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::{ApiError, AppState};
use feature_vectorizer::{align, encode};
use insights::{focus_points, profile_comparison, risk_summary, ComparisonRow};
use model_runtime::Label;
use student_profile::StudentProfile;

/// Gauge rendering spec for the risk gauge
#[derive(Debug, Serialize)]
pub struct GaugeSpec {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub color: &'static str,
}

/// One focus-card entry
#[derive(Debug, Serialize)]
pub struct FocusEntry {
    pub id: insights::FocusPoint,
    pub message: &'static str,
}

/// Prediction response payload
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: Label,
    /// Dropout probability as a percentage (0-100)
    pub probability_pct: f64,
    /// Probabilities for [no-dropout, dropout]
    pub probabilities: [f64; 2],
    pub headline: String,
    pub high_risk: bool,
    pub gauge: GaugeSpec,
    pub comparison: Vec<ComparisonRow>,
    pub focus_points: Vec<FocusEntry>,
    pub generated_at: DateTime<Utc>,
}

/// Run one synchronous prediction over the submitted profile.
///
/// Validation rejects out-of-domain numerics with 422; after that the
/// encode -> align -> predict path cannot fail for a well-formed model.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<PredictResponse>, ApiError> {
    state.validator.validate(&profile)?;

    let row = encode(&profile);
    let features = align(&row, state.model.columns())?;
    let prediction = state.model.predict(&features)?;

    let summary = risk_summary(&prediction);
    let comparison = profile_comparison(&profile);
    let focus = focus_points(&profile, &state.focus_config)
        .into_iter()
        .map(|point| FocusEntry {
            id: point,
            message: point.message(),
        })
        .collect();

    info!(
        "Prediction served: label={}, probability={:.2}%",
        prediction.label.as_str(),
        prediction.probability_pct
    );

    Ok(Json(PredictResponse {
        label: prediction.label,
        probability_pct: prediction.probability_pct,
        probabilities: prediction.probabilities,
        headline: summary.headline,
        high_risk: summary.high_risk,
        gauge: GaugeSpec {
            value: prediction.probability_pct,
            min: 0.0,
            max: 100.0,
            color: summary.gauge_color,
        },
        comparison,
        focus_points: focus,
        generated_at: Utc::now(),
    }))
}
