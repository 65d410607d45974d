//! EarlyGuard Dashboard Server
//!
//! Serves the dropout-risk dashboard: an embedded single page, the
//! prediction API, the decorative-asset payload, and the batch stub.
//! The model and its column list load once at startup and are shared
//! read-only; decorative assets load once and degrade gracefully.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod settings;

pub use settings::Settings;

use asset_loader::AnimationSet;
use insights::FocusConfig;
use model_runtime::{DropoutModel, ModelError};
use student_profile::ProfileValidator;

/// Application state shared across handlers.
///
/// Everything here is immutable after startup, so handlers read it
/// through a plain `Arc` with no locking.
pub struct AppState {
    /// Loaded dropout model (weights + column order)
    pub model: DropoutModel,
    /// Input boundary validator
    pub validator: ProfileValidator,
    /// Focus-card rule thresholds
    pub focus_config: FocusConfig,
    /// Base64 background payload, if the image was found
    pub background: Option<String>,
    /// Fetched animation payloads, any of which may be absent
    pub animations: AnimationSet,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Assemble state from already-loaded parts (used directly in tests)
    pub fn new(model: DropoutModel, background: Option<String>, animations: AnimationSet) -> Self {
        Self {
            model,
            validator: ProfileValidator::default(),
            focus_config: FocusConfig::default(),
            background,
            animations,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Load everything the dashboard needs at startup.
    ///
    /// Artifact errors are fatal and propagate; decorative assets
    /// resolve to `None` on failure and never abort startup.
    pub async fn initialize(settings: &Settings) -> Result<Self, ModelError> {
        let model = DropoutModel::load(&settings.model_path, &settings.columns_path)?;
        let background = asset_loader::load_background(&settings.background_path);
        let animations = asset_loader::load_animations(&settings.animations).await;
        Ok(Self::new(model, background, animations))
    }
}

/// API error envelope
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Submitted profile failed boundary validation
    #[error("{0}")]
    Validation(#[from] student_profile::ProfileError),
    /// Vectorization could not run
    #[error("{0}")]
    Vectorize(#[from] feature_vectorizer::VectorizeError),
    /// Model rejected the feature vector
    #[error("{0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Vectorize(_) | ApiError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_columns: usize,
    pub background_loaded: bool,
    pub animations_loaded: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/predict", post(routes::predict::predict))
        .route("/api/v1/assets", get(routes::assets::get_assets))
        .route(
            "/api/v1/batch",
            get(routes::batch::not_implemented).post(routes::batch::not_implemented),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let animations_loaded = [
        state.animations.education.is_some(),
        state.animations.success.is_some(),
        state.animations.warning.is_some(),
    ]
    .iter()
    .filter(|loaded| **loaded)
    .count();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model_columns: state.model.columns().len(),
        background_loaded: state.background.is_some(),
        animations_loaded,
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    info!("Starting dashboard server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
