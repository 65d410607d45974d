//! Dropout Model Runtime
//!
//! Loads the two startup artifacts (serialized model weights and the
//! ordered model-column list) and serves predictions over aligned
//! feature vectors. Both artifacts are loaded once and held read-only
//! for the process lifetime.

mod artifacts;
mod engine;

pub use artifacts::{load_model_columns, load_model_weights, ModelWeights};
pub use engine::{DropoutModel, Label, Prediction};

use thiserror::Error;

/// Errors from artifact loading or inference
#[derive(Debug, Error)]
pub enum ModelError {
    /// A startup artifact is absent; fatal before serving
    #[error("Required file not found: {path}")]
    ArtifactMissing { path: String },

    /// A startup artifact exists but could not be read
    #[error("Failed to read {path}: {source}")]
    ArtifactIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A startup artifact exists but is not valid JSON of its schema
    #[error("Failed to parse {path}: {source}")]
    ArtifactParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Column list artifact holds no columns
    #[error("Model column list is empty")]
    EmptyColumns,

    /// Feature vector length does not match the model columns
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}
