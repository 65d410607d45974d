//! Startup Artifact Loading

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Serialized model weight bundle.
///
/// The training pipeline distills its stacking ensemble into a
/// per-column logistic scorer; this runtime treats the bundle as
/// opaque beyond what `predict` needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelWeights {
    /// Model family tag, informational only
    pub model_type: String,
    /// Logistic intercept
    pub intercept: f64,
    /// Coefficient per training column name
    pub coefficients: HashMap<String, f64>,
    /// Decision threshold on the dropout probability
    #[serde(default = "default_threshold")]
    pub positive_threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

fn read_artifact(path: &Path) -> Result<String, ModelError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ModelError::ArtifactMissing {
                path: path.display().to_string(),
            }
        } else {
            ModelError::ArtifactIo {
                path: path.display().to_string(),
                source,
            }
        }
    })
}

/// Load the serialized model weights
pub fn load_model_weights(path: impl AsRef<Path>) -> Result<ModelWeights, ModelError> {
    let path = path.as_ref();
    let raw = read_artifact(path)?;
    let weights: ModelWeights =
        serde_json::from_str(&raw).map_err(|source| ModelError::ArtifactParse {
            path: path.display().to_string(),
            source,
        })?;

    info!(
        "Loaded model weights from {}: {} coefficients, type {}",
        path.display(),
        weights.coefficients.len(),
        weights.model_type
    );
    Ok(weights)
}

/// Load the ordered model-column list
pub fn load_model_columns(path: impl AsRef<Path>) -> Result<Vec<String>, ModelError> {
    let path = path.as_ref();
    let raw = read_artifact(path)?;
    let columns: Vec<String> =
        serde_json::from_str(&raw).map_err(|source| ModelError::ArtifactParse {
            path: path.display().to_string(),
            source,
        })?;

    if columns.is_empty() {
        return Err(ModelError::EmptyColumns);
    }

    info!("Loaded {} model columns from {}", columns.len(), path.display());
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_artifact_names_path() {
        let err = load_model_columns("/nonexistent/model_columns.json").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Required file not found"));
        assert!(msg.contains("model_columns.json"));
    }

    #[test]
    fn test_empty_column_list_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_model_columns(file.path()).unwrap_err();
        assert!(matches!(err, crate::ModelError::EmptyColumns));
    }

    #[test]
    fn test_malformed_weights_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"a model\"}}").unwrap();

        let err = load_model_weights(file.path()).unwrap_err();
        assert!(matches!(err, crate::ModelError::ArtifactParse { .. }));
    }

    #[test]
    fn test_weights_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "model_type": "stacking_logistic_distilled",
                "intercept": -1.5,
                "coefficients": {{"failures": 0.9, "absences": 0.05}}
            }}"#
        )
        .unwrap();

        let weights = load_model_weights(file.path()).unwrap();
        assert_eq!(weights.intercept, -1.5);
        assert_eq!(weights.coefficients.len(), 2);
        // Threshold defaults when absent from the artifact
        assert_eq!(weights.positive_threshold, 0.5);
    }
}
