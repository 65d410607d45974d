//! Prediction Engine

use crate::artifacts::{load_model_columns, load_model_weights, ModelWeights};
use crate::ModelError;
use feature_vectorizer::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Student predicted to stay enrolled
    NoDropout,
    /// Student predicted at risk of dropping out
    Dropout,
}

impl Label {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::NoDropout => "no_dropout",
            Label::Dropout => "dropout",
        }
    }
}

/// Prediction result for one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label
    pub label: Label,
    /// Dropout probability as a percentage (0-100)
    pub probability_pct: f64,
    /// Probabilities for [no-dropout, dropout]
    pub probabilities: [f64; 2],
    /// Timestamp when prediction was made
    pub timestamp_ms: u64,
}

/// Loaded dropout model.
///
/// Created once at startup from the two artifacts and shared read-only
/// for the process lifetime; every call over it is synchronous, fast,
/// and side-effect free.
pub struct DropoutModel {
    columns: Vec<String>,
    /// Coefficients resolved into model-column order; columns the
    /// weight bundle does not name get weight 0
    weights: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl DropoutModel {
    /// Load the model from its two startup artifacts
    pub fn load(
        model_path: impl AsRef<Path>,
        columns_path: impl AsRef<Path>,
    ) -> Result<Self, ModelError> {
        let weights = load_model_weights(model_path)?;
        let columns = load_model_columns(columns_path)?;
        Self::from_parts(weights, columns)
    }

    /// Assemble a model from already-deserialized artifacts
    pub fn from_parts(weights: ModelWeights, columns: Vec<String>) -> Result<Self, ModelError> {
        if columns.is_empty() {
            return Err(ModelError::EmptyColumns);
        }

        let resolved: Vec<f64> = columns
            .iter()
            .map(|col| weights.coefficients.get(col).copied().unwrap_or(0.0))
            .collect();

        info!(
            "Model ready: {} columns, threshold {}",
            columns.len(),
            weights.positive_threshold
        );

        Ok(Self {
            columns,
            weights: resolved,
            intercept: weights.intercept,
            threshold: weights.positive_threshold,
        })
    }

    /// The ordered column list the model was trained on
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Probability distribution over [no-dropout, dropout]
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ModelError> {
        if features.len() != self.columns.len() {
            return Err(ModelError::InvalidInputShape {
                expected: self.columns.len(),
                actual: features.len(),
            });
        }

        let score: f64 = features
            .values
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.intercept;

        let p_dropout = 1.0 / (1.0 + (-score).exp());
        debug!("Scored feature vector: logit {score:.4}, p_dropout {p_dropout:.4}");
        Ok([1.0 - p_dropout, p_dropout])
    }

    /// Full prediction: label plus probability percentage
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let probabilities = self.predict_proba(features)?;
        let p_dropout = probabilities[1];

        let label = if p_dropout >= self.threshold {
            Label::Dropout
        } else {
            Label::NoDropout
        };

        let timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Ok(Prediction {
            label,
            probability_pct: p_dropout * 100.0,
            probabilities,
            timestamp_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_model(coefficients: &[(&str, f64)], intercept: f64) -> DropoutModel {
        let columns: Vec<String> = coefficients.iter().map(|(c, _)| c.to_string()).collect();
        let weights = ModelWeights {
            model_type: "test".to_string(),
            intercept,
            coefficients: coefficients
                .iter()
                .map(|(c, w)| (c.to_string(), *w))
                .collect::<HashMap<_, _>>(),
            positive_threshold: 0.5,
        };
        DropoutModel::from_parts(weights, columns).unwrap()
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = test_model(&[("failures", 0.8), ("absences", 0.05)], -1.0);
        let features = FeatureVector { values: vec![2.0, 10.0] };

        let probs = model.predict_proba(&features).unwrap();
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-12);
        assert!(probs[1] > 0.0 && probs[1] < 1.0);
    }

    #[test]
    fn test_high_risk_profile_labeled_dropout() {
        let model = test_model(&[("failures", 1.0)], 0.0);
        let features = FeatureVector { values: vec![4.0] };

        let prediction = model.predict(&features).unwrap();
        assert_eq!(prediction.label, Label::Dropout);
        assert!(prediction.probability_pct > 50.0);
    }

    #[test]
    fn test_low_risk_profile_labeled_no_dropout() {
        let model = test_model(&[("failures", 1.0)], -3.0);
        let features = FeatureVector { values: vec![0.0] };

        let prediction = model.predict(&features).unwrap();
        assert_eq!(prediction.label, Label::NoDropout);
        assert!(prediction.probability_pct < 50.0);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let model = test_model(&[("failures", 1.0), ("absences", 0.1)], 0.0);
        let features = FeatureVector { values: vec![1.0] };

        let err = model.predict(&features).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidInputShape { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_unnamed_column_gets_zero_weight() {
        let weights = ModelWeights {
            model_type: "test".to_string(),
            intercept: 0.0,
            coefficients: HashMap::from([("failures".to_string(), 1.0)]),
            positive_threshold: 0.5,
        };
        let columns = vec!["failures".to_string(), "mystery".to_string()];
        let model = DropoutModel::from_parts(weights, columns).unwrap();

        // A wild value in the unweighted column must not move the score
        let a = model
            .predict_proba(&FeatureVector { values: vec![1.0, 0.0] })
            .unwrap();
        let b = model
            .predict_proba(&FeatureVector { values: vec![1.0, 999.0] })
            .unwrap();
        assert_eq!(a, b);
    }
}
