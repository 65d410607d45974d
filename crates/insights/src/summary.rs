//! Risk Narrative

use model_runtime::{Label, Prediction};
use serde::Serialize;

/// Display summary for a prediction result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Headline line, e.g. "High Dropout Risk: 62.35%"
    pub headline: String,
    /// Whether the result should render as a warning
    pub high_risk: bool,
    /// Gauge bar color for the risk gauge
    pub gauge_color: &'static str,
}

/// Build the one-line narrative and gauge styling for a prediction
pub fn risk_summary(prediction: &Prediction) -> RiskSummary {
    match prediction.label {
        Label::Dropout => RiskSummary {
            headline: format!("High Dropout Risk: {:.2}%", prediction.probability_pct),
            high_risk: true,
            gauge_color: "#FF4B4B",
        },
        Label::NoDropout => RiskSummary {
            headline: format!("Low Dropout Risk: {:.2}%", prediction.probability_pct),
            high_risk: false,
            gauge_color: "#00FF7F",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: Label, pct: f64) -> Prediction {
        Prediction {
            label,
            probability_pct: pct,
            probabilities: [1.0 - pct / 100.0, pct / 100.0],
            timestamp_ms: 0,
        }
    }

    #[test]
    fn test_high_risk_headline() {
        let summary = risk_summary(&prediction(Label::Dropout, 72.345));
        assert_eq!(summary.headline, "High Dropout Risk: 72.35%");
        assert!(summary.high_risk);
        assert_eq!(summary.gauge_color, "#FF4B4B");
    }

    #[test]
    fn test_low_risk_headline() {
        let summary = risk_summary(&prediction(Label::NoDropout, 12.0));
        assert_eq!(summary.headline, "Low Dropout Risk: 12.00%");
        assert!(!summary.high_risk);
        assert_eq!(summary.gauge_color, "#00FF7F");
    }
}
