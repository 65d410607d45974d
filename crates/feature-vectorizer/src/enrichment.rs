//! Frozen Enrichment Values

use serde::{Deserialize, Serialize};

/// The four "API-enriched" context features merged into every row.
///
/// KNOWN LIMITATION: the model was trained with these columns populated
/// from one sample's worth of external lookups, and the app has always
/// injected the same literals for every student. The downstream model
/// expects exactly these values; they must not be made to vary without
/// retraining.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentValues {
    /// Regional GDP per capita
    pub gdp_per_capita: f64,
    /// Days of poor air quality in the reference period
    pub poor_air_quality_days: f64,
    /// Aggregate exam stress index
    pub exam_stress_score: f64,
    /// Mean sentiment of education-related news
    pub avg_education_sentiment: f64,
}

impl Default for EnrichmentValues {
    fn default() -> Self {
        Self {
            gdp_per_capita: 19215.78,
            poor_air_quality_days: 0.0,
            exam_stress_score: 45.3,
            avg_education_sentiment: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_values() {
        let e = EnrichmentValues::default();
        assert_eq!(e.gdp_per_capita, 19215.78);
        assert_eq!(e.poor_air_quality_days, 0.0);
        assert_eq!(e.exam_stress_score, 45.3);
        assert_eq!(e.avg_education_sentiment, 0.0);
    }
}
