//! Dummy Encoding of Student Profiles

use crate::enrichment::EnrichmentValues;
use std::collections::HashMap;
use student_profile::{Address, ParentJob, Sex, StudentProfile};
use tracing::debug;

/// Named feature values for one student, before column alignment.
///
/// Keys are the model's training column names. Categorical fields use
/// dummy encoding with an implicit baseline: the baseline label
/// (Female, Rural, No, At Home) contributes no column at all, so its
/// indicator group reads as all zeros after alignment.
#[derive(Debug, Clone, Default)]
pub struct EncodedRow {
    values: HashMap<&'static str, f64>,
}

impl EncodedRow {
    /// Look up a feature by column name
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    /// Number of named features in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, column: &'static str, value: f64) {
        self.values.insert(column, value);
    }
}

/// Indicator columns for a parent-job field.
///
/// Four indicators (`teacher`, `health`, `services`, `other`); At Home
/// is the baseline and sets none of them.
fn job_indicator(job: ParentJob) -> [f64; 4] {
    let mut flags = [0.0; 4];
    match job {
        ParentJob::Teacher => flags[0] = 1.0,
        ParentJob::Health => flags[1] = 1.0,
        ParentJob::Services => flags[2] = 1.0,
        ParentJob::Other => flags[3] = 1.0,
        ParentJob::AtHome => {}
    }
    flags
}

/// Encode a validated profile into a named feature row.
///
/// Pure and total over the validated input domain: every profile maps
/// to exactly one row of 23 named features (7 numeric, 12 indicators,
/// 4 frozen enrichment values).
pub fn encode(profile: &StudentProfile) -> EncodedRow {
    let mut row = EncodedRow::default();

    // Numeric fields pass through unchanged
    row.insert("failures", profile.failures as f64);
    row.insert("absences", profile.absences as f64);
    row.insert("age", profile.age as f64);
    row.insert("traveltime", profile.traveltime as f64);
    row.insert("studytime", profile.studytime as f64);
    row.insert("Medu", profile.medu as f64);
    row.insert("Fedu", profile.fedu as f64);

    // Single-indicator categoricals
    row.insert("sex_M", if profile.sex == Sex::Male { 1.0 } else { 0.0 });
    row.insert(
        "address_U",
        if profile.address == Address::Urban { 1.0 } else { 0.0 },
    );
    row.insert("internet_yes", profile.internet.as_indicator());
    row.insert("higher_yes", profile.higher.as_indicator());

    // Parent jobs: four indicators each, At Home baseline
    let mjob = job_indicator(profile.mjob);
    row.insert("Mjob_teacher", mjob[0]);
    row.insert("Mjob_health", mjob[1]);
    row.insert("Mjob_services", mjob[2]);
    row.insert("Mjob_other", mjob[3]);

    let fjob = job_indicator(profile.fjob);
    row.insert("Fjob_teacher", fjob[0]);
    row.insert("Fjob_health", fjob[1]);
    row.insert("Fjob_services", fjob[2]);
    row.insert("Fjob_other", fjob[3]);

    // Frozen enrichment context (see EnrichmentValues)
    let enrichment = EnrichmentValues::default();
    row.insert("gdp_per_capita", enrichment.gdp_per_capita);
    row.insert("poor_air_quality_days", enrichment.poor_air_quality_days);
    row.insert("exam_stress_score", enrichment.exam_stress_score);
    row.insert("avg_education_sentiment", enrichment.avg_education_sentiment);

    debug!("Encoded profile into {} named features", row.len());
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_profile::YesNo;

    fn scenario_profile() -> StudentProfile {
        StudentProfile {
            failures: 0,
            absences: 2,
            age: 17,
            sex: Sex::Female,
            address: Address::Urban,
            mjob: ParentJob::Teacher,
            fjob: ParentJob::Other,
            traveltime: 2,
            studytime: 2,
            medu: 2,
            fedu: 2,
            internet: YesNo::Yes,
            higher: YesNo::Yes,
        }
    }

    #[test]
    fn test_reference_profile_encoding() {
        let row = encode(&scenario_profile());

        assert_eq!(row.get("address_U"), Some(1.0));
        assert_eq!(row.get("internet_yes"), Some(1.0));
        assert_eq!(row.get("higher_yes"), Some(1.0));
        assert_eq!(row.get("sex_M"), Some(0.0));
        assert_eq!(row.get("Mjob_teacher"), Some(1.0));
        assert_eq!(row.get("Mjob_health"), Some(0.0));
        assert_eq!(row.get("Mjob_services"), Some(0.0));
        assert_eq!(row.get("Mjob_other"), Some(0.0));
        assert_eq!(row.get("Fjob_other"), Some(1.0));
        assert_eq!(row.get("Fjob_teacher"), Some(0.0));
        assert_eq!(row.get("Fjob_health"), Some(0.0));
        assert_eq!(row.get("Fjob_services"), Some(0.0));
        assert_eq!(row.get("gdp_per_capita"), Some(19215.78));
        assert_eq!(row.get("poor_air_quality_days"), Some(0.0));
        assert_eq!(row.get("exam_stress_score"), Some(45.3));
        assert_eq!(row.get("avg_education_sentiment"), Some(0.0));
    }

    #[test]
    fn test_at_home_is_all_zero_baseline() {
        let profile = StudentProfile {
            mjob: ParentJob::AtHome,
            fjob: ParentJob::AtHome,
            ..scenario_profile()
        };
        let row = encode(&profile);

        for col in ["Mjob_teacher", "Mjob_health", "Mjob_services", "Mjob_other"] {
            assert_eq!(row.get(col), Some(0.0), "{col} should be baseline zero");
        }
        for col in ["Fjob_teacher", "Fjob_health", "Fjob_services", "Fjob_other"] {
            assert_eq!(row.get(col), Some(0.0), "{col} should be baseline zero");
        }
    }

    #[test]
    fn test_male_sets_sex_indicator() {
        let profile = StudentProfile {
            sex: Sex::Male,
            ..scenario_profile()
        };
        assert_eq!(encode(&profile).get("sex_M"), Some(1.0));
    }

    #[test]
    fn test_rural_no_no_are_baselines() {
        let profile = StudentProfile {
            address: Address::Rural,
            internet: YesNo::No,
            higher: YesNo::No,
            ..scenario_profile()
        };
        let row = encode(&profile);
        assert_eq!(row.get("address_U"), Some(0.0));
        assert_eq!(row.get("internet_yes"), Some(0.0));
        assert_eq!(row.get("higher_yes"), Some(0.0));
    }

    #[test]
    fn test_row_has_23_features() {
        assert_eq!(encode(&scenario_profile()).len(), 23);
    }
}
