//! At-Risk Profile Comparison

use serde::Serialize;
use student_profile::StudentProfile;

/// Average past failures among at-risk students (training cohort)
pub const AT_RISK_AVG_FAILURES: f64 = 1.5;

/// Average absences among at-risk students (training cohort)
pub const AT_RISK_AVG_ABSENCES: f64 = 12.0;

/// One bar-chart row comparing the student to the at-risk average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Metric label
    pub metric: &'static str,
    /// This student's value
    pub student: f64,
    /// Reference value for the average at-risk student
    pub at_risk_average: f64,
}

/// Build the profile-comparison rows for the analysis panel
pub fn profile_comparison(profile: &StudentProfile) -> Vec<ComparisonRow> {
    vec![
        ComparisonRow {
            metric: "Past Failures",
            student: profile.failures as f64,
            at_risk_average: AT_RISK_AVG_FAILURES,
        },
        ComparisonRow {
            metric: "Absences",
            student: profile.absences as f64,
            at_risk_average: AT_RISK_AVG_ABSENCES,
        },
    ]
}
