//! Prediction Insights
//!
//! Turns a prediction and the submitted profile into display-ready
//! analysis: a rule-based focus card, a comparison against the average
//! at-risk student, and a one-line risk narrative.

mod comparison;
mod focus;
mod summary;

pub use comparison::{profile_comparison, ComparisonRow, AT_RISK_AVG_ABSENCES, AT_RISK_AVG_FAILURES};
pub use focus::{focus_points, FocusConfig, FocusPoint};
pub use summary::{risk_summary, RiskSummary};
