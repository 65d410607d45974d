//! Student Focus Card Rules

use serde::{Deserialize, Serialize};
use student_profile::StudentProfile;
use tracing::debug;

/// Thresholds for the focus-card rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Study time below this triggers the study-time recommendation
    pub min_studytime: u8,
    /// Failures above this trigger the review recommendation
    pub failures_trigger: u8,
    /// Absences above this trigger the attendance recommendation
    pub absences_trigger: u8,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            min_studytime: 2,
            failures_trigger: 0,
            absences_trigger: 10,
        }
    }
}

/// One focus-card recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusPoint {
    /// Weekly study time is below the threshold
    IncreaseStudyTime,
    /// Student has past failures to review
    ReviewMistakes,
    /// Absences are high enough to flag attendance
    ImproveAttendance,
    /// Nothing triggered; positive reinforcement
    KeepItUp,
}

impl FocusPoint {
    /// Display message for the focus card
    pub fn message(&self) -> &'static str {
        match self {
            FocusPoint::IncreaseStudyTime => "Increase weekly study time.",
            FocusPoint::ReviewMistakes => {
                "Review past mistakes and seek help in weak areas."
            }
            FocusPoint::ImproveAttendance => "Improve class attendance.",
            FocusPoint::KeepItUp => "Great work! Keep up the consistent effort.",
        }
    }
}

/// Evaluate the focus-card rules for a profile.
///
/// Rules fire independently and in a fixed order; when none fire the
/// card carries the single positive-reinforcement entry instead.
pub fn focus_points(profile: &StudentProfile, config: &FocusConfig) -> Vec<FocusPoint> {
    let mut points = Vec::new();

    if profile.studytime < config.min_studytime {
        points.push(FocusPoint::IncreaseStudyTime);
    }
    if profile.failures > config.failures_trigger {
        points.push(FocusPoint::ReviewMistakes);
    }
    if profile.absences > config.absences_trigger {
        points.push(FocusPoint::ImproveAttendance);
    }
    if points.is_empty() {
        points.push(FocusPoint::KeepItUp);
    }

    debug!("Focus card has {} entries", points.len());
    points
}
