//! Numeric Range Validation

use crate::error::ProfileError;
use crate::profile::StudentProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Past failures valid range
    pub failures_range: (u8, u8),
    /// Absences valid range
    pub absences_range: (u8, u8),
    /// Age valid range (years)
    pub age_range: (u8, u8),
    /// Travel time bucket range
    pub traveltime_range: (u8, u8),
    /// Study time bucket range
    pub studytime_range: (u8, u8),
    /// Parent education level range (applies to both parents)
    pub education_range: (u8, u8),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            failures_range: (0, 4),
            absences_range: (0, 93),
            age_range: (15, 22),
            traveltime_range: (1, 4),
            studytime_range: (1, 4),
            education_range: (0, 4),
        }
    }
}

/// Validator for submitted student profiles
///
/// The form widgets already constrain every field, so under normal
/// operation nothing here fires. API callers bypass the widgets, hence
/// the boundary check.
pub struct ProfileValidator {
    config: ValidationConfig,
}

impl ProfileValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    fn validate_range(
        &self,
        field: &'static str,
        value: u8,
        range: (u8, u8),
    ) -> Result<(), ProfileError> {
        if value < range.0 || value > range.1 {
            Err(ProfileError::OutOfRange {
                field,
                value: value as i64,
                min: range.0 as i64,
                max: range.1 as i64,
            })
        } else {
            Ok(())
        }
    }

    /// Validate every numeric field of a profile
    ///
    /// Returns the first violation; categorical fields are closed enums
    /// and need no checking here.
    pub fn validate(&self, profile: &StudentProfile) -> Result<(), ProfileError> {
        self.validate_range("failures", profile.failures, self.config.failures_range)?;
        self.validate_range("absences", profile.absences, self.config.absences_range)?;
        self.validate_range("age", profile.age, self.config.age_range)?;
        self.validate_range("traveltime", profile.traveltime, self.config.traveltime_range)?;
        self.validate_range("studytime", profile.studytime, self.config.studytime_range)?;
        self.validate_range("Medu", profile.medu, self.config.education_range)?;
        self.validate_range("Fedu", profile.fedu, self.config.education_range)?;

        debug!("Profile validated: 7 numeric fields in range");
        Ok(())
    }

    /// Clamp every numeric field to its domain, widget-style
    ///
    /// Mirrors what the slider widgets do for interactive input, for
    /// callers that prefer clamping over rejection.
    pub fn clamp(&self, profile: &StudentProfile) -> StudentProfile {
        let c = &self.config;
        StudentProfile {
            failures: profile.failures.clamp(c.failures_range.0, c.failures_range.1),
            absences: profile.absences.clamp(c.absences_range.0, c.absences_range.1),
            age: profile.age.clamp(c.age_range.0, c.age_range.1),
            traveltime: profile.traveltime.clamp(c.traveltime_range.0, c.traveltime_range.1),
            studytime: profile.studytime.clamp(c.studytime_range.0, c.studytime_range.1),
            medu: profile.medu.clamp(c.education_range.0, c.education_range.1),
            fedu: profile.fedu.clamp(c.education_range.0, c.education_range.1),
            ..profile.clone()
        }
    }
}

impl Default for ProfileValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
