//! Student Attribute Record

use serde::{Deserialize, Serialize};

/// Student sex as presented by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

/// Home address type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Address {
    Rural,
    Urban,
}

/// Yes/No form answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Indicator value for dummy encoding (Yes = 1)
    pub fn as_indicator(&self) -> f64 {
        match self {
            YesNo::Yes => 1.0,
            YesNo::No => 0.0,
        }
    }
}

/// Parent occupation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentJob {
    Teacher,
    Health,
    Services,
    #[serde(rename = "At Home")]
    AtHome,
    Other,
}

/// One student's attributes, captured from a single form submission.
///
/// Field names and domains mirror the trained model's expectations:
/// numeric fields are bounded (see [`crate::ValidationConfig`]) and
/// categorical fields are closed enums, so a deserialized profile can
/// only be out of domain on the numeric side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Number of past class failures (0-4)
    pub failures: u8,
    /// Number of school absences (0-93)
    pub absences: u8,
    /// Student age in years (15-22)
    pub age: u8,
    /// Home-to-school travel time bucket (1-4)
    pub traveltime: u8,
    /// Weekly study time bucket (1-4)
    pub studytime: u8,
    /// Mother's education level (0-4)
    #[serde(rename = "Medu")]
    pub medu: u8,
    /// Father's education level (0-4)
    #[serde(rename = "Fedu")]
    pub fedu: u8,
    /// Student sex
    pub sex: Sex,
    /// Urban or rural address
    pub address: Address,
    /// Home internet access
    pub internet: YesNo,
    /// Wants to pursue higher education
    pub higher: YesNo,
    /// Mother's job
    #[serde(rename = "Mjob")]
    pub mjob: ParentJob,
    /// Father's job
    #[serde(rename = "Fjob")]
    pub fjob: ParentJob,
}

impl Default for StudentProfile {
    /// Form default values (the original dashboard's widget defaults)
    fn default() -> Self {
        Self {
            failures: 0,
            absences: 2,
            age: 17,
            traveltime: 2,
            studytime: 2,
            medu: 2,
            fedu: 2,
            sex: Sex::Female,
            address: Address::Urban,
            internet: YesNo::Yes,
            higher: YesNo::Yes,
            mjob: ParentJob::Teacher,
            fjob: ParentJob::Teacher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_form_payload() {
        let json = r#"{
            "failures": 1, "absences": 12, "age": 16,
            "traveltime": 1, "studytime": 3, "Medu": 4, "Fedu": 0,
            "sex": "Male", "address": "Rural",
            "internet": "No", "higher": "Yes",
            "Mjob": "At Home", "Fjob": "Services"
        }"#;

        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.failures, 1);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.mjob, ParentJob::AtHome);
        assert_eq!(profile.fjob, ParentJob::Services);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{
            "failures": 0, "absences": 0, "age": 17,
            "traveltime": 2, "studytime": 2, "Medu": 2, "Fedu": 2,
            "sex": "Unknown", "address": "Urban",
            "internet": "Yes", "higher": "Yes",
            "Mjob": "Teacher", "Fjob": "Teacher"
        }"#;

        assert!(serde_json::from_str::<StudentProfile>(json).is_err());
    }

    #[test]
    fn test_yes_no_indicator() {
        assert_eq!(YesNo::Yes.as_indicator(), 1.0);
        assert_eq!(YesNo::No.as_indicator(), 0.0);
    }
}
