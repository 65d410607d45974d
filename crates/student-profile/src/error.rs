//! Profile Error Types

use thiserror::Error;

/// Errors raised at the profile input boundary
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// Numeric field outside its declared domain
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Malformed submission payload
    #[error("Invalid profile payload: {0}")]
    InvalidPayload(String),
}
