//! Student Profile Domain Model
//!
//! Provides the typed student attribute record submitted by the form,
//! plus range validation and clamping at the input boundary.

mod error;
mod profile;
mod validator;

pub use error::ProfileError;
pub use profile::{Address, ParentJob, Sex, StudentProfile, YesNo};
pub use validator::{ProfileValidator, ValidationConfig};
