//! Feature Vectorization
//!
//! Maps a validated student profile into the numeric feature row the
//! trained model expects: dummy-encodes the categorical fields, merges
//! the frozen enrichment values, and reindexes the result against the
//! model's ordered column list.

mod alignment;
mod encoder;
mod enrichment;

pub use alignment::{align, FeatureVector};
pub use encoder::{encode, EncodedRow};
pub use enrichment::EnrichmentValues;

use thiserror::Error;

/// Errors during vectorization
#[derive(Debug, Clone, Error)]
pub enum VectorizeError {
    /// Column list was empty or never loaded
    #[error("Model column list is empty; cannot build a feature vector")]
    EmptyColumns,
}
