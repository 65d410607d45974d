//! Column Alignment

use crate::encoder::EncodedRow;
use crate::VectorizeError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Feature vector in the model's column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Values, one per model column, in model-column order
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Vector length (always equals the model column count)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reindex a named feature row against the model's ordered column list.
///
/// The output has exactly one value per column, in the given order;
/// any column the row does not name defaults to 0.0. The downstream
/// model tolerates no reordering or renaming, so this is the only
/// place vector shape is decided.
pub fn align(row: &EncodedRow, columns: &[String]) -> Result<FeatureVector, VectorizeError> {
    if columns.is_empty() {
        return Err(VectorizeError::EmptyColumns);
    }

    let values: Vec<f64> = columns
        .iter()
        .map(|col| row.get(col).unwrap_or(0.0))
        .collect();

    debug!(
        "Aligned {} named features against {} model columns",
        row.len(),
        columns.len()
    );

    Ok(FeatureVector { values })
}
