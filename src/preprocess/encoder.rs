//! One-hot encoding of categorical fields with a dropped reference level.
//!
//! For each categorical field the encoder records the domain observed in the
//! training rows, sorted lexicographically, and drops the first category (the
//! reference level) to avoid a linear dependency among the indicator columns.
//! The remaining categories each get one binary indicator column.
//!
//! The scheme is immutable after `fit`; `encode` applies the same mapping to
//! every subsequent record. A value absent from the fit-time domain is a
//! schema violation, never an all-zero row — unseen categories must surface
//! at this boundary, not as a numeric anomaly deep inside the model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoricalField, RawRecord};
use crate::error::PipelineError;

/// Fitted encoding of one categorical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEncoding {
    pub field: CategoricalField,
    /// Observed domain, sorted lexicographically.
    pub observed: Vec<String>,
    /// The dropped reference category (first in sort order).
    pub reference: String,
    /// Categories that get an indicator column, in order.
    pub kept: Vec<String>,
}

/// Immutable category → indicator-column mapping, fit once from training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingScheme {
    fields: Vec<FieldEncoding>,
}

impl EncodingScheme {
    /// Fit the scheme from training rows.
    ///
    /// Fields are processed in canonical schema order; within a field,
    /// categories are sorted so the mapping is independent of row order.
    pub fn fit(rows: &[RawRecord]) -> Result<Self, PipelineError> {
        if rows.is_empty() {
            return Err(PipelineError::InsufficientData(
                "Cannot fit an encoding scheme on an empty dataset.".to_string(),
            ));
        }

        let mut fields = Vec::with_capacity(CategoricalField::ALL.len());
        for field in CategoricalField::ALL {
            let observed: BTreeSet<&'static str> =
                rows.iter().map(|r| r.categorical(field)).collect();
            let observed: Vec<String> = observed.into_iter().map(str::to_string).collect();

            // BTreeSet iteration is already lexicographic; the first category
            // is the reference level.
            let reference = observed[0].clone();
            let kept = observed[1..].to_vec();

            fields.push(FieldEncoding {
                field,
                observed,
                reference,
                kept,
            });
        }

        Ok(EncodingScheme { fields })
    }

    /// Encode one record into indicator values, in scheme column order.
    pub fn encode(&self, record: &RawRecord) -> Result<Vec<f64>, PipelineError> {
        let mut out = Vec::with_capacity(self.encoded_len());
        for enc in &self.fields {
            let value = record.categorical(enc.field);
            if !enc.observed.iter().any(|c| c == value) {
                return Err(PipelineError::SchemaViolation {
                    field: enc.field.name(),
                    value: value.to_string(),
                    expected: enc.observed.join(", "),
                });
            }
            for category in &enc.kept {
                out.push(if category == value { 1.0 } else { 0.0 });
            }
        }
        Ok(out)
    }

    /// Names of the indicator columns, in order: `{field}_{category}`.
    pub fn encoded_columns(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|enc| {
                enc.kept
                    .iter()
                    .map(move |c| format!("{}_{}", enc.field.name(), c))
            })
            .collect()
    }

    /// Number of indicator columns.
    pub fn encoded_len(&self) -> usize {
        self.fields.iter().map(|enc| enc.kept.len()).sum()
    }

    pub fn fields(&self) -> &[FieldEncoding] {
        &self.fields
    }
}
