//! Read/write the persisted model bundle.
//!
//! The bundle JSON is the cross-process contract between training and
//! inference: encoding scheme, scaling parameters, chosen model, and the
//! explicit column-order artifact travel together, atomically, in one file.
//! Load after save must reproduce bit-identical preprocessing behavior.
//!
//! The format version is checked *before* full deserialization so an old or
//! foreign artifact fails with a version error rather than a confusing field
//! mismatch.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CandidateKind, CandidateScore};
use crate::error::PipelineError;
use crate::models::TrainedModel;
use crate::preprocess::{EncodingScheme, ScalingParams};

/// Bump when the bundle schema changes incompatibly.
pub const FORMAT_VERSION: u32 = 1;

/// The persisted (scheme, scaling, model) triple plus metadata.
///
/// Immutable once created; inference loads it once per process and shares it
/// read-only across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    pub tool: String,
    pub format_version: u32,
    pub created: DateTime<Utc>,
    /// Explicit column order the scaler and model were fit against.
    pub column_order: Vec<String>,
    pub scheme: EncodingScheme,
    pub scaling: ScalingParams,
    pub model: TrainedModel,
    pub best: CandidateKind,
    /// Held-out scores of every candidate, kept for `hpr inspect`.
    pub scores: Vec<CandidateScore>,
}

impl ModelBundle {
    /// Cross-check the internal consistency of a (possibly loaded) bundle.
    fn validate(&self) -> Result<(), PipelineError> {
        if self.column_order.len() != self.scaling.len() {
            return Err(PipelineError::BundleCorrupt(format!(
                "column order lists {} columns but scaling parameters cover {}",
                self.column_order.len(),
                self.scaling.len()
            )));
        }
        if self.model.kind() != self.best {
            return Err(PipelineError::BundleCorrupt(
                "stored model does not match the recorded best candidate".to_string(),
            ));
        }
        Ok(())
    }
}

/// Write the bundle to `path` as pretty JSON.
pub fn save_bundle(path: &Path, bundle: &ModelBundle) -> Result<(), PipelineError> {
    bundle.validate()?;
    let file = File::create(path).map_err(|e| {
        PipelineError::Config(format!(
            "Failed to create bundle '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::to_writer_pretty(file, bundle)
        .map_err(|e| PipelineError::Config(format!("Failed to write bundle: {e}")))?;
    Ok(())
}

/// Read and validate a bundle from `path`.
pub fn load_bundle(path: &Path) -> Result<ModelBundle, PipelineError> {
    let file = File::open(path).map_err(|e| {
        PipelineError::Config(format!("Failed to open bundle '{}': {e}", path.display()))
    })?;

    let value: serde_json::Value = serde_json::from_reader(file)
        .map_err(|e| PipelineError::BundleCorrupt(format!("not valid JSON: {e}")))?;

    let found = value
        .get("format_version")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| {
            PipelineError::BundleCorrupt("missing `format_version` field".to_string())
        })?;
    if found != u64::from(FORMAT_VERSION) {
        return Err(PipelineError::BundleVersionMismatch {
            supported: FORMAT_VERSION,
            found: found as u32,
        });
    }

    let bundle: ModelBundle = serde_json::from_value(value)
        .map_err(|e| PipelineError::BundleCorrupt(format!("unexpected structure: {e}")))?;
    bundle.validate()?;
    Ok(bundle)
}
