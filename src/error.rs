//! Typed pipeline errors.
//!
//! Each variant maps to a process exit code:
//!
//! - `2` — configuration, user input, or persisted-artifact problems
//! - `3` — not enough data to fit anything
//! - `4` — internal invariant failures (a pipeline bug, not a user problem)
//!
//! Validation errors (`Parse`, `SchemaViolation`) are recoverable at the input
//! boundary; dimension and bundle errors are not — a silently wrong price is
//! worse than a halt.

#[derive(Clone, PartialEq)]
pub enum PipelineError {
    /// Bad configuration or unusable input file.
    Config(String),
    /// User-supplied numeric text is not a valid number.
    Parse { field: &'static str, value: String },
    /// Categorical value outside the accepted domain.
    SchemaViolation {
        field: &'static str,
        value: String,
        expected: String,
    },
    /// Too few rows to fit or split.
    InsufficientData(String),
    /// Feature vector length disagrees with fit-time column count.
    DimensionMismatch { expected: usize, got: usize },
    /// Some other internal invariant broke.
    Internal(String),
    /// Persisted bundle is unreadable or structurally wrong.
    BundleCorrupt(String),
    /// Persisted bundle was written by an incompatible format version.
    BundleVersionMismatch { supported: u32, found: u32 },
}

impl PipelineError {
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Config(_)
            | PipelineError::Parse { .. }
            | PipelineError::SchemaViolation { .. }
            | PipelineError::BundleCorrupt(_)
            | PipelineError::BundleVersionMismatch { .. } => 2,
            PipelineError::InsufficientData(_) => 3,
            PipelineError::DimensionMismatch { .. } | PipelineError::Internal(_) => 4,
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Config(msg) => write!(f, "{msg}"),
            PipelineError::Parse { field, value } => {
                write!(f, "Invalid input for `{field}`: '{value}'.")
            }
            PipelineError::SchemaViolation {
                field,
                value,
                expected,
            } => write!(
                f,
                "Invalid value for `{field}`: '{value}' (expected one of: {expected})."
            ),
            PipelineError::InsufficientData(msg) => write!(f, "{msg}"),
            PipelineError::DimensionMismatch { expected, got } => write!(
                f,
                "Feature vector has {got} columns but the pipeline was fit with {expected}."
            ),
            PipelineError::Internal(msg) => write!(f, "{msg}"),
            PipelineError::BundleCorrupt(msg) => write!(f, "Model bundle is corrupt: {msg}"),
            PipelineError::BundleVersionMismatch { supported, found } => write!(
                f,
                "Model bundle format version {found} is not supported (expected {supported})."
            ),
        }
    }
}

impl std::fmt::Debug for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PipelineError({self})")
    }
}

impl std::error::Error for PipelineError {}
