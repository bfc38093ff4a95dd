//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the feature schema (`NumericField`, `CategoricalField`)
//! - validated house records (`RawRecord`) and their text form (`RawInput`)
//! - candidate model identifiers and scores (`CandidateKind`, `CandidateScore`)

pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;
