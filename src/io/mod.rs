//! Input/output helpers.
//!
//! - CSV dataset ingest + validation (`dataset`)
//! - model bundle JSON read/write (`bundle`)

pub mod bundle;
pub mod dataset;

pub use bundle::*;
pub use dataset::*;
