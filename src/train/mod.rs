//! Training: train/test splitting, evaluation metrics, and model selection.

pub mod metrics;
pub mod selection;
pub mod split;

pub use metrics::*;
pub use selection::*;
pub use split::*;
