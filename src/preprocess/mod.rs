//! Preprocessing: categorical encoding, feature assembly, and scaling.
//!
//! The contract across this module is strict column-order stability: the
//! encoder fixes indicator columns at fit time, the assembler concatenates
//! numerics then indicators in that fixed order, and the scaler standardizes
//! every column of the result. Any permutation between training and inference
//! would silently corrupt predictions, so the order is carried as an explicit
//! named artifact (`column_order`) rather than left to concatenation habits.

pub mod assembler;
pub mod encoder;
pub mod scaler;

pub use assembler::*;
pub use encoder::*;
pub use scaler::*;
