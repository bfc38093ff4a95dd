//! Mathematical utilities: least-squares solving.

pub mod ols;

pub use ols::*;
