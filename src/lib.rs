//! `house-pricer` library crate.
//!
//! The binary (`hpr`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., a future desktop form or serving daemon)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod preprocess;
pub mod report;
pub mod train;
