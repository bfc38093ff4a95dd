//! Command-line parsing for the house price predictor.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the preprocessing/modeling code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hpr", version, about = "House price predictor: train, predict, inspect")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the candidate regressors on a housing CSV, select the best by
    /// held-out R², and save a model bundle.
    Train(TrainArgs),
    /// Predict one house's price from a saved bundle.
    ///
    /// Fields may be supplied as flags; any missing field is asked for
    /// interactively.
    Predict(PredictArgs),
    /// Print a saved bundle's metadata, scores, and column order.
    Inspect(InspectArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct TrainArgs {
    /// Training CSV (columns: price, area, bedrooms, ..., furnishingstatus).
    #[arg(long, value_name = "CSV")]
    pub data: PathBuf,

    /// Where to write the model bundle.
    #[arg(long, default_value = "model.json")]
    pub out: PathBuf,

    /// Random seed for the train/test split and forest bootstrap.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Model bundle produced by `hpr train`.
    #[arg(long, default_value = "model.json")]
    pub bundle: PathBuf,

    /// Area in square feet.
    #[arg(long)]
    pub area: Option<f64>,

    /// Number of bedrooms.
    #[arg(long)]
    pub bedrooms: Option<u32>,

    /// Number of bathrooms.
    #[arg(long)]
    pub bathrooms: Option<u32>,

    /// Number of stories.
    #[arg(long)]
    pub stories: Option<u32>,

    /// Number of parking spaces.
    #[arg(long)]
    pub parking: Option<u32>,

    /// On a main road? (yes/no)
    #[arg(long)]
    pub mainroad: Option<String>,

    /// Has a guest room? (yes/no)
    #[arg(long)]
    pub guestroom: Option<String>,

    /// Has a basement? (yes/no)
    #[arg(long)]
    pub basement: Option<String>,

    /// Has hot water heating? (yes/no)
    #[arg(long)]
    pub hotwaterheating: Option<String>,

    /// Has air conditioning? (yes/no)
    #[arg(long)]
    pub airconditioning: Option<String>,

    /// In a preferred area? (yes/no)
    #[arg(long)]
    pub prefarea: Option<String>,

    /// Furnishing status (furnished/semi-furnished/unfurnished).
    #[arg(long)]
    pub furnishingstatus: Option<String>,
}

#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Model bundle produced by `hpr train`.
    #[arg(long, default_value = "model.json")]
    pub bundle: PathBuf,
}
