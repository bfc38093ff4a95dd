//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs training (ingest -> encode -> scale -> fit -> select -> save)
//! - runs inference (load -> validate input -> transform -> predict)
//! - prints reports

use clap::Parser;

use crate::cli::{Cli, Command, InspectArgs, PredictArgs, TrainArgs};
use crate::error::PipelineError;

pub mod pipeline;

/// Entry point for the `hpr` binary.
pub fn run() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Train(args) => handle_train(args),
        Command::Predict(args) => handle_predict(args),
        Command::Inspect(args) => handle_inspect(args),
    }
}

fn handle_train(args: TrainArgs) -> Result<(), PipelineError> {
    let config = pipeline::TrainConfig {
        data_path: args.data,
        out_path: args.out,
        seed: args.seed,
    };
    let run = pipeline::run_training(&config)?;

    println!(
        "{}",
        crate::report::format_training_summary(&run.dataset, &run.selection, &run.bundle.column_order)
    );

    crate::io::bundle::save_bundle(&config.out_path, &run.bundle)?;
    println!("Saved model bundle to '{}'.", config.out_path.display());

    Ok(())
}

fn handle_predict(args: PredictArgs) -> Result<(), PipelineError> {
    // Load first: inference cannot proceed without a valid bundle, so fail
    // before asking the user to type twelve fields.
    let bundle = crate::io::bundle::load_bundle(&args.bundle)?;

    let record = crate::cli::prompt::resolve_record(&args)?;
    let price = pipeline::predict_price(&bundle, &record)?;

    println!("Predicted price: {}", crate::report::format_currency(price));
    Ok(())
}

fn handle_inspect(args: InspectArgs) -> Result<(), PipelineError> {
    let bundle = crate::io::bundle::load_bundle(&args.bundle)?;
    println!("{}", crate::report::format_bundle_info(&bundle));
    Ok(())
}
