//! Interactive record entry for `hpr predict`.
//!
//! Each of the twelve fields is taken from its CLI flag when present;
//! missing fields are asked for with sequential prompts. Validation errors
//! behave differently by source:
//!
//! - a bad *flag* value is fatal (the invocation is scripted; re-prompting
//!   would hang a pipeline)
//! - bad *interactive* input is reported and the prompt repeats — invalid
//!   text never crashes the process

use std::io::{BufRead, Write};

use crate::cli::PredictArgs;
use crate::domain::{
    FurnishingStatus, RawRecord, YesNo, parse_area, parse_count, validate_area,
};
use crate::error::PipelineError;

/// Build a validated record from flags, prompting for whatever is missing.
pub fn resolve_record(args: &PredictArgs) -> Result<RawRecord, PipelineError> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    resolve_record_from(args, &mut input, &mut output)
}

/// Same as [`resolve_record`] but with injectable streams (testable).
pub fn resolve_record_from<R: BufRead, W: Write>(
    args: &PredictArgs,
    input: &mut R,
    output: &mut W,
) -> Result<RawRecord, PipelineError> {
    let area = match args.area {
        Some(v) => validate_area(v)?,
        None => prompt_loop(input, output, "Area (in sq ft): ", parse_area)?,
    };
    let bedrooms = resolve_count(args.bedrooms, "bedrooms", "Number of bedrooms: ", input, output)?;
    let bathrooms =
        resolve_count(args.bathrooms, "bathrooms", "Number of bathrooms: ", input, output)?;
    let stories = resolve_count(args.stories, "stories", "Number of stories: ", input, output)?;
    let parking = resolve_count(args.parking, "parking", "Parking spaces: ", input, output)?;

    let mainroad = resolve_yes_no(&args.mainroad, "mainroad", "Main road (yes/no): ", input, output)?;
    let guestroom =
        resolve_yes_no(&args.guestroom, "guestroom", "Guest room (yes/no): ", input, output)?;
    let basement =
        resolve_yes_no(&args.basement, "basement", "Basement (yes/no): ", input, output)?;
    let hotwaterheating = resolve_yes_no(
        &args.hotwaterheating,
        "hotwaterheating",
        "Hot water heating (yes/no): ",
        input,
        output,
    )?;
    let airconditioning = resolve_yes_no(
        &args.airconditioning,
        "airconditioning",
        "Air conditioning (yes/no): ",
        input,
        output,
    )?;
    let prefarea =
        resolve_yes_no(&args.prefarea, "prefarea", "Preferred area (yes/no): ", input, output)?;

    let furnishingstatus = match &args.furnishingstatus {
        Some(v) => FurnishingStatus::parse("furnishingstatus", v)?,
        None => prompt_loop(
            input,
            output,
            "Furnishing status (furnished/semi-furnished/unfurnished): ",
            |s| FurnishingStatus::parse("furnishingstatus", s),
        )?,
    };

    Ok(RawRecord {
        area,
        bedrooms,
        bathrooms,
        stories,
        parking,
        mainroad,
        guestroom,
        basement,
        hotwaterheating,
        airconditioning,
        prefarea,
        furnishingstatus,
    })
}

fn resolve_count<R: BufRead, W: Write>(
    flag: Option<u32>,
    field: &'static str,
    label: &str,
    input: &mut R,
    output: &mut W,
) -> Result<u32, PipelineError> {
    match flag {
        Some(v) => Ok(v),
        None => prompt_loop(input, output, label, |s| parse_count(field, s)),
    }
}

fn resolve_yes_no<R: BufRead, W: Write>(
    flag: &Option<String>,
    field: &'static str,
    label: &str,
    input: &mut R,
    output: &mut W,
) -> Result<YesNo, PipelineError> {
    match flag {
        Some(v) => YesNo::parse(field, v),
        None => prompt_loop(input, output, label, |s| YesNo::parse(field, s)),
    }
}

/// Prompt until `parse` accepts a line. Each rejection prints the error and
/// asks again; end-of-input is a configuration error (no terminal to ask).
fn prompt_loop<R: BufRead, W: Write, T>(
    input: &mut R,
    output: &mut W,
    label: &str,
    parse: impl Fn(&str) -> Result<T, PipelineError>,
) -> Result<T, PipelineError> {
    loop {
        write!(output, "{label}")
            .and_then(|()| output.flush())
            .map_err(|e| PipelineError::Config(format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| PipelineError::Config(format!("Failed to read input: {e}")))?;
        if read == 0 {
            return Err(PipelineError::Config(
                "Input ended before all fields were supplied.".to_string(),
            ));
        }

        match parse(line.trim()) {
            Ok(v) => return Ok(v),
            Err(e) => {
                writeln!(output, "Invalid input: {e}")
                    .map_err(|e| PipelineError::Config(format!("Failed to write prompt: {e}")))?;
            }
        }
    }
}
