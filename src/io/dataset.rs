//! CSV ingest for the labeled housing dataset.
//!
//! Turns the training CSV into validated `RawRecord`s plus the `price`
//! target column. Design goals:
//!
//! - **Strict schema**: all thirteen columns are required; a missing column
//!   is a fatal configuration error with a clear message.
//! - **Fatal row errors**: at training time a row that fails to parse or
//!   carries an out-of-domain categorical value is a configuration defect in
//!   the dataset, not something to skip silently — the error names the line.
//! - **Deterministic behavior**: rows are kept in file order; no hidden
//!   randomness here.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{CategoricalField, NumericField, RawInput, RawRecord};
use crate::error::PipelineError;

/// The target column of the training CSV.
pub const PRICE_COLUMN: &str = "price";

/// Ingest output: validated records, aligned prices, and simple stats.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<RawRecord>,
    pub prices: Vec<f64>,
    pub rows_read: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn price_range(&self) -> (f64, f64) {
        let min = self.prices.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self
            .prices
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// Load and validate the training CSV.
pub fn load_dataset(path: &Path) -> Result<Dataset, PipelineError> {
    let file = File::open(path).map_err(|e| {
        PipelineError::Config(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Config(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    let mut prices = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header row and CSV lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = result
            .map_err(|e| PipelineError::Config(format!("CSV parse error at line {line}: {e}")))?;

        let (raw, price) = parse_row(&record, &header_map, line)?;
        let house = RawRecord::from_input(&raw)
            .map_err(|e| PipelineError::Config(format!("Invalid row at line {line}: {e}")))?;

        records.push(house);
        prices.push(price);
    }

    if records.is_empty() {
        return Err(PipelineError::InsufficientData(format!(
            "CSV '{}' contains no data rows.",
            path.display()
        )));
    }

    Ok(Dataset {
        records,
        prices,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM;
    // strip it or schema validation will report a missing column.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), PipelineError> {
    let mut missing: Vec<&str> = Vec::new();

    if !header_map.contains_key(PRICE_COLUMN) {
        missing.push(PRICE_COLUMN);
    }
    for field in NumericField::ALL {
        if !header_map.contains_key(field.name()) {
            missing.push(field.name());
        }
    }
    for field in CategoricalField::ALL {
        if !header_map.contains_key(field.name()) {
            missing.push(field.name());
        }
    }

    if !missing.is_empty() {
        return Err(PipelineError::Config(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> Result<(RawInput, f64), PipelineError> {
    let get = |name: &str| -> Result<String, PipelineError> {
        let idx = header_map[name];
        record
            .get(idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                PipelineError::Config(format!("Missing value for `{name}` at line {line}."))
            })
    };

    let price_text = get(PRICE_COLUMN)?;
    let price: f64 = price_text.parse().map_err(|_| {
        PipelineError::Config(format!(
            "Invalid `price` value '{price_text}' at line {line}."
        ))
    })?;
    if !price.is_finite() {
        return Err(PipelineError::Config(format!(
            "Non-finite `price` at line {line}."
        )));
    }

    let input = RawInput {
        area: get("area")?,
        bedrooms: get("bedrooms")?,
        bathrooms: get("bathrooms")?,
        stories: get("stories")?,
        parking: get("parking")?,
        mainroad: get("mainroad")?,
        guestroom: get("guestroom")?,
        basement: get("basement")?,
        hotwaterheating: get("hotwaterheating")?,
        airconditioning: get("airconditioning")?,
        prefarea: get("prefarea")?,
        furnishingstatus: get("furnishingstatus")?,
    };

    Ok((input, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "price,area,bedrooms,bathrooms,stories,mainroad,guestroom,basement,hotwaterheating,airconditioning,parking,prefarea,furnishingstatus";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn loads_valid_rows_in_file_order() {
        let file = write_csv(
            "13300000,7420,4,2,3,yes,no,no,no,yes,2,yes,furnished\n\
             12250000,8960,4,4,4,yes,no,no,no,yes,3,no,unfurnished\n",
        );
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows_read, 2);
        assert_eq!(dataset.prices, vec![13_300_000.0, 12_250_000.0]);
        assert_eq!(dataset.records[0].bedrooms, 4);
        assert_eq!(dataset.price_range(), (12_250_000.0, 13_300_000.0));
    }

    #[test]
    fn missing_column_is_fatal_and_named() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "price,area,bedrooms").unwrap();
        writeln!(file, "100000,1000,2").unwrap();

        let err = load_dataset(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Missing required column"));
        assert!(msg.contains("furnishingstatus"));
    }

    #[test]
    fn out_of_domain_categorical_is_fatal_with_line_number() {
        let file = write_csv(
            "13300000,7420,4,2,3,yes,no,no,no,yes,2,yes,furnished\n\
             12250000,8960,4,4,4,maybe,no,no,no,yes,3,no,unfurnished\n",
        );
        let err = load_dataset(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn bom_prefixed_header_is_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\u{feff}{HEADER}").unwrap();
        writeln!(file, "100000,1000,2,1,1,yes,no,no,no,no,0,no,furnished").unwrap();
        assert_eq!(load_dataset(file.path()).unwrap().len(), 1);
    }

    #[test]
    fn empty_file_is_insufficient_data() {
        let file = write_csv("");
        let err = load_dataset(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
