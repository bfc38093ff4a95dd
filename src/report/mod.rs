//! Formatted terminal output.
//!
//! We keep formatting code in one place so the preprocessing/training code
//! stays clean and testable, and output changes are localized.

use crate::io::bundle::ModelBundle;
use crate::io::dataset::Dataset;
use crate::train::selection::TrainingSelection;

/// Format the full training run summary (dataset stats + per-candidate
/// diagnostics + chosen model).
pub fn format_training_summary(
    dataset: &Dataset,
    selection: &TrainingSelection,
    column_order: &[String],
) -> String {
    let mut out = String::new();

    out.push_str("=== hpr - House Price Model Training ===\n");
    let (price_min, price_max) = dataset.price_range();
    out.push_str(&format!(
        "Rows: {} read, {} used | price=[{}, {}]\n",
        dataset.rows_read,
        dataset.len(),
        format_currency(price_min),
        format_currency(price_max),
    ));
    out.push_str(&format!("Feature columns: {}\n", column_order.len()));

    out.push_str("\nCandidate diagnostics (held-out split):\n");
    let best_kind = selection.best.kind();
    for score in &selection.scores {
        let chosen = if score.kind == best_kind { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<18} MSE={:.4e}  R2={:.4}\n",
            score.kind.display_name(),
            score.mse,
            score.r2
        ));
    }

    out.push_str(&format!(
        "\nBest model by R2: {}\n",
        best_kind.display_name()
    ));

    out
}

/// Format saved-bundle metadata for `hpr inspect`.
pub fn format_bundle_info(bundle: &ModelBundle) -> String {
    let mut out = String::new();

    out.push_str("=== hpr - Model Bundle ===\n");
    out.push_str(&format!("Tool: {}\n", bundle.tool));
    out.push_str(&format!("Format version: {}\n", bundle.format_version));
    out.push_str(&format!("Created: {}\n", bundle.created.to_rfc3339()));
    out.push_str(&format!("Model: {}\n", bundle.best.display_name()));

    out.push_str("\nStored candidate scores:\n");
    for score in &bundle.scores {
        let chosen = if score.kind == bundle.best { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<18} MSE={:.4e}  R2={:.4}\n",
            score.kind.display_name(),
            score.mse,
            score.r2
        ));
    }

    out.push_str(&format!(
        "\nColumn order ({} columns):\n",
        bundle.column_order.len()
    ));
    for (idx, name) in bundle.column_order.iter().enumerate() {
        out.push_str(&format!("  {idx:>2}  {name}\n"));
    }

    out
}

/// Format a price as dollars with thousands separators: `$1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
