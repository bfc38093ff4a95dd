//! Regression evaluation metrics: MSE and R².

/// Mean squared error between targets and predictions.
pub fn mse(y_true: &[f64], y_pred: &[f64]) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    let sse: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    sse / y_true.len() as f64
}

/// Coefficient of determination: `1 - SSE / SST`.
///
/// A constant target has zero total variance; we define R² = 1.0 there for a
/// perfect fit and 0.0 otherwise, keeping the metric finite and ordered.
pub fn r2(y_true: &[f64], y_pred: &[f64]) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let sst: f64 = y_true.iter().map(|t| (t - mean) * (t - mean)).sum();
    let sse: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();

    if sst <= 1e-12 {
        return if sse <= 1e-12 { 1.0 } else { 0.0 };
    }
    1.0 - sse / sst
}
