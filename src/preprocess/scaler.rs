//! Per-column standardization of the assembled feature matrix.
//!
//! The scaler is fit on the *full* assembled matrix — numeric columns and
//! encoded indicator columns alike. Standardizing the indicators along with
//! the numerics is an explicit design choice of the source system and is
//! preserved here: the fitted models expect it.
//!
//! A column that is constant in the training data has zero variance; its
//! scale is floored to 1.0 so the transform degrades to plain centering
//! instead of dividing by zero. That floor is a policy decision, not an
//! accident.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Below this, a column's standard deviation is treated as zero.
const SCALE_FLOOR: f64 = 1e-12;

/// Immutable per-column mean/scale statistics, fit once from training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingParams {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl ScalingParams {
    /// Fit per-column mean and (population) standard deviation.
    ///
    /// Every row must have the same width; a ragged matrix indicates an
    /// assembler bug upstream and is reported as a dimension mismatch.
    pub fn fit(rows: &[Vec<f64>]) -> Result<Self, PipelineError> {
        let Some(first) = rows.first() else {
            return Err(PipelineError::InsufficientData(
                "Cannot fit scaling parameters on an empty matrix.".to_string(),
            ));
        };
        let width = first.len();
        if width == 0 {
            return Err(PipelineError::InsufficientData(
                "Cannot fit scaling parameters on zero-width rows.".to_string(),
            ));
        }
        for row in rows {
            if row.len() != width {
                return Err(PipelineError::DimensionMismatch {
                    expected: width,
                    got: row.len(),
                });
            }
        }

        let n = rows.len() as f64;
        let mut mean = vec![0.0; width];
        for row in rows {
            for (m, &x) in mean.iter_mut().zip(row) {
                *m += x;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut var = vec![0.0; width];
        for row in rows {
            for ((v, &m), &x) in var.iter_mut().zip(&mean).zip(row) {
                let d = x - m;
                *v += d * d;
            }
        }
        let scale = var
            .into_iter()
            .map(|v| {
                let std = (v / n).sqrt();
                if std < SCALE_FLOOR { 1.0 } else { std }
            })
            .collect();

        Ok(ScalingParams { mean, scale })
    }

    /// Standardize one feature vector: `(x - mean) / scale` per column.
    pub fn transform(&self, vector: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if vector.len() != self.mean.len() {
            return Err(PipelineError::DimensionMismatch {
                expected: self.mean.len(),
                got: vector.len(),
            });
        }
        Ok(vector
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }

    /// Standardize a whole matrix (one call per row).
    pub fn transform_matrix(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, PipelineError> {
        rows.iter().map(|r| self.transform(r)).collect()
    }

    /// Number of columns the params were fit on.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_to_zero_mean_unit_variance() {
        let rows = vec![vec![1.0, 10.0], vec![3.0, 30.0], vec![5.0, 50.0]];
        let params = ScalingParams::fit(&rows).unwrap();

        let transformed = params.transform_matrix(&rows).unwrap();
        for col in 0..2 {
            let mean: f64 = transformed.iter().map(|r| r[col]).sum::<f64>() / 3.0;
            let var: f64 = transformed.iter().map(|r| r[col] * r[col]).sum::<f64>() / 3.0;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_variance_column_does_not_divide_by_zero() {
        let rows = vec![vec![7.0, 1.0], vec![7.0, 2.0], vec![7.0, 3.0]];
        let params = ScalingParams::fit(&rows).unwrap();

        let out = params.transform(&[7.0, 2.0]).unwrap();
        assert!(out.iter().all(|v| v.is_finite()));
        // Constant column: centered, scale floored to 1.0.
        assert!(out[0].abs() < 1e-12);
    }

    #[test]
    fn wrong_width_vector_is_dimension_mismatch() {
        let params = ScalingParams::fit(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let err = params.transform(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn ragged_training_matrix_is_rejected() {
        let err = ScalingParams::fit(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, PipelineError::DimensionMismatch { .. }));
    }
}
