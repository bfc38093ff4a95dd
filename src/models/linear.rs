//! Ordinary least squares linear regression.
//!
//! The simplest candidate: an intercept plus one coefficient per feature
//! column, solved in closed form via SVD (see `math::ols`).

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::math::solve_least_squares;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    /// Fit by least squares on the (already scaled) feature matrix.
    pub fn fit(x: &[Vec<f64>], y: &[f64]) -> Result<Self, PipelineError> {
        let n = x.len();
        if n == 0 || n != y.len() {
            return Err(PipelineError::InsufficientData(
                "Linear regression requires a non-empty, aligned training set.".to_string(),
            ));
        }
        let p = x[0].len();

        // Design matrix with a leading intercept column.
        let design = DMatrix::from_fn(n, p + 1, |row, col| {
            if col == 0 { 1.0 } else { x[row][col - 1] }
        });
        let target = DVector::from_iterator(n, y.iter().copied());

        let beta = solve_least_squares(&design, &target).ok_or_else(|| {
            PipelineError::Internal(
                "Linear regression design matrix is too ill-conditioned to solve.".to_string(),
            )
        })?;

        Ok(LinearModel {
            intercept: beta[0],
            coefficients: beta.iter().skip(1).copied().collect(),
        })
    }

    pub fn predict(&self, vector: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(vector)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 10 + 2*x0 - 3*x1
        let x: Vec<Vec<f64>> = (0..12)
            .map(|i| vec![i as f64, (i % 4) as f64])
            .collect();
        let y: Vec<f64> = x.iter().map(|r| 10.0 + 2.0 * r[0] - 3.0 * r[1]).collect();

        let model = LinearModel::fit(&x, &y).unwrap();
        assert!((model.intercept - 10.0).abs() < 1e-8);
        assert!((model.coefficients[0] - 2.0).abs() < 1e-8);
        assert!((model.coefficients[1] + 3.0).abs() < 1e-8);
        assert!((model.predict(&[5.0, 1.0]) - 17.0).abs() < 1e-8);
    }

    #[test]
    fn empty_training_set_is_rejected() {
        assert!(LinearModel::fit(&[], &[]).is_err());
    }
}
