//! Gradient boosting regressor: shallow trees fit to residuals.
//!
//! Standard least-squares boosting: start from the target mean, then
//! repeatedly fit a depth-limited tree to the current residuals and add a
//! damped fraction of its prediction. Fitting is fully deterministic (no
//! subsampling), so no seed is needed.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::models::tree::{RegressionTree, TreeParams};

/// Number of boosting stages, matching the source system's configuration.
pub const NUM_STAGES: usize = 100;

/// Shrinkage applied to each stage's contribution.
pub const LEARNING_RATE: f64 = 0.1;

const TREE_PARAMS: TreeParams = TreeParams {
    max_depth: 3,
    min_samples_split: 2,
    min_samples_leaf: 1,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoosting {
    init: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl GradientBoosting {
    pub fn fit(x: &[Vec<f64>], y: &[f64]) -> Result<Self, PipelineError> {
        let n = x.len();
        if n == 0 || n != y.len() {
            return Err(PipelineError::InsufficientData(
                "Gradient boosting requires a non-empty, aligned training set.".to_string(),
            ));
        }

        let init = y.iter().sum::<f64>() / n as f64;
        let indices: Vec<usize> = (0..n).collect();

        let mut residuals: Vec<f64> = y.iter().map(|&v| v - init).collect();
        let mut trees = Vec::with_capacity(NUM_STAGES);

        for _ in 0..NUM_STAGES {
            let tree = RegressionTree::fit(x, &residuals, &indices, &TREE_PARAMS);
            for (r, row) in residuals.iter_mut().zip(x) {
                *r -= LEARNING_RATE * tree.predict(row);
            }
            trees.push(tree);
        }

        Ok(GradientBoosting {
            init,
            learning_rate: LEARNING_RATE,
            trees,
        })
    }

    pub fn predict(&self, vector: &[f64]) -> f64 {
        self.init
            + self.learning_rate
                * self
                    .trees
                    .iter()
                    .map(|t| t.predict(vector))
                    .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drives_training_error_toward_zero() {
        let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = x.iter().map(|r| 100.0 + 5.0 * r[0]).collect();

        let model = GradientBoosting::fit(&x, &y).unwrap();

        let mean = y.iter().sum::<f64>() / y.len() as f64;
        let baseline_sse: f64 = y.iter().map(|v| (v - mean).powi(2)).sum();
        let model_sse: f64 = x
            .iter()
            .zip(&y)
            .map(|(row, &target)| (model.predict(row) - target).powi(2))
            .sum();

        assert!(model_sse < baseline_sse * 0.01);
    }

    #[test]
    fn constant_target_predicts_the_constant() {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y = vec![42.0; 10];
        let model = GradientBoosting::fit(&x, &y).unwrap();
        assert!((model.predict(&[3.0]) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn fit_is_deterministic() {
        let x: Vec<Vec<f64>> = (0..25).map(|i| vec![(i % 6) as f64, i as f64]).collect();
        let y: Vec<f64> = (0..25).map(|i| ((i * 13) % 7) as f64).collect();
        assert_eq!(
            GradientBoosting::fit(&x, &y).unwrap(),
            GradientBoosting::fit(&x, &y).unwrap()
        );
    }
}
