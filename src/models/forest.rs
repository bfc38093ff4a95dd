//! Random forest regressor: bagged regression trees.
//!
//! Each tree is fit on a bootstrap resample of the training rows and
//! predictions are averaged. Trees are grown in parallel with rayon, but each
//! tree derives its own RNG seed from (run seed, tree index), so the fitted
//! forest is identical regardless of thread scheduling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::models::tree::{RegressionTree, TreeParams};

/// Number of trees, matching the source system's candidate configuration.
pub const NUM_TREES: usize = 100;

const TREE_PARAMS: TreeParams = TreeParams {
    // Effectively unbounded for housing-sized datasets; the cap only bounds
    // recursion on pathological inputs.
    max_depth: 32,
    min_samples_split: 2,
    min_samples_leaf: 1,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    pub fn fit(x: &[Vec<f64>], y: &[f64], seed: u64) -> Result<Self, PipelineError> {
        let n = x.len();
        if n == 0 || n != y.len() {
            return Err(PipelineError::InsufficientData(
                "Random forest requires a non-empty, aligned training set.".to_string(),
            ));
        }

        let trees: Vec<RegressionTree> = (0..NUM_TREES)
            .into_par_iter()
            .map(|tree_idx| {
                let mut rng = StdRng::seed_from_u64(tree_seed(seed, tree_idx));
                let indices: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::fit(x, y, &indices, &TREE_PARAMS)
            })
            .collect();

        Ok(RandomForest { trees })
    }

    pub fn predict(&self, vector: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(vector)).sum();
        sum / self.trees.len() as f64
    }
}

fn tree_seed(seed: u64, tree_idx: usize) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    tree_idx.hash(&mut hasher);
    hasher.finish()
}
