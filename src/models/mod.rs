//! Candidate regressors and the trained-model registry.
//!
//! `TrainedModel` is the uniform `predict(vector) -> price` contract the rest
//! of the pipeline sees; which variant it holds is decided once at training
//! time by held-out R² (see `train::selection`).

pub mod boosting;
pub mod forest;
pub mod linear;
pub mod tree;

use serde::{Deserialize, Serialize};

use crate::domain::CandidateKind;
pub use boosting::GradientBoosting;
pub use forest::RandomForest;
pub use linear::LinearModel;
pub use tree::RegressionTree;

/// The regressor retained after model selection.
///
/// Predictions are not clamped to non-negative: a malformed or extrapolated
/// input can yield a negative or implausible price with no warning. Known gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrainedModel {
    Linear(LinearModel),
    Forest(RandomForest),
    Boosting(GradientBoosting),
}

impl TrainedModel {
    pub fn predict(&self, vector: &[f64]) -> f64 {
        match self {
            TrainedModel::Linear(m) => m.predict(vector),
            TrainedModel::Forest(m) => m.predict(vector),
            TrainedModel::Boosting(m) => m.predict(vector),
        }
    }

    pub fn kind(&self) -> CandidateKind {
        match self {
            TrainedModel::Linear(_) => CandidateKind::LinearRegression,
            TrainedModel::Forest(_) => CandidateKind::RandomForest,
            TrainedModel::Boosting(_) => CandidateKind::GradientBoosting,
        }
    }
}
