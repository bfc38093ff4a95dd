//! Candidate training and model selection by held-out R².
//!
//! Every candidate in `CandidateKind::ALL` is fit on the training rows and
//! scored on the test rows. Selection rules:
//!
//! 1. Choose the candidate with maximum R² on the held-out split.
//! 2. Exact ties go to the first-encountered candidate in the fixed
//!    enumeration order (linear regression, random forest, gradient
//!    boosting), so selection is deterministic and testable.

use crate::domain::{CandidateKind, CandidateScore};
use crate::error::PipelineError;
use crate::models::{GradientBoosting, LinearModel, RandomForest, TrainedModel};
use crate::train::metrics::{mse, r2};

/// Output of training + selection.
#[derive(Debug, Clone)]
pub struct TrainingSelection {
    pub best: TrainedModel,
    /// Held-out scores for every candidate, in enumeration order.
    pub scores: Vec<CandidateScore>,
}

impl TrainingSelection {
    pub fn best_score(&self) -> Option<&CandidateScore> {
        let kind = self.best.kind();
        self.scores.iter().find(|s| s.kind == kind)
    }
}

/// Fit all candidates, score them on the held-out rows, keep the best.
pub fn train_and_select(
    x_train: &[Vec<f64>],
    y_train: &[f64],
    x_test: &[Vec<f64>],
    y_test: &[f64],
    seed: u64,
) -> Result<TrainingSelection, PipelineError> {
    let mut fitted = Vec::with_capacity(CandidateKind::ALL.len());
    let mut scores = Vec::with_capacity(CandidateKind::ALL.len());

    for kind in CandidateKind::ALL {
        let model = fit_candidate(kind, x_train, y_train, seed)?;
        let predictions: Vec<f64> = x_test.iter().map(|row| model.predict(row)).collect();
        scores.push(CandidateScore {
            kind,
            mse: mse(y_test, &predictions),
            r2: r2(y_test, &predictions),
        });
        fitted.push(model);
    }

    let best_idx = best_index(&scores).ok_or_else(|| {
        PipelineError::InsufficientData("No candidate produced a usable fit.".to_string())
    })?;
    let best = fitted.swap_remove(best_idx);

    Ok(TrainingSelection { best, scores })
}

fn fit_candidate(
    kind: CandidateKind,
    x: &[Vec<f64>],
    y: &[f64],
    seed: u64,
) -> Result<TrainedModel, PipelineError> {
    Ok(match kind {
        CandidateKind::LinearRegression => TrainedModel::Linear(LinearModel::fit(x, y)?),
        CandidateKind::RandomForest => TrainedModel::Forest(RandomForest::fit(x, y, seed)?),
        CandidateKind::GradientBoosting => TrainedModel::Boosting(GradientBoosting::fit(x, y)?),
    })
}

/// Index of the maximum-R² score; strict comparison keeps the earlier
/// candidate on exact ties. Non-finite scores are never selected.
fn best_index(scores: &[CandidateScore]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, score) in scores.iter().enumerate() {
        if !score.r2.is_finite() {
            continue;
        }
        match best {
            None => best = Some(idx),
            Some(b) => {
                if score.r2 > scores[b].r2 {
                    best = Some(idx);
                }
            }
        }
    }
    best
}
