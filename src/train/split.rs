//! Seeded train/test splitting.
//!
//! The split shuffles row indices with a seeded RNG and holds out the first
//! 20% as the test set, mirroring the source system's 80/20 split. Identical
//! data and seed always produce the identical split — model selection depends
//! on this for reproducibility.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::PipelineError;

/// Fraction of rows held out for evaluation.
pub const TEST_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Split `n` row indices into shuffled train/test sets.
pub fn train_test_split(n: usize, seed: u64) -> Result<TrainTestSplit, PipelineError> {
    let n_test = (n as f64 * TEST_FRACTION).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(PipelineError::InsufficientData(format!(
            "Dataset of {n} rows is too small for an 80/20 train/test split."
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test = indices[..n_test].to_vec();
    let train = indices[n_test..].to_vec();
    Ok(TrainTestSplit { train, test })
}

/// Select rows of a matrix (or target vector) by index.
pub fn take_rows<T: Clone>(rows: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| rows[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_deterministic_for_a_seed() {
        assert_eq!(
            train_test_split(100, 42).unwrap(),
            train_test_split(100, 42).unwrap()
        );
        assert_ne!(
            train_test_split(100, 42).unwrap(),
            train_test_split(100, 7).unwrap()
        );
    }

    #[test]
    fn split_is_disjoint_and_exhaustive() {
        let split = train_test_split(50, 1).unwrap();
        assert_eq!(split.test.len(), 10);
        assert_eq!(split.train.len(), 40);

        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn tiny_dataset_is_rejected() {
        assert!(train_test_split(1, 42).is_err());
        // n_test = ceil(0.4) = 1 leaves one training row; that is allowed
        // arithmetically but n=1 and n=0 are not.
        assert!(train_test_split(0, 42).is_err());
    }
}
