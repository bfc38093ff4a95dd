//! Regression tree: the shared building block of the forest and boosting
//! candidates.
//!
//! Splits are chosen by exhaustive scan: for every feature, sort the active
//! samples by value and pick the threshold minimizing the summed squared
//! error of the two children. Scanning is deterministic — features in index
//! order, strictly-better comparisons — so two fits on the same data produce
//! the same tree.

use serde::{Deserialize, Serialize};

/// Growth limits for one tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    root: Node,
}

impl RegressionTree {
    /// Fit a tree on the sample subset given by `indices`.
    ///
    /// `indices` may contain duplicates (bootstrap resampling relies on
    /// this). Rows are never copied; the tree only ever looks at `x`/`y`
    /// through the index list.
    pub fn fit(x: &[Vec<f64>], y: &[f64], indices: &[usize], params: &TreeParams) -> Self {
        let root = build_node(x, y, indices, 0, params);
        RegressionTree { root }
    }

    pub fn predict(&self, vector: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if vector[*feature] <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }
}

fn mean_of(y: &[f64], indices: &[usize]) -> f64 {
    let sum: f64 = indices.iter().map(|&i| y[i]).sum();
    sum / indices.len() as f64
}

fn build_node(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    depth: usize,
    params: &TreeParams,
) -> Node {
    let value = mean_of(y, indices);

    if depth >= params.max_depth || indices.len() < params.min_samples_split {
        return Node::Leaf { value };
    }

    let Some(split) = best_split(x, y, indices, params.min_samples_leaf) else {
        return Node::Leaf { value };
    };

    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| x[i][split.feature] <= split.threshold);

    Node::Split {
        feature: split.feature,
        threshold: split.threshold,
        left: Box::new(build_node(x, y, &left_idx, depth + 1, params)),
        right: Box::new(build_node(x, y, &right_idx, depth + 1, params)),
    }
}

struct SplitChoice {
    feature: usize,
    threshold: f64,
    cost: f64,
}

/// Find the split minimizing total child SSE, or `None` if no split is valid.
fn best_split(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<SplitChoice> {
    let n = indices.len();
    let n_features = x[indices[0]].len();

    let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
    let total_sumsq: f64 = indices.iter().map(|&i| y[i] * y[i]).sum();
    let parent_sse = total_sumsq - total_sum * total_sum / n as f64;
    if parent_sse <= 1e-12 {
        // Already pure; splitting cannot help.
        return None;
    }

    let mut best: Option<SplitChoice> = None;

    for feature in 0..n_features {
        let mut pairs: Vec<(f64, f64)> = indices.iter().map(|&i| (x[i][feature], y[i])).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut left_sum = 0.0;
        let mut left_sumsq = 0.0;
        for k in 1..n {
            let (v_prev, target_prev) = pairs[k - 1];
            left_sum += target_prev;
            left_sumsq += target_prev * target_prev;

            // Cannot split between equal values.
            if pairs[k].0 <= v_prev {
                continue;
            }
            if k < min_samples_leaf || n - k < min_samples_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sumsq = total_sumsq - left_sumsq;
            let cost = (left_sumsq - left_sum * left_sum / k as f64)
                + (right_sumsq - right_sum * right_sum / (n - k) as f64);

            let better = match &best {
                None => true,
                Some(b) => cost < b.cost,
            };
            if better {
                best = Some(SplitChoice {
                    feature,
                    threshold: (v_prev + pairs[k].0) / 2.0,
                    cost,
                });
            }
        }
    }

    best
}
