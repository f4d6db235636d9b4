//! Automatic cluster-count estimation via the elbow heuristic
//!
//! Computes the inertia curve for k = 2..=max_k and looks for the "elbow":
//! the k where the marginal improvement from adding one more cluster drops
//! sharply, located at the maximum of the second discrete derivative of the
//! inertia sequence.
//!
//! This is an independent entry point: the default pipeline derives its
//! cluster count from the summary ratio instead.

use super::kmeans::KMeans;
use crate::error::Result;
use crate::features::FeatureMatrix;

/// Restarts per candidate k. The curve only needs a stable shape, not the
/// globally best assignment.
const ELBOW_RESTARTS: usize = 5;
const ELBOW_MAX_ITERATIONS: usize = 200;

/// Estimate a good cluster count for the matrix rows.
///
/// `max_k` defaults to `max(3, n / 2)` and is capped at `n - 1`. With three
/// rows or fewer, returns `max(1, n - 1)` without running K-Means; with
/// fewer than three candidate values of k, returns the smallest candidate.
pub fn optimal_k(matrix: &FeatureMatrix, max_k: Option<usize>, seed: u64) -> Result<usize> {
    let n = matrix.n_rows();
    if n <= 3 {
        return Ok(n.saturating_sub(1).max(1));
    }

    let max_k = max_k
        .unwrap_or_else(|| (n / 2).max(3))
        .min(n - 1)
        .max(2);

    let ks: Vec<usize> = (2..=max_k).collect();
    let mut inertias = Vec::with_capacity(ks.len());
    for &k in &ks {
        let result = KMeans::new(k)
            .with_restarts(ELBOW_RESTARTS)
            .with_max_iterations(ELBOW_MAX_ITERATIONS)
            .with_seed(seed)
            .fit(matrix)?;
        inertias.push(result.inertia);
    }

    if inertias.len() < 3 {
        return Ok(ks[0]);
    }

    let first: Vec<f64> = inertias.windows(2).map(|w| w[1] - w[0]).collect();
    let second: Vec<f64> = first.windows(2).map(|w| w[1] - w[0]).collect();

    // First occurrence of the maximum curvature change.
    let mut elbow = 0;
    for (i, &d) in second.iter().enumerate() {
        if d > second[elbow] {
            elbow = i;
        }
    }

    // The two differencing passes shift indices by two; cap at the last
    // candidate.
    let idx = (elbow + 2).min(ks.len() - 1);
    Ok(ks[idx])
}
