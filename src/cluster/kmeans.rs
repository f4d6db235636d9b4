//! K-Means clustering with seeded multi-restart search
//!
//! Lloyd's iterative relocation minimizing the within-cluster sum of squared
//! Euclidean distances to each centroid (inertia):
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ‖x − μ_k‖²
//! ```
//!
//! Each run seeds centroids from k distinct rows, alternates assignment and
//! centroid updates until assignments stabilize or the iteration bound is
//! hit. Multiple independent restarts keep the assignment with the lowest
//! inertia; ties favor the earliest restart, so the search is deterministic
//! for a fixed seed whether it runs sequentially or on the rayon thread pool.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::error::{Result, SummarizeError};
use crate::features::matrix::squared_distance;
use crate::features::FeatureMatrix;

/// Placeholder label before the first assignment pass.
const UNASSIGNED: usize = usize::MAX;

/// Result of a K-Means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    /// Cluster id in `[0, k)` for each row.
    pub labels: Vec<usize>,
    /// Within-cluster sum of squared distances for the final assignment.
    pub inertia: f64,
    /// Iterations used by the winning restart.
    pub iterations: usize,
    /// Whether the winning restart reached a stable assignment within the
    /// iteration bound.
    pub converged: bool,
}

impl KMeansResult {
    /// Number of clusters with at least one member.
    pub fn populated_clusters(&self) -> usize {
        let k = self.labels.iter().max().map_or(0, |&m| m + 1);
        let mut seen = vec![false; k];
        for &label in &self.labels {
            seen[label] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }
}

/// Seeded K-Means clusterer.
#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: usize,
    n_restarts: usize,
    max_iterations: usize,
    seed: u64,
    parallel: bool,
}

impl KMeans {
    /// Create a clusterer for `n_clusters` clusters with default settings
    /// (10 restarts, 300 iterations, seed 42, sequential restarts).
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            n_restarts: 10,
            max_iterations: 300,
            seed: 42,
            parallel: false,
        }
    }

    /// Set the number of independent restarts.
    pub fn with_restarts(mut self, n_restarts: usize) -> Self {
        self.n_restarts = n_restarts;
        self
    }

    /// Set the iteration bound for a single run.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the seed. Restart `t` derives its own seed from `seed + t`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run restarts on the rayon thread pool.
    ///
    /// The selection rule is keyed on (inertia, restart index), so the
    /// result is identical to the sequential search.
    pub fn with_parallel_restarts(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Cluster the matrix rows.
    ///
    /// Rejects `n_clusters < 1` or `n_clusters > n_rows`. Clusters may end
    /// up empty when `n_clusters` exceeds the natural separability of the
    /// data; callers handle empty clusters downstream.
    pub fn fit(&self, matrix: &FeatureMatrix) -> Result<KMeansResult> {
        let n = matrix.n_rows();
        if self.n_clusters < 1 || self.n_clusters > n {
            return Err(SummarizeError::InvalidClusterCount {
                k: self.n_clusters,
                n,
            });
        }

        let restarts = self.n_restarts.max(1);
        let mut trials: Vec<KMeansResult> = if self.parallel {
            (0..restarts)
                .into_par_iter()
                .map(|t| self.run_single(matrix, self.seed.wrapping_add(t as u64)))
                .collect()
        } else {
            (0..restarts)
                .map(|t| self.run_single(matrix, self.seed.wrapping_add(t as u64)))
                .collect()
        };

        // Lowest inertia wins; strict comparison keeps the earliest restart
        // on ties. `trials` is in restart order for both paths.
        let mut best = trials.remove(0);
        for candidate in trials {
            if candidate.inertia < best.inertia {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Convenience: fit and return only the labels.
    pub fn fit_predict(&self, matrix: &FeatureMatrix) -> Result<Vec<usize>> {
        self.fit(matrix).map(|r| r.labels)
    }

    /// One seeded Lloyd run.
    fn run_single(&self, matrix: &FeatureMatrix, seed: u64) -> KMeansResult {
        let n = matrix.n_rows();
        let k = self.n_clusters;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut centroids: Vec<Vec<f64>> = rand::seq::index::sample(&mut rng, n, k)
            .iter()
            .map(|i| matrix.row(i).to_vec())
            .collect();

        let mut labels = vec![UNASSIGNED; n];
        let mut iterations = 0;
        let mut converged = false;

        // At least one pass so every row gets a real label.
        let max_iterations = self.max_iterations.max(1);
        while iterations < max_iterations {
            iterations += 1;

            // Assignment: nearest centroid, lowest id on ties.
            let mut changed = false;
            for i in 0..n {
                let row = matrix.row(i);
                let mut best_cluster = 0;
                let mut best_dist = f64::INFINITY;
                for (c, centroid) in centroids.iter().enumerate() {
                    let dist = squared_distance(row, centroid);
                    if dist < best_dist {
                        best_dist = dist;
                        best_cluster = c;
                    }
                }
                if labels[i] != best_cluster {
                    labels[i] = best_cluster;
                    changed = true;
                }
            }

            if !changed {
                converged = true;
                break;
            }

            // Update: mean of assigned rows; empty clusters keep their
            // previous centroid.
            let cols = matrix.n_cols();
            let mut sums = vec![vec![0.0; cols]; k];
            let mut counts = vec![0usize; k];
            for (i, &label) in labels.iter().enumerate() {
                counts[label] += 1;
                for (acc, &value) in sums[label].iter_mut().zip(matrix.row(i)) {
                    *acc += value;
                }
            }
            for (c, centroid) in centroids.iter_mut().enumerate() {
                if counts[c] > 0 {
                    for (dim, acc) in centroid.iter_mut().zip(&sums[c]) {
                        *dim = acc / counts[c] as f64;
                    }
                }
            }
        }

        let inertia: f64 = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| squared_distance(matrix.row(i), &centroids[label]))
            .sum();

        KMeansResult {
            labels,
            inertia,
            iterations,
            converged,
        }
    }
}

/// Cluster sentence vectors into `n_clusters` groups with default search
/// settings and the given seed.
pub fn cluster_sentences(
    matrix: &FeatureMatrix,
    n_clusters: usize,
    seed: u64,
) -> Result<Vec<usize>> {
    KMeans::new(n_clusters).with_seed(seed).fit_predict(matrix)
}
