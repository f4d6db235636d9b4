//! Sentence clustering
//!
//! Partitions TF-IDF sentence vectors into topical groups with K-Means and
//! estimates a good cluster count via the elbow heuristic.

pub mod elbow;
pub mod kmeans;

pub use elbow::optimal_k;
pub use kmeans::{cluster_sentences, KMeans, KMeansResult};
