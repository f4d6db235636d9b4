//! Feature extraction
//!
//! Builds the sentence-by-term TF-IDF matrix and reduces each row to a
//! single importance score for downstream clustering and selection.

pub mod matrix;
pub mod tfidf;

pub use matrix::FeatureMatrix;
pub use tfidf::{sentence_scores, TfidfVectorizer, Vocabulary};
