//! Core data types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SummarizeError};

/// A sentence with its position in the source document.
///
/// Positions are assigned at segmentation time and never change afterwards;
/// the selector relies on them to restore document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text (trimmed, whitespace-normalized).
    pub text: String,
    /// Zero-based position in document order.
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// Result of one summarization call.
///
/// Created fresh per call; no state is shared or cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces, in document order.
    pub summary: String,
    /// Number of sentences in the input document.
    pub original_sentence_count: usize,
    /// Number of sentences in the summary.
    pub summary_sentence_count: usize,
    /// `summary_sentence_count / original_sentence_count`, rounded to two
    /// decimals. `1.0` when the short-circuit branch ran.
    pub compression_ratio: f64,
}

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep, in `(0, 1]`.
    pub ratio: f64,
    /// Seed for the K-Means restart search.
    pub seed: u64,
    /// Stopword language (e.g., `"en"`, `"de"`).
    pub language: String,
    /// Whether stopwords are excluded from the vocabulary.
    pub remove_stopwords: bool,
    /// Number of independent K-Means restarts.
    pub n_restarts: usize,
    /// Iteration bound for a single K-Means run.
    pub max_iterations: usize,
    /// Run restarts on the rayon thread pool. Results are identical to the
    /// sequential search for a fixed seed.
    pub parallel_restarts: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            seed: 42,
            language: "en".to_string(),
            remove_stopwords: true,
            n_restarts: 10,
            max_iterations: 300,
            parallel_restarts: false,
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary ratio.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the clustering seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set whether stopwords are removed from the vocabulary.
    pub fn with_stopword_removal(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    /// Set the number of K-Means restarts.
    pub fn with_restarts(mut self, n_restarts: usize) -> Self {
        self.n_restarts = n_restarts;
        self
    }

    /// Set the K-Means iteration bound.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set whether restarts run in parallel.
    pub fn with_parallel_restarts(mut self, parallel: bool) -> Self {
        self.parallel_restarts = parallel;
        self
    }

    /// Strict validation of the configured ratio.
    ///
    /// The pipeline itself clamps the derived cluster count instead of
    /// rejecting, so calling this is optional.
    pub fn validate(&self) -> Result<()> {
        if self.ratio > 0.0 && self.ratio <= 1.0 {
            Ok(())
        } else {
            Err(SummarizeError::InvalidRatio(self.ratio))
        }
    }
}
