//! Error types for the summarization pipeline.

use thiserror::Error;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors produced by the summarization pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    /// Input text is blank or whitespace-only.
    ///
    /// The pipeline handles empty input through the short-circuit branch;
    /// this variant exists for callers that reject empty input up front.
    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    /// Summary ratio outside `(0, 1]`.
    #[error("ratio {0} is outside (0, 1]")]
    InvalidRatio(f64),

    /// Requested cluster count is outside `[1, sentence_count]`.
    #[error("cluster count {k} is invalid for {n} points")]
    InvalidClusterCount { k: usize, n: usize },

    /// The sentence segmenter could not obtain its language resources.
    #[error("sentence segmentation unavailable: {0}")]
    SegmentationUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SummarizeError::InvalidRatio(1.5);
        assert_eq!(err.to_string(), "ratio 1.5 is outside (0, 1]");

        let err = SummarizeError::InvalidClusterCount { k: 5, n: 3 };
        assert_eq!(err.to_string(), "cluster count 5 is invalid for 3 points");

        let err = SummarizeError::SegmentationUnavailable("model missing".into());
        assert!(err.to_string().contains("model missing"));
    }
}
