//! Text cleaning and sentence segmentation
//!
//! The pipeline consumes an ordered list of trimmed, non-empty sentences and
//! never depends on segmentation internals beyond sentence boundaries, so the
//! segmenter sits behind the [`SentenceSegmenter`] trait. Implementations
//! that need language resources (models, abbreviation tables) load them in
//! [`SentenceSegmenter::ensure_ready`] and report
//! [`SegmentationUnavailable`](crate::error::SummarizeError::SegmentationUnavailable)
//! when they cannot, instead of blocking or returning silently-empty output.

use crate::error::Result;

/// Collapse consecutive whitespace into single spaces and trim the ends.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Splits cleaned text into ordered, trimmed, non-empty sentences.
pub trait SentenceSegmenter {
    /// Load any language resources this segmenter needs.
    ///
    /// Idempotent; called once by the pipeline before the first `segment`.
    /// The default implementation needs nothing and returns `Ok(())`.
    fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    /// Split `text` into sentences.
    ///
    /// Every returned string is trimmed and non-empty. An empty input
    /// produces an empty list, not an error.
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

/// Rule-based sentence segmenter.
///
/// Splits on terminal punctuation (`.`, `!`, `?`) followed by whitespace or
/// end of input. Requires no external resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create a new rule-based segmenter.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);

            if !matches!(c, '.' | '!' | '?') {
                continue;
            }

            // Swallow runs of terminal punctuation ("...", "?!").
            while matches!(chars.peek(), Some('.') | Some('!') | Some('?')) {
                // peek matched, so next() cannot fail
                if let Some(extra) = chars.next() {
                    current.push(extra);
                }
            }

            // A real boundary only when followed by whitespace or the end.
            let at_boundary = match chars.peek() {
                None => true,
                Some(next) => next.is_whitespace(),
            };

            if at_boundary {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }

        // Trailing text without terminal punctuation is still a sentence.
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }

        Ok(sentences)
    }
}
