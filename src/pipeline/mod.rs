//! Pipeline orchestrator
//!
//! Sequences the full extractive summarization pipeline:
//! clean → segment → vectorize → score → cluster → select → assemble.
//!
//! Each [`Summarizer::summarize`] call is a self-contained synchronous
//! batch computation: no state survives between calls, so independent
//! calls may run fully in parallel without locking.

use crate::cluster::KMeans;
use crate::error::{Result, SummarizeError};
use crate::features::{sentence_scores, TfidfVectorizer};
use crate::nlp::{clean_text, RuleSegmenter, SentenceSegmenter, StopwordFilter, Tokenizer};
use crate::summary::select_representatives;
use crate::types::{Sentence, Summary, SummarizerConfig};

/// Emit a pipeline debug event (when the `tracing` feature is enabled).
/// When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Extractive summarizer, generic over the sentence segmenter seam.
///
/// The default segmenter is the resource-free [`RuleSegmenter`];
/// resource-backed segmenters plug in via [`Summarizer::with_segmenter`]
/// and report failures through their `ensure_ready` instead of degrading
/// silently.
#[derive(Debug, Clone)]
pub struct Summarizer<S = RuleSegmenter> {
    segmenter: S,
    config: SummarizerConfig,
}

impl Default for Summarizer<RuleSegmenter> {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer<RuleSegmenter> {
    /// Create a summarizer with default config and the rule-based segmenter.
    pub fn new() -> Self {
        Self {
            segmenter: RuleSegmenter::new(),
            config: SummarizerConfig::default(),
        }
    }

    /// Create with custom config and the rule-based segmenter.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            segmenter: RuleSegmenter::new(),
            config,
        }
    }
}

impl<S: SentenceSegmenter> Summarizer<S> {
    /// Create with a custom segmenter implementation.
    pub fn with_segmenter(segmenter: S, config: SummarizerConfig) -> Self {
        Self { segmenter, config }
    }

    /// Borrow the active configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text`, keeping roughly `config.ratio` of its sentences.
    ///
    /// Inputs of two sentences or fewer short-circuit: the cleaned text is
    /// returned unchanged with `compression_ratio` 1.0, since K-Means has
    /// too few points to form meaningful structure. Out-of-range ratios are
    /// defended against by clamping the derived cluster count into
    /// `[1, sentence_count]`; use [`SummarizerConfig::validate`] for strict
    /// rejection instead.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.segmenter.ensure_ready()?;

        let cleaned = clean_text(text);
        let sentences: Vec<Sentence> = self
            .segmenter
            .segment(&cleaned)?
            .into_iter()
            .enumerate()
            .map(|(i, s)| Sentence::new(s, i))
            .collect();
        let n = sentences.len();
        trace_stage!(sentence_count = n, "segmented input");

        if n <= 2 {
            return Ok(Summary {
                summary: cleaned,
                original_sentence_count: n,
                summary_sentence_count: n,
                compression_ratio: 1.0,
            });
        }

        let n_clusters = derive_cluster_count(n, self.config.ratio);
        trace_stage!(n_clusters, ratio = self.config.ratio, "derived cluster count");

        let tokenizer = Tokenizer::with_stopwords(StopwordFilter::new(&self.config.language))
            .with_stopword_removal(self.config.remove_stopwords);
        let (matrix, _) = TfidfVectorizer::with_tokenizer(tokenizer).fit_transform(&sentences);
        let scores = sentence_scores(&matrix);
        trace_stage!(vocabulary_size = matrix.n_cols(), "built feature matrix");

        // n_clusters is clamped into [1, n], so the fit cannot reject it.
        let result = KMeans::new(n_clusters)
            .with_restarts(self.config.n_restarts)
            .with_max_iterations(self.config.max_iterations)
            .with_seed(self.config.seed)
            .with_parallel_restarts(self.config.parallel_restarts)
            .fit(&matrix)?;
        trace_stage!(
            inertia = result.inertia,
            iterations = result.iterations,
            converged = result.converged,
            "clustered sentences"
        );

        let representatives = select_representatives(&sentences, &result.labels, &scores);
        let summary_text = representatives
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Summary {
            summary: summary_text,
            original_sentence_count: n,
            summary_sentence_count: representatives.len(),
            compression_ratio: round2(representatives.len() as f64 / n as f64),
        })
    }
}

/// `clamp(round(n * ratio), 1, n)`; tolerates out-of-range ratios.
fn derive_cluster_count(n: usize, ratio: f64) -> usize {
    let raw = (n as f64 * ratio).round();
    if raw.is_nan() {
        return 1;
    }
    (raw as i64).clamp(1, n as i64) as usize
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize `text` with default settings and the given ratio.
///
/// Convenience wrapper over [`Summarizer`]; see
/// [`Summarizer::summarize`] for semantics.
pub fn summarize(text: &str, ratio: f64) -> Result<Summary> {
    Summarizer::with_config(SummarizerConfig::default().with_ratio(ratio)).summarize(text)
}

/// Reject blank input up front.
///
/// The pipeline itself handles empty input through the short-circuit
/// branch; strict callers can use this to fail early instead.
pub fn validate_input(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(SummarizeError::EmptyInput)
    } else {
        Ok(())
    }
}
