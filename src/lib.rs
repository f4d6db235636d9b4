//! # rapid-summarize
//!
//! Extractive text summarization: selects a representative subset of a
//! document's sentences that covers its distinct topics while preserving
//! the original narrative order.
//!
//! The pipeline is fully unsupervised:
//!
//! 1. **Segment** the cleaned text into sentences ([`nlp`])
//! 2. **Vectorize** sentences into a TF-IDF term-importance matrix and
//!    score each sentence by its mean term weight ([`features`])
//! 3. **Cluster** sentence vectors into topical groups with seeded
//!    K-Means; [`cluster::optimal_k`] estimates a cluster count via the
//!    elbow heuristic when the caller has no ratio in mind ([`cluster`])
//! 4. **Select** the highest-scoring sentence per cluster and restore
//!    document order ([`summary`])
//!
//! Every step is a deterministic, pure function of its inputs and seed;
//! two runs over identical input produce byte-identical results.
//!
//! # Quick start
//!
//! ```
//! use rapid_summarize::summarize;
//!
//! let text = "Cats are mammals. Dogs are mammals too. Both are popular pets.";
//! let result = summarize(text, 0.34)?;
//!
//! assert_eq!(result.original_sentence_count, 3);
//! assert_eq!(result.summary_sentence_count, 1);
//! # Ok::<(), rapid_summarize::SummarizeError>(())
//! ```
//!
//! For control over seeding, stopword language, or the restart search, use
//! [`Summarizer`] with a [`SummarizerConfig`]:
//!
//! ```
//! use rapid_summarize::{Summarizer, SummarizerConfig};
//!
//! let config = SummarizerConfig::new()
//!     .with_ratio(0.3)
//!     .with_seed(7)
//!     .with_language("en");
//! let summarizer = Summarizer::with_config(config);
//! let result = summarizer.summarize("One sentence. Another one.")?;
//! assert_eq!(result.compression_ratio, 1.0);
//! # Ok::<(), rapid_summarize::SummarizeError>(())
//! ```

pub mod cluster;
pub mod error;
pub mod features;
pub mod nlp;
pub mod pipeline;
pub mod summary;
pub mod types;

pub use cluster::{cluster_sentences, optimal_k, KMeans, KMeansResult};
pub use error::{Result, SummarizeError};
pub use features::{sentence_scores, FeatureMatrix, TfidfVectorizer, Vocabulary};
pub use nlp::{clean_text, RuleSegmenter, SentenceSegmenter, StopwordFilter, Tokenizer};
pub use pipeline::{summarize, validate_input, Summarizer};
pub use summary::select_representatives;
pub use types::{Sentence, Summary, SummarizerConfig};
