//! Natural Language Processing components
//!
//! This module provides text cleaning, sentence segmentation, tokenization,
//! and stopword filtering.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use segmenter::{clean_text, RuleSegmenter, SentenceSegmenter};
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;
