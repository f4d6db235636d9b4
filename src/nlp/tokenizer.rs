//! Word tokenization
//!
//! Normalizes sentences into vocabulary terms: lowercased alphabetic runs of
//! at least two characters, with optional stopword removal. Digits and
//! punctuation never become terms, so a sentence of numbers and symbols
//! yields no terms at all; that is a valid state the vectorizer handles.

use super::stopwords::StopwordFilter;

/// Minimum term length in characters. Single letters carry no topical signal.
const MIN_TERM_LEN: usize = 2;

/// Sentence-to-terms tokenizer with configurable stopword handling.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
    remove_stopwords: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Tokenizer {
    /// Create a tokenizer that removes stopwords for the given language.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
            remove_stopwords: true,
        }
    }

    /// Create a tokenizer that keeps every term.
    pub fn keep_all() -> Self {
        Self {
            stopwords: StopwordFilter::empty(),
            remove_stopwords: false,
        }
    }

    /// Create from an explicit stopword filter.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            remove_stopwords: true,
        }
    }

    /// Toggle stopword removal.
    pub fn with_stopword_removal(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    /// Tokenize a sentence into normalized terms.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut terms = Vec::new();
        let mut current = String::new();

        for c in sentence.chars() {
            if c.is_alphabetic() {
                current.extend(c.to_lowercase());
            } else if !current.is_empty() {
                self.push_term(&mut terms, std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            self.push_term(&mut terms, current);
        }

        terms
    }

    fn push_term(&self, terms: &mut Vec<String>, term: String) {
        if term.chars().count() < MIN_TERM_LEN {
            return;
        }
        if self.remove_stopwords && self.stopwords.is_stopword(&term) {
            return;
        }
        terms.push(term);
    }
}
