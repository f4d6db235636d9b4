//! TF-IDF vectorization and sentence scoring
//!
//! Weight formula (smoothed inverse document frequency):
//!
//! ```text
//! tf(t,s)     = raw count of term t in sentence s
//! idf(t)      = ln((1 + N) / (1 + df(t))) + 1
//! weight(t,s) = tf(t,s) * idf(t)
//! ```
//!
//! where `df(t)` is the number of sentences containing `t`. Rows are then
//! L2-normalized so sentence length does not bias magnitude. The smoothing
//! keeps idf well-defined for terms in zero or all sentences.

use rustc_hash::FxHashMap;

use super::matrix::FeatureMatrix;
use crate::nlp::Tokenizer;
use crate::types::Sentence;

/// Mapping between normalized terms and matrix columns.
///
/// Built once per summarization call from that call's sentences; never
/// persisted across calls.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: FxHashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index for a term, if present.
    pub fn col(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at a column index.
    pub fn term(&self, col: usize) -> &str {
        &self.terms[col]
    }

    fn get_or_insert(&mut self, term: &str) -> usize {
        if let Some(&col) = self.index.get(term) {
            return col;
        }
        let col = self.terms.len();
        self.index.insert(term.to_string(), col);
        self.terms.push(term.to_string());
        col
    }
}

/// Builds TF-IDF feature matrices from sentence lists.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
}

impl TfidfVectorizer {
    /// Create a vectorizer with English stopword removal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vectorizer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Build the vocabulary and the L2-normalized N×V weight matrix.
    ///
    /// Columns are assigned in first-seen order across the sentence list, so
    /// the result is deterministic. Sentences with no vocabulary terms get
    /// all-zero rows.
    pub fn fit_transform(&self, sentences: &[Sentence]) -> (FeatureMatrix, Vocabulary) {
        let n = sentences.len();
        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(&s.text))
            .collect();

        let mut vocabulary = Vocabulary::default();
        // df counts each sentence at most once per term
        let mut df: Vec<usize> = Vec::new();
        for terms in &tokenized {
            let mut seen_cols: Vec<usize> = Vec::new();
            for term in terms {
                let col = vocabulary.get_or_insert(term);
                if col == df.len() {
                    df.push(0);
                }
                if !seen_cols.contains(&col) {
                    seen_cols.push(col);
                    df[col] += 1;
                }
            }
        }

        let v = vocabulary.len();
        let mut matrix = FeatureMatrix::zeros(n, v);

        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n as f64) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        for (row, terms) in tokenized.iter().enumerate() {
            let mut tf: FxHashMap<usize, usize> = FxHashMap::default();
            for term in terms {
                if let Some(col) = vocabulary.col(term) {
                    *tf.entry(col).or_insert(0) += 1;
                }
            }
            for (col, count) in tf {
                matrix.set(row, col, count as f64 * idf[col]);
            }
        }

        matrix.l2_normalize_rows();
        (matrix, vocabulary)
    }
}

/// Score each sentence as the arithmetic mean of its row weights.
///
/// Zero-valued columns are included: the sum is divided by the vocabulary
/// size, not by the number of nonzero terms. An empty vocabulary scores
/// every sentence 0.0.
pub fn sentence_scores(matrix: &FeatureMatrix) -> Vec<f64> {
    let v = matrix.n_cols();
    (0..matrix.n_rows())
        .map(|i| {
            if v == 0 {
                0.0
            } else {
                matrix.row(i).iter().sum::<f64>() / v as f64
            }
        })
        .collect()
}
