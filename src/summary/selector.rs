//! Representative sentence selection
//!
//! From each cluster, keeps the sentence with the highest importance score,
//! then returns the chosen sentences sorted by document position. The
//! summary therefore reads like a natural subset of the original text
//! rather than a shuffled bag of facts.

use crate::types::Sentence;

/// Select one representative per non-empty cluster, in document order.
///
/// Cluster ids are visited in ascending order; within a cluster the maximum
/// score wins and ties keep the lowest sentence index. Empty clusters are
/// skipped without a placeholder.
///
/// `labels` and `scores` run parallel to `sentences`.
pub fn select_representatives(
    sentences: &[Sentence],
    labels: &[usize],
    scores: &[f64],
) -> Vec<Sentence> {
    debug_assert_eq!(sentences.len(), labels.len());
    debug_assert_eq!(sentences.len(), scores.len());

    let n_clusters = labels.iter().max().map_or(0, |&m| m + 1);
    let mut selected: Vec<usize> = Vec::with_capacity(n_clusters);

    for cluster in 0..n_clusters {
        let mut best: Option<usize> = None;
        for (i, &label) in labels.iter().enumerate() {
            if label != cluster {
                continue;
            }
            // Strict comparison keeps the first index among tied maxima.
            match best {
                Some(b) if scores[i] <= scores[b] => {}
                _ => best = Some(i),
            }
        }
        if let Some(i) = best {
            selected.push(i);
        }
    }

    selected.sort_unstable();
    selected.iter().map(|&i| sentences[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect()
    }

    #[test]
    fn test_picks_highest_score_per_cluster() {
        let sents = sentences(&["a", "b", "c", "d"]);
        let labels = [0, 0, 1, 1];
        let scores = [0.1, 0.9, 0.8, 0.2];

        let selected = select_representatives(&sents, &labels, &scores);
        let texts: Vec<&str> = selected.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_restores_document_order() {
        // Cluster 0's best sentence comes later in the document than
        // cluster 1's.
        let sents = sentences(&["a", "b", "c"]);
        let labels = [1, 0, 0];
        let scores = [0.5, 0.1, 0.9];

        let selected = select_representatives(&sents, &labels, &scores);
        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
        for pair in indices.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_tie_keeps_lowest_index() {
        let sents = sentences(&["a", "b", "c"]);
        let labels = [0, 0, 0];
        let scores = [0.5, 0.5, 0.5];

        let selected = select_representatives(&sents, &labels, &scores);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 0);
    }

    #[test]
    fn test_skips_empty_clusters() {
        // Cluster 1 has no members.
        let sents = sentences(&["a", "b"]);
        let labels = [0, 2];
        let scores = [0.3, 0.7];

        let selected = select_representatives(&sents, &labels, &scores);
        let texts: Vec<&str> = selected.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_all_zero_scores_still_deterministic() {
        let sents = sentences(&["a", "b", "c"]);
        let labels = [0, 0, 0];
        let scores = [0.0, 0.0, 0.0];

        let selected = select_representatives(&sents, &labels, &scores);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 0);
    }

    #[test]
    fn test_empty_input() {
        let selected = select_representatives(&[], &[], &[]);
        assert!(selected.is_empty());
    }
}
