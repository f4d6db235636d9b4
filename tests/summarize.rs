//! End-to-end pipeline tests.

use rapid_summarize::{
    clean_text, cluster_sentences, optimal_k, select_representatives, sentence_scores, summarize,
    RuleSegmenter, Sentence, SentenceSegmenter, Summarizer, SummarizerConfig, TfidfVectorizer,
};

/// Six sentences over three clearly distinct topics.
const THREE_TOPIC_TEXT: &str = "The solar panel converts sunlight into electricity. \
    Panel efficiency drops when sunlight is weak. \
    The goalkeeper made a stunning save in the final. \
    The final ended after a dramatic penalty save. \
    Fresh basil improves a tomato pasta sauce. \
    The sauce simmers with basil and tomato for an hour.";

fn segment(text: &str) -> Vec<Sentence> {
    RuleSegmenter::new()
        .segment(&clean_text(text))
        .unwrap()
        .into_iter()
        .enumerate()
        .map(|(i, s)| Sentence::new(s, i))
        .collect()
}

#[test]
fn test_summary_sentence_count_matches_ratio() {
    let result = summarize(THREE_TOPIC_TEXT, 0.5).unwrap();

    assert_eq!(result.original_sentence_count, 6);
    // clamp(round(6 * 0.5), 1, 6) = 3
    assert_eq!(result.summary_sentence_count, 3);
    assert_eq!(result.compression_ratio, 0.5);
}

#[test]
fn test_summary_preserves_document_order() {
    let result = summarize(THREE_TOPIC_TEXT, 0.5).unwrap();
    let originals = segment(THREE_TOPIC_TEXT);

    let mut positions = Vec::new();
    for sentence in segment(&result.summary) {
        let pos = originals
            .iter()
            .position(|s| s.text == sentence.text)
            .expect("summary sentence must come from the original text");
        positions.push(pos);
    }

    assert!(!positions.is_empty());
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "positions not increasing: {positions:?}");
    }
}

#[test]
fn test_scenario_a_three_sentences_low_ratio() {
    let text = "Cats are mammals. Dogs are mammals too. Both are popular pets.";
    let result = summarize(text, 0.34).unwrap();

    assert_eq!(result.original_sentence_count, 3);
    assert_eq!(result.summary_sentence_count, 1);
    assert_eq!(result.compression_ratio, 0.33);
    assert!(text.contains(&result.summary));
}

#[test]
fn test_scenario_b_two_sentences_short_circuit() {
    let text = "First sentence here. Second sentence here.";
    let result = summarize(text, 0.8).unwrap();

    assert_eq!(result.summary, text);
    assert_eq!(result.original_sentence_count, 2);
    assert_eq!(result.summary_sentence_count, 2);
    assert_eq!(result.compression_ratio, 1.0);
}

#[test]
fn test_scenario_c_stopword_and_number_input() {
    // Every term is a stopword, a number, or a single letter, so the
    // vocabulary is empty and every sentence scores zero.
    let text = "It is 42. And the 3.14. Of it 100.";
    let result = summarize(text, 0.4).unwrap();

    assert_eq!(result.original_sentence_count, 3);
    assert_eq!(result.summary_sentence_count, 1);
    // All scores tie at zero; the first sentence wins deterministically.
    assert_eq!(result.summary, "It is 42.");
}

#[test]
fn test_determinism_byte_identical() {
    let config = SummarizerConfig::new().with_ratio(0.5).with_seed(11);
    let a = Summarizer::with_config(config.clone()).summarize(THREE_TOPIC_TEXT).unwrap();
    let b = Summarizer::with_config(config).summarize(THREE_TOPIC_TEXT).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_parallel_restarts_match_sequential() {
    let sequential = Summarizer::with_config(SummarizerConfig::new().with_ratio(0.5))
        .summarize(THREE_TOPIC_TEXT)
        .unwrap();
    let parallel = Summarizer::with_config(
        SummarizerConfig::new().with_ratio(0.5).with_parallel_restarts(true),
    )
    .summarize(THREE_TOPIC_TEXT)
    .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_chosen_sentence_has_max_score_in_its_cluster() {
    let sentences = segment(THREE_TOPIC_TEXT);
    let (matrix, _) = TfidfVectorizer::new().fit_transform(&sentences);
    let scores = sentence_scores(&matrix);
    let labels = cluster_sentences(&matrix, 3, 42).unwrap();
    let representatives = select_representatives(&sentences, &labels, &scores);

    assert!(!representatives.is_empty());
    for rep in &representatives {
        let cluster = labels[rep.index];
        for (i, &label) in labels.iter().enumerate() {
            if label == cluster {
                assert!(
                    scores[rep.index] >= scores[i],
                    "sentence {i} outscores its cluster representative"
                );
            }
        }
    }
}

#[test]
fn test_optimal_k_is_independent_entry_point() {
    let sentences = segment(THREE_TOPIC_TEXT);
    let (matrix, _) = TfidfVectorizer::new().fit_transform(&sentences);

    let k = optimal_k(&matrix, None, 42).unwrap();
    assert!(k >= 2);
    assert!(k < sentences.len());
}

#[test]
fn test_full_ratio_keeps_every_sentence_count() {
    let result = summarize(THREE_TOPIC_TEXT, 1.0).unwrap();

    assert_eq!(result.original_sentence_count, 6);
    // k = 6; duplicate-free input keeps all clusters populated.
    assert_eq!(result.summary_sentence_count, 6);
    assert_eq!(result.compression_ratio, 1.0);
}

#[test]
fn test_out_of_range_ratio_is_clamped_not_rejected() {
    let result = summarize(THREE_TOPIC_TEXT, 5.0).unwrap();
    assert_eq!(result.summary_sentence_count, 6);

    let result = summarize(THREE_TOPIC_TEXT, -1.0).unwrap();
    assert_eq!(result.summary_sentence_count, 1);
}

#[test]
fn test_summary_serializes_with_expected_fields() {
    let result = summarize("First sentence here. Second sentence here.", 0.5).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json["summary"],
        "First sentence here. Second sentence here."
    );
    assert_eq!(json["original_sentence_count"], 2);
    assert_eq!(json["summary_sentence_count"], 2);
    assert_eq!(json["compression_ratio"], 1.0);
}
