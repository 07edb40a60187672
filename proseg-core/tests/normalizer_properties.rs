//! Property tests for the reversible normalizers and the post-cleanup

use proptest::prelude::*;
use proseg_core::grouping::group_quote_spans;
use proseg_core::lexicon;
use proseg_core::normalize::NormalizerChain;
use proseg_core::pipeline::cleanup::{finish, strip_quote_period, structural_cleanup};

/// Fragments that trigger every normalizer, plus look-alike tokens
const FRAGMENTS: &[&str] = &[
    " ", " ", "\n", "word", "the", "The", "Dr.", "U.S.A.", "e.g.", "p.m.",
    "www.example.com", "mail@example.org", "[note 1.2]", "[a [b] c]", "...",
    ". . .", "....", "…", "Yahoo!", "Jonas E. Smith", "a) ", "(iv) ", "1. ",
    "Smith, John. (2001). Title.", "!", "?", ".", ",", "\"", "“", "”", "'",
    "qxur2exz", "qxbr5b5dxz", "qxel2e2e2exz", "qxek2e2e2exz.", "qxci2exz",
    "qxnl2exz", "qxlmxz", "‽", "x‼y",
];

fn fragment_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..16)
        .prop_map(|parts| parts.concat())
}

fn chain() -> NormalizerChain {
    let lexicon = lexicon::english().unwrap();
    let threshold = lexicon.mla_threshold();
    NormalizerChain::standard(lexicon, threshold)
}

proptest! {
    #[test]
    fn prop_chain_round_trip(text in fragment_text()) {
        let chain = chain();
        let normalized = chain.normalize(&text);
        prop_assert_eq!(chain.denormalize(&normalized), text);
    }

    #[test]
    fn prop_chain_round_trip_arbitrary(text in "[a-zA-Z0-9 .,!?'\"()\\[\\]…:;\n-]{0,60}") {
        let chain = chain();
        let normalized = chain.normalize(&text);
        prop_assert_eq!(chain.denormalize(&normalized), text);
    }

    #[test]
    fn prop_identity_without_patterns(text in "[a-pr-z ]{0,40}") {
        prop_assert_eq!(chain().normalize(&text), text);
    }

    #[test]
    fn prop_structural_cleanup_idempotent(text in "[a-z .,!?:;\"']{0,40}") {
        let once = structural_cleanup(&text);
        prop_assert_eq!(structural_cleanup(&once), once);
    }

    #[test]
    fn prop_finish_idempotent(text in "[a-z0-9 .,!?\"']{0,40}") {
        let once = finish(&text);
        prop_assert_eq!(finish(&once), once.clone());
        prop_assert_eq!(strip_quote_period(&once), once);
    }

    #[test]
    fn prop_quote_groups_bounded(
        sentences in prop::collection::vec("[a-z\"“” ]{0,12}", 0..30),
        max_group in 0usize..6,
    ) {
        let groups = group_quote_spans(sentences.as_slice(), max_group);
        let bound = max_group.max(1);
        prop_assert!(groups.iter().all(|group| !group.is_empty() && group.len() <= bound));
        prop_assert_eq!(groups.concat(), sentences);
    }
}
