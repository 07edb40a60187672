//! Integration tests for the merge and split cascades

use proptest::prelude::*;
use proseg_core::cascade::{MergeCascade, SplitCascade, DEFAULT_MAX_CHAIN};
use proseg_core::lexicon;

/// Words that exercise every stage except numbered titles, which rewrite
/// their keyword's period
const WORDS: &[&str] = &[
    "J.", "R.", "Dr.", "Mr.", "the", "cat", "He", "The", "said", "\"Hi.\"", "\"Wait.",
    "(see", "above.)", "and", "...", "Really?", "Yes!", "she", "asked.", "etc.", "U.S.",
    "How", "approx.", "ten.",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn cascades() -> (MergeCascade, SplitCascade) {
    let lexicon = lexicon::english().unwrap();
    (
        MergeCascade::standard(lexicon.clone(), DEFAULT_MAX_CHAIN),
        SplitCascade::standard(lexicon),
    )
}

fn squeeze(sentences: &[String]) -> String {
    sentences
        .iter()
        .flat_map(|s| s.chars())
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn candidate_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|words| words.join(" ")),
        0..8,
    )
}

proptest! {
    #[test]
    fn prop_cascades_preserve_text(candidates in candidate_list(), split_dialog in any::<bool>()) {
        let (merges, splits) = cascades();
        let merged = merges.run(candidates.clone(), split_dialog);
        prop_assert_eq!(squeeze(&merged), squeeze(&candidates));
        prop_assert!(merged.len() <= candidates.len());

        let split = splits.run(merged.clone());
        prop_assert_eq!(squeeze(&split), squeeze(&candidates));
        prop_assert!(split.len() >= merged.len());
        prop_assert!(split.iter().all(|s| !s.is_empty()));
    }
}

#[test]
fn test_stage_names_in_order() {
    let (merges, splits) = cascades();
    assert_eq!(
        merges.names(),
        vec![
            "ellipsis-continuation",
            "unclosed-quote",
            "abbreviation",
            "quote-attribution",
            "title-name",
            "numbered-title",
            "parenthetical",
        ]
    );
    assert_eq!(splits.names().len(), 4);
}

#[test]
fn test_merge_cascade_repairs_candidates() {
    let (merges, _) = cascades();
    let out = merges.run(
        strings(&[
            "We met Dr.",
            "Smith at noon.",
            "\"Are you sure?\"",
            "she asked.",
            "It was J.",
            "R. R. Tolkien.",
        ]),
        true,
    );
    assert_eq!(
        out,
        strings(&[
            "We met Dr. Smith at noon.",
            "\"Are you sure?\" she asked.",
            "It was J. R. R. Tolkien.",
        ])
    );
}

#[test]
fn test_dialog_mode_controls_quote_merging() {
    let (merges, _) = cascades();
    let candidates = strings(&["\"Wait.", "Listen to me.\"", "He left."]);

    assert_eq!(merges.run(candidates.clone(), true), candidates);
    assert_eq!(
        merges.run(candidates, false),
        strings(&["\"Wait. Listen to me.\"", "He left."])
    );
}

#[test]
fn test_numbered_title_requeues_remainder() {
    let (merges, _) = cascades();
    let out = merges.run(strings(&["Read Chapter.", "5. It starts here.", "Done."]), true);
    assert_eq!(out, strings(&["Read Chapter 5.", "It starts here.", "Done."]));
}

#[test]
fn test_split_cascade_finds_missed_boundaries() {
    let (_, splits) = cascades();
    assert_eq!(
        splits.run(strings(&["Really? Yes! She agreed."])),
        strings(&["Really?", "Yes!", "She agreed."])
    );
    assert_eq!(
        splits.run(strings(&["Jane and co. They should know."])),
        strings(&["Jane and co.", "They should know."])
    );
}

#[test]
fn test_empty_candidates() {
    let (merges, splits) = cascades();
    assert!(merges.run(Vec::new(), true).is_empty());
    assert!(splits.run(Vec::new()).is_empty());
}
