//! Merge and split heuristics over the oracle's candidate sentences
//!
//! The merge cascade repairs spurious splits; the split cascade repairs
//! missed ones. Both run their stages in a fixed order, and every stage is a
//! single left-to-right pass that never reorders sentences.

mod merge;
mod split;
pub(crate) mod text;

pub use merge::{
    AbbreviationMerge, EllipsisContinuationMerge, NumberedTitleMerge, ParentheticalMerge,
    QuoteAttributionMerge, TitleNameMerge, UnclosedQuoteMerge,
};
pub use split::{AbbreviationSplit, EllipsisCapitalSplit, QuestionExclamationSplit, QuoteCloseSplit};

use crate::lexicon::Lexicon;
use log::debug;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Default bound on how many candidates a chaining stage may fuse
pub const DEFAULT_MAX_CHAIN: usize = 8;

/// Result of merging two adjacent candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub sentence: String,
    /// Text split off `next` that goes back on the work queue
    pub remainder: Option<String>,
}

impl Merged {
    pub fn joined(current: &str, next: &str) -> Self {
        Self {
            sentence: text::join(current, next),
            remainder: None,
        }
    }
}

/// One merge stage
pub trait MergeRule: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn should_merge(&self, current: &str, next: &str) -> bool;

    fn merge(&self, current: &str, next: &str) -> Merged {
        Merged::joined(current, next)
    }

    /// Whether the merged result is tested again against the following
    /// candidate
    fn chains(&self) -> bool {
        false
    }

    /// Whether the stage only runs when quoted passages are kept intact
    fn dialog_only(&self) -> bool {
        false
    }
}

/// One split stage
pub trait SplitRule: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn split(&self, sentence: &str) -> Vec<String>;
}

/// Ordered merge stages
#[derive(Debug)]
pub struct MergeCascade {
    stages: Vec<Box<dyn MergeRule>>,
    max_chain: usize,
}

impl MergeCascade {
    pub fn new(stages: Vec<Box<dyn MergeRule>>, max_chain: usize) -> Self {
        Self {
            stages,
            max_chain: max_chain.max(2),
        }
    }

    pub fn standard(lexicon: Arc<Lexicon>, max_chain: usize) -> Self {
        Self::new(
            vec![
                Box::new(EllipsisContinuationMerge),
                Box::new(UnclosedQuoteMerge),
                Box::new(AbbreviationMerge::new(Arc::clone(&lexicon))),
                Box::new(QuoteAttributionMerge),
                Box::new(TitleNameMerge::new(Arc::clone(&lexicon))),
                Box::new(NumberedTitleMerge::new(Arc::clone(&lexicon))),
                Box::new(ParentheticalMerge),
            ],
            max_chain,
        )
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, candidates: Vec<String>, split_dialog: bool) -> Vec<String> {
        self.stages
            .iter()
            .filter(|stage| !(split_dialog && stage.dialog_only()))
            .fold(candidates, |acc, stage| {
                let before = acc.len();
                let merged = self.apply(stage.as_ref(), acc);
                if merged.len() != before {
                    debug!(
                        "merge stage {}: {} -> {} candidates",
                        stage.name(),
                        before,
                        merged.len()
                    );
                }
                merged
            })
    }

    /// Single left-to-right pass of one stage over a work queue
    pub fn apply(&self, rule: &dyn MergeRule, candidates: Vec<String>) -> Vec<String> {
        let mut queue: VecDeque<String> = candidates.into();
        let mut out = Vec::with_capacity(queue.len());
        // Current sentence and how many candidates it already fuses
        let mut current: Option<(String, usize)> = None;

        while let Some(next) = queue.pop_front() {
            let Some((sentence, parts)) = current.take() else {
                current = Some((next, 1));
                continue;
            };

            if parts < self.max_chain && rule.should_merge(&sentence, &next) {
                let merged = rule.merge(&sentence, &next);
                if let Some(remainder) = merged
                    .remainder
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                {
                    queue.push_front(remainder);
                }
                if rule.chains() {
                    current = Some((merged.sentence, parts + 1));
                } else {
                    out.push(merged.sentence);
                }
            } else {
                out.push(sentence);
                current = Some((next, 1));
            }
        }

        if let Some((sentence, _)) = current {
            out.push(sentence);
        }
        out
    }
}

/// Ordered split stages
#[derive(Debug)]
pub struct SplitCascade {
    stages: Vec<Box<dyn SplitRule>>,
}

impl SplitCascade {
    pub fn new(stages: Vec<Box<dyn SplitRule>>) -> Self {
        Self { stages }
    }

    pub fn standard(lexicon: Arc<Lexicon>) -> Self {
        Self::new(vec![
            Box::new(AbbreviationSplit::new(lexicon)),
            Box::new(QuestionExclamationSplit),
            Box::new(QuoteCloseSplit),
            Box::new(EllipsisCapitalSplit),
        ])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, sentences: Vec<String>) -> Vec<String> {
        self.stages.iter().fold(sentences, |acc, stage| {
            let before = acc.len();
            let split: Vec<String> = acc.into_iter().flat_map(|s| stage.split(&s)).collect();
            if split.len() != before {
                debug!(
                    "split stage {}: {} -> {} sentences",
                    stage.name(),
                    before,
                    split.len()
                );
            }
            split
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    #[derive(Debug)]
    struct JoinShort {
        chains: bool,
    }

    impl MergeRule for JoinShort {
        fn name(&self) -> &'static str {
            "join-short"
        }

        fn should_merge(&self, current: &str, _next: &str) -> bool {
            current.len() < 4 || self.chains
        }

        fn chains(&self) -> bool {
            self.chains
        }
    }

    #[derive(Debug)]
    struct SplitOff;

    impl MergeRule for SplitOff {
        fn name(&self) -> &'static str {
            "split-off"
        }

        fn should_merge(&self, current: &str, next: &str) -> bool {
            current == "A" && next.starts_with("1.")
        }

        fn merge(&self, current: &str, next: &str) -> Merged {
            Merged {
                sentence: format!("{current} 1."),
                remainder: Some(next[2..].to_string()),
            }
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_non_chaining_merge() {
        let cascade = MergeCascade::new(vec![], 8);
        let out = cascade.apply(&JoinShort { chains: false }, strings(&["a.", "b.", "ccccc.", "d."]));
        assert_eq!(out, strings(&["a. b.", "ccccc.", "d."]));
    }

    #[test]
    fn test_chain_bounded() {
        let cascade = MergeCascade::new(vec![], 3);
        let out = cascade.apply(&JoinShort { chains: true }, strings(&["a", "b", "c", "d", "e"]));
        assert_eq!(out, strings(&["a b c", "d e"]));
    }

    #[test]
    fn test_remainder_requeued() {
        let cascade = MergeCascade::new(vec![], 8);
        let out = cascade.apply(&SplitOff, strings(&["A", "1. Rest of it", "Tail"]));
        assert_eq!(out, strings(&["A 1.", "Rest of it", "Tail"]));
    }

    #[test]
    fn test_order_preserved_and_content_kept() {
        let lexicon = lexicon::english().unwrap();
        let merges = MergeCascade::standard(Arc::clone(&lexicon), DEFAULT_MAX_CHAIN);
        let splits = SplitCascade::standard(lexicon);
        let input = strings(&["One.", "Two?", "Three!", "Four."]);
        let out = splits.run(merges.run(input.clone(), true));
        assert_eq!(out, input);
    }

    #[test]
    fn test_stage_order() {
        let lexicon = lexicon::english().unwrap();
        assert_eq!(
            MergeCascade::standard(Arc::clone(&lexicon), DEFAULT_MAX_CHAIN).names(),
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
        assert_eq!(
            SplitCascade::standard(lexicon).names(),
            vec!["abbreviation", "question-exclamation", "quote-close", "ellipsis-capital"]
        );
    }
}
