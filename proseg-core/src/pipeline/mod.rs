//! Boundary-correction pipeline
//!
//! The stages run in a fixed total order:
//!
//! 1. tabs to spaces, then the one-way repairs
//! 2. reversible normalization (URL through ellipsis)
//! 3. newline conversion and whitespace cleanup
//! 4. early exits for texts that are already a single sentence
//! 5. direct split of `•` bullet lists
//! 6. boundary oracle, merge cascade, split cascade
//! 7. list-marker restoration and list-item splitting, including inline
//!    `1.)` items once numbered markers are restored
//! 8. structural cleanup and the quote-period strip
//! 9. numbered-list and ellipsis restoration, leading-ellipsis merge
//! 10. the remaining restorations in reverse order, then finishing
//!
//! Changing the order changes the output; every stage relies on the tokens
//! the earlier ones left behind.

mod cache;
pub mod cleanup;
pub mod layout;

pub use cache::SegmentCache;
pub use layout::EarlyExit;

use crate::cascade::{MergeCascade, SplitCascade};
use crate::codec::Namespace;
use crate::error::Result;
use crate::lexicon::{self, Lexicon};
use crate::normalize::{standard_repairs, NormalizerChain, Repair};
use crate::oracle::{self, BoundaryOracle, OracleKind};
use cleanup::{collapse_whitespace, finish, strip_quote_period, structural_cleanup};
use layout::{
    bullet_items, early_exit, merge_leading_ellipses, newlines_to_periods, split_inline_items,
    split_list_items,
};
use log::{debug, trace};
use std::sync::Arc;

/// Leaf namespaces restored at fixed points before the final pass
const RESTORED_EARLY: [Namespace; 4] = [
    Namespace::ListMarker,
    Namespace::NumberedList,
    Namespace::Ellipsis,
    Namespace::EllipsisBoundary,
];

/// All stages wired together for one lexicon and oracle
#[derive(Debug)]
pub struct Pipeline {
    repairs: Vec<Box<dyn Repair>>,
    chain: NormalizerChain,
    oracle: Arc<dyn BoundaryOracle>,
    merges: MergeCascade,
    splits: SplitCascade,
}

impl Pipeline {
    pub fn new(
        lexicon: Arc<Lexicon>,
        oracle: Arc<dyn BoundaryOracle>,
        max_merge_chain: usize,
        mla_threshold: f64,
    ) -> Self {
        Self {
            repairs: standard_repairs(),
            chain: NormalizerChain::standard(Arc::clone(&lexicon), mla_threshold),
            oracle,
            merges: MergeCascade::standard(Arc::clone(&lexicon), max_merge_chain),
            splits: SplitCascade::standard(lexicon),
        }
    }

    /// Embedded English lexicon with the default oracle
    pub fn english() -> Result<Self> {
        let lexicon = lexicon::english()?;
        let threshold = lexicon.mla_threshold();
        let oracle = oracle::shared(OracleKind::default())?;
        Ok(Self::new(
            lexicon,
            oracle,
            crate::cascade::DEFAULT_MAX_CHAIN,
            threshold,
        ))
    }

    pub fn oracle(&self) -> &dyn BoundaryOracle {
        self.oracle.as_ref()
    }

    pub fn normalizers(&self) -> &NormalizerChain {
        &self.chain
    }

    /// Segment one paragraph (or a whole text treated as one)
    ///
    /// Blank input gives an empty list; rejecting it is up to the caller.
    pub fn run(&self, text: &str, split_dialog: bool) -> Vec<String> {
        let text = self
            .repairs
            .iter()
            .fold(text.replace('\t', " "), |acc, repair| repair.repair(&acc));
        let normalized = self.chain.normalize(&text);
        let text = collapse_whitespace(&newlines_to_periods(&normalized));
        if text.is_empty() {
            return Vec::new();
        }

        if let Some(reason) = early_exit(&text) {
            debug!("early exit: {reason:?}");
            return self.restore_whole(&[text]);
        }

        if let Some(items) = bullet_items(&text) {
            debug!("bullet list with {} items", items.len());
            return self.restore_whole(&items);
        }

        let candidates = self.oracle.segment(&text);
        trace!("oracle {} proposed {} candidates", self.oracle.name(), candidates.len());
        let merged = self.merges.run(candidates, split_dialog);
        let split = self.splits.run(merged);

        let sentences: Vec<String> = split
            .into_iter()
            .flat_map(|sentence| self.restore_list_markers(sentence))
            .flat_map(|sentence| {
                let cleaned = strip_quote_period(&structural_cleanup(&sentence));
                split_inline_items(&self.chain.restore(&cleaned, Namespace::NumberedList))
            })
            .map(|sentence| self.chain.restore(&sentence, Namespace::Ellipsis))
            .collect();

        merge_leading_ellipses(sentences)
            .iter()
            .map(|sentence| finish(&self.chain.restore_remaining(sentence, &RESTORED_EARLY)))
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Segment every blank-line separated paragraph
    pub fn run_paragraphs(&self, text: &str, split_dialog: bool) -> Vec<Vec<String>> {
        layout::split_paragraphs(text)
            .into_iter()
            .map(|paragraph| self.run(paragraph, split_dialog))
            .filter(|sentences| !sentences.is_empty())
            .collect()
    }

    /// Restore sentences that skipped the oracle; no period is appended
    fn restore_whole(&self, sentences: &[String]) -> Vec<String> {
        sentences
            .iter()
            .flat_map(|sentence| {
                let cleaned = strip_quote_period(&structural_cleanup(sentence));
                split_inline_items(&collapse_whitespace(&self.chain.denormalize(&cleaned)))
            })
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Restore list markers and split before the ones that start an item
    fn restore_list_markers(&self, sentence: String) -> Vec<String> {
        let restored = self.chain.restore(&sentence, Namespace::ListMarker);
        if restored == sentence {
            vec![sentence]
        } else {
            split_list_items(&restored)
        }
    }
}
