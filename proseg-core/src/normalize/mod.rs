//! Text transforms applied before the boundary oracle runs
//!
//! Two kinds of transforms live here:
//!
//! - [`Repair`]s are one-way clean-ups of damaged input (broken hyphenation,
//!   OCR artifacts, bullet variants). They are idempotent and never undone.
//! - [`Normalizer`]s hide boundary-confusing substrings behind placeholder
//!   tokens of their own [`Namespace`]. Each one is exactly reversible:
//!   `denormalize(normalize(t)) == t` for every `t`.
//!
//! [`NormalizerChain`] applies the normalizers in a fixed order and undoes
//! them in reverse.

mod brackets;
mod brands;
pub mod citation;
mod ellipsis;
mod initials;
mod lists;
mod repair;
mod tokens;
mod url;

pub use brackets::BracketNormalizer;
pub use brands::BrandNormalizer;
pub use citation::{CitationClassifier, CitationFeatures, CitationNormalizer, CitationRule};
pub use ellipsis::EllipsisNormalizer;
pub use initials::MiddleInitialNormalizer;
pub use lists::{ListMarkerNormalizer, NumberedListNormalizer};
pub(crate) use lists::{INLINE_LIST_MARKER, LIST_MARKER};
pub use repair::{standard_repairs, BulletCleanup, Dehyphenator, OcrRepair, Repair};
pub use tokens::UnicodeTokenNormalizer;
pub use url::UrlNormalizer;

use crate::codec::{self, Namespace};
use crate::lexicon::Lexicon;
use log::trace;
use std::fmt;
use std::sync::Arc;

/// A reversible transform owning one or more token namespaces
pub trait Normalizer: Send + Sync + fmt::Debug {
    /// Namespaces this normalizer encodes into; the first is its primary one
    fn namespaces(&self) -> &'static [Namespace];

    fn name(&self) -> &'static str {
        self.namespaces()[0].label()
    }

    /// Hide the matching substrings of already escaped text
    fn protect(&self, text: &str) -> String;

    /// Re-encode look-alike tokens of the owned namespaces
    fn escape(&self, text: &str) -> String {
        self.namespaces()
            .iter()
            .fold(text.to_string(), |acc, &ns| {
                codec::escape_lookalikes(ns, &acc).into_owned()
            })
    }

    fn normalize(&self, text: &str) -> String {
        self.protect(&self.escape(text))
    }

    fn denormalize(&self, text: &str) -> String {
        self.namespaces()
            .iter()
            .fold(text.to_string(), |acc, &ns| codec::restore(ns, &acc).into_owned())
    }
}

/// Ordered set of normalizers applied forward and undone in reverse
#[derive(Debug)]
pub struct NormalizerChain {
    stages: Vec<Box<dyn Normalizer>>,
}

impl NormalizerChain {
    pub fn new(stages: Vec<Box<dyn Normalizer>>) -> Self {
        Self { stages }
    }

    /// URL, bracket, brand, middle initial, unicode token, citation, list
    /// marker, numbered list, ellipsis
    pub fn standard(lexicon: Arc<Lexicon>, mla_threshold: f64) -> Self {
        Self::new(vec![
            Box::new(UrlNormalizer::new()),
            Box::new(BracketNormalizer::new()),
            Box::new(BrandNormalizer::new(Arc::clone(&lexicon))),
            Box::new(MiddleInitialNormalizer::new(Arc::clone(&lexicon))),
            Box::new(UnicodeTokenNormalizer::new()),
            Box::new(CitationNormalizer::new(CitationClassifier::new(mla_threshold))),
            Box::new(ListMarkerNormalizer::new()),
            Box::new(NumberedListNormalizer::new()),
            Box::new(EllipsisNormalizer::new()),
        ])
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn normalize(&self, text: &str) -> String {
        self.stages.iter().fold(text.to_string(), |acc, stage| {
            let next = stage.normalize(&acc);
            if next != acc {
                trace!("normalizer {} changed the text", stage.name());
            }
            next
        })
    }

    pub fn denormalize(&self, text: &str) -> String {
        self.stages
            .iter()
            .rev()
            .fold(text.to_string(), |acc, stage| stage.denormalize(&acc))
    }

    /// Undo only the stage owning `namespace`
    pub fn restore(&self, text: &str, namespace: Namespace) -> String {
        match self.owner(namespace) {
            Some(stage) => stage.denormalize(text),
            None => text.to_string(),
        }
    }

    /// Undo every stage except those owning a namespace in `done`, in
    /// reverse application order
    pub fn restore_remaining(&self, text: &str, done: &[Namespace]) -> String {
        self.stages
            .iter()
            .rev()
            .filter(|stage| !stage.namespaces().iter().any(|ns| done.contains(ns)))
            .fold(text.to_string(), |acc, stage| stage.denormalize(&acc))
    }

    fn owner(&self, namespace: Namespace) -> Option<&dyn Normalizer> {
        self.stages
            .iter()
            .find(|stage| stage.namespaces().contains(&namespace))
            .map(|stage| stage.as_ref())
    }
}
