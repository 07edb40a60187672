//! Main segmenter implementation

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use log::debug;

use crate::api::{Config, Input, Output, Segmented};
use crate::error::{Error, Result};
use crate::grouping::QuoteSpanGrouper;
use crate::lexicon::{self, Lexicon};
use crate::oracle::{self, BoundaryOracle, OracleKind, PunctuationOracle};
use crate::pipeline::{layout, Pipeline, SegmentCache};

/// Sentence segmenter with a fixed lexicon, oracle and configuration
#[derive(Debug)]
pub struct Segmenter {
    pipeline: Pipeline,
    cache: SegmentCache,
    grouper: QuoteSpanGrouper,
    lexicon: Arc<Lexicon>,
    config: Config,
}

impl Segmenter {
    /// Embedded English lexicon, default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Embedded English lexicon with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let oracle = oracle::shared(config.oracle)?;
        Ok(Self::build(lexicon::english()?, oracle, config))
    }

    /// Custom lexicon; the punctuation oracle uses its terminators
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: Config) -> Result<Self> {
        config.validate()?;
        let oracle: Arc<dyn BoundaryOracle> = match config.oracle {
            OracleKind::Punctuation => {
                Arc::new(PunctuationOracle::new(lexicon.terminators().to_vec()))
            }
            kind => oracle::shared(kind)?,
        };
        Ok(Self::build(lexicon, oracle, config))
    }

    /// Embedded English lexicon with a caller-supplied oracle
    pub fn with_oracle(oracle: Arc<dyn BoundaryOracle>, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(lexicon::english()?, oracle, config))
    }

    fn build(lexicon: Arc<Lexicon>, oracle: Arc<dyn BoundaryOracle>, config: Config) -> Self {
        let threshold = config
            .mla_threshold
            .unwrap_or_else(|| lexicon.mla_threshold());
        debug!(
            "segmenter: lexicon {}, oracle {}, split_dialog {}",
            lexicon.code(),
            oracle.name(),
            config.split_dialog
        );

        Self {
            pipeline: Pipeline::new(
                Arc::clone(&lexicon),
                oracle,
                config.max_merge_chain,
                threshold,
            ),
            cache: SegmentCache::new(config.cache_capacity),
            grouper: QuoteSpanGrouper::new(config.max_quote_group),
            lexicon,
            config,
        }
    }

    /// Sentences of `text` with the configured dialog mode
    pub fn segment_sentences(&self, text: &str) -> Result<Vec<String>> {
        self.segment_sentences_with(text, self.config.split_dialog)
    }

    /// Sentences of `text`, treating the whole text as one paragraph
    pub fn segment_sentences_with(&self, text: &str, split_dialog: bool) -> Result<Vec<String>> {
        ensure_not_empty(text)?;
        Ok(self.run_cached(text, split_dialog))
    }

    /// Sentences grouped by paragraph, or flattened
    pub fn segment_text(&self, text: &str, flatten: bool) -> Result<Segmented> {
        ensure_not_empty(text)?;
        let paragraphs = self.paragraphs(text, self.config.split_dialog);
        Ok(if flatten {
            Segmented::Flat(paragraphs.into_iter().flatten().collect())
        } else {
            Segmented::Paragraphs(paragraphs)
        })
    }

    /// Group consecutive sentences of one quoted passage
    pub fn group_quotes<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<String>> {
        self.grouper.group(sentences)
    }

    /// Read and segment any input, with processing metadata
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.into_text()?;
        ensure_not_empty(&text)?;

        let paragraphs = self.paragraphs(&text, self.config.split_dialog);
        let output = Output::new(
            paragraphs,
            &text,
            self.pipeline.oracle().name(),
            self.config.split_dialog,
            start.elapsed(),
        );
        debug!(
            "processed {} bytes into {} sentences",
            output.metadata.stats.bytes_processed, output.metadata.stats.sentence_count
        );
        Ok(output)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn oracle_name(&self) -> &str {
        self.pipeline.oracle().name()
    }

    fn paragraphs(&self, text: &str, split_dialog: bool) -> Vec<Vec<String>> {
        layout::split_paragraphs(text)
            .into_iter()
            .map(|paragraph| self.run_cached(paragraph, split_dialog))
            .filter(|sentences| !sentences.is_empty())
            .collect()
    }

    fn run_cached(&self, text: &str, split_dialog: bool) -> Vec<String> {
        if let Some(hit) = self.cache.get(text, split_dialog) {
            return hit;
        }
        let sentences = self.pipeline.run(text, split_dialog);
        self.cache.insert(text, split_dialog, sentences.clone());
        sentences
    }
}

fn ensure_not_empty(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

static DEFAULT: OnceLock<Segmenter> = OnceLock::new();

fn default_segmenter() -> Result<&'static Segmenter> {
    if let Some(segmenter) = DEFAULT.get() {
        return Ok(segmenter);
    }
    let built = Segmenter::new()?;
    Ok(DEFAULT.get_or_init(|| built))
}

/// Segment `text` into sentences with the default segmenter
///
/// `split_dialog = false` keeps multi-sentence quoted passages together.
///
/// # Examples
///
/// ```rust
/// let sentences = proseg_core::segment_sentences("Hello world. This is a test.", true).unwrap();
/// assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
/// ```
pub fn segment_sentences(text: &str, split_dialog: bool) -> Result<Vec<String>> {
    default_segmenter()?.segment_sentences_with(text, split_dialog)
}

/// Segment `text` into paragraphs of sentences with the default segmenter
pub fn segment_text(text: &str, flatten: bool) -> Result<Segmented> {
    default_segmenter()?.segment_text(text, flatten)
}
