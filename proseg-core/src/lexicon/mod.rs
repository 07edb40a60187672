//! Word lists that drive the normalizers and cascades
//!
//! A lexicon is read from TOML (see `configs/english.toml`) and turned into
//! lookup tables once. The embedded English lexicon is shared process-wide
//! through [`english`]; custom lexicons can be parsed from a string or file.

pub mod config;
mod loader;
mod starters;

pub use config::LexiconConfig;
pub use loader::{embedded_source, english, load_lexicon_file, parse_lexicon};
pub use starters::{next_word, SentenceStarterTable};

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// How an abbreviation behaves before the next candidate sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationKind {
    /// Ends a sentence only when followed by a sentence starter
    Prepositive,
    /// A personal title that introduces a name
    Title,
    /// Anything else
    General,
}

/// Runtime lookup tables built from a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    terminators: Vec<char>,
    general: HashSet<String>,
    prepositive: HashSet<String>,
    titles: HashSet<String>,
    title_keywords: HashSet<String>,
    brands: Vec<String>,
    sentence_starters: SentenceStarterTable,
    mla_threshold: f64,
}

impl Lexicon {
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        if config.metadata.code.trim().is_empty() {
            return Err(Error::Lexicon("metadata.code must not be empty".into()));
        }
        if config.oracle.terminators.is_empty() {
            return Err(Error::Lexicon(
                "oracle.terminators must list at least one character".into(),
            ));
        }
        if let Some(c) = config
            .oracle
            .terminators
            .iter()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(Error::Lexicon(format!(
                "terminator {c:?} must be punctuation"
            )));
        }
        let threshold = config.citation.mla_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::Lexicon(format!(
                "citation.mla_threshold must be within 0.0..=1.0, got {threshold}"
            )));
        }
        if let Some(brand) = config.brands.names.iter().find(|b| !b.contains('!')) {
            return Err(Error::Lexicon(format!(
                "brand {brand:?} does not contain an exclamation mark"
            )));
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: config.oracle.terminators.clone(),
            general: normalized_set(&config.abbreviations.general),
            prepositive: normalized_set(&config.abbreviations.prepositive),
            titles: normalized_set(&config.abbreviations.titles),
            title_keywords: config
                .numbered_titles
                .keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            brands: config.brands.names.clone(),
            sentence_starters: SentenceStarterTable::new(
                config.sentence_starters.words.iter().cloned(),
            ),
            mla_threshold: threshold,
        })
    }

    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        parse_lexicon(toml_content)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_lexicon_file(path)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    pub fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    /// Classify `word` (with or without its trailing period)
    ///
    /// Prepositive wins over title, title over general.
    pub fn abbreviation_kind(&self, word: &str) -> Option<AbbreviationKind> {
        let key = abbreviation_key(word);
        if self.prepositive.contains(&key) {
            Some(AbbreviationKind::Prepositive)
        } else if self.titles.contains(&key) {
            Some(AbbreviationKind::Title)
        } else if self.general.contains(&key) {
            Some(AbbreviationKind::General)
        } else {
            None
        }
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviation_kind(word).is_some()
    }

    pub fn is_general_abbreviation(&self, word: &str) -> bool {
        self.general.contains(&abbreviation_key(word))
    }

    pub fn is_prepositive(&self, word: &str) -> bool {
        self.prepositive.contains(&abbreviation_key(word))
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(&abbreviation_key(word))
    }

    pub fn is_title_keyword(&self, word: &str) -> bool {
        self.title_keywords.contains(&word.to_lowercase())
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn sentence_starters(&self) -> &SentenceStarterTable {
        &self.sentence_starters
    }

    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.sentence_starters.is_sentence_starter(word)
    }

    pub fn mla_threshold(&self) -> f64 {
        self.mla_threshold
    }

    /// Entry counts per table, for `validate` style reporting
    pub fn summary(&self) -> LexiconSummary {
        LexiconSummary {
            general: self.general.len(),
            prepositive: self.prepositive.len(),
            titles: self.titles.len(),
            title_keywords: self.title_keywords.len(),
            brands: self.brands.len(),
            sentence_starters: self.sentence_starters.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconSummary {
    pub general: usize,
    pub prepositive: usize,
    pub titles: usize,
    pub title_keywords: usize,
    pub brands: usize,
    pub sentence_starters: usize,
}

fn abbreviation_key(word: &str) -> String {
    word.trim_end_matches('.').to_lowercase()
}

fn normalized_set(words: &[String]) -> HashSet<String> {
    words
        .iter()
        .map(|w| abbreviation_key(w))
        .filter(|w| !w.is_empty())
        .collect()
}
