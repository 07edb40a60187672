//! Configuration of a [`Segmenter`](super::Segmenter)

use crate::error::{Error, Result};
use crate::oracle::OracleKind;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Split each quoted sentence individually
    pub const SPLIT_DIALOG: bool = true;

    /// Number of cached results; zero disables the cache
    pub const CACHE_CAPACITY: usize = 128;

    /// Largest quote-span group
    pub const MAX_QUOTE_GROUP: usize = crate::grouping::DEFAULT_MAX_GROUP;

    /// Longest chain a chaining merge stage may build
    pub const MAX_MERGE_CHAIN: usize = crate::cascade::DEFAULT_MAX_CHAIN;
}

/// Segmentation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) split_dialog: bool,
    pub(crate) cache_capacity: usize,
    pub(crate) max_quote_group: usize,
    pub(crate) max_merge_chain: usize,
    /// None = the lexicon's threshold
    pub(crate) mla_threshold: Option<f64>,
    pub(crate) oracle: OracleKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_dialog: defaults::SPLIT_DIALOG,
            cache_capacity: defaults::CACHE_CAPACITY,
            max_quote_group: defaults::MAX_QUOTE_GROUP,
            max_merge_chain: defaults::MAX_MERGE_CHAIN,
            mla_threshold: None,
            oracle: OracleKind::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn split_dialog(&self) -> bool {
        self.split_dialog
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    pub fn max_quote_group(&self) -> usize {
        self.max_quote_group
    }

    pub fn max_merge_chain(&self) -> usize {
        self.max_merge_chain
    }

    pub fn mla_threshold(&self) -> Option<f64> {
        self.mla_threshold
    }

    pub fn oracle(&self) -> OracleKind {
        self.oracle
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_quote_group == 0 {
            return Err(Error::Configuration(
                "max_quote_group must be greater than 0".into(),
            ));
        }

        if self.max_merge_chain < 2 {
            return Err(Error::Configuration(
                "max_merge_chain must be at least 2".into(),
            ));
        }

        if let Some(threshold) = self.mla_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(Error::Configuration(format!(
                    "mla_threshold must be within 0.0..=1.0, got {threshold}"
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    split_dialog: Option<bool>,
    cache_capacity: Option<usize>,
    max_quote_group: Option<usize>,
    max_merge_chain: Option<usize>,
    mla_threshold: Option<f64>,
    oracle: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep multi-sentence quoted passages together when false
    pub fn split_dialog(mut self, split: bool) -> Self {
        self.split_dialog = Some(split);
        self
    }

    /// Set the result cache size (0 disables caching)
    pub fn cache_capacity(mut self, entries: usize) -> Self {
        self.cache_capacity = Some(entries);
        self
    }

    pub fn max_quote_group(mut self, size: usize) -> Self {
        self.max_quote_group = Some(size);
        self
    }

    pub fn max_merge_chain(mut self, length: usize) -> Self {
        self.max_merge_chain = Some(length);
        self
    }

    /// Override the lexicon's citation classifier threshold
    pub fn mla_threshold(mut self, threshold: f64) -> Self {
        self.mla_threshold = Some(threshold);
        self
    }

    /// Set the oracle by name (`punctuation`, `uax29`)
    pub fn oracle(mut self, name: impl Into<String>) -> Self {
        self.oracle = Some(name.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(split) = self.split_dialog {
            config.split_dialog = split;
        }

        if let Some(entries) = self.cache_capacity {
            config.cache_capacity = entries;
        }

        if let Some(size) = self.max_quote_group {
            config.max_quote_group = size;
        }

        if let Some(length) = self.max_merge_chain {
            config.max_merge_chain = length;
        }

        if self.mla_threshold.is_some() {
            config.mla_threshold = self.mla_threshold;
        }

        if let Some(name) = self.oracle {
            config.oracle = OracleKind::from_str(&name)?;
        }

        config.validate()?;
        Ok(config)
    }
}
