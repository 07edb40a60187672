//! CLI configuration file
//!
//! ```toml
//! [processing]
//! split_dialog = false
//! oracle = "uax29"
//! lexicon = "custom.toml"
//! threads = 4
//!
//! [output]
//! default_format = "json"
//! group_quotes = true
//! ```

use crate::error::CliError;
use anyhow::{Context, Result};
use proseg_core::api::defaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Split multi-sentence quoted passages
    pub split_dialog: bool,

    /// Boundary oracle name
    pub oracle: String,

    /// Custom lexicon file
    pub lexicon: Option<PathBuf>,

    /// Paragraph cache entries per segmenter
    pub cache_capacity: usize,

    /// Largest quote group
    pub max_quote_group: usize,

    /// Worker threads for `--parallel` (0 = one per CPU)
    pub threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            split_dialog: defaults::SPLIT_DIALOG,
            oracle: "punctuation".to_string(),
            lexicon: None,
            cache_capacity: defaults::CACHE_CAPACITY,
            max_quote_group: defaults::MAX_QUOTE_GROUP,
            threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Group sentences of one quoted passage
    pub group_quotes: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            group_quotes: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Read a configuration file; relative lexicon paths resolve against
    /// the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let (Some(lexicon), Some(dir)) = (&config.processing.lexicon, path.parent()) {
            if lexicon.is_relative() {
                config.processing.lexicon = Some(dir.join(lexicon));
            }
        }
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
