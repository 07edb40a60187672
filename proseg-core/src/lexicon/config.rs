use serde::{Deserialize, Serialize};

/// On-disk shape of a lexicon TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
    pub abbreviations: AbbreviationConfig,
    #[serde(default)]
    pub numbered_titles: NumberedTitleConfig,
    #[serde(default)]
    pub brands: BrandConfig,
    #[serde(default)]
    pub sentence_starters: SentenceStarterConfig,
    #[serde(default)]
    pub citation: CitationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub prepositive: Vec<String>,
    #[serde(default)]
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberedTitleConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceStarterConfig {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationConfig {
    #[serde(default = "default_mla_threshold")]
    pub mla_threshold: f64,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            mla_threshold: default_mla_threshold(),
        }
    }
}

fn default_terminators() -> Vec<char> {
    vec!['.', '!', '?']
}

fn default_mla_threshold() -> f64 {
    0.6
}
