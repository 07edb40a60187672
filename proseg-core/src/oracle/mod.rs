//! Coarse sentence boundary detectors
//!
//! The pipeline treats the oracle as a black box that proposes candidate
//! sentences. It only relies on three behaviours: terminal `. ? !` (plus any
//! configured terminators) are candidate boundaries, an immediately
//! following lowercase word is a continuation signal, and placeholder tokens
//! pass through untouched.

mod punctuation;
mod uax29;

pub use punctuation::PunctuationOracle;
pub use uax29::Uax29Oracle;

use crate::error::{Error, Result};
use crate::lexicon;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Capability interface of a boundary detector
pub trait BoundaryOracle: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Split `text` into trimmed, non-empty candidate sentences
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Shipped oracle implementations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OracleKind {
    #[default]
    Punctuation,
    Uax29,
}

impl OracleKind {
    pub const ALL: [OracleKind; 2] = [OracleKind::Punctuation, OracleKind::Uax29];

    pub fn name(self) -> &'static str {
        match self {
            OracleKind::Punctuation => "punctuation",
            OracleKind::Uax29 => "uax29",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OracleKind::Punctuation => "Terminator scan with lowercase continuation (default)",
            OracleKind::Uax29 => "Unicode sentence boundaries (UAX #29)",
        }
    }
}

impl fmt::Display for OracleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OracleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "punctuation" | "default" => Ok(OracleKind::Punctuation),
            "uax29" | "unicode" => Ok(OracleKind::Uax29),
            other => Err(Error::Configuration(format!("Unknown oracle: {other}"))),
        }
    }
}

static PUNCTUATION: OnceLock<Arc<dyn BoundaryOracle>> = OnceLock::new();
static UAX29: OnceLock<Arc<dyn BoundaryOracle>> = OnceLock::new();

/// Process-wide oracle handle built on first use
///
/// The punctuation oracle takes its terminators from the embedded lexicon.
pub fn shared(kind: OracleKind) -> Result<Arc<dyn BoundaryOracle>> {
    match kind {
        OracleKind::Punctuation => {
            if let Some(oracle) = PUNCTUATION.get() {
                return Ok(Arc::clone(oracle));
            }
            let lexicon = lexicon::english()?;
            let built: Arc<dyn BoundaryOracle> =
                Arc::new(PunctuationOracle::new(lexicon.terminators().to_vec()));
            Ok(Arc::clone(PUNCTUATION.get_or_init(|| built)))
        }
        OracleKind::Uax29 => Ok(Arc::clone(
            UAX29.get_or_init(|| Arc::new(Uax29Oracle::new())),
        )),
    }
}
