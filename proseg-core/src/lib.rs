//! Sentence segmentation by correcting a coarse boundary detector
//!
//! A boundary oracle proposes candidate sentences quickly but trips over
//! abbreviations, citations, quoted dialogue, ellipses and numbered titles.
//! This crate wraps the oracle in a two-phase correction pipeline:
//!
//! - **Before the oracle**: reversible normalizers hide boundary-confusing
//!   substrings behind placeholder tokens (`qx..xz`) the oracle cannot see.
//! - **After the oracle**: merge and split cascades repair spurious and
//!   missed boundaries, then every hidden substring is restored exactly.
//!
//! # Architecture
//!
//! - [`codec`]: placeholder tokens and their namespaces
//! - [`lexicon`]: embedded word lists (abbreviations, titles, brands, ...)
//! - [`normalize`]: one-way repairs and reversible normalizers
//! - [`oracle`]: the boundary detector interface and two implementations
//! - [`cascade`]: merge and split heuristics
//! - [`grouping`]: quote-span grouping for presentation
//! - [`pipeline`]: the fixed stage order and post-cleanup
//! - [`api`]: [`Segmenter`], configuration, input and output types
//!
//! # Example
//!
//! ```rust
//! use proseg_core::{Config, Segmenter};
//!
//! let segmenter = Segmenter::with_config(Config::default()).unwrap();
//!
//! let sentences = segmenter
//!     .segment_sentences("Dr. Smith arrived at 5 p.m. today. He was late.")
//!     .unwrap();
//! assert_eq!(sentences, vec!["Dr. Smith arrived at 5 p.m. today.", "He was late."]);
//! ```

#[macro_use]
mod macros;

pub mod api;
pub mod cascade;
pub mod codec;
pub mod error;
pub mod grouping;
pub mod lexicon;
pub mod normalize;
pub mod oracle;
pub mod pipeline;

pub use api::{
    segment_sentences, segment_text, Config, ConfigBuilder, Input, Output, ProcessingMetadata,
    ProcessingStats, Segmented, Segmenter,
};
pub use codec::{Namespace, Placeholder};
pub use error::{Error, Result};
pub use grouping::group_quote_spans;
pub use lexicon::Lexicon;
pub use oracle::{BoundaryOracle, OracleKind};
pub use pipeline::Pipeline;
