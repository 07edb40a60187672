//! Public segmentation API
//!
//! [`Segmenter`] wires a lexicon, an oracle and the pipeline together behind
//! a small interface shared by the CLI and library users. The free functions
//! [`segment_sentences`] and [`segment_text`] use a process-wide default
//! segmenter built on first use.

mod config;
mod input;
mod output;
mod segmenter;


pub use config::{defaults, Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats, Segmented};
pub use segmenter::{segment_sentences, segment_text, Segmenter};
