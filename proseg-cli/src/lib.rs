//! proseg CLI library
//!
//! Command definitions, file handling and output formatting for the
//! `proseg` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
