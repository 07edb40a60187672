//! Validate command implementation

use anyhow::Result;
use clap::Args;
use proseg_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short = 'l', long = "lexicon", value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                print!("{}", describe(&lexicon));
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}

fn describe(lexicon: &Lexicon) -> String {
    let summary = lexicon.summary();
    let terminators: String = lexicon.terminators().iter().collect();
    format!(
        "  Code: {}\n  Name: {}\n  Terminators: {terminators}\n  Abbreviations: {} general, {} prepositive, {} titles\n  Numbered title keywords: {}\n  Brands: {}\n  Sentence starters: {}\n  MLA threshold: {}\n",
        lexicon.code(),
        lexicon.name(),
        summary.general,
        summary.prepositive,
        summary.titles,
        summary.title_keywords,
        summary.brands,
        summary.sentence_starters,
        lexicon.mla_threshold(),
    )
}
