//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Code recorded in the lexicon's metadata
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Human-readable lexicon name
    #[arg(long, value_name = "NAME", default_value = "Custom")]
    pub name: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating lexicon template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists to suit your text");
        println!("2. Validate your lexicon:");
        println!("   proseg validate -l {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   proseg process -i input.txt --lexicon {}", self.output.display());

        Ok(())
    }

    /// The embedded English lexicon with this template's metadata
    fn generate_template(&self) -> Result<String> {
        let valid = |s: &str| {
            !s.trim().is_empty() && !s.chars().any(|c| c == '"' || c == '\\' || c.is_control())
        };
        if !valid(&self.code) || !valid(&self.name) {
            bail!("Code and name must be non-empty and contain no quotes, backslashes or control characters");
        }

        let body = proseg_core::lexicon::embedded_source()
            .replacen("code = \"en\"", &format!("code = \"{}\"", self.code), 1)
            .replacen("name = \"English\"", &format!("name = \"{}\"", self.name), 1);
        let body = body
            .strip_prefix("# English lexicon for proseg\n")
            .unwrap_or(&body);

        Ok(format!(
            "# {} lexicon for proseg\n#\n# Generated from the built-in English word lists.\n{body}",
            self.name
        ))
    }
}
