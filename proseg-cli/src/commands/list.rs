//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use proseg_core::OracleKind;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available boundary oracles
    Oracles,
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => {
                let rows = OutputFormat::value_variants()
                    .iter()
                    .map(|format| (format.name(), format.description()));
                table("Available output formats:", rows)
            }
            ListCommands::Oracles => {
                let rows = OracleKind::ALL
                    .iter()
                    .map(|kind| (kind.name(), kind.description()));
                table("Available boundary oracles:", rows)
            }
        }
    }
}

fn table<'a>(title: &str, rows: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = format!("{title}\n");
    for (name, description) in rows {
        out.push_str(&format!("  {name:<12} {description}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats() {
        let out = ListCommands::Formats.render();
        assert!(out.starts_with("Available output formats:"));
        for name in ["text", "json", "markdown"] {
            assert!(out.contains(name));
        }
    }

    #[test]
    fn test_list_oracles() {
        let out = ListCommands::Oracles.render();
        assert!(out.contains("punctuation"));
        assert!(out.contains("uax29"));
        assert_eq!(out.lines().count(), 1 + OracleKind::ALL.len());
    }
}
