//! Output formatting module

use anyhow::Result;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single sentence; `index` counts from 0 across
    /// the whole run
    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()>;

    /// Format the sentences of one quote group, starting at `index`
    fn format_group(&mut self, group: &[String], index: usize) -> Result<()> {
        for (offset, sentence) in group.iter().enumerate() {
            self.format_sentence(sentence, index + offset)?;
        }
        Ok(())
    }

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "One sentence per line; a quote group shares a line",
            OutputFormat::Json => "Array of {text, index, length[, group]} objects",
            OutputFormat::Markdown => "Numbered list; quote groups as block quotes",
        }
    }

    /// Parse a format name from a configuration file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_names() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("Markdown"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("yaml"), None);
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(OutputFormat::parse(format.name()), Some(format));
        }
    }
}
