//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - numbered sentences, quote groups as block quotes
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    group_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            group_count: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _index: usize) -> Result<()> {
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.trim())?;
        Ok(())
    }

    fn format_group(&mut self, group: &[String], index: usize) -> Result<()> {
        if group.len() < 2 {
            return group
                .iter()
                .try_for_each(|sentence| self.format_sentence(sentence, index));
        }

        self.group_count += 1;
        writeln!(self.writer)?;
        for sentence in group {
            self.sentence_count += 1;
            writeln!(self.writer, "> {}", sentence.trim())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        if self.group_count > 0 {
            writeln!(self.writer, "*Quote groups: {}*", self.group_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
