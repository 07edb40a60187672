//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _index: usize) -> Result<()> {
        writeln!(self.writer, "{}", sentence.trim())?;
        Ok(())
    }

    fn format_group(&mut self, group: &[String], _index: usize) -> Result<()> {
        let line: Vec<&str> = group.iter().map(|s| s.trim()).collect();
        writeln!(self.writer, "{}", line.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_and_groups() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_sentence(" First. ", 0).unwrap();
        formatter
            .format_group(&["\"Wait.".to_string(), "Stop.\"".to_string()], 1)
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "First.\n\"Wait. Stop.\"\n");
    }
}
