//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
    groups: usize,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Position of the sentence in the output
    pub index: usize,
    /// Length in characters
    pub length: usize,
    /// Quote group the sentence belongs to, when grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sentences: Vec::new(),
            groups: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn push(&mut self, sentence: &str, index: usize, group: Option<usize>) {
        let text = sentence.trim().to_string();
        self.sentences.push(SentenceData {
            length: text.chars().count(),
            text,
            index,
            group,
        });
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()> {
        self.push(sentence, index, None);
        Ok(())
    }

    fn format_group(&mut self, group: &[String], index: usize) -> Result<()> {
        let id = self.groups;
        self.groups += 1;
        for (offset, sentence) in group.iter().enumerate() {
            self.push(sentence, index + offset, Some(id));
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
