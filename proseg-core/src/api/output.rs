//! Output types of the segmentation API

use std::time::Duration;

/// Result of [`segment_text`](super::segment_text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmented {
    /// Sentences per blank-line separated paragraph
    Paragraphs(Vec<Vec<String>>),
    /// All sentences in order
    Flat(Vec<String>),
}

impl Segmented {
    /// All sentences in order, regardless of shape
    pub fn into_sentences(self) -> Vec<String> {
        match self {
            Segmented::Paragraphs(paragraphs) => paragraphs.into_iter().flatten().collect(),
            Segmented::Flat(sentences) => sentences,
        }
    }

    pub fn sentence_count(&self) -> usize {
        match self {
            Segmented::Paragraphs(paragraphs) => paragraphs.iter().map(Vec::len).sum(),
            Segmented::Flat(sentences) => sentences.len(),
        }
    }
}

/// Processing output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Sentences per paragraph
    pub paragraphs: Vec<Vec<String>>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Oracle that proposed the candidates
    pub oracle: String,
    /// Whether quoted sentences were split individually
    pub split_dialog: bool,
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    /// Average sentence length in characters
    pub avg_sentence_length: f32,
}

impl Output {
    pub(crate) fn new(
        paragraphs: Vec<Vec<String>>,
        text: &str,
        oracle: &str,
        split_dialog: bool,
        duration: Duration,
    ) -> Self {
        let sentence_count = paragraphs.iter().map(Vec::len).sum::<usize>();
        let sentence_chars: usize = paragraphs
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .sum();
        let avg_sentence_length = if sentence_count > 0 {
            sentence_chars as f32 / sentence_count as f32
        } else {
            0.0
        };

        Self {
            metadata: ProcessingMetadata {
                duration,
                oracle: oracle.to_string(),
                split_dialog,
                stats: ProcessingStats {
                    bytes_processed: text.len(),
                    chars_processed: text.chars().count(),
                    paragraph_count: paragraphs.len(),
                    sentence_count,
                    avg_sentence_length,
                },
            },
            paragraphs,
        }
    }

    /// All sentences in order
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.iter().flatten().map(String::as_str)
    }
}
