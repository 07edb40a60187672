//! Sentence starters lookup
//!
//! Sentence starters are words commonly found at the beginning of sentences.
//! An abbreviation or exclamation brand followed by one of them marks a
//! genuine sentence boundary.

use std::collections::HashSet;

/// Sentence starters lookup table
#[derive(Debug, Clone, Default)]
pub struct SentenceStarterTable {
    /// Set of sentence starters for O(1) lookup
    starters: HashSet<String>,
    /// Shortest and longest entry, for a quick length check
    min_length: usize,
    max_length: usize,
}

impl SentenceStarterTable {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let starters: HashSet<String> = words.into_iter().map(Into::into).collect();
        let min_length = starters.iter().map(String::len).min().unwrap_or(0);
        let max_length = starters.iter().map(String::len).max().unwrap_or(0);

        Self {
            starters,
            min_length,
            max_length,
        }
    }

    /// Check if a word is a sentence starter (case-sensitive)
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        if word.len() < self.min_length || word.len() > self.max_length {
            return false;
        }

        self.starters.contains(word)
    }

    /// Check whether `text` opens with a sentence starter
    ///
    /// Leading whitespace and opening quotes or brackets are skipped.
    pub fn starts_with_starter(&self, text: &str) -> bool {
        next_word(text).is_some_and(|word| self.is_sentence_starter(word))
    }

    pub fn len(&self) -> usize {
        self.starters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}

/// The first alphabetic word of `text`, after whitespace and openers
pub fn next_word(text: &str) -> Option<&str> {
    let trimmed = text.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '“' | '‘' | '(' | '[' | '«')
    });

    let word_end = trimmed
        .char_indices()
        .find(|(_, ch)| !ch.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    if word_end == 0 {
        return None;
    }

    Some(&trimmed[..word_end])
}
