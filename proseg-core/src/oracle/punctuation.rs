use super::BoundaryOracle;
use crate::codec;

/// Closing quotes and brackets absorbed into a terminator run
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | '»' | ')' | ']' | '}')
}

/// Opening quotes and brackets skipped before the continuation check
fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '“' | '‘' | '«' | '(' | '[' | '{')
}

/// Deterministic terminator scanner
///
/// A boundary is proposed after a run of terminators (plus any closing quotes
/// or brackets) that is followed by whitespace or the end of the text, unless
/// the next word starts with a lowercase letter.
#[derive(Debug, Clone)]
pub struct PunctuationOracle {
    terminators: Vec<char>,
}

impl Default for PunctuationOracle {
    fn default() -> Self {
        Self::new(vec!['.', '!', '?'])
    }
}

impl PunctuationOracle {
    pub fn new(terminators: Vec<char>) -> Self {
        Self { terminators }
    }

    fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    /// Whether `rest` continues the current sentence
    ///
    /// Placeholder tokens are looked through, so a hidden `[Note]` counts as
    /// an opener followed by a capital rather than as lowercase text.
    fn continues(rest: &str) -> bool {
        rest.split_whitespace()
            .find_map(|word| codec::reveal(word).chars().find(|&c| !is_opener(c)))
            .is_some_and(char::is_lowercase)
    }
}

impl BoundaryOracle for PunctuationOracle {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !self.is_terminator(chars[i].1) {
                i += 1;
                continue;
            }

            let mut j = i;
            while j < chars.len() && self.is_terminator(chars[j].1) {
                j += 1;
            }
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            // "3.14", "U.S": the run is glued to the next word
            if j < chars.len() && !chars[j].1.is_whitespace() {
                i = j;
                continue;
            }

            let end = chars.get(j).map_or(text.len(), |&(offset, _)| offset);
            let mut k = j;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }

            if k < chars.len() && Self::continues(&text[chars[k].0..]) {
                i = k;
                continue;
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
            i = k;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}
