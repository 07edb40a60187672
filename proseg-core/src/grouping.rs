//! Grouping of consecutive sentences that belong to one quoted passage
//!
//! Grouping is presentation only: it never changes the sentences themselves,
//! and concatenating the groups yields the input list.

use crate::cascade::text::double_quote_count;

/// Default upper bound on the size of one group
pub const DEFAULT_MAX_GROUP: usize = 10;

/// Open group and whether a double quote is still unbalanced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuoteSpanState {
    pub current_group: Vec<String>,
    pub quote_open: bool,
}

impl QuoteSpanState {
    fn reset(&mut self) -> Vec<String> {
        self.quote_open = false;
        std::mem::take(&mut self.current_group)
    }
}

/// Quote-span state machine
///
/// Each sentence toggles the open flag by the parity of its double-quote
/// characters. While a quote is open, sentences are appended to the current
/// group; otherwise a new group starts. A group that reaches `max_group`
/// sentences is flushed and the state reset, so an unbalanced quote can never
/// swallow the rest of the text.
#[derive(Debug, Clone)]
pub struct QuoteSpanGrouper {
    max_group: usize,
}

impl Default for QuoteSpanGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GROUP)
    }
}

impl QuoteSpanGrouper {
    /// A bound of zero is treated as one
    pub fn new(max_group: usize) -> Self {
        Self {
            max_group: max_group.max(1),
        }
    }

    pub fn max_group(&self) -> usize {
        self.max_group
    }

    pub fn group<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<String>> {
        let mut groups = Vec::new();
        let mut state = QuoteSpanState::default();

        for sentence in sentences {
            let sentence = sentence.as_ref();
            if !state.quote_open && !state.current_group.is_empty() {
                groups.push(state.reset());
            }

            state.current_group.push(sentence.to_string());
            if double_quote_count(sentence) % 2 == 1 {
                state.quote_open = !state.quote_open;
            }

            if state.current_group.len() >= self.max_group {
                groups.push(state.reset());
            }
        }

        if !state.current_group.is_empty() {
            groups.push(state.current_group);
        }
        groups
    }
}

/// Group `sentences` by quote span with the given bound
pub fn group_quote_spans<S: AsRef<str>>(sentences: &[S], max_group: usize) -> Vec<Vec<String>> {
    QuoteSpanGrouper::new(max_group).group(sentences)
}
