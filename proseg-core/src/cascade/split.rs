use super::text::split_at_offsets;
use super::SplitRule;
use crate::codec::{self, Namespace};
use crate::lexicon::{AbbreviationKind, Lexicon};
use std::sync::Arc;

/// `etc. The next sentence`: an abbreviation followed by a sentence starter
#[derive(Debug, Clone)]
pub struct AbbreviationSplit {
    lexicon: Arc<Lexicon>,
}

impl AbbreviationSplit {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl SplitRule for AbbreviationSplit {
    fn name(&self) -> &'static str {
        "abbreviation"
    }

    fn split(&self, sentence: &str) -> Vec<String> {
        let re = lazy_regex!(r"([\p{L}\p{N}.]*\p{L})\.\s+(\p{Lu}[\p{L}']*)");
        let offsets: Vec<usize> = re
            .captures_iter(sentence)
            .filter_map(|caps| {
                let word = caps.get(1)?;
                let next = caps.get(2)?;
                let kind = self.lexicon.abbreviation_kind(&codec::reveal(word.as_str()))?;
                let ends_sentence = kind != AbbreviationKind::Title
                    && self.lexicon.is_sentence_starter(next.as_str());
                ends_sentence.then_some(word.end() + 1)
            })
            .collect();

        split_at_offsets(sentence, &offsets)
    }
}

/// Which side of a double-quoted passage the scanner is on
#[derive(Debug, Default)]
struct QuoteState {
    open: bool,
}

impl QuoteState {
    /// Track `c`; returns true when it was a double quote
    fn observe(&mut self, c: char) -> bool {
        match c {
            '"' => self.open = !self.open,
            '“' => self.open = true,
            '”' => self.open = false,
            _ => return false,
        }
        true
    }
}

/// `?`/`!` run followed by a capital, outside double quotes
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionExclamationSplit;

impl SplitRule for QuestionExclamationSplit {
    fn name(&self) -> &'static str {
        "question-exclamation"
    }

    fn split(&self, sentence: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = sentence.char_indices().collect();
        let mut quotes = QuoteState::default();
        let mut offsets = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i].1;
            if quotes.observe(c) || quotes.open || !matches!(c, '?' | '!') {
                i += 1;
                continue;
            }

            let mut j = i;
            while j < chars.len() && matches!(chars[j].1, '?' | '!') {
                j += 1;
            }
            let mut k = j;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }
            if k > j && k < chars.len() && chars[k].1.is_uppercase() {
                offsets.push(chars[j].0);
            }
            i = j;
        }

        split_at_offsets(sentence, &offsets)
    }
}

/// `"Stop." He left.`: terminator inside a closing quote, then a capital
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteCloseSplit;

impl SplitRule for QuoteCloseSplit {
    fn name(&self) -> &'static str {
        "quote-close"
    }

    fn split(&self, sentence: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = sentence.char_indices().collect();
        let mut quotes = QuoteState::default();
        let mut offsets = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i].1;
            let closes = quotes.open
                && matches!(c, '.' | '!' | '?')
                && chars.get(i + 1).is_some_and(|&(_, q)| matches!(q, '"' | '”'));

            if !closes {
                quotes.observe(c);
                i += 1;
                continue;
            }

            quotes.open = false;
            let after = i + 2;
            let mut k = after;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }
            if k > after && k < chars.len() && chars[k].1.is_uppercase() {
                offsets.push(chars[after].0);
            }
            i = after;
        }

        split_at_offsets(sentence, &offsets)
    }
}

/// Continuation ellipsis followed by a capital other than the pronoun `I`
#[derive(Debug, Default, Clone, Copy)]
pub struct EllipsisCapitalSplit;

impl SplitRule for EllipsisCapitalSplit {
    fn name(&self) -> &'static str {
        "ellipsis-capital"
    }

    fn split(&self, sentence: &str) -> Vec<String> {
        let capital = lazy_regex!(r#"^\s+["“‘'(\[]?\p{Lu}"#);
        let offsets: Vec<usize> = codec::token_regex(Namespace::Ellipsis)
            .find_iter(sentence)
            .filter(|m| {
                let rest = &sentence[m.end()..];
                capital.is_match(rest) && !rest.trim_start().starts_with("I ")
            })
            .map(|m| m.end())
            .collect();

        split_at_offsets(sentence, &offsets)
    }
}
