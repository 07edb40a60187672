use super::Normalizer;
use crate::codec::{self, Namespace};
use crate::lexicon::Lexicon;
use regex::{Captures, Regex};
use std::sync::Arc;

/// Hides the `!` of exclamation brand names (`Yahoo!`, `Jeopardy!`)
///
/// A brand `!` that ends the text, or is followed by a sentence starter,
/// still ends the sentence and stays visible.
#[derive(Debug)]
pub struct BrandNormalizer {
    lexicon: Arc<Lexicon>,
    pattern: Option<Regex>,
}

impl BrandNormalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let pattern = build_pattern(lexicon.brands());
        Self { lexicon, pattern }
    }

    fn ends_sentence(&self, rest: &str) -> bool {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return true;
        }
        rest.starts_with(char::is_whitespace) && self.lexicon.sentence_starters().starts_with_starter(trimmed)
    }
}

fn build_pattern(brands: &[String]) -> Option<Regex> {
    if brands.is_empty() {
        return None;
    }
    // Longest first so "Hey Arnold!" wins over a shorter overlapping name
    let mut names: Vec<&String> = brands.iter().collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})")).ok()
}

impl Normalizer for BrandNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::Brand]
    }

    fn protect(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        if !text.contains('!') {
            return text.to_string();
        }

        pattern
            .replace_all(text, |caps: &Captures| {
                let whole = caps.get(0).map_or(0..0, |m| m.range());
                let name = &text[whole.clone()];
                let final_bang_visible = name.ends_with('!') && self.ends_sentence(&text[whole.end..]);
                let last = name.len().saturating_sub(1);
                let mut out = String::with_capacity(name.len() + 16);
                for (i, c) in name.char_indices() {
                    if c == '!' && !(i == last && final_bang_visible) {
                        out.push_str(&codec::protect(Namespace::Brand, "!"));
                    } else {
                        out.push(c);
                    }
                }
                out
            })
            .into_owned()
    }
}
