use super::Normalizer;
use crate::codec::{self, Namespace};
use regex::Captures;
use std::borrow::Cow;

/// Hides square-bracketed spans (`[Video File]`, `[sic.]`, `[1.2]`) wholesale
///
/// Nested brackets are encoded inside out. When an outer span is encoded its
/// inner tokens are decoded first, so every payload is literal text and one
/// decoding pass restores the original.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketNormalizer;

impl BracketNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for BracketNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::Bracket]
    }

    fn protect(&self, text: &str) -> String {
        let innermost = lazy_regex!(r"\[[^\[\]]*\]");
        let mut current = text.to_string();
        loop {
            let replaced = match innermost.replace_all(&current, |caps: &Captures| {
                let literal = codec::restore(Namespace::Bracket, &caps[0]);
                codec::protect(Namespace::Bracket, &literal)
            }) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => break,
            };
            current = replaced;
        }
        current
    }
}
