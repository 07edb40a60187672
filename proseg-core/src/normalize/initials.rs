use super::Normalizer;
use crate::codec::{self, Namespace};
use crate::lexicon::Lexicon;
use regex::Captures;
use std::sync::Arc;

/// Hides the periods of middle initials between a given name and a surname
///
/// `Albert I. Jones` and `John R. R. Tolkien` are protected; a bare initial
/// without a following capitalised surname is not, and neither is the pronoun
/// in `you and I.`
#[derive(Debug)]
pub struct MiddleInitialNormalizer {
    lexicon: Arc<Lexicon>,
}

/// Words that put a following `I.` in pronoun position
const PRONOUN_CONTEXT: &[&str] = &["and", "me", "you", "than", "as"];

impl MiddleInitialNormalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn is_pronoun(&self, given: &str, initials: &str) -> bool {
        initials.trim() == "I." && PRONOUN_CONTEXT.contains(&given.to_lowercase().as_str())
    }
}

impl Normalizer for MiddleInitialNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::MiddleInitial]
    }

    fn protect(&self, text: &str) -> String {
        let re = lazy_regex!(r"\b(\p{Lu}\p{Ll}+)((?:[ \t]+\p{Lu}\.)+)([ \t]+)(\p{Lu}\p{Ll}+)");
        re.replace_all(text, |caps: &Captures| {
            let (given, initials, gap, surname) = (&caps[1], &caps[2], &caps[3], &caps[4]);
            if self.is_pronoun(given, initials) || self.lexicon.is_sentence_starter(surname) {
                return caps[0].to_string();
            }
            let hidden = codec::protect_chars(Namespace::MiddleInitial, initials, |c| c == '.');
            format!("{given}{hidden}{gap}{surname}")
        })
        .into_owned()
    }
}
