use super::Normalizer;
use crate::codec::{self, Namespace};
use regex::Captures;

/// Glyphs that look like sentence-final punctuation but are used inside words
const TERMINAL_GLYPHS: &[char] = &['‼', '⁇', '⁈', '⁉', '‽', '！', '？', '．', '。'];

/// Hides the internal periods of dotted tokens and word-internal terminal glyphs
///
/// `U.S.A.` keeps its final period visible so a token that really ends a
/// sentence still does; only `U`, `S` and `A` stay glued together.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeTokenNormalizer;

impl UnicodeTokenNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn protect_dotted(text: &str) -> String {
        let re = lazy_regex!(r"\b\p{L}{1,2}(?:\.\p{L}{1,2})+\.?");
        re.replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let (body, tail) = match token.strip_suffix('.') {
                Some(body) => (body, "."),
                None => (token, ""),
            };
            let hidden = codec::protect_chars(Namespace::UnicodeToken, body, |c| c == '.');
            format!("{hidden}{tail}")
        })
        .into_owned()
    }

    fn protect_glyphs(text: &str) -> String {
        if !text.contains(TERMINAL_GLYPHS) {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        for (i, &c) in chars.iter().enumerate() {
            let inside_word = i > 0
                && chars[i - 1].is_alphanumeric()
                && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
            if inside_word && TERMINAL_GLYPHS.contains(&c) {
                let mut buf = [0u8; 4];
                out.push_str(&codec::protect(Namespace::UnicodeToken, c.encode_utf8(&mut buf)));
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl Normalizer for UnicodeTokenNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::UnicodeToken]
    }

    fn protect(&self, text: &str) -> String {
        Self::protect_glyphs(&Self::protect_dotted(text))
    }
}
