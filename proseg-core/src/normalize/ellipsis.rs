use super::Normalizer;
use crate::codec::{self, Namespace};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Classifies and hides ellipses
///
/// A run of four or more dots, or a run followed by a capital letter other
/// than the pronoun `I`, ends the sentence: it is encoded in the boundary
/// namespace and followed by a synthetic `.` so the oracle still sees a
/// terminator. Every other run (including one that ends the text) is a
/// continuation and is hidden entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct EllipsisNormalizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EllipsisKind {
    Boundary,
    Continuation,
}

impl EllipsisNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Decide how the ellipsis `run` behaves given the text that follows it
    pub fn classify(run: &str, rest: &str) -> EllipsisKind {
        if run.starts_with('[') {
            return EllipsisKind::Continuation;
        }
        let dots = run.matches('.').count() + 3 * run.matches('…').count();
        if dots >= 4 {
            return EllipsisKind::Boundary;
        }
        let next = rest.trim_start();
        let mut chars = next.chars();
        match chars.next() {
            Some('I') if !chars.next().is_some_and(char::is_alphabetic) => EllipsisKind::Continuation,
            Some(c) if c.is_uppercase() => EllipsisKind::Boundary,
            _ => EllipsisKind::Continuation,
        }
    }

    fn boundary_with_period() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            let pattern = format!(
                r"qx{}([0-9a-f]*)xz\.?",
                Namespace::EllipsisBoundary.code()
            );
            Regex::new(&pattern).expect("ellipsis token pattern compiles")
        })
    }
}

impl Normalizer for EllipsisNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::Ellipsis, Namespace::EllipsisBoundary]
    }

    fn name(&self) -> &'static str {
        "ellipsis"
    }

    /// Look-alikes of both namespaces are escaped into the continuation
    /// namespace so the synthetic-period strip never touches them.
    fn escape(&self, text: &str) -> String {
        let escaped = codec::escape_lookalikes(Namespace::Ellipsis, text);
        codec::escape_lookalikes_into(Namespace::EllipsisBoundary, Namespace::Ellipsis, &escaped)
            .into_owned()
    }

    fn protect(&self, text: &str) -> String {
        let re = lazy_regex!(r"\[(?:\.{3,}|…)\]|…+(?:[ \u{00A0}]?\.)*|\.(?:[ \u{00A0}]?\.){2,}");
        re.replace_all(text, |caps: &Captures| {
            let (run, end) = match caps.get(0) {
                Some(m) => (m.as_str(), m.end()),
                None => return String::new(),
            };
            match Self::classify(run, &text[end..]) {
                EllipsisKind::Boundary => {
                    format!("{}.", codec::protect(Namespace::EllipsisBoundary, run))
                }
                EllipsisKind::Continuation => codec::protect(Namespace::Ellipsis, run),
            }
        })
        .into_owned()
    }

    fn denormalize(&self, text: &str) -> String {
        let stripped = Self::boundary_with_period().replace_all(text, |caps: &Captures| {
            codec::decode_payload(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        });
        codec::restore(Namespace::Ellipsis, &stripped).into_owned()
    }
}
