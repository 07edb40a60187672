//! Bibliographic citation protection
//!
//! Citations are full of periods that do not end sentences
//! (`Matolino, Bernard. (2011). The Function.`). Each line is searched for
//! citation spans; every span is first scored by the [`CitationClassifier`].
//! MLA spans get every internal period protected, the others go through the
//! APA [`CitationRule`] list. The period that ends a span, and any text
//! around it, stay visible.

// Pattern fragments shared by the span finder and the rules

/// A period, or one the initials or dotted-token normalizers already hid
macro_rules! dot {
    () => {
        r"(?:\.|qx(?:mi|ut)2exz)"
    };
}

/// `Surname, Given` or `Surname, J. R.`
macro_rules! person {
    () => {
        concat!(
            r"\p{Lu}[\p{L}'’-]+,\s+\p{Lu}[\p{L}'’-]*",
            dot!(),
            r"?(?:\s*\p{Lu}",
            dot!(),
            ")*"
        )
    };
}

/// One or more people, optionally closed by `et al.`
macro_rules! authors {
    () => {
        concat!(
            person!(),
            r"(?:,?\s+(?:&\s+|and\s+)?",
            person!(),
            r")*(?:,?\s+et\s+al",
            dot!(),
            ")?"
        )
    };
}

/// Capitalised organisation name without internal periods
macro_rules! organisation {
    () => {
        r"\p{Lu}[\p{L}'’&-]*(?:\s+(?:of|for|and|the|on|in|&|\p{Lu}[\p{L}'’&-]*))*"
    };
}

macro_rules! editor {
    () => {
        concat!(
            r"\((?:Eds?|Trans|Ed",
            dot!(),
            r"\s*&\s*Trans|Comp|Rev)",
            dot!(),
            r"\)"
        )
    };
}

/// `(2011)`, `(2008, Jan. 5)` or `(n.d.)`
macro_rules! year {
    () => {
        concat!(
            r"\((?:\d{4}[a-z]?|n",
            dot!(),
            "d",
            dot!(),
            r")(?:,[^)\n]*)?\)"
        )
    };
}

macro_rules! publisher_word {
    () => {
        concat!(
            r"(?:(?:Inc|Ltd|Co|Corp|Univ|Dept|Assn|Intl|Natl|Bros)",
            dot!(),
            r"|\p{Lu}[\p{L}'’&-]*)"
        )
    };
}

mod classifier;
mod rules;
mod span;

pub use classifier::{CitationClassifier, CitationFeatures};
pub use rules::CitationRule;

use super::Normalizer;
use crate::codec::Namespace;
use log::trace;
use span::CitationSpan;
use std::ops::Range;

#[derive(Debug, Clone, Copy, Default)]
pub struct CitationNormalizer {
    classifier: CitationClassifier,
}

impl CitationNormalizer {
    pub fn new(classifier: CitationClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &CitationClassifier {
        &self.classifier
    }

    /// Whether a line holds at least one citation
    ///
    /// A citation opens with `Surname, X` (or an organisation followed by a
    /// parenthesised year) at the line start or after a sentence terminator,
    /// and continues as an APA or MLA entry.
    pub fn is_candidate(line: &str) -> bool {
        !span::find_spans(line).is_empty()
    }

    /// Citation text of `line`, left to right
    pub fn citations(line: &str) -> Vec<&str> {
        span::find_spans(line)
            .into_iter()
            .map(|span| &line[span.range])
            .collect()
    }

    /// Ranges to hide for one span
    fn hidden_ranges(&self, line: &str, span: &CitationSpan, keep: &[usize]) -> Vec<Range<usize>> {
        let text = &line[span.range.clone()];
        if self.classifier.is_mla(text) {
            trace!("citation classified as MLA");
            return vec![span.range.clone()];
        }

        let mut ranges = span.core.clone();
        let offset = span.range.start;
        let winner = CitationRule::PRIORITY.iter().find_map(|rule| {
            let found: Vec<Range<usize>> = rule
                .matches(text)
                .into_iter()
                .map(|r| r.start + offset..r.end + offset)
                .collect();
            rules::hides_any(line, &found, keep).then_some((rule, found))
        });
        if let Some((rule, found)) = winner {
            trace!("citation rule {} applied", rule.name());
            ranges.extend(found);
        }
        ranges
    }

    fn protect_line(&self, line: &str) -> Option<String> {
        let spans = span::find_spans(line);
        if spans.is_empty() {
            return None;
        }
        let keep: Vec<usize> = spans.iter().filter_map(|span| span.terminal).collect();
        let ranges: Vec<Range<usize>> = spans
            .iter()
            .flat_map(|span| self.hidden_ranges(line, span, &keep))
            .collect();
        rules::protect_in_ranges(line, &ranges, &keep)
    }
}

impl Normalizer for CitationNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::Citation]
    }

    fn protect(&self, text: &str) -> String {
        if !text.contains('.') {
            return text.to_string();
        }
        text.split('\n')
            .map(|line| self.protect_line(line).unwrap_or_else(|| line.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> CitationNormalizer {
        CitationNormalizer::default()
    }

    #[test]
    fn test_candidate_detection() {
        assert!(CitationNormalizer::is_candidate("Matolino, Bernard. (2011). The Function."));
        assert!(CitationNormalizer::is_candidate(
            "American Psychological Association. (2010). Manual."
        ));
        assert!(!CitationNormalizer::is_candidate("The cat sat. It purred."));
        assert!(!CitationNormalizer::is_candidate("Paris, France. It was cold. We left."));
    }

    #[test]
    fn test_prose_with_comma_untouched() {
        let text = "Well, I think so. Paris, France. It was cold. We left.";
        assert_eq!(normalizer().normalize(text), text);
    }

    #[test]
    fn test_prose_shaped_like_a_citation_untouched() {
        for text in [
            "Paris, France. In 2010 we met. It was fun.",
            "Well, Smith was right. He left in 1999. We stayed.",
            "Paris, France. It was cold in Rome, 2010.",
        ] {
            assert_eq!(normalizer().normalize(text), text);
        }
    }

    #[test]
    fn test_text_around_a_citation_stays_visible() {
        let normalizer = normalizer();
        let text = "I cited it. Matolino, Bernard. (2011). The Function. It was good.";
        let normalized = normalizer.normalize(text);
        assert!(normalized.starts_with("I cited it. Matolino, Bernard"));
        assert!(normalized.ends_with("Function. It was good."));
        assert_eq!(normalized.matches('.').count(), 3);
        assert_eq!(normalizer.denormalize(&normalized), text);
        assert_eq!(
            CitationNormalizer::citations(text),
            vec!["Matolino, Bernard. (2011). The Function."]
        );
    }

    #[test]
    fn test_editor_and_special_date_cover_whole_entry() {
        let normalizer = normalizer();
        for text in [
            "Smith, J. (Ed.). (2001). Handbook. Publisher.",
            "Smith, J. (2008, Jan. 5). News item. Times.",
        ] {
            let normalized = normalizer.normalize(text);
            assert_eq!(normalized.matches('.').count(), 1, "{normalized}");
            assert_eq!(normalizer.denormalize(&normalized), text);
        }
    }

    #[test]
    fn test_apa_line() {
        let normalizer = normalizer();
        let text = "Matolino, Bernard. (2011). The Function.";
        let normalized = normalizer.normalize(text);
        assert_eq!(normalized.matches('.').count(), 1);
        assert_eq!(normalizer.denormalize(&normalized), text);
    }

    #[test]
    fn test_mla_line_aggressive() {
        let normalizer = normalizer();
        let text = "Smith, John. The Great Book. Penguin, 2005.";
        let normalized = normalizer.normalize(text);
        assert_eq!(normalized.matches('.').count(), 1);
        assert!(normalized.ends_with("2005."));
    }

    #[test]
    fn test_mla_period_before_quote_protected() {
        let normalizer = normalizer();
        let text = "Smith, John. \"A Story.\" Tales, Penguin, 2005.";
        let normalized = normalizer.normalize(text);
        assert!(!normalized.contains(".\""));
        assert_eq!(normalizer.denormalize(&normalized), text);
    }

    #[test]
    fn test_only_candidate_lines_touched() {
        let normalizer = normalizer();
        let text = "Intro text. More text.\nMatolino, Bernard. (2011). The Function.";
        let normalized = normalizer.normalize(text);
        assert!(normalized.starts_with("Intro text. More text.\n"));
        assert_eq!(normalizer.denormalize(&normalized), text);
    }
}
