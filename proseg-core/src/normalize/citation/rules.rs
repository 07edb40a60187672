//! APA citation patterns, evaluated in priority order

use super::span;
use crate::codec::{self, Namespace};
use regex::Regex;
use std::ops::Range;

/// One APA citation pattern
///
/// Each rule protects the periods inside its matches. Inside a citation the
/// winning rule is combined with the author and year of the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationRule {
    EditorTranslator,
    EtAl,
    SpecialDate,
    Institutional,
    AuthorYearTitle,
    MlaAuthor,
    Retrieval,
    JournalArticle,
    InEditor,
    Dissertation,
    RetrievalWithDate,
}

impl CitationRule {
    /// Evaluation order; the first rule that changes a line wins
    pub const PRIORITY: [CitationRule; 11] = [
        CitationRule::EditorTranslator,
        CitationRule::EtAl,
        CitationRule::SpecialDate,
        CitationRule::Institutional,
        CitationRule::AuthorYearTitle,
        CitationRule::MlaAuthor,
        CitationRule::Retrieval,
        CitationRule::JournalArticle,
        CitationRule::InEditor,
        CitationRule::Dissertation,
        CitationRule::RetrievalWithDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CitationRule::EditorTranslator => "editor-translator",
            CitationRule::EtAl => "et-al",
            CitationRule::SpecialDate => "special-date",
            CitationRule::Institutional => "institutional",
            CitationRule::AuthorYearTitle => "author-year-title",
            CitationRule::MlaAuthor => "mla-author",
            CitationRule::Retrieval => "retrieval",
            CitationRule::JournalArticle => "journal-article",
            CitationRule::InEditor => "in-editor",
            CitationRule::Dissertation => "dissertation",
            CitationRule::RetrievalWithDate => "retrieval-with-date",
        }
    }

    pub fn pattern(self) -> &'static Regex {
        match self {
            CitationRule::EditorTranslator => lazy_regex!(concat!(editor!(), dot!(), "?")),
            CitationRule::EtAl => lazy_regex!(concat!(r"\bet al", dot!(), r"(?:,|\s*\(|\s+\d)")),
            CitationRule::SpecialDate => lazy_regex!(concat!(
                r"\(\d{4}[a-z]?,\s+\p{Lu}\p{Ll}{2,8}",
                dot!(),
                r"?(?:\s+\d{1,2})?\)",
                dot!(),
                r"?|\(n",
                dot!(),
                "d",
                dot!(),
                r"\)",
                dot!(),
                "?"
            )),
            CitationRule::Institutional => {
                lazy_regex!(r"\b(?:Inc|Ltd|Co|Corp|Univ|Dept|Assn|Intl|Natl|Bros)\.")
            }
            CitationRule::AuthorYearTitle => span::apa_head(),
            CitationRule::MlaAuthor => lazy_regex!(concat!(
                r"^\p{Lu}[\p{L}'’-]+,\s+\p{Lu}[\p{L}'’-]*(?:\s+\p{Lu}",
                dot!(),
                r")*\."
            )),
            CitationRule::Retrieval => {
                lazy_regex!(r"\.\s+(?:Retrieved from|Available (?:at|from)|doi:|https?:)")
            }
            CitationRule::JournalArticle => {
                lazy_regex!(r"\.\s+\p{Lu}[\p{L}&:' ]+,\s+\d+(?:\(\d+\))?,\s+\d+[-–]\d+")
            }
            CitationRule::InEditor => lazy_regex!(concat!(
                r"\.\s+In\s+(?:\p{Lu}",
                dot!(),
                r"\s+)+\p{Lu}[\p{L}'’-]+\s+\(Eds?\.\)"
            )),
            CitationRule::Dissertation => lazy_regex!(
                r"\((?:Doctoral dissertation|Master's thesis|Unpublished (?:doctoral dissertation|master's thesis)|Report No\.|Technical Report|Tech\. Rep\.)[^)]*\)\.?"
            ),
            CitationRule::RetrievalWithDate => {
                lazy_regex!(r"\.\s+Retrieved\s+\p{Lu}\p{Ll}+\.?\s+\d{1,2},\s+\d{4},\s+from")
            }
        }
    }

    /// Byte ranges of this rule's matches in `text`
    pub fn matches(self, text: &str) -> Vec<Range<usize>> {
        self.pattern().find_iter(text).map(|m| m.range()).collect()
    }

    /// Apply this rule alone to a whole line, `None` when nothing changes
    pub fn apply(self, line: &str) -> Option<String> {
        let keep: Vec<usize> = terminal_period(line).into_iter().collect();
        protect_in_ranges(line, &self.matches(line), &keep)
    }
}

/// Byte offset of the line's terminal period, if it ends with one
fn terminal_period(line: &str) -> Option<usize> {
    let trimmed = line.trim_end();
    trimmed.ends_with('.').then(|| trimmed.len() - 1)
}

/// Whether hiding `ranges` would change `text`
pub(super) fn hides_any(text: &str, ranges: &[Range<usize>], keep: &[usize]) -> bool {
    text.char_indices()
        .any(|(i, c)| c == '.' && !keep.contains(&i) && ranges.iter().any(|r| r.contains(&i)))
}

/// Replace each `.` inside `ranges` with a citation token, except at `keep`
pub(super) fn protect_in_ranges(
    line: &str,
    ranges: &[Range<usize>],
    keep: &[usize],
) -> Option<String> {
    let mut changed = false;
    let mut out = String::with_capacity(line.len() + 16);
    for (i, c) in line.char_indices() {
        let hide = c == '.' && !keep.contains(&i) && ranges.iter().any(|r| r.contains(&i));
        if hide {
            out.push_str(&codec::protect(Namespace::Citation, "."));
            changed = true;
        } else {
            out.push(c);
        }
    }
    changed.then_some(out)
}
