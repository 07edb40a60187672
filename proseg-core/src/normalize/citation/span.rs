//! Locating citations inside a line
//!
//! A citation starts at the line start or right after a sentence terminator
//! and opens with an author. APA entries continue with a parenthesised year,
//! a title and any recognised trailing material (journal, publisher,
//! retrieval clause, ...). MLA entries run to the first `Publisher, Year.` or
//! page range. Everything outside a span stays visible to the oracle.

use regex::Regex;
use std::ops::Range;

/// One citation found in a line, with byte ranges into that line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct CitationSpan {
    pub range: Range<usize>,
    /// Author and year, plus title and material when material follows
    pub core: Vec<Range<usize>>,
    /// The period that ends the citation; it stays visible
    pub terminal: Option<usize>,
}

impl CitationSpan {
    fn at(line: &str, start: usize) -> Option<Self> {
        match apa_head().find(&line[start..]) {
            Some(head) => Some(Self::apa(line, start, start + head.end())),
            None => Self::mla(line, start),
        }
    }

    fn apa(line: &str, start: usize, head_end: usize) -> Self {
        let mut core = vec![start..head_end];
        let mut end = head_end;

        if let Some(title) = lazy_regex!(r"^\s+[^.?!\n]+(?:[.?!]|$)").find(&line[end..]) {
            let title_end = end + title.end();
            end = title_end;
            while let Some(found) = material().iter().find_map(|re| re.find(&line[end..])) {
                if found.end() == 0 {
                    break;
                }
                end += found.end();
            }
            if end > title_end {
                core.push(head_end..end);
            }
        }

        Self::new(line, start..end, core)
    }

    fn mla(line: &str, start: usize) -> Option<Self> {
        let rest = &line[start..];
        let head = mla_head().find(rest)?;
        let closed = head.as_str().ends_with('.') || head.as_str().ends_with("2exz");
        if !closed {
            return None;
        }
        let body = mla_body().find(&rest[head.end()..])?;
        let len = head.end() + body.end();
        if prose_break().is_match(&rest[..len]) {
            return None;
        }
        Some(Self::new(line, start..start + len, Vec::new()))
    }

    fn new(line: &str, range: Range<usize>, core: Vec<Range<usize>>) -> Self {
        let body = line[range.clone()].trim_end();
        let terminal = body.ends_with('.').then(|| range.start + body.len() - 1);
        Self {
            range,
            core,
            terminal,
        }
    }
}

/// Non-overlapping citations of `line`, left to right
pub(super) fn find_spans(line: &str) -> Vec<CitationSpan> {
    let first = line.len() - line.trim_start().len();
    let after_terminators = lazy_regex!(r#"[.?!]["'”’)\]]*\s+"#)
        .find_iter(line)
        .map(|m| m.end());

    let mut spans: Vec<CitationSpan> = Vec::new();
    for start in std::iter::once(first).chain(after_terminators) {
        if start >= line.len() || spans.last().is_some_and(|s| start < s.range.end) {
            continue;
        }
        if let Some(span) = CitationSpan::at(line, start) {
            spans.push(span);
        }
    }
    spans
}

/// `Author. (Year).` with an optional editor note, anchored at the start
pub(super) fn apa_head() -> &'static Regex {
    lazy_regex!(concat!(
        "^(?:",
        authors!(),
        "|",
        organisation!(),
        dot!(),
        r")(?:\s*",
        editor!(),
        dot!(),
        r"?)?\s*",
        year!(),
        dot!(),
        "?"
    ))
}

fn mla_head() -> &'static Regex {
    lazy_regex!(concat!(
        "^",
        authors!(),
        r"(?:,?\s+and\s+\p{Lu}[\p{L}'’-]+(?:\s+\p{Lu}[\p{L}'’-]*",
        dot!(),
        "?)+)?",
        dot!(),
        "?"
    ))
}

fn mla_body() -> &'static Regex {
    lazy_regex!(concat!(
        r"^[^\n]{1,300}?(?:,\s+\d{4}|\bpp",
        dot!(),
        r"\s+\d+[-–]\d+)",
        dot!()
    ))
}

/// A new sentence of ordinary prose: `. It was good`
fn prose_break() -> &'static Regex {
    lazy_regex!(r"[.?!]\s+\p{Lu}\p{Ll}*(?:\s+\p{Ll}+){2}")
}

/// Citation material that may follow an APA title, each anchored at the start
fn material() -> [&'static Regex; 5] {
    [
        // Journal, 5(2), 10-20.
        lazy_regex!(concat!(
            r"^\s+\p{Lu}[\p{L}&:'’ ]+,\s+\d+(?:\(\d+\))?,\s+\d+[-–]\d+",
            dot!(),
            "?"
        )),
        // In A. Editor (Ed.), Book (pp. 1-10).
        lazy_regex!(concat!(
            r"^\s+In\s+(?:\p{Lu}",
            dot!(),
            r"\s+)+\p{Lu}[\p{L}'’-]+\s+",
            editor!(),
            r",\s+[^.()\n]+(?:\s+\(pp",
            dot!(),
            r"\s+\d+[-–]\d+\))?",
            dot!()
        )),
        // (Doctoral dissertation, ...).
        lazy_regex!(concat!(
            r"^\s*\((?:Doctoral dissertation|Master's thesis|Unpublished (?:doctoral dissertation|master's thesis)|Report No",
            dot!(),
            r"|Technical Report|Tech",
            dot!(),
            r"\s+Rep",
            dot!(),
            r")[^)\n]*\)",
            dot!(),
            "?"
        )),
        // Retrieved [May 5, 2010,] from ..., doi:..., https:...
        lazy_regex!(concat!(
            r"^\s+(?:(?:Retrieved(?:\s+\p{Lu}\p{Ll}+",
            dot!(),
            r"?\s+\d{1,2},\s+\d{4},)?\s+from|Available\s+(?:at|from))\s+\S+|doi:\s*\S+|https?:\S+)"
        )),
        // Publisher name closing the line
        lazy_regex!(concat!(
            r"^\s+",
            publisher_word!(),
            r"(?:[,:]?\s+(?:of|for|and|the|in|&|",
            publisher_word!(),
            "))*",
            dot!(),
            r"?\s*$"
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(line: &str) -> Vec<&str> {
        find_spans(line)
            .into_iter()
            .map(|span| &line[span.range])
            .collect()
    }

    #[test]
    fn test_patterns_compile() {
        assert!(apa_head().is_match("Doe, J. (2001)."));
        assert!(mla_head().is_match("Doe, Jane."));
        assert!(mla_body().is_match(" Poems. Norton, 2001."));
        assert!(prose_break().is_match("Paris. It was cold"));
        assert_eq!(material().len(), 5);
    }

    #[test]
    fn test_apa_span_ends_after_title() {
        let line = "Matolino, Bernard. (2011). The Function. It was good.";
        assert_eq!(spans(line), vec!["Matolino, Bernard. (2011). The Function."]);

        let span = &find_spans(line)[0];
        assert_eq!(span.core, vec![0..26]);
        assert_eq!(span.terminal, Some(39));
    }

    #[test]
    fn test_apa_material_extends_span() {
        let line = "Doe, J. (2010). A study. Journal of Things, 4(2), 1-10.";
        let found = find_spans(line);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, 0..line.len());
        assert_eq!(found[0].core.len(), 2);

        let publisher = "Smith, J. (Ed.). (2001). Handbook. Publisher.";
        assert_eq!(spans(publisher), vec![publisher]);
    }

    #[test]
    fn test_special_date_and_et_al_heads() {
        assert!(apa_head().is_match("Smith, J. (2008, Jan. 5). News."));
        assert!(apa_head().is_match("Lee, K., et al. (2010). Results."));
        assert!(apa_head().is_match("Ng, K. (nqxut2exzd.). Undated."));
        assert!(apa_head().is_match("American Psychological Association. (2010). Manual."));
    }

    #[test]
    fn test_citation_after_prose() {
        let line = "I cited it. Matolino, Bernard. (2011). The Function. It was good.";
        assert_eq!(spans(line), vec!["Matolino, Bernard. (2011). The Function."]);
    }

    #[test]
    fn test_mla_span() {
        let line = "Smith, John. The Great Book. Penguin, 2005. It sold well.";
        assert_eq!(spans(line), vec!["Smith, John. The Great Book. Penguin, 2005."]);
    }

    #[test]
    fn test_prose_is_not_a_citation() {
        assert!(find_spans("Paris, France. In 2010 we met. It was fun.").is_empty());
        assert!(find_spans("Well, Smith was right. He left in 1999. We stayed.").is_empty());
        assert!(find_spans("Paris, France. It was cold in Rome, 2010.").is_empty());
        assert!(find_spans("I cited it. (2011). Fine.").is_empty());
    }
}
