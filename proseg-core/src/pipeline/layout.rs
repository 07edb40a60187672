//! Line and paragraph layout helpers

use crate::codec::{self, Namespace};
use crate::normalize::{INLINE_LIST_MARKER, LIST_MARKER};

use super::cleanup::collapse_whitespace;

const BULLET: char = '•';

/// Split on blank lines; paragraphs are trimmed and never empty
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    lazy_regex!(r"\n\s*\n")
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn ends_sentence(line: &str) -> bool {
    let body = line.trim_end_matches(['"', '\'', '”', '’', ')', ']']);
    body.len() < line.len() && body.ends_with(['.', '!', '?']) || line.ends_with(['.', '!', '?'])
}

fn continues_line(next: &str) -> bool {
    if next.starts_with(BULLET) {
        return true;
    }
    !codec::starts_with_token(next) && next.chars().next().is_some_and(char::is_lowercase)
}

/// Turn line breaks into sentence breaks
///
/// A line that already ends a sentence is joined with a space. Otherwise the
/// next line is glued on when it starts lowercase (or is a bullet item), and
/// a period is inserted when it does not.
pub fn newlines_to_periods(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let mut out = String::with_capacity(text.len() + lines.len());

    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);
        let Some(next) = lines.get(i + 1) else {
            break;
        };
        let trailing_ellipsis = codec::trailing_token(line)
            .is_some_and(|token| token.namespace() == Namespace::Ellipsis);
        if ends_sentence(line) || trailing_ellipsis || continues_line(next) {
            out.push(' ');
        } else {
            out.push_str(". ");
        }
    }
    out
}

/// Why the oracle can be skipped for a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyExit {
    /// No `. ! ?` at all
    NoTerminal,
    /// A single word without whitespace
    SingleToken,
    /// Exactly one terminator run, at the very end
    SingleTerminalAtEnd,
}

/// Check whether normalized, collapsed `text` is a single sentence
///
/// Texts with a bullet list always go through the bullet split instead.
pub fn early_exit(text: &str) -> Option<EarlyExit> {
    if text.matches(BULLET).count() >= 2 {
        return None;
    }

    let is_terminator = |c: char| matches!(c, '.' | '!' | '?');
    if !text.contains(is_terminator) {
        return Some(EarlyExit::NoTerminal);
    }
    if !text.contains(char::is_whitespace) {
        return Some(EarlyExit::SingleToken);
    }

    let runs = text
        .split(|c: char| !is_terminator(c))
        .filter(|run| !run.is_empty())
        .count();
    let body = text.trim_end_matches(['"', '\'', '”', '’', ')', ']']);
    (runs == 1 && body.ends_with(is_terminator)).then_some(EarlyExit::SingleTerminalAtEnd)
}

/// Items of a `•` list, or `None` when fewer than two bullets are present
pub fn bullet_items(text: &str) -> Option<Vec<String>> {
    if text.matches(BULLET).count() < 2 {
        return None;
    }
    Some(
        text.split(BULLET)
            .map(collapse_whitespace)
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

/// Split a sentence before list markers that follow a terminator
pub fn split_list_items(sentence: &str) -> Vec<String> {
    let re = lazy_regex!(&format!(r"[.!?:;]\s+({LIST_MARKER})\s"));
    let offsets: Vec<usize> = re
        .captures_iter(sentence)
        .filter_map(|caps| caps.get(1).map(|m| m.start()))
        .collect();
    crate::cascade::text::split_at_offsets(sentence, &offsets)
}

/// Split a sentence before inline `1.)` markers
pub fn split_inline_items(sentence: &str) -> Vec<String> {
    let re = lazy_regex!(&format!(r"\s({INLINE_LIST_MARKER})\s"));
    let offsets: Vec<usize> = re
        .captures_iter(sentence)
        .filter_map(|caps| caps.get(1).map(|m| m.start()))
        .collect();
    crate::cascade::text::split_at_offsets(sentence, &offsets)
}

/// Attach a sentence that opens with a literal ellipsis to its predecessor
///
/// Only when the rest of it is empty or continues in lowercase.
pub fn merge_leading_ellipses(sentences: Vec<String>) -> Vec<String> {
    let leading = lazy_regex!(r"^(?:\.(?:\s?\.){2,}|…+)");
    let mut out: Vec<String> = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let trimmed = sentence.trim();
        let continues = leading.find(trimmed).is_some_and(|m| {
            let rest = trimmed[m.end()..].trim_start();
            rest.is_empty() || rest.chars().next().is_some_and(char::is_lowercase)
        });
        match out.last_mut() {
            Some(previous) if continues => {
                *previous = crate::cascade::text::join(previous, trimmed);
            }
            _ => out.push(sentence),
        }
    }
    out
}
