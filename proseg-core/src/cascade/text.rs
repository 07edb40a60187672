//! Small string predicates shared by the cascade stages

use crate::codec;

/// Opening quotes and brackets
pub(crate) fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '“' | '‘' | '«' | '(' | '[' | '{')
}

/// First character after whitespace and openers, looking through tokens
pub(crate) fn first_significant(text: &str) -> Option<char> {
    text.split_whitespace()
        .find_map(|word| codec::reveal(word).chars().find(|&c| !is_opener(c)))
}

/// Whether `text` starts with a lowercase letter (after openers)
pub(crate) fn starts_lowercase(text: &str) -> bool {
    first_significant(text).is_some_and(char::is_lowercase)
}

pub(crate) fn starts_uppercase(text: &str) -> bool {
    first_significant(text).is_some_and(char::is_uppercase)
}

pub(crate) fn starts_with_digit(text: &str) -> bool {
    first_significant(text).is_some_and(|c| c.is_ascii_digit())
}

/// Last whitespace-separated word, without leading openers
pub(crate) fn last_word(text: &str) -> &str {
    let trimmed = text.trim_end();
    let word = trimmed
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(trimmed);
    word.trim_start_matches(is_opener)
}

/// Number of double-quote characters (`"`, `“`, `”`)
pub(crate) fn double_quote_count(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '"' | '“' | '”')).count()
}

/// Join two candidates with a single space
pub(crate) fn join(current: &str, next: &str) -> String {
    format!("{} {}", current.trim_end(), next.trim_start())
}

/// Cut `sentence` at the given byte offsets, trimming each piece
pub(crate) fn split_at_offsets(sentence: &str, offsets: &[usize]) -> Vec<String> {
    let mut pieces = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for &offset in offsets {
        if offset <= start || offset >= sentence.len() {
            continue;
        }
        pieces.push(sentence[start..offset].trim().to_string());
        start = offset;
    }
    pieces.push(sentence[start..].trim().to_string());
    pieces.retain(|p| !p.is_empty());
    pieces
}
