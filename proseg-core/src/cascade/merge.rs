use super::text::{self, double_quote_count, last_word, starts_lowercase, starts_uppercase};
use super::{MergeRule, Merged};
use crate::codec::{self, Namespace};
use crate::lexicon::{AbbreviationKind, Lexicon};
use std::sync::Arc;

/// Ellipsis that turned out to continue into lowercase text
#[derive(Debug, Default, Clone, Copy)]
pub struct EllipsisContinuationMerge;

impl MergeRule for EllipsisContinuationMerge {
    fn name(&self) -> &'static str {
        "ellipsis-continuation"
    }

    fn should_merge(&self, current: &str, next: &str) -> bool {
        let trimmed = current.trim_end();
        let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
        let ends_with_ellipsis = codec::trailing_token(body).is_some_and(|token| {
            matches!(
                token.namespace(),
                Namespace::Ellipsis | Namespace::EllipsisBoundary
            )
        }) || trimmed.ends_with("...")
            || trimmed.ends_with('…');

        ends_with_ellipsis && starts_lowercase(next)
    }
}

/// Keeps a quoted passage together until its closing quote
#[derive(Debug, Default, Clone, Copy)]
pub struct UnclosedQuoteMerge;

impl MergeRule for UnclosedQuoteMerge {
    fn name(&self) -> &'static str {
        "unclosed-quote"
    }

    fn should_merge(&self, current: &str, _next: &str) -> bool {
        double_quote_count(current) % 2 == 1
    }

    fn chains(&self) -> bool {
        true
    }

    fn dialog_only(&self) -> bool {
        true
    }
}

/// Rejoins text the oracle cut after an abbreviation or an initial
#[derive(Debug, Clone)]
pub struct AbbreviationMerge {
    lexicon: Arc<Lexicon>,
}

impl AbbreviationMerge {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn is_single_initial(word: &str) -> bool {
        let mut chars = word.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(c), Some('.'), None) if c.is_uppercase() && c != 'I'
        )
    }

    /// `U.S.`, `U.K.`: two or more dotted capitals
    fn is_dotted_acronym(word: &str) -> bool {
        lazy_regex!(r"^(?:\p{Lu}\.){2,}$").is_match(word)
    }
}

impl MergeRule for AbbreviationMerge {
    fn name(&self) -> &'static str {
        "abbreviation"
    }

    fn should_merge(&self, current: &str, next: &str) -> bool {
        let revealed = codec::reveal(current);
        let word = last_word(&revealed);
        if !word.ends_with('.') {
            return false;
        }

        if Self::is_single_initial(word) {
            let next_revealed = codec::reveal(next);
            if lazy_regex!(r"^\s*\p{Lu}\.(?:\s|$)").is_match(&next_revealed) {
                return true;
            }
            let two_initials = lazy_regex!(r"(?:^|\s)\p{Lu}\.\s+\p{Lu}\.$");
            return two_initials.is_match(revealed.trim_end())
                && starts_uppercase(next)
                && !self.lexicon.sentence_starters().starts_with_starter(&next_revealed);
        }

        let starts_sentence = || {
            self.lexicon
                .sentence_starters()
                .starts_with_starter(&codec::reveal(next))
        };
        if Self::is_dotted_acronym(word) && starts_uppercase(next) && !starts_sentence() {
            return true;
        }

        match self.lexicon.abbreviation_kind(word) {
            Some(AbbreviationKind::Prepositive) => !self
                .lexicon
                .sentence_starters()
                .starts_with_starter(&codec::reveal(next)),
            Some(AbbreviationKind::General) => {
                starts_lowercase(next) || text::starts_with_digit(next)
            }
            Some(AbbreviationKind::Title) | None => false,
        }
    }

    fn chains(&self) -> bool {
        true
    }
}

/// `"Are you sure?" she asked.`
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteAttributionMerge;

impl MergeRule for QuoteAttributionMerge {
    fn name(&self) -> &'static str {
        "quote-attribution"
    }

    fn should_merge(&self, current: &str, next: &str) -> bool {
        let revealed = codec::reveal(current);
        lazy_regex!(r#"[.!?,…]["”’']$"#).is_match(revealed.trim_end()) && starts_lowercase(next)
    }
}

/// Keeps a title abbreviation with the name after it
#[derive(Debug, Clone)]
pub struct TitleNameMerge {
    lexicon: Arc<Lexicon>,
}

impl TitleNameMerge {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl MergeRule for TitleNameMerge {
    fn name(&self) -> &'static str {
        "title-name"
    }

    fn should_merge(&self, current: &str, next: &str) -> bool {
        let revealed = codec::reveal(current);
        let trimmed = revealed.trim();
        let word = last_word(trimmed);
        if !word.ends_with('.') || !self.lexicon.is_title(word) {
            return false;
        }
        trimmed == word || starts_uppercase(next)
    }

    fn chains(&self) -> bool {
        true
    }
}

/// `Chapter 5.`, `Part II.`, `Appendix B.` split off their keyword
#[derive(Debug, Clone)]
pub struct NumberedTitleMerge {
    lexicon: Arc<Lexicon>,
}

impl NumberedTitleMerge {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn is_valid_number(number: &str) -> bool {
        let roman = number.len() > 1 && number.chars().all(|c| "IVXLCDM".contains(c));
        !roman || lazy_regex!(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").is_match(number)
    }

    /// Keyword at the end of `current`, number at the start of `next`
    ///
    /// Returns the number, its marker and the byte offset where the rest of
    /// `next` begins.
    fn leading_number<'n>(&self, current: &str, next: &'n str) -> Option<(&'n str, &'n str, usize)> {
        let revealed = codec::reveal(current);
        let word = last_word(&revealed);
        if !self.lexicon.is_title_keyword(word.trim_end_matches('.')) {
            return None;
        }
        let caps = lazy_regex!(r"^\s*(\d+|[IVXLCDM]+|\p{Lu})(\.|qxnl2exz)(?:\s+|$)").captures(next)?;
        let number = caps.get(1)?.as_str();
        if !Self::is_valid_number(number) {
            return None;
        }
        let rest = caps.get(0)?.end();
        Some((number, caps.get(2)?.as_str(), rest))
    }

    /// `current` ends with `Keyword Number.` and `next` opens with a
    /// parenthetical, a bracket or a hidden span
    fn trailing_number(&self, current: &str, next: &str) -> bool {
        let revealed = codec::reveal(current);
        let Some(caps) = lazy_regex!(r"\b(\p{L}+)\s+(\d+|[IVXLCDM]+|\p{Lu})\.$").captures(revealed.trim_end()) else {
            return false;
        };
        if !self.lexicon.is_title_keyword(&caps[1]) || !Self::is_valid_number(&caps[2]) {
            return false;
        }
        let next = next.trim_start();
        next.starts_with('(') || next.starts_with('[') || codec::starts_with_token(next)
    }
}

impl MergeRule for NumberedTitleMerge {
    fn name(&self) -> &'static str {
        "numbered-title"
    }

    fn should_merge(&self, current: &str, next: &str) -> bool {
        self.leading_number(current, next).is_some() || self.trailing_number(current, next)
    }

    fn merge(&self, current: &str, next: &str) -> Merged {
        let Some((number, marker, rest)) = self.leading_number(current, next) else {
            return Merged::joined(current, next);
        };

        let trimmed = current.trim_end();
        let revealed = codec::reveal(trimmed);
        let head = if self.lexicon.is_abbreviation(last_word(&revealed)) {
            trimmed
        } else {
            trimmed.strip_suffix('.').unwrap_or(trimmed)
        };

        Merged {
            sentence: format!("{head} {number}{marker}"),
            remainder: Some(next[rest..].to_string()),
        }
    }
}

/// `(see above.) and more`
#[derive(Debug, Default, Clone, Copy)]
pub struct ParentheticalMerge;

impl MergeRule for ParentheticalMerge {
    fn name(&self) -> &'static str {
        "parenthetical"
    }

    fn should_merge(&self, current: &str, next: &str) -> bool {
        let revealed = codec::reveal(current);
        let trimmed = revealed.trim_end();
        [".)", ".).", "?)", "!)"]
            .iter()
            .any(|suffix| trimmed.ends_with(suffix))
            && starts_lowercase(next)
    }
}
