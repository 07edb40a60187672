use super::Normalizer;
use crate::codec::{self, Namespace};
use regex::Captures;

/// Hides the `. ? !` inside URLs, e-mail addresses and bare domains
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlNormalizer;

impl UrlNormalizer {
    pub fn new() -> Self {
        Self
    }
}

/// Punctuation that belongs to the surrounding sentence, not the URL
fn is_trailing_punct(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '\'' | '"' | '”' | '’')
}

impl Normalizer for UrlNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::Url]
    }

    fn protect(&self, text: &str) -> String {
        let re = lazy_regex!(
            r"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>\x22]+|\b[\w.+-]+@[\w-]+(?:\.[\w-]+)+|\b[\w-]+(?:\.[\w-]+)*\.(?:com|org|net|edu|gov|io|co|uk|de|info|biz|ly|me|ai|app|dev)\b(?:/[^\s<>\x22]*)?"
        );
        re.replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            let url = matched.trim_end_matches(is_trailing_punct);
            let tail = &matched[url.len()..];
            let hidden = codec::protect_chars(Namespace::Url, url, |c| matches!(c, '.' | '?' | '!'));
            format!("{hidden}{tail}")
        })
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_periods(text: &str) -> usize {
        text.matches('.').count()
    }

    #[test]
    fn test_http_url() {
        let normalizer = UrlNormalizer::new();
        let text = "Go to https://example.com/page?id=3 now.";
        let normalized = normalizer.normalize(text);
        assert_eq!(visible_periods(&normalized), 1);
        assert!(!normalized.contains("?id"));
        assert_eq!(normalizer.denormalize(&normalized), text);
    }

    #[test]
    fn test_trailing_period_stays_visible() {
        let normalizer = UrlNormalizer::new();
        let normalized = normalizer.normalize("Visit www.example.org.");
        assert!(normalized.ends_with("org."));
        assert_eq!(visible_periods(&normalized), 1);
    }

    #[test]
    fn test_email_and_bare_domain() {
        let normalizer = UrlNormalizer::new();
        let text = "Mail john.doe@example.com or see Google.com today.";
        let normalized = normalizer.normalize(text);
        assert_eq!(visible_periods(&normalized), 1);
        assert!(normalized.contains("Google"));
        assert_eq!(normalizer.denormalize(&normalized), text);
    }

    #[test]
    fn test_identity_without_urls() {
        let text = "Nothing here. Really nothing!";
        assert_eq!(UrlNormalizer::new().normalize(text), text);
    }

    #[test]
    fn test_lookalike_round_trip() {
        let normalizer = UrlNormalizer::new();
        let text = "odd qxur2exz text at www.site.com.";
        assert_eq!(normalizer.denormalize(&normalizer.normalize(text)), text);
    }
}
