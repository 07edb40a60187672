use super::Normalizer;
use crate::codec::{self, Namespace};
use regex::Captures;

/// Line-leading list marker: `a.`, `b)`, `(iv)`, `3)`, `IV.`
pub(crate) const LIST_MARKER: &str =
    r"\((?:[a-zA-Z]|[ivxIVX]{1,5}|\d{1,3})\)|(?:[a-zA-Z]|[ivxIVX]{1,5}|\d{1,3})\)|(?:[a-zA-Z]|[ivxIVX]{2,5})\.";

/// Inline numbered marker: `1.)`
pub(crate) const INLINE_LIST_MARKER: &str = r"\d{1,3}\.\)";

/// Hides line-leading alphabetic, roman and parenthesised list markers wholesale
#[derive(Debug, Default, Clone, Copy)]
pub struct ListMarkerNormalizer;

impl ListMarkerNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for ListMarkerNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::ListMarker]
    }

    fn protect(&self, text: &str) -> String {
        let re = lazy_regex!(&format!(r"(?m)^([ \t]*)({LIST_MARKER})([ \t])"));
        re.replace_all(text, |caps: &Captures| {
            format!(
                "{}{}{}",
                &caps[1],
                codec::protect(Namespace::ListMarker, &caps[2]),
                &caps[3]
            )
        })
        .into_owned()
    }
}

/// Hides the period of a line-leading `N.` marker and of every `N.)` marker
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberedListNormalizer;

impl NumberedListNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for NumberedListNormalizer {
    fn namespaces(&self) -> &'static [Namespace] {
        &[Namespace::NumberedList]
    }

    fn protect(&self, text: &str) -> String {
        let leading = lazy_regex!(r"(?m)^([ \t]*)(\d{1,3})\.([ \t])");
        let inline = lazy_regex!(r"(?m)(^|[ \t])(\d{1,3})\.(\)[ \t])");
        let text = leading.replace_all(text, hide_period);
        inline.replace_all(&text, hide_period).into_owned()
    }
}

fn hide_period(caps: &Captures) -> String {
    format!(
        "{}{}{}{}",
        &caps[1],
        &caps[2],
        codec::protect(Namespace::NumberedList, "."),
        &caps[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_markers_hidden() {
        let normalizer = ListMarkerNormalizer::new();
        let text = "Steps:\na. mix\nb) stir\n(iv) bake\n  3) serve";
        let normalized = normalizer.normalize(text);
        assert!(!normalized.contains("a."));
        assert!(!normalized.contains("b)"));
        assert!(!normalized.contains("(iv)"));
        assert!(!normalized.contains("3)"));
        assert!(normalized.contains("\n  qxlm"));
        assert_eq!(normalizer.denormalize(&normalized), text);
    }

    #[test]
    fn test_markers_mid_line_untouched() {
        let text = "Option a. is fine and b) too.";
        assert_eq!(ListMarkerNormalizer::new().normalize(text), text);
    }

    #[test]
    fn test_numbered_list_period() {
        let normalizer = NumberedListNormalizer::new();
        let text = "Recipe\n1. Flour\n2. Water\n10. Bake";
        let normalized = normalizer.normalize(text);
        assert!(!normalized.contains('.'));
        assert!(normalized.contains("\n2qxnl"));
        assert_eq!(normalizer.denormalize(&normalized), text);
    }

    #[test]
    fn test_inline_numbered_markers() {
        let normalizer = NumberedListNormalizer::new();
        let text = "1.) The first item 2.) The second item";
        let normalized = normalizer.normalize(text);
        assert!(!normalized.contains('.'));
        assert!(normalized.contains("item 2qxnl"));
        assert_eq!(normalizer.denormalize(&normalized), text);
        assert!(regex::Regex::new(INLINE_LIST_MARKER).unwrap().is_match("3.)"));
    }

    #[test]
    fn test_decimal_not_a_list() {
        let text = "3.5 percent grew.";
        assert_eq!(NumberedListNormalizer::new().normalize(text), text);
    }
}
