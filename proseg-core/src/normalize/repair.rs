//! One-way repairs of damaged input

use std::fmt;

/// An idempotent, irreversible clean-up applied before normalization
pub trait Repair: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn repair(&self, text: &str) -> String;
}

/// Dehyphenation, OCR repair and bullet cleanup, in that order
pub fn standard_repairs() -> Vec<Box<dyn Repair>> {
    vec![
        Box::new(Dehyphenator),
        Box::new(OcrRepair),
        Box::new(BulletCleanup),
    ]
}

/// Joins words broken across a line end: `infor-\nmation` becomes `information`
#[derive(Debug, Default, Clone, Copy)]
pub struct Dehyphenator;

impl Repair for Dehyphenator {
    fn name(&self) -> &'static str {
        "dehyphenation"
    }

    fn repair(&self, text: &str) -> String {
        lazy_regex!(r"(\p{L})-[ \t]*\r?\n[ \t]*(\p{Ll})")
            .replace_all(text, "$1$2")
            .into_owned()
    }
}

/// Fixes common OCR artifacts
#[derive(Debug, Default, Clone, Copy)]
pub struct OcrRepair;

impl OcrRepair {
    fn expand(c: char) -> Option<&'static str> {
        match c {
            'ﬁ' => Some("fi"),
            'ﬂ' => Some("fl"),
            'ﬀ' => Some("ff"),
            'ﬃ' => Some("ffi"),
            'ﬄ' => Some("ffl"),
            'ﬅ' | 'ﬆ' => Some("st"),
            // Soft hyphen and zero-width characters
            '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => Some(""),
            '\u{00A0}' | '\u{202F}' => Some(" "),
            _ => None,
        }
    }
}

impl Repair for OcrRepair {
    fn name(&self) -> &'static str {
        "ocr"
    }

    fn repair(&self, text: &str) -> String {
        let mut expanded = String::with_capacity(text.len());
        for c in text.chars() {
            match Self::expand(c) {
                Some(replacement) => expanded.push_str(replacement),
                None => expanded.push(c),
            }
        }
        tighten_punctuation(&expanded)
    }
}

/// Drops blanks between a word and a following `, ; ? !`
fn tighten_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if !matches!(chars[i], ' ' | '\t') {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let mut j = i;
        while j < chars.len() && matches!(chars[j], ' ' | '\t') {
            j += 1;
        }
        let before_punct = j < chars.len() && matches!(chars[j], ',' | ';' | '?' | '!');
        let after_word = out.chars().last().is_some_and(|p| !p.is_whitespace());
        if !(before_punct && after_word) {
            out.extend(&chars[i..j]);
        }
        i = j;
    }
    out
}

/// Unifies bullet glyphs and drops empty bullet lines
#[derive(Debug, Default, Clone, Copy)]
pub struct BulletCleanup;

const BULLET_VARIANTS: &[char] = &['◦', '▪', '‣', '⁃', '●', '○', '■', '□', '∙', '·', '•'];

impl Repair for BulletCleanup {
    fn name(&self) -> &'static str {
        "bullets"
    }

    fn repair(&self, text: &str) -> String {
        if !text.contains(BULLET_VARIANTS) {
            return text.to_string();
        }

        let lines: Vec<String> = text
            .split('\n')
            .filter_map(|line| {
                let body = line.trim_start();
                let indent = &line[..line.len() - body.len()];
                match body.strip_prefix(BULLET_VARIANTS) {
                    Some(rest) if rest.trim().is_empty() => None,
                    Some(rest) => Some(format!("{indent}• {}", rest.trim_start())),
                    None => Some(line.to_string()),
                }
            })
            .collect();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dehyphenation() {
        let repaired = Dehyphenator.repair("This is infor-\nmation we need.");
        assert_eq!(repaired, "This is information we need.");
    }

    #[test]
    fn test_dehyphenation_keeps_capitalized_continuation() {
        let text = "Anglo-\nSaxon history.";
        assert_eq!(Dehyphenator.repair(text), text);
    }

    #[test]
    fn test_ocr_ligatures_and_spaces() {
        let repaired = OcrRepair.repair("The ﬁrst ﬂoor , really ? Yes !");
        assert_eq!(repaired, "The first floor, really? Yes!");
    }

    #[test]
    fn test_ocr_punctuation_runs() {
        assert_eq!(OcrRepair.repair("wait , , what"), "wait,, what");
        assert_eq!(OcrRepair.repair("  ! leading"), "  ! leading");
    }

    #[test]
    fn test_ocr_invisible_characters() {
        let repaired = OcrRepair.repair("co\u{00AD}operate\u{200B} now\u{00A0}please");
        assert_eq!(repaired, "cooperate now please");
    }

    #[test]
    fn test_bullet_cleanup() {
        let repaired = BulletCleanup.repair("Items:\n◦ apples\n▪ pears\n●\n  ○ plums");
        assert_eq!(repaired, "Items:\n• apples\n• pears\n  • plums");
    }

    #[test]
    fn test_repairs_idempotent() {
        let text = "ﬁne-\ntuned ◦ list\n• one ,\n▪ two !";
        for repair in standard_repairs() {
            let once = repair.repair(text);
            assert_eq!(repair.repair(&once), once, "{} not idempotent", repair.name());
        }
    }
}
