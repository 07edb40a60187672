//! Post-cleanup of finished sentences
//!
//! Every function here is idempotent: applying it twice gives the same
//! result as applying it once.

/// Collapse runs of whitespace to one space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fix punctuation debris left by newline conversion and merging
///
/// - a run of exactly two periods becomes one (three or more is an ellipsis)
/// - a period right after `, ! ? : ;` is dropped
/// - whitespace is collapsed
pub fn structural_cleanup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '.' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut end = i;
        while end < chars.len() && chars[end] == '.' {
            end += 1;
        }
        let run = if end - i == 2 { 1 } else { end - i };
        let stray = run == 1 && i > 0 && matches!(chars[i - 1], ',' | '!' | '?' | ':' | ';');
        if !stray {
            out.extend(std::iter::repeat('.').take(run));
        }
        i = end;
    }

    collapse_whitespace(&out)
}

/// Drop the period a line join put after a closing quote: `'Hello.'.`
pub fn strip_quote_period(text: &str) -> String {
    let trimmed = text.trim_end();
    if let Some(body) = trimmed.strip_suffix('.') {
        if lazy_regex!(r#"[.!?,…]["”’']$"#).is_match(body) {
            return body.to_string();
        }
    }
    trimmed.to_string()
}

/// Final shape of an output sentence
///
/// Whitespace is collapsed, a stray period after a closing quote is removed
/// and a sentence ending in a letter or digit gets a period.
pub fn finish(text: &str) -> String {
    let mut sentence = strip_quote_period(&collapse_whitespace(text));
    if sentence.chars().last().is_some_and(char::is_alphanumeric) {
        sentence.push('.');
    }
    sentence
}
