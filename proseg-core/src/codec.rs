//! Reversible placeholder tokens
//!
//! A placeholder hides a substring from the boundary oracle. Its rendered form
//! uses only lowercase ASCII letters and digits:
//!
//! ```text
//! qx <namespace code> <lowercase hex of the payload bytes> xz
//! ```
//!
//! The payload alphabet (`0-9a-f`) never contains the marker letters, so a
//! token always ends at the first `xz` after its namespace code, and natural
//! text sitting next to a token can never complete or extend one.
//!
//! ```rust
//! use proseg_core::codec::{self, Namespace, Placeholder};
//!
//! let token = Placeholder::encode(Namespace::Url, ".").to_string();
//! assert_eq!(token, "qxur2exz");
//! assert_eq!(codec::restore(Namespace::Url, &format!("example{token}com")), "example.com");
//! ```

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

const OPEN: &str = "qx";
const CLOSE: &str = "xz";

/// Owner of a family of placeholder tokens
///
/// Every reversible normalizer encodes into its own namespace and decodes
/// only that namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Url,
    Bracket,
    Brand,
    MiddleInitial,
    UnicodeToken,
    Citation,
    ListMarker,
    NumberedList,
    Ellipsis,
    EllipsisBoundary,
}

impl Namespace {
    /// All namespaces in normalizer application order
    pub const ALL: [Namespace; 10] = [
        Namespace::Url,
        Namespace::Bracket,
        Namespace::Brand,
        Namespace::MiddleInitial,
        Namespace::UnicodeToken,
        Namespace::Citation,
        Namespace::ListMarker,
        Namespace::NumberedList,
        Namespace::Ellipsis,
        Namespace::EllipsisBoundary,
    ];

    /// Two-letter code embedded in rendered tokens
    pub const fn code(self) -> &'static str {
        match self {
            Namespace::Url => "ur",
            Namespace::Bracket => "br",
            Namespace::Brand => "eb",
            Namespace::MiddleInitial => "mi",
            Namespace::UnicodeToken => "ut",
            Namespace::Citation => "ci",
            Namespace::ListMarker => "lm",
            Namespace::NumberedList => "nl",
            Namespace::Ellipsis => "el",
            Namespace::EllipsisBoundary => "ek",
        }
    }

    /// Human-readable label used in logs
    pub const fn label(self) -> &'static str {
        match self {
            Namespace::Url => "url",
            Namespace::Bracket => "bracket",
            Namespace::Brand => "brand",
            Namespace::MiddleInitial => "middle-initial",
            Namespace::UnicodeToken => "unicode-token",
            Namespace::Citation => "citation",
            Namespace::ListMarker => "list-marker",
            Namespace::NumberedList => "numbered-list",
            Namespace::Ellipsis => "ellipsis",
            Namespace::EllipsisBoundary => "ellipsis-boundary",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ns| ns.code() == code)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hidden substring tagged with the namespace that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    namespace: Namespace,
    payload: String,
}

impl Placeholder {
    pub fn encode(namespace: Namespace, span: &str) -> Self {
        Self {
            namespace,
            payload: span.to_string(),
        }
    }

    /// Parse exactly one rendered token
    pub fn parse(token: &str) -> Option<Self> {
        let body = token.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
        if body.len() < 2 || !body.is_char_boundary(2) {
            return None;
        }
        let (code, hex) = body.split_at(2);
        let namespace = Namespace::from_code(code)?;
        let payload = decode_payload(hex)?;
        Some(Self { namespace, payload })
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_payload(self) -> String {
        self.payload
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPEN)?;
        f.write_str(self.namespace.code())?;
        for byte in self.payload.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(CLOSE)
    }
}

/// Decode the hex payload of a token, `None` when it is not valid UTF-8 hex
pub fn decode_payload(hex: &str) -> Option<String> {
    if hex.len() % 2 != 0 {
        return None;
    }
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

/// Pattern matching every token of one namespace, payload in group 1
pub fn token_regex(namespace: Namespace) -> &'static Regex {
    static PATTERNS: OnceLock<HashMap<Namespace, Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        Namespace::ALL
            .iter()
            .map(|&ns| {
                let pattern = format!("{OPEN}{}([0-9a-f]*){CLOSE}", ns.code());
                let re = Regex::new(&pattern).expect("token pattern compiles");
                (ns, re)
            })
            .collect()
    });
    &patterns[&namespace]
}

/// Pattern matching a token of any namespace
fn any_token_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let codes: Vec<&str> = Namespace::ALL.iter().map(|ns| ns.code()).collect();
        let pattern = format!("{OPEN}(?:{})[0-9a-f]*{CLOSE}", codes.join("|"));
        Regex::new(&pattern).expect("token pattern compiles")
    })
}

/// Render the token hiding `span`
pub fn protect(namespace: Namespace, span: &str) -> String {
    Placeholder::encode(namespace, span).to_string()
}

/// Replace every character matching `pred` by its own token
///
/// The surrounding characters stay visible, so capitalised words and word
/// boundaries remain observable to the oracle.
pub fn protect_chars(namespace: Namespace, text: &str, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if pred(c) {
            let mut buf = [0u8; 4];
            out.push_str(&protect(namespace, c.encode_utf8(&mut buf)));
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode every token of `namespace` in a single pass
///
/// Tokens whose payload is not valid hex are left as they are.
pub fn restore(namespace: Namespace, text: &str) -> Cow<'_, str> {
    if !text.contains(OPEN) {
        return Cow::Borrowed(text);
    }
    token_regex(namespace).replace_all(text, |caps: &Captures| {
        decode_payload(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}

/// Re-encode pre-existing look-alike tokens of `namespace` into `into`
///
/// Decoding `into` then yields the look-alike literally.
pub fn escape_lookalikes_into<'t>(
    namespace: Namespace,
    into: Namespace,
    text: &'t str,
) -> Cow<'t, str> {
    if !text.contains(OPEN) {
        return Cow::Borrowed(text);
    }
    token_regex(namespace).replace_all(text, |caps: &Captures| protect(into, &caps[0]))
}

/// Re-encode pre-existing look-alike tokens of `namespace` in place
pub fn escape_lookalikes(namespace: Namespace, text: &str) -> Cow<'_, str> {
    escape_lookalikes_into(namespace, namespace, text)
}

/// Decode every namespace until no token is left
///
/// Only for inspection by heuristics that need to look through tokens; the
/// pipeline itself restores namespaces in a fixed order.
pub fn reveal(text: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(text);
    // Each round strips one nesting level; tokens nest at most a few deep
    for _ in 0..8 {
        if !contains_token(&current) {
            break;
        }
        let mut changed = false;
        for ns in Namespace::ALL {
            let decoded = match restore(ns, &current) {
                Cow::Owned(decoded) => Some(decoded),
                Cow::Borrowed(_) => None,
            };
            if let Some(decoded) = decoded {
                current = Cow::Owned(decoded);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    current
}

pub fn contains_token(text: &str) -> bool {
    text.contains(OPEN) && any_token_regex().is_match(text)
}

pub fn starts_with_token(text: &str) -> bool {
    any_token_regex()
        .find(text)
        .is_some_and(|m| m.start() == 0)
}

pub fn ends_with_token(text: &str) -> bool {
    trailing_token(text).is_some()
}

/// The token the text ends with, if any
pub fn trailing_token(text: &str) -> Option<Placeholder> {
    if !text.ends_with(CLOSE) {
        return None;
    }
    any_token_regex()
        .find_iter(text)
        .last()
        .filter(|m| m.end() == text.len())
        .and_then(|m| Placeholder::parse(m.as_str()))
}
