//! Internal helper macros

/// Compile a literal regular expression once and hand out a `'static` reference.
///
/// Patterns are literals, or formats of constant fragments, checked by the
/// unit tests of the module that owns them.
macro_rules! lazy_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("literal pattern compiles"))
    }};
}
