//! Probabilistic MLA/APA citation style classifier
//!
//! The score is additive over a small set of surface features and clamped to
//! `[0, 1]`. Features that point to MLA raise it; a parenthesised year, the
//! hallmark of APA, lowers it. Weights are kept in hundredths so threshold
//! comparisons are exact.

/// Surface features of one citation line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitationFeatures {
    /// `Surname, Given.` at the start of the line
    pub author_name: bool,
    /// `(2011)`, `(2008, May 6)` or `(n.d.)`
    pub parenthetical_year: bool,
    /// `Publisher, 2005.` at the end of the line
    pub publisher_year_suffix: bool,
    /// `edited by`, `vol.`, `pp.`, `2nd ed`, `UP`, ...
    pub mla_keyword: bool,
    /// A quoted article title
    pub quoted_title: bool,
    /// Number of `Capital ... .` runs
    pub capital_period_runs: usize,
    /// `..., and Jane Doe` style author lists
    pub multi_author: bool,
    /// `et al.` with no parenthetical year
    pub et_al_without_year: bool,
}

impl CitationFeatures {
    pub fn extract(span: &str) -> Self {
        let author = lazy_regex!(r"^\p{Lu}[\p{L}'’-]+,\s+\p{Lu}[\p{L}'’-]*(?:\s+\p{Lu}\.)*\.");
        let year = lazy_regex!(r"\((?:\d{4}[a-z]?|n\.d\.)(?:,[^)]*)?\)");
        let publisher = lazy_regex!(r"\p{Lu}[\p{L}&'’. ]*,\s+\d{4}\.\s*$");
        let keyword = lazy_regex!(
            r"(?i:\b(?:edited by|translated by|vol\.|pp\.|eds?\.|edn\.|\d+(?:st|nd|rd|th) ed\b|edition\b))|\bUP\b|\bUniv\."
        );
        let quoted = lazy_regex!(r#""[^"]{2,}"|“[^”]{2,}”"#);
        let capital_run = lazy_regex!(r"\p{Lu}[^.]*\.");
        let multi_author = lazy_regex!(r"\band\s+\p{Lu}[\p{L}'’-]+\s+\p{Lu}[\p{L}'’-]+");
        let et_al = lazy_regex!(r"\bet al\.");

        let parenthetical_year = year.is_match(span);
        Self {
            author_name: author.is_match(span),
            parenthetical_year,
            publisher_year_suffix: publisher.is_match(span),
            mla_keyword: keyword.is_match(span),
            quoted_title: quoted.is_match(span),
            capital_period_runs: capital_run.find_iter(span).count(),
            multi_author: multi_author.is_match(span),
            et_al_without_year: et_al.is_match(span) && !parenthetical_year,
        }
    }

    /// Weighted contributions in hundredths, one entry per feature
    pub fn contributions(&self) -> [(&'static str, i32); 8] {
        [
            ("author_name", if self.author_name { 30 } else { 0 }),
            (
                "parenthetical_year",
                if self.parenthetical_year { -30 } else { 20 },
            ),
            (
                "publisher_year_suffix",
                if self.publisher_year_suffix { 20 } else { 0 },
            ),
            ("mla_keyword", if self.mla_keyword { 15 } else { 0 }),
            ("quoted_title", if self.quoted_title { 10 } else { 0 }),
            (
                "capital_period_runs",
                if self.capital_period_runs >= 3 { 10 } else { 0 },
            ),
            ("multi_author", if self.multi_author { 10 } else { 0 }),
            (
                "et_al_without_year",
                if self.et_al_without_year { 5 } else { 0 },
            ),
        ]
    }

    /// Clamped MLA likelihood in `[0, 1]`
    pub fn score(&self) -> f64 {
        let points: i32 = self.contributions().iter().map(|(_, p)| p).sum();
        f64::from(points.clamp(0, 100)) / 100.0
    }
}

/// Decides whether a citation line is MLA style
#[derive(Debug, Clone, Copy)]
pub struct CitationClassifier {
    threshold: f64,
}

impl Default for CitationClassifier {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl CitationClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn score(&self, span: &str) -> (f64, CitationFeatures) {
        let features = CitationFeatures::extract(span);
        (features.score(), features)
    }

    pub fn is_mla(&self, span: &str) -> bool {
        self.score(span).0 >= self.threshold
    }
}
