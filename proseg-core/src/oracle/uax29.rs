use super::BoundaryOracle;
use unicode_segmentation::UnicodeSegmentation;

/// Unicode default sentence boundaries (UAX #29)
#[derive(Debug, Default, Clone, Copy)]
pub struct Uax29Oracle;

impl Uax29Oracle {
    pub fn new() -> Self {
        Self
    }
}

impl BoundaryOracle for Uax29Oracle {
    fn name(&self) -> &str {
        "uax29"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
