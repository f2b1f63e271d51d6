use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// A char filter that composes text to Unicode NFC.
///
/// Seed keywords typed on different keyboards or pasted from different
/// sources may carry either precomposed (`á`) or decomposed (`a` + U+0301)
/// accents. Composing both makes them spell the same keyword.
#[derive(Clone, Debug, Default)]
pub struct UnicodeNormalizationCharFilter;

impl UnicodeNormalizationCharFilter {
    pub fn new() -> Self {
        UnicodeNormalizationCharFilter
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.nfc().collect()
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
