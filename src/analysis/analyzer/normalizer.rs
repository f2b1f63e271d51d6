//! Seed keyword normalization.
//!
//! A seed keyword is normalized by NFC-composing it, splitting it on
//! whitespace, lower-casing every word and joining the words back with
//! single spaces. Seeds that contain no words normalize to nothing and are
//! dropped before expansion.

use std::sync::Arc;

use log::warn;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::unicode_normalize::UnicodeNormalizationCharFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Normalizes raw seed strings into keywords ready for expansion.
#[derive(Clone)]
pub struct KeywordNormalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl KeywordNormalizer {
    /// Create a normalizer with the standard keyword pipeline.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(UnicodeNormalizationCharFilter::default()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("keyword");
        Self::with_analyzer(Arc::new(analyzer))
    }

    /// Create a normalizer backed by a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        KeywordNormalizer { analyzer }
    }

    /// Normalize one raw seed.
    ///
    /// Returns `None` when nothing but whitespace remains. An analyzer
    /// failure also yields `None`: a seed that cannot be analyzed is dropped,
    /// it never fails the whole expansion.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let tokens = match self.analyzer.analyze(raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("dropping seed {raw:?}: {e}");
                return None;
            }
        };

        let words: Vec<String> = tokens
            .filter(|t| !t.is_empty())
            .map(|t| t.text)
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    /// Normalize a list of seeds in order, dropping the ones that come out empty.
    ///
    /// Duplicates are kept; the per-category dedup downstream removes their
    /// candidates.
    pub fn normalize_all<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        raw.iter()
            .filter_map(|seed| self.normalize(seed.as_ref()))
            .collect()
    }

    /// Name of the underlying analyzer.
    pub fn analyzer_name(&self) -> &str {
        self.analyzer.name()
    }
}

impl Default for KeywordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeywordNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordNormalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
