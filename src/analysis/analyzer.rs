//! Analyzers combine char filters, a tokenizer and token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - configurable char filter / tokenizer / filter chain
//! - [`normalizer::KeywordNormalizer`] - turns a raw seed into a normalized keyword

pub mod normalizer;
pub mod pipeline;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that turn raw text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &str;
}
