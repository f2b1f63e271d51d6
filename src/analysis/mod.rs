//! Text analysis for seed keywords.
//!
//! This module provides the char filters, tokenizer, token filters and
//! analysis pipeline that turn raw seed strings into normalized keywords.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::normalizer::KeywordNormalizer;
pub use analyzer::pipeline::PipelineAnalyzer;
pub use analyzer::Analyzer;
pub use token::{Token, TokenStream};
