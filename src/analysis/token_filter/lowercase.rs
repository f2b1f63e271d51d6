//! Lowercase filter implementation.
//!
//! Case-folds every token with full Unicode lower-casing, so accented
//! capitals (`Á`, `Ő`, `Ű`) and capitalized digraphs (`CS`, `Gy`, `DZS`)
//! fold the same way their lowercase spellings are written.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.text.is_ascii() {
                    let lowered = token.text.to_ascii_lowercase();
                    token.with_text(lowered)
                } else {
                    let lowered = token.text.to_lowercase();
                    token.with_text(lowered)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn run(words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words.iter().map(|w| Token::new(*w)).collect();
        LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_lowercase_filter() {
        assert_eq!(run(&["Hello", "WORLD"]), vec!["hello", "world"]);
    }

    #[test]
    fn test_accented_capitals() {
        assert_eq!(
            run(&["ÁRAJÁNLAT", "ŐSZI", "ÜGYVÉD", "Űrlap"]),
            vec!["árajánlat", "őszi", "ügyvéd", "űrlap"]
        );
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(run(&["CSAP", "Gyors", "DZSungel"]), vec!["csap", "gyors", "dzsungel"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
