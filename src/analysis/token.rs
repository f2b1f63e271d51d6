//! Token types for keyword analysis.
//!
//! A [`Token`] is a single word of a seed keyword after tokenization. Tokens
//! flow through the analysis pipeline as a [`TokenStream`] and are finally
//! joined back into a normalized keyword.
//!
//! # Examples
//!
//! ```
//! use kwexpand::analysis::token::Token;
//!
//! let token = Token::new("Szerelés").with_text("szerelés");
//! assert_eq!(token.text, "szerelés");
//! ```

use std::fmt;

/// A single word produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token
    pub text: String,
}

impl Token {
    /// Create a new token with the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Replace the text of the token.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Check whether the token carries any text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A boxed iterator of tokens, the unit passed between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_replaces_text() {
        let token = Token::new("ABLAK").with_text("ablak");
        assert_eq!(token, Token::new("ablak"));
    }

    #[test]
    fn test_is_empty() {
        assert!(Token::new("").is_empty());
        assert!(!Token::new("zár").is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new("tisztítás").to_string(), "tisztítás");
    }
}
