//! Token filters applied after tokenization.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//!
//! # Examples
//!
//! ```
//! use kwexpand::analysis::token_filter::Filter;
//! use kwexpand::analysis::token_filter::lowercase::LowercaseFilter;
//! use kwexpand::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Árajánlat"), Token::new("GYORS")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "árajánlat");
//! assert_eq!(filtered[1].text, "gyors");
//! ```

pub mod lowercase;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
