//! # kwexpand
//!
//! Keyword expansion for search-ad campaign authoring.
//!
//! Given a handful of seed keywords and a geographic scope, kwexpand produces
//! exact, phrase, broad-match-modifier and long-tail keyword candidates from
//! fixed location, intent and quality modifier catalogs.
//!
//! ## Features
//!
//! - Unicode-aware seed normalization (NFC, lower-casing, whitespace collapsing)
//! - Deterministic, first-seen-order deduplication per category
//! - Immutable, shareable modifier catalogs (built-in or loaded from JSON)
//! - Parallel batch expansion
//!
//! ```
//! use kwexpand::prelude::*;
//!
//! let expander = KeywordExpander::default();
//! let result = expander.expand(&["ablak tisztítás"], Scope::CapitalRegion);
//! assert_eq!(result.broad_modifier(), &["+ablak +tisztítás"]);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod expansion;
pub mod request;

pub mod prelude {
    pub use crate::catalog::{DEFAULT_CATALOG, ModifierCatalog, Scope};
    pub use crate::error::{KwexpandError, Result};
    pub use crate::expansion::{ExpansionResult, ExpansionStats, KeywordExpander, MatchType};
    pub use crate::request::{DEFAULT_INDUSTRIES, ExpansionRequest, IndustryCatalog};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
