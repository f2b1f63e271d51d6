//! Keyword expansion.
//!
//! Raw seeds flow one way through the engine:
//!
//! ```text
//! seeds -> KeywordNormalizer -> PermutationGenerator (reads ModifierCatalog)
//!       -> dedupe (per category) -> ExpansionStats -> ExpansionResult
//! ```
//!
//! # Example
//!
//! ```
//! use kwexpand::catalog::Scope;
//! use kwexpand::expansion::KeywordExpander;
//!
//! let expander = KeywordExpander::default();
//! let result = expander.expand(&["vízvezeték szerelés"], Scope::CapitalRegion);
//!
//! assert!(result.long_tail().contains(&"vízvezeték szerelés budapest".to_string()));
//! assert!(result.long_tail().contains(&"budapest vízvezeték szerelés".to_string()));
//! ```

mod dedup;
mod engine;
mod generator;
mod result;
mod stats;
mod types;

pub use dedup::{OrderedSet, dedupe};
pub use engine::KeywordExpander;
pub use generator::{PermutationGenerator, broad_modifier, exact, phrase};
pub use result::ExpansionResult;
pub use stats::ExpansionStats;
pub use types::{CandidateBatch, MatchType};
