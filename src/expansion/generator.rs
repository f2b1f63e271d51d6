//! Permutation generator.
//!
//! For every normalized keyword `k`, in input order, the generator emits:
//!
//! - exact: `[k]`
//! - phrase: `"k"`
//! - broad modifier: every word of `k` prefixed with `+`, space-joined
//! - long tail, in three passes:
//!   1. each location `loc` of the scope: `k loc`, then `loc k`
//!   2. each intent modifier `m`: `m k`, then `k m`
//!   3. each quality modifier `q`: `q k` only
//!
//! Action modifiers are never combined. The emission order is fully
//! determined by the input order and the catalog order, and the
//! deduplicator relies on it to pick which duplicate survives.

use crate::catalog::{ModifierCatalog, Scope};
use crate::expansion::types::CandidateBatch;

/// Emits raw candidate sequences from normalized keywords.
#[derive(Debug, Clone, Copy)]
pub struct PermutationGenerator<'a> {
    catalog: &'a ModifierCatalog,
}

impl<'a> PermutationGenerator<'a> {
    pub fn new(catalog: &'a ModifierCatalog) -> Self {
        PermutationGenerator { catalog }
    }

    /// Generate candidates for `keywords` under `scope`. Keywords are
    /// expected to be normalized already.
    pub fn generate(&self, keywords: &[String], scope: Scope) -> CandidateBatch {
        let per_keyword = self.catalog.long_tail_per_keyword(scope);
        let mut batch = CandidateBatch {
            exact: Vec::with_capacity(keywords.len()),
            phrase: Vec::with_capacity(keywords.len()),
            broad_modifier: Vec::with_capacity(keywords.len()),
            long_tail: Vec::with_capacity(keywords.len() * per_keyword),
        };

        for keyword in keywords {
            batch.exact.push(exact(keyword));
            batch.phrase.push(phrase(keyword));
            batch.broad_modifier.push(broad_modifier(keyword));
            self.push_long_tail(keyword, scope, &mut batch.long_tail);
        }

        batch
    }

    fn push_long_tail(&self, keyword: &str, scope: Scope, out: &mut Vec<String>) {
        for location in self.catalog.locations_for(scope) {
            out.push(format!("{keyword} {location}"));
            out.push(format!("{location} {keyword}"));
        }

        for modifier in self.catalog.intent_modifiers() {
            out.push(format!("{modifier} {keyword}"));
            out.push(format!("{keyword} {modifier}"));
        }

        for modifier in self.catalog.quality_modifiers() {
            out.push(format!("{modifier} {keyword}"));
        }
    }
}

/// Exact-match form: `[keyword]`.
pub fn exact(keyword: &str) -> String {
    format!("[{keyword}]")
}

/// Phrase-match form: `"keyword"`.
pub fn phrase(keyword: &str) -> String {
    format!("\"{keyword}\"")
}

/// Broad-match-modifier form: `+word +word ...`.
pub fn broad_modifier(keyword: &str) -> String {
    keyword
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| format!("+{word}"))
        .collect::<Vec<_>>()
        .join(" ")
}
