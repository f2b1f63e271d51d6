//! Per-category candidate counts.

use serde::Serialize;

use crate::expansion::types::MatchType;

/// Candidate counts of an expansion result.
///
/// Only constructed from the category sizes; `total` is their sum and
/// cannot be set independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionStats {
    exact_count: usize,
    phrase_count: usize,
    broad_modifier_count: usize,
    long_tail_count: usize,
    total: usize,
}

impl ExpansionStats {
    /// Collect stats from the four deduplicated category sizes.
    pub fn collect(exact: usize, phrase: usize, broad_modifier: usize, long_tail: usize) -> Self {
        ExpansionStats {
            exact_count: exact,
            phrase_count: phrase,
            broad_modifier_count: broad_modifier,
            long_tail_count: long_tail,
            total: exact + phrase + broad_modifier + long_tail,
        }
    }

    pub fn exact_count(&self) -> usize {
        self.exact_count
    }

    pub fn phrase_count(&self) -> usize {
        self.phrase_count
    }

    pub fn broad_modifier_count(&self) -> usize {
        self.broad_modifier_count
    }

    pub fn long_tail_count(&self) -> usize {
        self.long_tail_count
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for one category.
    pub fn count(&self, match_type: MatchType) -> usize {
        match match_type {
            MatchType::Exact => self.exact_count,
            MatchType::Phrase => self.phrase_count,
            MatchType::BroadModifier => self.broad_modifier_count,
            MatchType::LongTail => self.long_tail_count,
        }
    }
}
