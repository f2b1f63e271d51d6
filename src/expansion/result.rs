//! Expansion result returned to callers.

use serde::Serialize;

use crate::expansion::dedup::dedupe;
use crate::expansion::stats::ExpansionStats;
use crate::expansion::types::{CandidateBatch, MatchType};

/// Deduplicated candidates per category plus their counts.
///
/// Serialized as:
///
/// ```json
/// {
///   "exact": ["[zár]"],
///   "phrase": ["\"zár\""],
///   "broadModifier": ["+zár"],
///   "longTail": ["zár budapest", "budapest zár"],
///   "stats": {
///     "exactCount": 1, "phraseCount": 1, "broadModifierCount": 1,
///     "longTailCount": 2, "total": 5
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionResult {
    exact: Vec<String>,
    phrase: Vec<String>,
    broad_modifier: Vec<String>,
    long_tail: Vec<String>,
    stats: ExpansionStats,
}

impl ExpansionResult {
    /// Deduplicate each category of a raw batch and collect stats.
    pub fn from_batch(batch: CandidateBatch) -> Self {
        let exact = dedupe(batch.exact);
        let phrase = dedupe(batch.phrase);
        let broad_modifier = dedupe(batch.broad_modifier);
        let long_tail = dedupe(batch.long_tail);
        let stats = ExpansionStats::collect(
            exact.len(),
            phrase.len(),
            broad_modifier.len(),
            long_tail.len(),
        );

        ExpansionResult {
            exact,
            phrase,
            broad_modifier,
            long_tail,
            stats,
        }
    }

    pub fn exact(&self) -> &[String] {
        &self.exact
    }

    pub fn phrase(&self) -> &[String] {
        &self.phrase
    }

    pub fn broad_modifier(&self) -> &[String] {
        &self.broad_modifier
    }

    pub fn long_tail(&self) -> &[String] {
        &self.long_tail
    }

    pub fn stats(&self) -> &ExpansionStats {
        &self.stats
    }

    /// Candidates of one category.
    pub fn category(&self, match_type: MatchType) -> &[String] {
        match match_type {
            MatchType::Exact => &self.exact,
            MatchType::Phrase => &self.phrase,
            MatchType::BroadModifier => &self.broad_modifier,
            MatchType::LongTail => &self.long_tail,
        }
    }

    /// Iterate `(category, candidate)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (MatchType, &str)> + '_ {
        MatchType::ALL.into_iter().flat_map(move |match_type| {
            self.category(match_type)
                .iter()
                .map(move |candidate| (match_type, candidate.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.stats.total() == 0
    }
}
