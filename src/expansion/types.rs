//! Common types for keyword expansion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate categories produced by the expansion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    /// `[keyword]`
    Exact,
    /// `"keyword"`
    Phrase,
    /// `+word +word`
    BroadModifier,
    /// Keyword combined with a location, intent or quality modifier.
    LongTail,
}

impl MatchType {
    /// All categories, in output order.
    pub const ALL: [MatchType; 4] = [
        MatchType::Exact,
        MatchType::Phrase,
        MatchType::BroadModifier,
        MatchType::LongTail,
    ];

    /// Field name used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Phrase => "phrase",
            MatchType::BroadModifier => "broadModifier",
            MatchType::LongTail => "longTail",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw candidate sequences as emitted by the generator, before dedup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateBatch {
    pub exact: Vec<String>,
    pub phrase: Vec<String>,
    pub broad_modifier: Vec<String>,
    pub long_tail: Vec<String>,
}

impl CandidateBatch {
    /// Candidates of one category.
    pub fn category(&self, match_type: MatchType) -> &[String] {
        match match_type {
            MatchType::Exact => &self.exact,
            MatchType::Phrase => &self.phrase,
            MatchType::BroadModifier => &self.broad_modifier,
            MatchType::LongTail => &self.long_tail,
        }
    }

    pub fn is_empty(&self) -> bool {
        MatchType::ALL.iter().all(|&m| self.category(m).is_empty())
    }
}
