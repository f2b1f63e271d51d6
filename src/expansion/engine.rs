//! Keyword expansion engine.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::normalizer::KeywordNormalizer;
use crate::catalog::{DEFAULT_CATALOG, ModifierCatalog, Scope};
use crate::expansion::generator::PermutationGenerator;
use crate::expansion::result::ExpansionResult;

/// Expands seed keywords into categorized, deduplicated candidates.
///
/// Expansion is a pure function of the seeds, the scope and the catalog.
/// The expander holds no mutable state, so one instance can serve any
/// number of threads.
///
/// # Example
///
/// ```
/// use kwexpand::catalog::Scope;
/// use kwexpand::expansion::KeywordExpander;
///
/// let expander = KeywordExpander::default();
/// let result = expander.expand(&["Ablak  Tisztítás"], Scope::CapitalRegion);
///
/// assert_eq!(result.exact(), &["[ablak tisztítás]"]);
/// assert_eq!(result.broad_modifier(), &["+ablak +tisztítás"]);
/// assert!(result.long_tail().contains(&"budapest ablak tisztítás".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct KeywordExpander {
    catalog: Arc<ModifierCatalog>,
    normalizer: KeywordNormalizer,
}

impl KeywordExpander {
    /// Create an expander over the given catalog.
    pub fn new(catalog: Arc<ModifierCatalog>) -> Self {
        KeywordExpander {
            catalog,
            normalizer: KeywordNormalizer::new(),
        }
    }

    /// Replace the seed normalizer.
    pub fn with_normalizer(mut self, normalizer: KeywordNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn catalog(&self) -> &ModifierCatalog {
        &self.catalog
    }

    /// Expand raw seeds under `scope`.
    ///
    /// Seeds are normalized first; seeds that normalize to nothing are
    /// skipped. An empty seed list yields an empty result.
    pub fn expand<S: AsRef<str>>(&self, seeds: &[S], scope: Scope) -> ExpansionResult {
        let keywords = self.normalizer.normalize_all(seeds);
        let batch = PermutationGenerator::new(&self.catalog).generate(&keywords, scope);
        let result = ExpansionResult::from_batch(batch);

        debug!(
            "expanded {} seeds ({} keywords) for {scope}: {} exact, {} phrase, {} broad modifier, {} long tail",
            seeds.len(),
            keywords.len(),
            result.stats().exact_count(),
            result.stats().phrase_count(),
            result.stats().broad_modifier_count(),
            result.stats().long_tail_count(),
        );

        result
    }

    /// Expand with a scope given by name; unknown names use the
    /// capital-region locations.
    pub fn expand_with_scope_name<S: AsRef<str>>(&self, seeds: &[S], scope: &str) -> ExpansionResult {
        self.expand(seeds, Scope::resolve(scope))
    }

    /// Expand several independent seed sets in parallel.
    ///
    /// Results are returned in the order of `requests`.
    pub fn expand_batch<S>(&self, requests: &[(Vec<S>, Scope)]) -> Vec<ExpansionResult>
    where
        S: AsRef<str> + Sync,
    {
        requests
            .par_iter()
            .map(|(seeds, scope)| self.expand(seeds, *scope))
            .collect()
    }
}

impl Default for KeywordExpander {
    fn default() -> Self {
        Self::new(Arc::clone(&DEFAULT_CATALOG))
    }
}
