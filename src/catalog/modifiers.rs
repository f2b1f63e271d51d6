//! The modifier catalog: location, intent, quality and action terms.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::normalizer::KeywordNormalizer;
use crate::catalog::defaults;
use crate::catalog::scope::Scope;
use crate::error::{KwexpandError, Result};

/// The built-in catalog, constructed once on first use and shared read-only.
pub static DEFAULT_CATALOG: LazyLock<Arc<ModifierCatalog>> =
    LazyLock::new(|| Arc::new(ModifierCatalog::builtin()));

/// Ordered location terms for every scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTable {
    pub capital_region: Vec<String>,
    pub regional: Vec<String>,
    pub national: Vec<String>,
}

impl LocationTable {
    /// Location terms for the given scope.
    pub fn get(&self, scope: Scope) -> &[String] {
        match scope {
            Scope::CapitalRegion => &self.capital_region,
            Scope::Regional => &self.regional,
            Scope::National => &self.national,
        }
    }

    fn get_mut(&mut self, scope: Scope) -> &mut Vec<String> {
        match scope {
            Scope::CapitalRegion => &mut self.capital_region,
            Scope::Regional => &mut self.regional,
            Scope::National => &mut self.national,
        }
    }
}

/// Immutable modifier configuration read by the permutation generator.
///
/// Every list keeps its order; generation iterates the terms in exactly the
/// order stored here. Location lists and the intent and quality lists are
/// never empty. Deserialization goes through [`ModifierCatalog::new`], so
/// a deserialized catalog is normalized and validated too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ModifierCatalog {
    locations: LocationTable,
    intent: Vec<String>,
    quality: Vec<String>,
    action: Vec<String>,
}

/// Catalog as written in JSON, before normalization and validation.
#[derive(Deserialize)]
struct RawCatalog {
    locations: LocationTable,
    intent: Vec<String>,
    quality: Vec<String>,
    #[serde(default)]
    action: Vec<String>,
}

impl TryFrom<RawCatalog> for ModifierCatalog {
    type Error = KwexpandError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        ModifierCatalog::new(raw.locations, raw.intent, raw.quality, raw.action)
    }
}

impl ModifierCatalog {
    /// Build a catalog from explicit term lists.
    ///
    /// Terms are normalized the same way seed keywords are; terms that come
    /// out empty are dropped. Fails if any location list, the intent list or
    /// the quality list ends up empty.
    pub fn new(
        locations: LocationTable,
        intent: Vec<String>,
        quality: Vec<String>,
        action: Vec<String>,
    ) -> Result<Self> {
        let normalizer = KeywordNormalizer::new();

        let mut locations = locations;
        for scope in Scope::ALL {
            let terms = locations.get_mut(scope);
            *terms = normalizer.normalize_all(terms.as_slice());
            if terms.is_empty() {
                return Err(KwexpandError::catalog(format!(
                    "no location terms for scope '{scope}'"
                )));
            }
        }

        let intent = normalizer.normalize_all(&intent);
        if intent.is_empty() {
            return Err(KwexpandError::catalog("no intent modifiers"));
        }

        let quality = normalizer.normalize_all(&quality);
        if quality.is_empty() {
            return Err(KwexpandError::catalog("no quality modifiers"));
        }

        let action = normalizer.normalize_all(&action);

        Ok(ModifierCatalog {
            locations,
            intent,
            quality,
            action,
        })
    }

    /// The built-in Hungarian catalog.
    pub fn builtin() -> Self {
        fn owned(terms: &[&str]) -> Vec<String> {
            terms.iter().map(|&s| s.to_string()).collect()
        }

        ModifierCatalog {
            locations: LocationTable {
                capital_region: owned(defaults::CAPITAL_REGION_LOCATIONS),
                regional: owned(defaults::REGIONAL_LOCATIONS),
                national: owned(defaults::NATIONAL_LOCATIONS),
            },
            intent: owned(defaults::INTENT_MODIFIERS),
            quality: owned(defaults::QUALITY_MODIFIERS),
            action: owned(defaults::ACTION_MODIFIERS),
        }
    }

    /// Parse a catalog from JSON and validate it.
    ///
    /// ```json
    /// {
    ///   "locations": {
    ///     "capital_region": ["budapest"],
    ///     "regional": ["debrecen"],
    ///     "national": ["magyarország"]
    ///   },
    ///   "intent": ["ár"],
    ///   "quality": ["legjobb"],
    ///   "action": []
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            KwexpandError::catalog(format!(
                "failed to read catalog file '{}': {e}",
                path.display()
            ))
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "loaded catalog from {} ({} intent, {} quality, {} action modifiers)",
            path.display(),
            catalog.intent.len(),
            catalog.quality.len(),
            catalog.action.len()
        );
        Ok(catalog)
    }

    /// Location terms for the given scope, in catalog order.
    pub fn locations_for(&self, scope: Scope) -> &[String] {
        self.locations.get(scope)
    }

    /// The full location table.
    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    /// Intent modifiers, in catalog order.
    pub fn intent_modifiers(&self) -> &[String] {
        &self.intent
    }

    /// Quality modifiers, in catalog order.
    pub fn quality_modifiers(&self) -> &[String] {
        &self.quality
    }

    /// Action modifiers, in catalog order. Not used by generation.
    pub fn action_modifiers(&self) -> &[String] {
        &self.action
    }

    /// Number of long-tail candidates emitted per keyword for `scope`,
    /// before dedup.
    pub fn long_tail_per_keyword(&self, scope: Scope) -> usize {
        2 * self.locations_for(scope).len() + 2 * self.intent.len() + self.quality.len()
    }
}

impl Default for ModifierCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn strings(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|s| s.to_string()).collect()
    }

    fn table(capital: &[&str], regional: &[&str], national: &[&str]) -> LocationTable {
        LocationTable {
            capital_region: strings(capital),
            regional: strings(regional),
            national: strings(national),
        }
    }

    #[test]
    fn test_builtin_is_never_empty() {
        let catalog = ModifierCatalog::builtin();
        for scope in Scope::ALL {
            assert!(!catalog.locations_for(scope).is_empty());
        }
        assert!(!catalog.intent_modifiers().is_empty());
        assert!(!catalog.quality_modifiers().is_empty());
        assert!(!catalog.action_modifiers().is_empty());
    }

    #[test]
    fn test_builtin_capital_region_starts_with_budapest() {
        let catalog = ModifierCatalog::builtin();
        assert_eq!(catalog.locations_for(Scope::CapitalRegion)[0], "budapest");
    }

    #[test]
    fn test_builtin_terms_are_normalized() {
        let builtin = ModifierCatalog::builtin();
        let renormalized = ModifierCatalog::new(
            builtin.locations.clone(),
            builtin.intent.clone(),
            builtin.quality.clone(),
            builtin.action.clone(),
        )
        .unwrap();
        assert_eq!(builtin, renormalized);
    }

    #[test]
    fn test_new_normalizes_terms() {
        let catalog = ModifierCatalog::new(
            table(&["  Budapest ", ""], &["Szeged"], &["ORSZÁGOS"]),
            strings(&["Olcsó   Ár"]),
            strings(&["Legjobb"]),
            vec![],
        )
        .unwrap();

        assert_eq!(catalog.locations_for(Scope::CapitalRegion), &["budapest"]);
        assert_eq!(catalog.locations_for(Scope::National), &["országos"]);
        assert_eq!(catalog.intent_modifiers(), &["olcsó ár"]);
        assert!(catalog.action_modifiers().is_empty());
    }

    #[test]
    fn test_new_rejects_empty_lists() {
        let err = ModifierCatalog::new(
            table(&["budapest"], &["   "], &["online"]),
            strings(&["ár"]),
            strings(&["legjobb"]),
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("regional"));

        let err = ModifierCatalog::new(
            table(&["budapest"], &["szeged"], &["online"]),
            vec![],
            strings(&["legjobb"]),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, KwexpandError::Catalog(_)));

        let err = ModifierCatalog::new(
            table(&["budapest"], &["szeged"], &["online"]),
            strings(&["ár"]),
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, KwexpandError::Catalog(_)));
    }

    #[test]
    fn test_from_json_action_is_optional() {
        let json = r#"{
            "locations": {
                "capital_region": ["budapest"],
                "regional": ["debrecen"],
                "national": ["magyarország"]
            },
            "intent": ["ár"],
            "quality": ["legjobb"]
        }"#;
        let catalog = ModifierCatalog::from_json(json).unwrap();
        assert!(catalog.action_modifiers().is_empty());
        assert_eq!(catalog.long_tail_per_keyword(Scope::Regional), 5);
    }

    #[test]
    fn test_deserialize_normalizes_terms() {
        let json = r#"{
            "locations": {
                "capital_region": ["Budapest"],
                "regional": ["  SZEGED  "],
                "national": ["Online"]
            },
            "intent": ["Ár"],
            "quality": ["Profi"]
        }"#;
        let catalog: ModifierCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.locations_for(Scope::Regional), &["szeged"]);
        assert_eq!(catalog.intent_modifiers(), &["ár"]);
        assert_eq!(catalog, ModifierCatalog::from_json(json).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_empty_lists() {
        let json = r#"{
            "locations": {
                "capital_region": [],
                "regional": ["szeged"],
                "national": ["online"]
            },
            "intent": [],
            "quality": ["profi"]
        }"#;
        let err = serde_json::from_str::<ModifierCatalog>(json).unwrap_err();
        assert!(err.to_string().contains("capital_region"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ModifierCatalog::from_json("{\"intent\": []}").unwrap_err();
        assert!(matches!(err, KwexpandError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&ModifierCatalog::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = ModifierCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog, ModifierCatalog::builtin());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ModifierCatalog::load_from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, KwexpandError::Catalog(_)));
    }

    #[test]
    fn test_default_catalog_is_shared() {
        let a = Arc::clone(&DEFAULT_CATALOG);
        let b = Arc::clone(&DEFAULT_CATALOG);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
