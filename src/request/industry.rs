//! Default seed keywords per industry.
//!
//! When a user submits no seed keywords, the caller substitutes the default
//! list of the selected industry before invoking the expansion engine.

use std::sync::LazyLock;

use crate::error::{KwexpandError, Result};

const INDUSTRY_SEEDS: &[(&str, &[&str])] = &[
    (
        "plumbing",
        &[
            "vízvezeték szerelés",
            "vízszerelő",
            "duguláselhárítás",
            "csőtörés javítás",
            "csapcsere",
        ],
    ),
    (
        "electrician",
        &[
            "villanyszerelő",
            "villanyszerelés",
            "elektromos hibaelhárítás",
            "biztosítéktábla csere",
        ],
    ),
    (
        "cleaning",
        &[
            "takarítás",
            "ablak tisztítás",
            "irodatakarítás",
            "nagytakarítás",
            "szőnyegtisztítás",
        ],
    ),
    (
        "locksmith",
        &["zárszerviz", "zárcsere", "ajtónyitás", "lakatos"],
    ),
    (
        "dental",
        &["fogorvos", "fogászat", "fogfehérítés", "implantátum", "fogszabályozás"],
    ),
    (
        "legal",
        &["ügyvéd", "ügyvédi iroda", "jogi tanácsadás", "válóperes ügyvéd"],
    ),
    (
        "accounting",
        &["könyvelő", "könyvelés", "bérszámfejtés", "adótanácsadás"],
    ),
    (
        "renovation",
        &["felújítás", "lakásfelújítás", "burkolás", "festés mázolás", "fürdőszoba felújítás"],
    ),
];

/// The built-in industry catalog.
pub static DEFAULT_INDUSTRIES: LazyLock<IndustryCatalog> = LazyLock::new(IndustryCatalog::builtin);

/// Ordered default seed lists keyed by industry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryCatalog {
    industries: Vec<(String, Vec<String>)>,
}

impl IndustryCatalog {
    /// The built-in Hungarian industry seed lists.
    pub fn builtin() -> Self {
        let industries = INDUSTRY_SEEDS
            .iter()
            .map(|(key, seeds)| {
                (
                    key.to_string(),
                    seeds.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        IndustryCatalog { industries }
    }

    /// Default seeds for an industry key (case-insensitive).
    pub fn seeds_for(&self, industry: &str) -> Result<&[String]> {
        let key = industry.trim().to_lowercase();
        self.industries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, seeds)| seeds.as_slice())
            .ok_or_else(|| KwexpandError::not_found(format!("industry '{industry}'")))
    }

    /// Industry keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.industries.iter().map(|(key, _)| key.as_str())
    }

    /// `(key, seeds)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.industries
            .iter()
            .map(|(key, seeds)| (key.as_str(), seeds.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}

impl Default for IndustryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
