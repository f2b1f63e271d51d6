//! Caller-side request validation.
//!
//! Requests are validated before they reach the expansion engine: the scope
//! must name a known [`Scope`] and, when seeds fall back to an industry's
//! defaults, the industry must exist. The engine itself never rejects input.

pub mod industry;

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::Scope;
use crate::error::Result;

pub use industry::{DEFAULT_INDUSTRIES, IndustryCatalog};

/// An expansion request as submitted by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRequest {
    /// Raw seed keywords, possibly empty or blank.
    #[serde(default)]
    pub seeds: Vec<String>,
    /// Scope name, e.g. `capital_region`.
    #[serde(default = "default_scope_name")]
    pub scope: String,
    /// Industry key whose default seeds replace an empty seed list.
    #[serde(default)]
    pub industry: Option<String>,
}

fn default_scope_name() -> String {
    Scope::default().as_str().to_string()
}

/// A validated request, ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub seeds: Vec<String>,
    pub scope: Scope,
}

impl ExpansionRequest {
    pub fn new<S: Into<String>>(seeds: Vec<String>, scope: S) -> Self {
        ExpansionRequest {
            seeds,
            scope: scope.into(),
            industry: None,
        }
    }

    pub fn with_industry<S: Into<String>>(mut self, industry: S) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Check whether every seed is blank.
    pub fn has_no_seeds(&self) -> bool {
        self.seeds.iter().all(|seed| seed.trim().is_empty())
    }

    /// Validate the scope and resolve the seed list.
    ///
    /// Blank seeds are replaced by the industry's defaults when an industry
    /// is given. Fails with `NotFound` for an unknown scope or industry.
    pub fn resolve(&self, industries: &IndustryCatalog) -> Result<ResolvedRequest> {
        let scope: Scope = self.scope.parse()?;

        let seeds = match (&self.industry, self.has_no_seeds()) {
            (Some(industry), true) => {
                let defaults = industries.seeds_for(industry)?;
                info!(
                    "no seeds given, using {} default seeds for industry '{industry}'",
                    defaults.len()
                );
                defaults.to_vec()
            }
            (Some(industry), false) => {
                // the industry must exist even when its seeds go unused
                industries.seeds_for(industry)?;
                self.seeds.clone()
            }
            (None, _) => self.seeds.clone(),
        };

        Ok(ResolvedRequest { seeds, scope })
    }
}
