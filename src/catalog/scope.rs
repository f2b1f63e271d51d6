//! Geographic targeting scope.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{KwexpandError, Result};

/// Geographic targeting granularity; selects the location terms used for
/// long-tail generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The capital and its agglomeration.
    #[default]
    CapitalRegion,
    /// Major regional cities.
    Regional,
    /// Country-wide targeting.
    National,
}

impl Scope {
    /// All scopes, in catalog order.
    pub const ALL: [Scope; 3] = [Scope::CapitalRegion, Scope::Regional, Scope::National];

    /// Canonical name of this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::CapitalRegion => "capital_region",
            Scope::Regional => "regional",
            Scope::National => "national",
        }
    }

    /// Resolve a scope name leniently.
    ///
    /// Unknown names fall back to [`Scope::CapitalRegion`]. Use
    /// [`str::parse`] where an unknown name has to be rejected instead.
    pub fn resolve(name: &str) -> Scope {
        match name.parse() {
            Ok(scope) => scope,
            Err(_) => {
                warn!("unknown scope {name:?}, falling back to capital_region");
                Scope::CapitalRegion
            }
        }
    }
}

impl FromStr for Scope {
    type Err = KwexpandError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace('-', "_");
        match key.as_str() {
            "capital_region" | "capital" | "budapest" => Ok(Scope::CapitalRegion),
            "regional" | "videk" => Ok(Scope::Regional),
            "national" | "orszagos" | "country" => Ok(Scope::National),
            _ => Err(KwexpandError::not_found(format!("scope '{s}'"))),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names_and_aliases() {
        assert_eq!("capital_region".parse::<Scope>().unwrap(), Scope::CapitalRegion);
        assert_eq!("Capital-Region".parse::<Scope>().unwrap(), Scope::CapitalRegion);
        assert_eq!("budapest".parse::<Scope>().unwrap(), Scope::CapitalRegion);
        assert_eq!("regional".parse::<Scope>().unwrap(), Scope::Regional);
        assert_eq!("videk".parse::<Scope>().unwrap(), Scope::Regional);
        assert_eq!(" NATIONAL ".parse::<Scope>().unwrap(), Scope::National);
        assert_eq!("orszagos".parse::<Scope>().unwrap(), Scope::National);
    }

    #[test]
    fn test_parse_unknown_is_not_found() {
        let err = "mars".parse::<Scope>().unwrap_err();
        assert!(matches!(err, KwexpandError::NotFound(_)));
    }

    #[test]
    fn test_resolve_falls_back_to_capital_region() {
        assert_eq!(Scope::resolve("mars"), Scope::CapitalRegion);
        assert_eq!(Scope::resolve(""), Scope::CapitalRegion);
        assert_eq!(Scope::resolve("national"), Scope::National);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for scope in Scope::ALL {
            assert_eq!(scope.to_string().parse::<Scope>().unwrap(), scope);
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Scope::CapitalRegion).unwrap(),
            "\"capital_region\""
        );
        let scope: Scope = serde_json::from_str("\"regional\"").unwrap();
        assert_eq!(scope, Scope::Regional);
    }
}
