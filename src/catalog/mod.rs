//! Modifier catalog and geographic scope.
//!
//! The catalog maps each [`Scope`] to an ordered list of location terms and
//! holds the fixed intent, quality and action modifier lists. It is built
//! once and only ever read afterwards.
//!
//! # Example
//!
//! ```
//! use kwexpand::catalog::{DEFAULT_CATALOG, Scope};
//!
//! let locations = DEFAULT_CATALOG.locations_for(Scope::CapitalRegion);
//! assert_eq!(locations[0], "budapest");
//! ```

pub mod defaults;
pub mod modifiers;
pub mod scope;

pub use modifiers::{DEFAULT_CATALOG, LocationTable, ModifierCatalog};
pub use scope::Scope;
