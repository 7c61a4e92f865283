//! CF grid mapping rule registry.
//!
//! Holds, per convention version, the grid mapping rules, the attribute type
//! table and the geodetic name vocabularies. Versions are published as
//! deltas: CF-1.7 is CF-1.6 plus the entries it introduces.
//!
//! # Example
//!
//! ```
//! use cfgm_model::{ConventionVersion, VocabularyKind};
//! use cfgm_standards::RuleRegistry;
//!
//! let registry = RuleRegistry::load().unwrap();
//! let rule = registry
//!     .resolve_rule(ConventionVersion::Cf17, "geostationary")
//!     .unwrap();
//! assert!(rule.required_attributes().any(|a| a == "perspective_point_height"));
//!
//! let meridians = registry
//!     .vocabulary(ConventionVersion::Cf17, VocabularyKind::PrimeMeridian)
//!     .unwrap();
//! assert!(meridians.contains("Greenwich"));
//! ```

pub mod embedded;
pub mod error;
pub mod loader;
pub mod registry;
pub mod rule_set;

pub use error::{RegistryError, Result};
pub use loader::{TableDelta, load_delta};
pub use registry::RuleRegistry;
pub use rule_set::RuleSet;
