//! Controlled vocabulary matching for CF geodetic names.
//!
//! A value is first looked up exactly. On a miss, every canonical value is
//! scored with a normalized Levenshtein similarity and the closest ones are
//! offered as "did you mean" candidates.
//!
//! ```
//! use cfgm_match::{MatchOutcome, VocabularyMatcher};
//! use cfgm_model::{ControlledVocabulary, ConventionVersion, VocabularyKind};
//!
//! let vocab = ControlledVocabulary::from_values(
//!     VocabularyKind::PrimeMeridian,
//!     ConventionVersion::Cf17,
//!     ["Greenwich", "Paris", "Lisbon"],
//! );
//! let matcher = VocabularyMatcher::default();
//!
//! assert_eq!(matcher.match_value("Paris", &vocab), MatchOutcome::Exact);
//! let outcome = matcher.match_value("Greenwhich", &vocab);
//! assert_eq!(outcome.suggestions(), vec!["Greenwich".to_string()]);
//! ```

pub mod cache;
pub mod config;
pub mod matcher;

pub use cache::MatchCache;
pub use config::MatcherConfig;
pub use matcher::{Candidate, MatchOutcome, VocabularyMatcher};
