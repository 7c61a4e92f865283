//! Controlled vocabularies for geodetic names.
//!
//! The CF conventions publish three closed lists alongside the grid mapping
//! appendix, starting with CF-1.7:
//!
//! - horizontal datum names (`horiz_datum.csv`)
//! - prime meridian names (`prime_meridian.csv`)
//! - reference ellipsoid names (`ellipsoid.csv`)
//!
//! Membership is an exact, case-sensitive comparison against the canonical
//! spelling. No normalization is applied to either side.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::version::ConventionVersion;

/// Which controlled vocabulary a value is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    /// Horizontal datum names.
    HorizontalDatum,
    /// Prime meridian names.
    PrimeMeridian,
    /// Reference ellipsoid names.
    ReferenceEllipsoid,
}

impl VocabularyKind {
    /// All vocabulary kinds.
    pub const fn all() -> &'static [Self] {
        &[
            Self::HorizontalDatum,
            Self::PrimeMeridian,
            Self::ReferenceEllipsoid,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HorizontalDatum => "horizontal datum",
            Self::PrimeMeridian => "prime meridian",
            Self::ReferenceEllipsoid => "reference ellipsoid",
        }
    }

    /// Parse a vocabulary kind from a short name.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "datum" | "horizontal-datum" | "horiz-datum" => Ok(Self::HorizontalDatum),
            "prime-meridian" | "meridian" => Ok(Self::PrimeMeridian),
            "ellipsoid" | "reference-ellipsoid" => Ok(Self::ReferenceEllipsoid),
            _ => Err(ModelError::UnknownVocabulary(s.to_string())),
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed set of canonical names for one convention version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlledVocabulary {
    /// Vocabulary kind.
    pub kind: VocabularyKind,
    /// Convention version that published this set.
    pub version: ConventionVersion,
    values: BTreeSet<String>,
}

impl ControlledVocabulary {
    /// Create an empty vocabulary.
    pub fn new(kind: VocabularyKind, version: ConventionVersion) -> Self {
        Self {
            kind,
            version,
            values: BTreeSet::new(),
        }
    }

    /// Create a vocabulary from canonical values.
    pub fn from_values<I, S>(kind: VocabularyKind, version: ConventionVersion, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            version,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Insert a canonical value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Canonical values in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of canonical values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vocabulary has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_sensitive() {
        let vocab = ControlledVocabulary::from_values(
            VocabularyKind::PrimeMeridian,
            ConventionVersion::Cf17,
            ["Greenwich", "Paris"],
        );
        assert!(vocab.contains("Greenwich"));
        assert!(!vocab.contains("greenwich"));
        assert!(!vocab.contains(" Greenwich"));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut vocab =
            ControlledVocabulary::new(VocabularyKind::ReferenceEllipsoid, ConventionVersion::Cf17);
        assert!(vocab.insert("WGS 84"));
        assert!(!vocab.insert("WGS 84"));
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn parses_kind_aliases() {
        assert_eq!(VocabularyKind::parse("datum"), Ok(VocabularyKind::HorizontalDatum));
        assert_eq!(
            VocabularyKind::parse("prime_meridian"),
            Ok(VocabularyKind::PrimeMeridian)
        );
        assert_eq!(
            VocabularyKind::parse("Ellipsoid"),
            Ok(VocabularyKind::ReferenceEllipsoid)
        );
        assert!(VocabularyKind::parse("geoid").is_err());
    }
}
