//! CF convention versions with grid mapping tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// CF convention revision.
///
/// Variants are declared in release order, so `Ord` follows the order in
/// which the tables were published. Each revision only adds to its
/// predecessor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ConventionVersion {
    /// CF-1.6.
    #[serde(rename = "1.6")]
    Cf16,
    /// CF-1.7 (latest encoded revision).
    #[default]
    #[serde(rename = "1.7")]
    Cf17,
}

impl ConventionVersion {
    /// Version number as written in `Conventions` attributes (e.g. "1.7").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cf16 => "1.6",
            Self::Cf17 => "1.7",
        }
    }

    /// All encoded versions, oldest first.
    pub const fn all() -> &'static [ConventionVersion] {
        &[Self::Cf16, Self::Cf17]
    }

    /// The newest encoded version.
    pub const fn latest() -> Self {
        Self::Cf17
    }

    /// The version this one extends, if any.
    pub const fn predecessor(&self) -> Option<Self> {
        match self {
            Self::Cf16 => None,
            Self::Cf17 => Some(Self::Cf16),
        }
    }

    /// Parse a version string.
    ///
    /// Accepts the bare number ("1.6") and the `Conventions` attribute form
    /// ("CF-1.6"), ignoring surrounding whitespace and prefix case.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let number = trimmed
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("cf-"))
            .map_or(trimmed, |_| &trimmed[3..]);

        match number {
            "1.6" => Ok(Self::Cf16),
            "1.7" => Ok(Self::Cf17),
            _ => Err(ModelError::UnsupportedVersion(s.to_string())),
        }
    }
}

impl fmt::Display for ConventionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CF-{}", self.as_str())
    }
}

impl FromStr for ConventionVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_prefixed_versions() {
        assert_eq!(ConventionVersion::parse("1.6"), Ok(ConventionVersion::Cf16));
        assert_eq!(ConventionVersion::parse("CF-1.7"), Ok(ConventionVersion::Cf17));
        assert_eq!(ConventionVersion::parse(" cf-1.6 "), Ok(ConventionVersion::Cf16));
    }

    #[test]
    fn rejects_unknown_versions() {
        assert_eq!(
            ConventionVersion::parse("1.8"),
            Err(ModelError::UnsupportedVersion("1.8".to_string()))
        );
        assert!(ConventionVersion::parse("").is_err());
    }

    #[test]
    fn versions_are_ordered_by_release() {
        assert!(ConventionVersion::Cf16 < ConventionVersion::Cf17);
        assert_eq!(ConventionVersion::Cf17.predecessor(), Some(ConventionVersion::Cf16));
        assert_eq!(ConventionVersion::Cf16.predecessor(), None);
        assert_eq!(ConventionVersion::latest(), ConventionVersion::Cf17);
    }
}
