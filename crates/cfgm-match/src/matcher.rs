//! Exact and fuzzy vocabulary lookup.

use std::cmp::Ordering;

use cfgm_model::ControlledVocabulary;
use rapidfuzz::distance::levenshtein;
use serde::Serialize;

use crate::config::MatcherConfig;

/// A canonical value close to the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Canonical spelling.
    pub value: String,
    /// Normalized similarity (0.0 to 1.0), compared case-insensitively.
    pub similarity: f64,
    /// Levenshtein distance to the input, case-sensitive.
    pub distance: usize,
}

/// Result of matching one value against a vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The value is a canonical member.
    Exact,
    /// Not a member; these canonical values are close, best first.
    Suggest(Vec<Candidate>),
    /// Not a member and nothing close enough.
    NoMatch,
}

impl MatchOutcome {
    /// Whether the value matched exactly.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Ranked candidates (empty unless `Suggest`).
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Self::Suggest(candidates) => candidates,
            Self::Exact | Self::NoMatch => &[],
        }
    }

    /// Candidate spellings, best first.
    pub fn suggestions(&self) -> Vec<String> {
        self.candidates().iter().map(|c| c.value.clone()).collect()
    }
}

/// Matches values against a controlled vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularyMatcher {
    config: MatcherConfig,
}

impl VocabularyMatcher {
    /// Create a matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match a value against a vocabulary.
    pub fn match_value(&self, value: &str, vocabulary: &ControlledVocabulary) -> MatchOutcome {
        if vocabulary.contains(value) {
            return MatchOutcome::Exact;
        }

        let folded = value.to_lowercase();
        let mut candidates: Vec<Candidate> = vocabulary
            .iter()
            .filter_map(|canonical| {
                let similarity = levenshtein::normalized_similarity(
                    folded.chars(),
                    canonical.to_lowercase().chars(),
                );
                (similarity > self.config.threshold).then(|| Candidate {
                    value: canonical.to_string(),
                    similarity,
                    distance: levenshtein::distance(value.chars(), canonical.chars()),
                })
            })
            .collect();

        candidates.sort_by(rank);
        candidates.truncate(self.config.max_candidates);

        tracing::trace!(
            value,
            vocabulary = %vocabulary.kind,
            candidates = candidates.len(),
            "Fuzzy vocabulary lookup"
        );

        if candidates.is_empty() {
            MatchOutcome::NoMatch
        } else {
            MatchOutcome::Suggest(candidates)
        }
    }
}

/// Higher similarity first, then smaller distance, then lexical order.
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.similarity
        .partial_cmp(&a.similarity)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.distance.cmp(&b.distance))
        .then_with(|| a.value.cmp(&b.value))
}

#[cfg(test)]
mod tests {
    use cfgm_model::{ConventionVersion, VocabularyKind};

    use super::*;

    fn ellipsoids() -> ControlledVocabulary {
        ControlledVocabulary::from_values(
            VocabularyKind::ReferenceEllipsoid,
            ConventionVersion::Cf17,
            ["WGS 84", "WGS 72", "GRS 1980", "Airy 1830", "Clarke 1866"],
        )
    }

    #[test]
    fn exact_member() {
        let matcher = VocabularyMatcher::default();
        assert_eq!(matcher.match_value("GRS 1980", &ellipsoids()), MatchOutcome::Exact);
    }

    #[test]
    fn case_difference_is_suggested_not_exact() {
        let matcher = VocabularyMatcher::default();
        let outcome = matcher.match_value("grs 1980", &ellipsoids());
        let top = &outcome.candidates()[0];
        assert_eq!(top.value, "GRS 1980");
        assert_eq!(top.similarity, 1.0);
        assert_eq!(top.distance, 3);
    }

    #[test]
    fn ties_break_on_distance_then_lexical() {
        let matcher = VocabularyMatcher::default();
        // One edit from both; lexical order decides.
        let outcome = matcher.match_value("WGS 74", &ellipsoids());
        assert_eq!(outcome.suggestions(), vec!["WGS 72", "WGS 84"]);
    }

    #[test]
    fn candidates_are_capped() {
        let vocab = ControlledVocabulary::from_values(
            VocabularyKind::PrimeMeridian,
            ConventionVersion::Cf17,
            ["Zone 1", "Zone 2", "Zone 3", "Zone 4", "Zone 5"],
        );
        let matcher = VocabularyMatcher::new(MatcherConfig::default().with_max_candidates(2));
        let outcome = matcher.match_value("Zone 9", &vocab);
        assert_eq!(outcome.suggestions(), vec!["Zone 1", "Zone 2"]);
    }

    #[test]
    fn empty_vocabulary_never_matches() {
        let vocab =
            ControlledVocabulary::new(VocabularyKind::HorizontalDatum, ConventionVersion::Cf16);
        let matcher = VocabularyMatcher::default();
        assert_eq!(matcher.match_value("WGS 84", &vocab), MatchOutcome::NoMatch);
    }

    #[test]
    fn threshold_is_exclusive() {
        // Case-folded similarity of these two is exactly 1.0.
        let vocab = ControlledVocabulary::from_values(
            VocabularyKind::ReferenceEllipsoid,
            ConventionVersion::Cf17,
            ["Airy 1830"],
        );
        let strict = VocabularyMatcher::new(MatcherConfig::default().with_threshold(1.0));
        assert_eq!(strict.match_value("AIRY 1830", &vocab), MatchOutcome::NoMatch);

        let loose = VocabularyMatcher::new(MatcherConfig::default().with_threshold(0.99));
        assert_eq!(loose.match_value("AIRY 1830", &vocab).suggestions(), vec!["Airy 1830"]);
    }
}
