//! Per-pass memoization of vocabulary lookups.

use std::collections::HashMap;

use cfgm_model::{ControlledVocabulary, ConventionVersion, VocabularyKind};

use crate::matcher::{MatchOutcome, VocabularyMatcher};

/// Remembers outcomes for values already matched during one validation pass
/// (or one batch of passes).
///
/// Keys include the vocabulary kind and version, so one cache can serve
/// several vocabularies.
#[derive(Debug, Default)]
pub struct MatchCache {
    entries: HashMap<(VocabularyKind, ConventionVersion, String), MatchOutcome>,
    hits: usize,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a value, reusing an earlier outcome for the same value.
    pub fn lookup(
        &mut self,
        matcher: &VocabularyMatcher,
        value: &str,
        vocabulary: &ControlledVocabulary,
    ) -> MatchOutcome {
        let key = (vocabulary.kind, vocabulary.version, value.to_string());
        if let Some(outcome) = self.entries.get(&key) {
            self.hits += 1;
            tracing::trace!(value, vocabulary = %vocabulary.kind, "Vocabulary cache hit");
            return outcome.clone();
        }

        let outcome = matcher.match_value(value, vocabulary);
        self.entries.insert(key, outcome.clone());
        outcome
    }

    /// Number of distinct values matched so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_values_hit_the_cache() {
        let vocab = ControlledVocabulary::from_values(
            VocabularyKind::PrimeMeridian,
            ConventionVersion::Cf17,
            ["Greenwich", "Paris"],
        );
        let matcher = VocabularyMatcher::default();
        let mut cache = MatchCache::new();

        let first = cache.lookup(&matcher, "Pariss", &vocab);
        let second = cache.lookup(&matcher, "Pariss", &vocab);
        cache.lookup(&matcher, "Paris", &vocab);

        assert_eq!(first, second);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn kinds_do_not_share_entries() {
        let meridians = ControlledVocabulary::from_values(
            VocabularyKind::PrimeMeridian,
            ConventionVersion::Cf17,
            ["Paris"],
        );
        let datums =
            ControlledVocabulary::new(VocabularyKind::HorizontalDatum, ConventionVersion::Cf17);
        let matcher = VocabularyMatcher::default();
        let mut cache = MatchCache::new();

        assert!(cache.lookup(&matcher, "Paris", &meridians).is_exact());
        assert_eq!(cache.lookup(&matcher, "Paris", &datums), MatchOutcome::NoMatch);
        assert_eq!(cache.hits(), 0);
    }
}
