//! Matcher configuration.

use serde::{Deserialize, Serialize};

/// Minimum similarity a candidate must exceed to be suggested.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Maximum number of suggested candidates.
pub const DEFAULT_MAX_CANDIDATES: usize = 3;

/// Tuning for the fuzzy fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Candidates need a similarity strictly above this value (0.0 to 1.0).
    pub threshold: f64,
    /// How many candidates to keep at most.
    pub max_candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl MatcherConfig {
    /// Set the similarity threshold, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the maximum number of candidates.
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MatcherConfig::default();
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.max_candidates, 3);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(MatcherConfig::default().with_threshold(1.5).threshold, 1.0);
        assert_eq!(MatcherConfig::default().with_threshold(-2.0).threshold, 0.0);
        assert_eq!(
            MatcherConfig::default().with_threshold(f64::NAN).threshold,
            DEFAULT_THRESHOLD
        );
    }
}
