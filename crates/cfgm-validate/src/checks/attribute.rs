//! Attribute type checker.
//!
//! Checks one attribute value against its type entry: the value kind first,
//! then the extra condition when the entry is flagged. A value of the wrong
//! kind is not checked further.

use cfgm_match::{MatchCache, MatchOutcome, VocabularyMatcher};
use cfgm_model::{AttributeTypeSpec, AttributeValue, ValueKind, VocabularyKind};
use cfgm_standards::RuleSet;

use super::conditions::Condition;
use crate::issue::Issue;

/// Per-attribute checker bound to one rule set.
pub struct AttributeChecker<'a> {
    rule_set: &'a RuleSet,
    matcher: &'a VocabularyMatcher,
}

impl<'a> AttributeChecker<'a> {
    pub fn new(rule_set: &'a RuleSet, matcher: &'a VocabularyMatcher) -> Self {
        Self { rule_set, matcher }
    }

    /// Check a value against its type entry.
    pub fn check(
        &self,
        attribute: &str,
        value: &AttributeValue,
        spec: &AttributeTypeSpec,
        cache: &mut MatchCache,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();

        match spec.kind {
            ValueKind::Numeric => {
                let Some(values) = value.as_numbers() else {
                    issues.push(wrong_type(attribute, spec.kind, value));
                    return issues;
                };
                if spec.extra_condition
                    && let Some(issue) = Condition::for_attribute(attribute)
                        .and_then(|condition| condition.check_numbers(attribute, values))
                {
                    issues.push(issue);
                }
            }
            ValueKind::Text => {
                let Some(text) = value.as_text() else {
                    issues.push(wrong_type(attribute, spec.kind, value));
                    return issues;
                };
                if spec.extra_condition {
                    match Condition::for_attribute(attribute) {
                        Some(Condition::Vocabulary(kind)) => {
                            issues.extend(self.check_vocabulary(attribute, text, kind, cache));
                        }
                        Some(Condition::NonBlank) if text.trim().is_empty() => {
                            issues.push(Issue::BlankName {
                                attribute: attribute.to_string(),
                            });
                        }
                        _ => {}
                    }
                }
            }
        }

        issues
    }

    fn check_vocabulary(
        &self,
        attribute: &str,
        text: &str,
        kind: VocabularyKind,
        cache: &mut MatchCache,
    ) -> Option<Issue> {
        let vocabulary = self.rule_set.vocabulary(kind)?;
        if vocabulary.is_empty() {
            return None;
        }

        let suggestions = match cache.lookup(self.matcher, text, vocabulary) {
            MatchOutcome::Exact => return None,
            outcome @ (MatchOutcome::Suggest(_) | MatchOutcome::NoMatch) => outcome.suggestions(),
        };

        Some(Issue::NotInVocabulary {
            attribute: attribute.to_string(),
            value: text.to_string(),
            vocabulary: kind,
            suggestions,
        })
    }
}

fn wrong_type(attribute: &str, expected: ValueKind, value: &AttributeValue) -> Issue {
    Issue::WrongType {
        attribute: attribute.to_string(),
        expected,
        found: value.kind_label(),
    }
}

#[cfg(test)]
mod tests {
    use cfgm_model::ConventionVersion;
    use cfgm_standards::RuleRegistry;

    use super::*;

    fn run(version: ConventionVersion, attribute: &str, value: AttributeValue) -> Vec<Issue> {
        let registry = RuleRegistry::load().unwrap();
        let rule_set = registry.rule_set(version).unwrap();
        let spec = rule_set.attribute(attribute).unwrap();
        let matcher = VocabularyMatcher::default();
        AttributeChecker::new(rule_set, &matcher).check(
            attribute,
            &value,
            spec,
            &mut MatchCache::new(),
        )
    }

    #[test]
    fn numeric_attribute_rejects_text() {
        let issues = run(
            ConventionVersion::Cf16,
            "false_easting",
            AttributeValue::text("100"),
        );
        assert_eq!(
            issues,
            vec![Issue::WrongType {
                attribute: "false_easting".to_string(),
                expected: ValueKind::Numeric,
                found: "string",
            }]
        );
    }

    #[test]
    fn empty_numeric_array_is_wrong_type() {
        let issues = run(
            ConventionVersion::Cf16,
            "standard_parallel",
            AttributeValue::Numbers(vec![]),
        );
        assert!(matches!(
            issues.as_slice(),
            [Issue::WrongType { found: "empty numeric array", .. }]
        ));
    }

    #[test]
    fn text_attribute_rejects_numbers() {
        let issues = run(
            ConventionVersion::Cf17,
            "crs_wkt",
            AttributeValue::number(4326.0),
        );
        assert!(matches!(issues.as_slice(), [Issue::WrongType { .. }]));
    }

    #[test]
    fn vocabulary_names_are_checked() {
        assert!(
            run(
                ConventionVersion::Cf17,
                "reference_ellipsoid_name",
                AttributeValue::text("WGS 84"),
            )
            .is_empty()
        );

        let issues = run(
            ConventionVersion::Cf17,
            "prime_meridian_name",
            AttributeValue::text("Greenwhich"),
        );
        assert!(matches!(
            issues.as_slice(),
            [Issue::NotInVocabulary { suggestions, .. }] if suggestions[0] == "Greenwich"
        ));
    }

    #[test]
    fn projected_crs_name_must_not_be_blank() {
        let issues = run(
            ConventionVersion::Cf17,
            "projected_crs_name",
            AttributeValue::text("  "),
        );
        assert!(matches!(issues.as_slice(), [Issue::BlankName { .. }]));
        assert!(
            run(
                ConventionVersion::Cf17,
                "projected_crs_name",
                AttributeValue::text("NAD83 / UTM zone 18N"),
            )
            .is_empty()
        );
    }

    #[test]
    fn unflagged_attribute_skips_conditions() {
        assert!(
            run(
                ConventionVersion::Cf16,
                "false_northing",
                AttributeValue::number(-1.0e7),
            )
            .is_empty()
        );
    }
}
