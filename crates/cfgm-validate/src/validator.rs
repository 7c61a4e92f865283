//! Grid mapping validator.

use std::collections::{BTreeMap, BTreeSet};

use cfgm_match::{MatchCache, MatcherConfig, VocabularyMatcher};
use cfgm_model::{AttributeValue, ConventionVersion, ValidationResult};
use cfgm_standards::{RuleRegistry, RuleSet};
use serde::{Deserialize, Serialize};

use crate::checks::{attribute::AttributeChecker, coordinates, exclusive, required};
use crate::issue::Issue;

/// One grid mapping declaration handed over by the dataset reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridMappingInput {
    /// Mapping name to validate against (e.g., "mercator").
    pub mapping_name: String,
    /// Attributes of the grid mapping variable.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Standard names of the associated coordinate variables.
    ///
    /// `None` when the reader did not resolve coordinate variables; the
    /// coordinate check is then skipped.
    #[serde(default)]
    pub coordinate_standard_names: Option<BTreeSet<String>>,
}

impl GridMappingInput {
    pub fn new(mapping_name: impl Into<String>) -> Self {
        Self {
            mapping_name: mapping_name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the coordinate standard names.
    #[must_use]
    pub fn with_coordinates<I, S>(mut self, standard_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coordinate_standard_names = Some(standard_names.into_iter().map(Into::into).collect());
        self
    }
}

/// Validates grid mapping declarations against a registry.
///
/// Holds no mutable state; one validator can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct GridMappingValidator<'a> {
    registry: &'a RuleRegistry,
    matcher: VocabularyMatcher,
}

impl<'a> GridMappingValidator<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self {
            registry,
            matcher: VocabularyMatcher::default(),
        }
    }

    /// Use a different vocabulary matcher configuration.
    #[must_use]
    pub fn with_matcher(mut self, config: MatcherConfig) -> Self {
        self.matcher = VocabularyMatcher::new(config);
        self
    }

    /// Validate one declaration.
    pub fn validate(&self, version: &str, input: &GridMappingInput) -> ValidationResult {
        self.validate_with_cache(version, input, &mut MatchCache::new())
    }

    /// Validate a batch, sharing vocabulary lookups across it.
    ///
    /// Results are returned in input order.
    pub fn validate_many(
        &self,
        version: &str,
        inputs: &[GridMappingInput],
    ) -> Vec<ValidationResult> {
        let mut cache = MatchCache::new();
        let results = inputs
            .iter()
            .map(|input| self.validate_with_cache(version, input, &mut cache))
            .collect();
        tracing::debug!(
            inputs = inputs.len(),
            threshold = self.matcher.config().threshold,
            distinct_values = cache.len(),
            cache_hits = cache.hits(),
            "Validated grid mapping batch"
        );
        results
    }

    /// Validate one declaration with a caller-owned match cache.
    pub fn validate_with_cache(
        &self,
        version: &str,
        input: &GridMappingInput,
        cache: &mut MatchCache,
    ) -> ValidationResult {
        let span = tracing::debug_span!(
            "validate_grid_mapping",
            mapping = %input.mapping_name,
            version = %version
        );
        let _guard = span.enter();

        let Some(rule_set) = ConventionVersion::parse(version)
            .ok()
            .and_then(|parsed| self.registry.rule_set(parsed))
        else {
            tracing::debug!("Unsupported convention version");
            return single(
                input,
                version,
                Issue::UnsupportedVersion {
                    version: version.trim().to_string(),
                },
            );
        };

        let result = self.run(rule_set, input, cache);
        tracing::debug!(
            errors = result.error_count(),
            warnings = result.warning_count(),
            "Grid mapping validated"
        );
        result
    }

    fn run(
        &self,
        rule_set: &RuleSet,
        input: &GridMappingInput,
        cache: &mut MatchCache,
    ) -> ValidationResult {
        let version = rule_set.version().as_str();

        // 1. Resolve the rule
        let Some(rule) = rule_set.rule(&input.mapping_name) else {
            return single(
                input,
                version,
                Issue::UnknownMapping {
                    mapping: input.mapping_name.clone(),
                    version: version.to_string(),
                },
            );
        };
        tracing::trace!(
            required = rule.required.len(),
            exclusive = rule.exclusive.len(),
            "Resolved grid mapping rule"
        );

        let mut issues = Vec::new();

        if let Some(declared) = input
            .attributes
            .get("grid_mapping_name")
            .and_then(AttributeValue::as_text)
            && declared != input.mapping_name
        {
            issues.push(Issue::NameMismatch {
                declared: declared.to_string(),
                requested: input.mapping_name.clone(),
            });
        }

        // 2. Required groups
        issues.extend(required::check(rule, &input.attributes));

        // 3. Exclusive groups
        issues.extend(exclusive::check(rule, &input.attributes));

        // 4. Attribute types and extra conditions
        let checker = AttributeChecker::new(rule_set, &self.matcher);
        for (name, value) in &input.attributes {
            match rule_set.attribute(name) {
                Some(spec) => issues.extend(checker.check(name, value, spec, cache)),
                None => issues.push(Issue::UnrecognizedAttribute {
                    attribute: name.clone(),
                }),
            }
        }

        // 5. Coordinate standard names
        if let Some(standard_names) = &input.coordinate_standard_names {
            issues.extend(coordinates::check(rule, standard_names));
        }

        let mut result = ValidationResult::new(&input.mapping_name, version);
        for issue in &issues {
            result.push(issue.to_finding());
        }
        result
    }
}

/// Validate one declaration with the default matcher.
pub fn validate(
    registry: &RuleRegistry,
    version: &str,
    input: &GridMappingInput,
) -> ValidationResult {
    GridMappingValidator::new(registry).validate(version, input)
}

fn single(input: &GridMappingInput, version: &str, issue: Issue) -> ValidationResult {
    let mut result = ValidationResult::new(&input.mapping_name, version);
    result.push(issue.to_finding());
    result
}
