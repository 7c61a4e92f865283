//! Versioned rule registry.

use std::collections::BTreeMap;

use cfgm_model::{
    AttributeTypeSpec, ControlledVocabulary, ConventionVersion, GridMappingRule, VocabularyKind,
};

use crate::error::{RegistryError, Result};
use crate::loader::load_delta;
use crate::rule_set::RuleSet;

/// Grid mapping rules, attribute types and vocabularies for every supported
/// convention version.
///
/// The registry is built once and then only read, so it can be shared
/// across threads behind a plain reference.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    sets: BTreeMap<ConventionVersion, RuleSet>,
}

impl RuleRegistry {
    /// Build the registry from the embedded tables.
    ///
    /// Each version is loaded as a delta and merged onto its predecessor.
    pub fn load() -> Result<Self> {
        let mut sets: BTreeMap<ConventionVersion, RuleSet> = BTreeMap::new();

        for &version in ConventionVersion::all() {
            let delta = load_delta(version)?;
            let set = match version.predecessor() {
                None => RuleSet::base(delta)?,
                Some(predecessor) => {
                    let previous = sets.get(&predecessor).ok_or(
                        RegistryError::MissingPredecessor {
                            version,
                            predecessor,
                        },
                    )?;
                    RuleSet::extend(previous, delta)?
                }
            };

            tracing::info!(
                %version,
                mappings = set.rules().count(),
                attributes = set.attributes().count(),
                "Loaded CF rule set"
            );
            sets.insert(version, set);
        }

        Ok(Self { sets })
    }

    /// Build a registry from prepared rule sets.
    pub fn from_sets(sets: impl IntoIterator<Item = RuleSet>) -> Self {
        Self {
            sets: sets.into_iter().map(|set| (set.version(), set)).collect(),
        }
    }

    /// Rule set for a version, if supported.
    pub fn rule_set(&self, version: ConventionVersion) -> Option<&RuleSet> {
        self.sets.get(&version)
    }

    /// Supported versions, oldest first.
    pub fn versions(&self) -> impl Iterator<Item = ConventionVersion> + '_ {
        self.sets.keys().copied()
    }

    /// Look up the rule for a grid mapping name under a version.
    pub fn resolve_rule(&self, version: ConventionVersion, name: &str) -> Option<&GridMappingRule> {
        self.sets.get(&version)?.rule(name)
    }

    /// Look up the type entry for an attribute under a version.
    pub fn attribute_spec(
        &self,
        version: ConventionVersion,
        name: &str,
    ) -> Option<&AttributeTypeSpec> {
        self.sets.get(&version)?.attribute(name)
    }

    /// Vocabulary of a kind under a version.
    ///
    /// Versions that publish no values for a kind return an empty
    /// vocabulary; only unsupported versions return `None`.
    pub fn vocabulary(
        &self,
        version: ConventionVersion,
        kind: VocabularyKind,
    ) -> Option<&ControlledVocabulary> {
        self.sets.get(&version)?.vocabulary(kind)
    }

    /// Grid mapping names known under a version, in lexical order.
    pub fn mapping_names(&self, version: ConventionVersion) -> Vec<&str> {
        self.sets
            .get(&version)
            .map(|set| set.mapping_names().collect())
            .unwrap_or_default()
    }
}
