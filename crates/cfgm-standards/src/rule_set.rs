//! Rule set for a single convention version.
//!
//! A version's rule set is its predecessor's set plus an explicit delta.
//! Deltas may only add: a delta entry that reuses a key the predecessor
//! already defines is rejected instead of silently overriding it.

use std::collections::{BTreeMap, BTreeSet};

use cfgm_model::{
    AttributeGroup, AttributeTypeSpec, ControlledVocabulary, ConventionVersion, GridMappingRule,
    VocabularyKind,
};

use crate::error::{RegistryError, Result};
use crate::loader::TableDelta;

/// Immutable tables for one convention version.
#[derive(Debug, Clone)]
pub struct RuleSet {
    version: ConventionVersion,
    rules: BTreeMap<String, GridMappingRule>,
    attributes: BTreeMap<String, AttributeTypeSpec>,
    vocabularies: BTreeMap<VocabularyKind, ControlledVocabulary>,
}

impl RuleSet {
    /// Build the first rule set from a delta with no predecessor.
    pub fn base(delta: TableDelta) -> Result<Self> {
        let version = delta.version;
        let mut set = Self::empty(version);

        for spec in delta.attributes {
            if set.attributes.contains_key(&spec.name) {
                return Err(duplicate("attribute", spec.name, version));
            }
            set.attributes.insert(spec.name.clone(), spec);
        }
        for rule in delta.rules {
            if set.rules.contains_key(&rule.name) {
                return Err(duplicate("grid mapping", rule.name, version));
            }
            set.rules.insert(rule.name.clone(), rule);
        }
        for vocabulary in delta.vocabularies {
            let target = set.vocabulary_mut(vocabulary.kind);
            for value in vocabulary.iter() {
                if !target.insert(value) {
                    return Err(duplicate("vocabulary", value.to_string(), version));
                }
            }
        }

        set.verify()?;
        Ok(set)
    }

    /// Build a rule set by merging a delta onto its predecessor.
    pub fn extend(predecessor: &RuleSet, delta: TableDelta) -> Result<Self> {
        let version = delta.version;
        if version.predecessor() != Some(predecessor.version) {
            return Err(RegistryError::MissingPredecessor {
                version,
                predecessor: version.predecessor().unwrap_or(predecessor.version),
            });
        }

        let redefinition = |table: &'static str, key: String| RegistryError::Redefinition {
            version,
            predecessor: predecessor.version,
            table,
            key,
        };

        let mut set = predecessor.inherit(version);

        for spec in delta.attributes {
            if set.attributes.contains_key(&spec.name) {
                return Err(redefinition("attribute", spec.name));
            }
            set.attributes.insert(spec.name.clone(), spec);
        }
        for mut rule in delta.rules {
            if set.rules.contains_key(&rule.name) {
                return Err(redefinition("grid mapping", rule.name));
            }
            rule.version = version;
            set.rules.insert(rule.name.clone(), rule);
        }
        for vocabulary in delta.vocabularies {
            let target = set.vocabulary_mut(vocabulary.kind);
            for value in vocabulary.iter() {
                if !target.insert(value) {
                    return Err(redefinition("vocabulary", value.to_string()));
                }
            }
        }

        set.verify()?;
        Ok(set)
    }

    /// Convention version of this set.
    pub fn version(&self) -> ConventionVersion {
        self.version
    }

    /// Rule for a grid mapping name.
    pub fn rule(&self, name: &str) -> Option<&GridMappingRule> {
        self.rules.get(name)
    }

    /// Type entry for an attribute name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeTypeSpec> {
        self.attributes.get(name)
    }

    /// Vocabulary of the given kind (empty when the version publishes none).
    pub fn vocabulary(&self, kind: VocabularyKind) -> Option<&ControlledVocabulary> {
        self.vocabularies.get(&kind)
    }

    /// All rules in name order.
    pub fn rules(&self) -> impl Iterator<Item = &GridMappingRule> {
        self.rules.values()
    }

    /// All attribute type entries in name order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeTypeSpec> {
        self.attributes.values()
    }

    /// Grid mapping names in lexical order.
    pub fn mapping_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    fn empty(version: ConventionVersion) -> Self {
        let vocabularies = VocabularyKind::all()
            .iter()
            .map(|&kind| (kind, ControlledVocabulary::new(kind, version)))
            .collect();
        Self {
            version,
            rules: BTreeMap::new(),
            attributes: BTreeMap::new(),
            vocabularies,
        }
    }

    fn inherit(&self, version: ConventionVersion) -> Self {
        let rules = self
            .rules
            .iter()
            .map(|(name, rule)| {
                let mut rule = rule.clone();
                rule.version = version;
                (name.clone(), rule)
            })
            .collect();
        let vocabularies = self
            .vocabularies
            .iter()
            .map(|(&kind, vocabulary)| {
                let inherited = ControlledVocabulary::from_values(kind, version, vocabulary.iter());
                (kind, inherited)
            })
            .collect();
        Self {
            version,
            rules,
            attributes: self.attributes.clone(),
            vocabularies,
        }
    }

    fn vocabulary_mut(&mut self, kind: VocabularyKind) -> &mut ControlledVocabulary {
        let version = self.version;
        self.vocabularies
            .entry(kind)
            .or_insert_with(|| ControlledVocabulary::new(kind, version))
    }

    /// Check every rule against the attribute table and against itself.
    fn verify(&self) -> Result<()> {
        for rule in self.rules.values() {
            for attribute in rule.known_attributes() {
                if !self.attributes.contains_key(attribute) {
                    return Err(RegistryError::UnknownAttribute {
                        version: self.version,
                        mapping: rule.name.clone(),
                        attribute: attribute.to_string(),
                    });
                }
            }

            let optional: BTreeSet<&str> = rule.optional.iter().map(String::as_str).collect();
            for attribute in rule.required_attributes() {
                if optional.contains(attribute) {
                    return Err(self.contradiction(
                        rule,
                        format!("'{attribute}' is both required and optional"),
                    ));
                }
            }

            for group in &rule.required {
                if let AttributeGroup::AllOf(names) = group
                    && let Some(name) = names.iter().find(|name| rule.is_exclusive_member(name))
                {
                    return Err(self.contradiction(
                        rule,
                        format!("'{name}' is required but belongs to an exclusive group"),
                    ));
                }
                if let AttributeGroup::ExactlyOneOf(names) = group
                    && names.len() < 2
                {
                    return Err(
                        self.contradiction(rule, "choice group needs at least two members".into())
                    );
                }
            }

            if let Some(group) = rule.exclusive.iter().find(|group| group.len() < 2) {
                return Err(self.contradiction(
                    rule,
                    format!("exclusive group [{}] needs at least two members", group.join(", ")),
                ));
            }
        }
        Ok(())
    }

    fn contradiction(&self, rule: &GridMappingRule, message: String) -> RegistryError {
        RegistryError::Contradiction {
            version: self.version,
            mapping: rule.name.clone(),
            message,
        }
    }
}

fn duplicate(table: &'static str, key: String, version: ConventionVersion) -> RegistryError {
    RegistryError::DuplicateEntry {
        table,
        key,
        file: version.to_string(),
    }
}
