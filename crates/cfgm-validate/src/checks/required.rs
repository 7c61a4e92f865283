//! Required attribute groups.

use std::collections::BTreeMap;

use cfgm_model::{AttributeGroup, AttributeValue, GridMappingRule};

use crate::issue::Issue;

/// Check that every required group is satisfied.
///
/// An `AllOf` group reports each absent member. An `ExactlyOneOf` group
/// reports only when no member is present; two or more present members are
/// left to the exclusive check.
pub fn check(rule: &GridMappingRule, attributes: &BTreeMap<String, AttributeValue>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in &rule.required {
        match group {
            AttributeGroup::AllOf(names) => {
                for name in names {
                    if !attributes.contains_key(name) {
                        issues.push(Issue::MissingRequired {
                            attribute: name.clone(),
                            mapping: rule.name.clone(),
                        });
                    }
                }
            }
            AttributeGroup::ExactlyOneOf(names) => {
                if !names.iter().any(|name| attributes.contains_key(name)) {
                    issues.push(Issue::MissingChoice {
                        alternatives: names.clone(),
                        mapping: rule.name.clone(),
                    });
                }
            }
        }
    }

    issues
}
