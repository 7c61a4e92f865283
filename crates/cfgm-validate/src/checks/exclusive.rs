//! Mutually exclusive attributes.

use std::collections::{BTreeMap, BTreeSet};

use cfgm_model::{AttributeValue, GridMappingRule};

use crate::issue::Issue;

/// Report each exclusive group with more than one member present.
///
/// Present members keep the order the rule lists them in.
pub fn check(rule: &GridMappingRule, attributes: &BTreeMap<String, AttributeValue>) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen = BTreeSet::new();

    for group in &rule.exclusive {
        let members: BTreeSet<&str> = group.iter().map(String::as_str).collect();
        if !seen.insert(members) {
            continue;
        }

        let mut present: Vec<String> = Vec::new();
        for name in group {
            if attributes.contains_key(name) && !present.contains(name) {
                present.push(name.clone());
            }
        }
        if present.len() > 1 {
            issues.push(Issue::MutuallyExclusive {
                attributes: present,
                mapping: rule.name.clone(),
            });
        }
    }

    issues
}
