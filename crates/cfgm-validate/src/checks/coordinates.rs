//! Coordinate standard names.

use std::collections::BTreeSet;

use cfgm_model::GridMappingRule;

use crate::issue::Issue;

/// Report expected standard names with no matching coordinate variable.
pub fn check(rule: &GridMappingRule, standard_names: &BTreeSet<String>) -> Vec<Issue> {
    rule.coordinate_standard_names
        .iter()
        .filter(|name| !standard_names.contains(*name))
        .map(|name| Issue::MissingCoordinate {
            standard_name: name.clone(),
            mapping: rule.name.clone(),
        })
        .collect()
}
