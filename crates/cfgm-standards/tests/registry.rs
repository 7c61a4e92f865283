use cfgm_model::{AttributeGroup, ConventionVersion, VocabularyKind};
use cfgm_standards::{RegistryError, RuleRegistry, RuleSet, TableDelta, load_delta};

fn registry() -> RuleRegistry {
    RuleRegistry::load().expect("embedded tables load")
}

#[test]
fn cf16_mappings_remain_resolvable_in_cf17() {
    let registry = registry();
    for name in registry.mapping_names(ConventionVersion::Cf16) {
        let old = registry
            .resolve_rule(ConventionVersion::Cf16, name)
            .unwrap();
        let new = registry
            .resolve_rule(ConventionVersion::Cf17, name)
            .unwrap_or_else(|| panic!("{name} missing from CF-1.7"));

        for attribute in old.known_attributes() {
            assert!(
                new.known_attributes().any(|a| a == attribute),
                "{name}: CF-1.7 dropped {attribute}"
            );
        }
        assert_eq!(new.version, ConventionVersion::Cf17);
    }
}

#[test]
fn cf17_adds_mappings() {
    let registry = registry();
    let cf16 = registry.mapping_names(ConventionVersion::Cf16);
    let cf17 = registry.mapping_names(ConventionVersion::Cf17);
    assert_eq!(cf16.len(), 13);
    assert_eq!(cf17.len(), 16);
    for name in ["geostationary", "oblique_mercator", "sinusoidal"] {
        assert!(!cf16.contains(&name));
        assert!(cf17.contains(&name));
    }
}

#[test]
fn vocabularies_are_cf17_only() {
    let registry = registry();
    for &kind in VocabularyKind::all() {
        let old = registry.vocabulary(ConventionVersion::Cf16, kind).unwrap();
        let new = registry.vocabulary(ConventionVersion::Cf17, kind).unwrap();
        assert!(old.is_empty(), "{kind:?} should be empty in CF-1.6");
        assert!(!new.is_empty(), "{kind:?} should be populated in CF-1.7");
        for value in new.iter() {
            assert!(!old.contains(value));
        }
    }

    let datums = registry
        .vocabulary(ConventionVersion::Cf17, VocabularyKind::HorizontalDatum)
        .unwrap();
    assert!(datums.contains("World Geodetic System 1984"));
    assert!(!datums.contains("world geodetic system 1984"));
}

#[test]
fn required_attributes_have_type_entries() {
    let registry = registry();
    for version in registry.versions() {
        let set = registry.rule_set(version).unwrap();
        for rule in set.rules() {
            for attribute in rule.known_attributes() {
                assert!(
                    set.attribute(attribute).is_some(),
                    "{version} {}: no type entry for {attribute}",
                    rule.name
                );
            }
        }
    }
}

#[test]
fn choice_groups_are_also_exclusive() {
    let registry = registry();
    for version in registry.versions() {
        for rule in registry.rule_set(version).unwrap().rules() {
            for group in &rule.required {
                if let AttributeGroup::ExactlyOneOf(names) = group {
                    assert!(names.iter().all(|n| rule.is_exclusive_member(n)));
                }
            }
        }
    }

    let mercator = registry
        .resolve_rule(ConventionVersion::Cf16, "mercator")
        .unwrap();
    assert!(mercator.required.iter().any(AttributeGroup::is_choice));
}

#[test]
fn oblique_mercator_uses_azimuth_of_central_line() {
    let registry = registry();
    let rule = registry
        .resolve_rule(ConventionVersion::Cf17, "oblique_mercator")
        .unwrap();
    assert!(
        rule.required_attributes()
            .any(|a| a == "azimuth_of_central_line")
    );
}

#[test]
fn replaying_a_delta_is_a_redefinition() {
    let base = RuleSet::base(load_delta(ConventionVersion::Cf16).unwrap()).unwrap();
    let cf17 = RuleSet::extend(&base, load_delta(ConventionVersion::Cf17).unwrap()).unwrap();

    let mut replay = TableDelta::new(ConventionVersion::Cf17);
    replay.rules = load_delta(ConventionVersion::Cf16).unwrap().rules;
    let err = RuleSet::extend(&base, replay).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Redefinition { table: "grid mapping", .. }
    ));

    // A delta built on CF-1.7 would need a CF-1.8 version to exist.
    let again = load_delta(ConventionVersion::Cf17).unwrap();
    assert!(matches!(
        RuleSet::extend(&cf17, again).unwrap_err(),
        RegistryError::MissingPredecessor { .. }
    ));
}
