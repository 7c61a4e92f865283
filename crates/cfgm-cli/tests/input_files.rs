//! Integration tests for reading and checking declaration files.

use std::fs;
use std::path::PathBuf;

use cfgm_cli::input::read_declarations;
use cfgm_cli::report::render_text;
use cfgm_standards::RuleRegistry;
use cfgm_validate::GridMappingValidator;

fn unique_temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "cfgm-{}-{}-{}.json",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn checks_a_batch_file() {
    let path = unique_temp_file(
        "batch",
        r#"[
            {
                "grid_mapping_name": "transverse_mercator",
                "attributes": {
                    "scale_factor_at_central_meridian": 0.9996,
                    "longitude_of_central_meridian": -75,
                    "latitude_of_projection_origin": 0,
                    "false_easting": 500000
                },
                "coordinate_standard_names": ["projection_x_coordinate", "projection_y_coordinate"]
            },
            {
                "attributes": {
                    "grid_mapping_name": "lambert_azimuthal_equal_area",
                    "longitude_of_projection_origin": 10
                }
            }
        ]"#,
    );

    let inputs = read_declarations(&path).unwrap();
    fs::remove_file(&path).ok();

    let registry = RuleRegistry::load().unwrap();
    let results = GridMappingValidator::new(&registry).validate_many("CF-1.7", &inputs);
    assert!(results[0].passed());
    assert!(!results[1].passed());

    let text = render_text(&results);
    assert!(text.starts_with("transverse_mercator [CF-1.7] PASS"));
    assert!(text.contains(
        "Missing required attribute latitude_of_projection_origin for mapping lambert_azimuthal_equal_area"
    ));
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("cfgm-does-not-exist.json");
    let err = read_declarations(&path).unwrap_err();
    assert!(format!("{err:#}").contains("cfgm-does-not-exist.json"));
}
