//! JSON input files for `cfgm check`.
//!
//! A file holds one grid mapping declaration or an array of them:
//!
//! ```json
//! {
//!   "grid_mapping_name": "mercator",
//!   "attributes": { "longitude_of_projection_origin": 10, "standard_parallel": 20 },
//!   "coordinate_standard_names": ["projection_x_coordinate", "projection_y_coordinate"]
//! }
//! ```
//!
//! `grid_mapping_name` may be left out when the attributes carry it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result, bail};
use cfgm_model::AttributeValue;
use cfgm_validate::GridMappingInput;
use serde::Deserialize;

/// One declaration as written in the input file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    #[serde(default)]
    pub grid_mapping_name: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    #[serde(default)]
    pub coordinate_standard_names: Option<BTreeSet<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Declaration>),
    One(Declaration),
}

impl Declaration {
    /// Convert into validator input, resolving the mapping name.
    pub fn into_input(self) -> Result<GridMappingInput> {
        let mapping_name = match self.grid_mapping_name {
            Some(name) => name,
            None => match self.attributes.get("grid_mapping_name") {
                Some(AttributeValue::Text(name)) => name.clone(),
                _ => bail!("declaration has no grid_mapping_name"),
            },
        };
        Ok(GridMappingInput {
            mapping_name,
            attributes: self.attributes,
            coordinate_standard_names: self.coordinate_standard_names,
        })
    }
}

/// Parse declarations from JSON text.
pub fn parse_declarations(json: &str) -> Result<Vec<GridMappingInput>> {
    let document: Document = serde_json::from_str(json).context("parse grid mapping JSON")?;
    let declarations = match document {
        Document::Many(declarations) => declarations,
        Document::One(declaration) => vec![declaration],
    };
    declarations
        .into_iter()
        .enumerate()
        .map(|(index, declaration)| {
            declaration
                .into_input()
                .with_context(|| format!("declaration #{}", index + 1))
        })
        .collect()
}

/// Read declarations from a JSON file.
pub fn read_declarations(path: &Path) -> Result<Vec<GridMappingInput>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    parse_declarations(&json).with_context(|| format!("load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_declaration() {
        let inputs = parse_declarations(
            r#"{
                "grid_mapping_name": "mercator",
                "attributes": { "longitude_of_projection_origin": 10, "standard_parallel": 20 },
                "coordinate_standard_names": ["projection_x_coordinate", "projection_y_coordinate"]
            }"#,
        )
        .unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].mapping_name, "mercator");
        assert_eq!(inputs[0].coordinate_standard_names.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn name_falls_back_to_attribute() {
        let inputs = parse_declarations(
            r#"[{ "attributes": { "grid_mapping_name": "latitude_longitude" } }]"#,
        )
        .unwrap();
        assert_eq!(inputs[0].mapping_name, "latitude_longitude");
        assert!(inputs[0].coordinate_standard_names.is_none());
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = parse_declarations(r#"[{}, { "attributes": { "grid_mapping_name": 3 } }]"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("declaration #1"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_declarations("{ not json").is_err());
    }
}
