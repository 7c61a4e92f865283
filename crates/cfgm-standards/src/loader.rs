//! CSV loaders for the embedded CF tables.
//!
//! # Grid mapping rows
//!
//! | Column | Content |
//! |--------|---------|
//! | `grid_mapping_name` | mapping name |
//! | `required` | space-separated attributes, all mandatory |
//! | `required_one_of` | `;`-separated groups of `|`-separated alternatives |
//! | `optional` | space-separated attributes |
//! | `coordinate_standard_names` | space-separated standard names |
//! | `exclusive` | `;`-separated groups of `|`-separated attributes |
//!
//! A `required_one_of` group becomes [`AttributeGroup::ExactlyOneOf`] and is
//! also recorded as an exclusive group. A `required` list that is itself
//! declared exclusive is read as a choice as well; the CF tables write some
//! alternatives that way.

use std::collections::BTreeSet;
use std::io::Cursor;

use cfgm_model::{
    AttributeGroup, AttributeTypeSpec, ControlledVocabulary, ConventionVersion, GridMappingRule,
    ValueKind, VocabularyKind,
};
use serde::Deserialize;

use crate::embedded;
use crate::error::{RegistryError, Result};

/// Entries one convention version adds to the tables.
#[derive(Debug, Clone)]
pub struct TableDelta {
    /// Version the entries belong to.
    pub version: ConventionVersion,
    /// New grid mapping rules.
    pub rules: Vec<GridMappingRule>,
    /// New attribute type entries.
    pub attributes: Vec<AttributeTypeSpec>,
    /// New vocabulary values, one vocabulary per kind.
    pub vocabularies: Vec<ControlledVocabulary>,
}

impl TableDelta {
    /// An empty delta.
    pub fn new(version: ConventionVersion) -> Self {
        Self {
            version,
            rules: Vec::new(),
            attributes: Vec::new(),
            vocabularies: Vec::new(),
        }
    }
}

/// Load the embedded delta for a version.
pub fn load_delta(version: ConventionVersion) -> Result<TableDelta> {
    let sources = embedded::sources_for_version(version);

    let (file, content) = sources.attributes;
    let attributes = parse_attributes(content, file)?;

    let (file, content) = sources.grid_mappings;
    let rules = parse_grid_mappings(content, file, version)?;

    let mut vocabularies = Vec::with_capacity(sources.vocabularies.len());
    for &(kind, file, content) in sources.vocabularies {
        vocabularies.push(parse_vocabulary(content, file, kind, version)?);
    }

    tracing::debug!(
        %version,
        rules = rules.len(),
        attributes = attributes.len(),
        vocabularies = vocabularies.len(),
        "Parsed embedded CF tables"
    );

    Ok(TableDelta {
        version,
        rules,
        attributes,
        vocabularies,
    })
}

/// Parse an attribute type table.
pub fn parse_attributes(content: &str, file: &str) -> Result<Vec<AttributeTypeSpec>> {
    let mut seen = BTreeSet::new();
    let mut specs = Vec::new();

    for row in read_rows::<AttributeRow>(content, file)? {
        let name = row.attribute.trim().to_string();
        if name.is_empty() {
            continue;
        }
        let kind = ValueKind::parse(&row.kind).map_err(|_| RegistryError::InvalidValue {
            field: "type",
            value: row.kind.clone(),
            file: file.to_string(),
        })?;
        let extra_condition = parse_flag(&row.extra_condition).ok_or_else(|| {
            RegistryError::InvalidValue {
                field: "extra_condition",
                value: row.extra_condition.clone(),
                file: file.to_string(),
            }
        })?;

        if !seen.insert(name.clone()) {
            return Err(RegistryError::DuplicateEntry {
                table: "attribute",
                key: name,
                file: file.to_string(),
            });
        }
        specs.push(AttributeTypeSpec::new(name, kind, extra_condition));
    }

    Ok(specs)
}

/// Parse a grid mapping rule table.
pub fn parse_grid_mappings(
    content: &str,
    file: &str,
    version: ConventionVersion,
) -> Result<Vec<GridMappingRule>> {
    let mut seen = BTreeSet::new();
    let mut rules = Vec::new();

    for row in read_rows::<GridMappingRow>(content, file)? {
        let name = row.grid_mapping_name.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            return Err(RegistryError::DuplicateEntry {
                table: "grid mapping",
                key: name,
                file: file.to_string(),
            });
        }
        rules.push(build_rule(name, version, &row));
    }

    Ok(rules)
}

/// Parse a single-column vocabulary table.
///
/// The published lists repeat a handful of names; repeats collapse into one
/// entry.
pub fn parse_vocabulary(
    content: &str,
    file: &str,
    kind: VocabularyKind,
    version: ConventionVersion,
) -> Result<ControlledVocabulary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut vocabulary = ControlledVocabulary::new(kind, version);
    let mut repeated = 0usize;

    for result in reader.records() {
        let record = result.map_err(|source| RegistryError::CsvRead {
            file: file.to_string(),
            source,
        })?;
        let Some(value) = record.get(0).map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        if !vocabulary.insert(value) {
            repeated += 1;
        }
    }

    if repeated > 0 {
        tracing::debug!(file, repeated, "Collapsed repeated vocabulary values");
    }

    Ok(vocabulary)
}

fn build_rule(name: String, version: ConventionVersion, row: &GridMappingRow) -> GridMappingRule {
    let all_of = split_list(&row.required);
    let choices = split_groups(&row.required_one_of);
    let mut exclusive = split_groups(&row.exclusive);

    let mut required = Vec::new();
    if !all_of.is_empty() {
        if all_of.len() > 1 && exclusive.iter().any(|group| same_members(group, &all_of)) {
            tracing::debug!(
                mapping = %name,
                "Required group is also exclusive; reading it as a choice"
            );
            required.push(AttributeGroup::ExactlyOneOf(all_of));
        } else {
            required.push(AttributeGroup::AllOf(all_of));
        }
    }
    for group in choices {
        if !exclusive.iter().any(|existing| same_members(existing, &group)) {
            exclusive.push(group.clone());
        }
        required.push(AttributeGroup::ExactlyOneOf(group));
    }

    GridMappingRule {
        name,
        version,
        required,
        optional: split_list(&row.optional),
        coordinate_standard_names: split_list(&row.coordinate_standard_names),
        exclusive,
    }
}

fn read_rows<T>(content: &str, file: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result.map_err(|source| RegistryError::CsvRead {
            file: file.to_string(),
            source,
        })?);
    }
    Ok(rows)
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split_whitespace().map(ToString::to_string).collect()
}

fn split_groups(cell: &str) -> Vec<Vec<String>> {
    cell.split(';')
        .map(|group| {
            group
                .split('|')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

fn same_members(a: &[String], b: &[String]) -> bool {
    let a: BTreeSet<&String> = a.iter().collect();
    let b: BTreeSet<&String> = b.iter().collect();
    a == b
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}

// =============================================================================
// CSV Row Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct AttributeRow {
    attribute: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    extra_condition: String,
}

#[derive(Debug, Deserialize)]
struct GridMappingRow {
    grid_mapping_name: String,
    #[serde(default)]
    required: String,
    #[serde(default)]
    required_one_of: String,
    #[serde(default)]
    optional: String,
    #[serde(default)]
    coordinate_standard_names: String,
    #[serde(default)]
    exclusive: String,
}
