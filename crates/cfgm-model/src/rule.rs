//! Grid mapping structural rules.

use serde::{Deserialize, Serialize};

use crate::version::ConventionVersion;

/// A required attribute group.
///
/// The CF tables encode both plain conjunction and structural alternatives
/// as bare tuples; the two are kept apart here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "attributes", rename_all = "snake_case")]
pub enum AttributeGroup {
    /// Every named attribute must be present.
    AllOf(Vec<String>),
    /// Exactly one of the named attributes must be present.
    ExactlyOneOf(Vec<String>),
}

impl AttributeGroup {
    /// Attribute names in this group.
    pub fn attributes(&self) -> &[String] {
        match self {
            Self::AllOf(names) | Self::ExactlyOneOf(names) => names,
        }
    }

    /// Whether this group is a choice between alternatives.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::ExactlyOneOf(_))
    }
}

/// Structural rule for one `grid_mapping_name` under one convention version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMappingRule {
    /// Grid mapping name (e.g., "lambert_conformal_conic").
    pub name: String,
    /// Convention version this rule belongs to.
    pub version: ConventionVersion,
    /// Required attribute groups; every group must be satisfied.
    pub required: Vec<AttributeGroup>,
    /// Attributes that may be present but are never mandatory.
    pub optional: Vec<String>,
    /// Standard names expected on the associated coordinate variables.
    pub coordinate_standard_names: Vec<String>,
    /// Groups of which at most one member may be present.
    pub exclusive: Vec<Vec<String>>,
}

impl GridMappingRule {
    /// Every attribute named by the required groups, in declaration order.
    pub fn required_attributes(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .flat_map(AttributeGroup::attributes)
            .map(String::as_str)
    }

    /// Every attribute this rule mentions (required, optional, exclusive).
    pub fn known_attributes(&self) -> impl Iterator<Item = &str> {
        self.required_attributes()
            .chain(self.optional.iter().map(String::as_str))
            .chain(self.exclusive.iter().flatten().map(String::as_str))
    }

    /// Whether the attribute is a member of any exclusive group.
    pub fn is_exclusive_member(&self, attribute: &str) -> bool {
        self.exclusive
            .iter()
            .any(|group| group.iter().any(|name| name == attribute))
    }
}
