//! Validation issue types.
//!
//! Checks produce [`Issue`] values; each variant carries only the data its
//! message needs. Issues are converted to [`Finding`]s when the result is
//! assembled.

use cfgm_model::{Category, Finding, Severity, ValueKind, VocabularyKind};

/// Validation issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    // Resolution
    /// No tables exist for the requested convention version.
    UnsupportedVersion { version: String },
    /// The grid mapping name has no rule under the version.
    UnknownMapping { mapping: String, version: String },
    /// The bag's own `grid_mapping_name` disagrees with the requested name.
    NameMismatch { declared: String, requested: String },

    // Structure
    /// A required attribute is absent.
    MissingRequired { attribute: String, mapping: String },
    /// None of a required set of alternatives is present.
    MissingChoice {
        alternatives: Vec<String>,
        mapping: String,
    },
    /// Two or more attributes of an exclusive group are present.
    MutuallyExclusive {
        attributes: Vec<String>,
        mapping: String,
    },
    /// No coordinate variable carries an expected standard name.
    MissingCoordinate {
        standard_name: String,
        mapping: String,
    },

    // Extension
    /// Attribute without a type entry.
    UnrecognizedAttribute { attribute: String },

    // Type
    /// Value kind differs from the declared kind.
    WrongType {
        attribute: String,
        expected: ValueKind,
        found: &'static str,
    },
    /// Wrong number of values.
    WrongCardinality {
        attribute: String,
        expected: &'static str,
        found: usize,
    },
    /// A numeric value violates the attribute's range.
    OutOfRange {
        attribute: String,
        value: f64,
        allowed: &'static str,
    },
    /// A name attribute is empty or whitespace.
    BlankName { attribute: String },

    // Vocabulary
    /// A name is not in its controlled vocabulary.
    NotInVocabulary {
        attribute: String,
        value: String,
        vocabulary: VocabularyKind,
        suggestions: Vec<String>,
    },
}

impl Issue {
    /// Stable identifier of the check.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::UnsupportedVersion { .. } => "GM0001",
            Issue::UnknownMapping { .. } => "GM0002",
            Issue::NameMismatch { .. } => "GM0003",
            Issue::MissingRequired { .. } => "GM0101",
            Issue::MissingChoice { .. } => "GM0102",
            Issue::MutuallyExclusive { .. } => "GM0103",
            Issue::MissingCoordinate { .. } => "GM0104",
            Issue::UnrecognizedAttribute { .. } => "GM0201",
            Issue::WrongType { .. } => "GM0301",
            Issue::WrongCardinality { .. } => "GM0302",
            Issue::OutOfRange { .. } => "GM0303",
            Issue::BlankName { .. } => "GM0304",
            Issue::NotInVocabulary { .. } => "GM0401",
        }
    }

    /// Attribute the issue is about (if any).
    ///
    /// An exclusive group reports the first present member in rule order;
    /// the message names the others.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Issue::MissingRequired { attribute, .. }
            | Issue::UnrecognizedAttribute { attribute }
            | Issue::WrongType { attribute, .. }
            | Issue::WrongCardinality { attribute, .. }
            | Issue::OutOfRange { attribute, .. }
            | Issue::BlankName { attribute }
            | Issue::NotInVocabulary { attribute, .. } => Some(attribute),
            Issue::NameMismatch { .. } => Some("grid_mapping_name"),
            Issue::MutuallyExclusive { attributes, .. } => attributes.first().map(String::as_str),
            Issue::UnsupportedVersion { .. }
            | Issue::UnknownMapping { .. }
            | Issue::MissingChoice { .. }
            | Issue::MissingCoordinate { .. } => None,
        }
    }

    /// Category for this issue type.
    pub fn category(&self) -> Category {
        match self {
            Issue::UnsupportedVersion { .. } => Category::Version,
            Issue::UnknownMapping { .. } | Issue::UnrecognizedAttribute { .. } => {
                Category::Extension
            }
            Issue::NameMismatch { .. }
            | Issue::MissingRequired { .. }
            | Issue::MissingChoice { .. }
            | Issue::MutuallyExclusive { .. }
            | Issue::MissingCoordinate { .. } => Category::Structure,
            Issue::WrongType { .. }
            | Issue::WrongCardinality { .. }
            | Issue::OutOfRange { .. }
            | Issue::BlankName { .. } => Category::Type,
            Issue::NotInVocabulary { .. } => Category::Vocabulary,
        }
    }

    /// Severity. Only unrecognized attributes are tolerated.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnrecognizedAttribute { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self {
            Issue::UnsupportedVersion { version } => {
                format!("Convention version '{version}' is not supported")
            }
            Issue::UnknownMapping { mapping, version } => {
                format!("Unknown grid mapping '{mapping}' for CF-{version}")
            }
            Issue::NameMismatch {
                declared,
                requested,
            } => format!(
                "grid_mapping_name attribute is '{declared}' but the mapping was validated as '{requested}'"
            ),
            Issue::MissingRequired { attribute, mapping } => {
                format!("Missing required attribute {attribute} for mapping {mapping}")
            }
            Issue::MissingChoice {
                alternatives,
                mapping,
            } => format!(
                "Mapping {mapping} requires exactly one of {}",
                alternatives.join(", ")
            ),
            Issue::MutuallyExclusive {
                attributes,
                mapping,
            } => format!(
                "Attributes {} are mutually exclusive for mapping {mapping}",
                attributes.join(" and ")
            ),
            Issue::MissingCoordinate {
                standard_name,
                mapping,
            } => format!(
                "No coordinate variable with standard_name {standard_name} for mapping {mapping}"
            ),
            Issue::UnrecognizedAttribute { attribute } => {
                format!("Unrecognized attribute {attribute}")
            }
            Issue::WrongType {
                attribute,
                expected,
                found,
            } => format!(
                "Attribute {attribute} has wrong type: expected {}, found {found}",
                expected.label()
            ),
            Issue::WrongCardinality {
                attribute,
                expected,
                found,
            } => format!("Attribute {attribute} takes {expected}, found {found}"),
            Issue::OutOfRange {
                attribute,
                value,
                allowed,
            } => format!("Attribute {attribute} value {value} is outside {allowed}"),
            Issue::BlankName { attribute } => format!("Attribute {attribute} is blank"),
            Issue::NotInVocabulary {
                attribute,
                value,
                vocabulary,
                suggestions,
            } => {
                let hint = if suggestions.is_empty() {
                    String::new()
                } else {
                    format!("; did you mean {}?", quoted(suggestions))
                };
                format!(
                    "Attribute {attribute} value '{value}' is not a known {vocabulary} name{hint}"
                )
            }
        }
    }

    /// Near-match alternatives, best first.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Issue::NotInVocabulary { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// Convert into a reportable finding.
    pub fn to_finding(&self) -> Finding {
        Finding {
            code: self.code().to_string(),
            category: self.category(),
            severity: self.severity(),
            attribute: self.attribute().map(ToString::to_string),
            message: self.message(),
            suggestions: self.suggestions().to_vec(),
        }
    }
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_attribute_is_the_only_warning() {
        let warning = Issue::UnrecognizedAttribute {
            attribute: "my_extension".to_string(),
        };
        assert_eq!(warning.severity(), Severity::Warning);
        assert_eq!(warning.category(), Category::Extension);

        let unknown = Issue::UnknownMapping {
            mapping: "made_up_projection".to_string(),
            version: "1.7".to_string(),
        };
        assert_eq!(unknown.severity(), Severity::Error);
    }

    #[test]
    fn exclusive_message_names_every_member() {
        let issue = Issue::MutuallyExclusive {
            attributes: vec![
                "standard_parallel".to_string(),
                "scale_factor_at_projection_origin".to_string(),
            ],
            mapping: "mercator".to_string(),
        };
        assert_eq!(issue.attribute(), Some("standard_parallel"));
        assert_eq!(
            issue.message(),
            "Attributes standard_parallel and scale_factor_at_projection_origin are mutually \
             exclusive for mapping mercator"
        );
    }

    #[test]
    fn vocabulary_finding_carries_suggestions() {
        let issue = Issue::NotInVocabulary {
            attribute: "prime_meridian_name".to_string(),
            value: "Greenwhich".to_string(),
            vocabulary: VocabularyKind::PrimeMeridian,
            suggestions: vec!["Greenwich".to_string()],
        };
        let finding = issue.to_finding();
        assert_eq!(finding.code, "GM0401");
        assert_eq!(finding.category, Category::Vocabulary);
        assert_eq!(finding.suggestions, vec!["Greenwich"]);
        assert!(finding.message.ends_with("did you mean 'Greenwich'?"));
    }
}
