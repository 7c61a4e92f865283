use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Finding severity. Only errors fail a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The grid mapping is not conformant.
    Error,
    /// Tolerated, but worth a look.
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Finding category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Missing required attribute, exclusive attributes together, missing coordinate.
    Structure,
    /// Wrong value kind, out-of-range value, wrong cardinality.
    Type,
    /// Name outside its controlled vocabulary.
    Vocabulary,
    /// Attribute or mapping the tables do not know.
    Extension,
    /// Convention version without tables.
    Version,
}

impl Category {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Type => "Type",
            Self::Vocabulary => "Vocabulary",
            Self::Extension => "Extension",
            Self::Version => "Version",
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier of the check that produced this finding.
    pub code: String,
    /// Finding category.
    pub category: Category,
    /// Severity level.
    pub severity: Severity,
    /// Offending attribute name (if applicable).
    pub attribute: Option<String>,
    /// Human-readable explanation.
    pub message: String,
    /// Near-match alternatives ("did you mean"), best first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Finding {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Outcome of validating one grid mapping declaration.
///
/// Serializes with the derived `passed`, `error_count` and `warning_count`
/// alongside the stored fields; deserialization ignores them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ValidationResult {
    /// Grid mapping name that was validated.
    pub mapping_name: String,
    /// Convention version as requested by the caller.
    pub version: String,
    /// Findings in check order.
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(mapping_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            mapping_name: mapping_name.into(),
            version: version.into(),
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// True when no error-severity finding was recorded.
    pub fn passed(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// Findings about a specific attribute.
    pub fn findings_for<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings
            .iter()
            .filter(move |f| f.attribute.as_deref() == Some(attribute))
    }

    /// False when the requested convention version had no tables.
    pub fn is_version_supported(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|f| f.category == Category::Version)
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 6)?;
        state.serialize_field("mapping_name", &self.mapping_name)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("error_count", &self.error_count())?;
        state.serialize_field("warning_count", &self.warning_count())?;
        state.serialize_field("findings", &self.findings)?;
        state.end()
    }
}
