//! Grid mapping attribute types and values.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Declared value type of a grid mapping attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// One or more numeric scalars.
    Numeric,
    /// A single text scalar.
    Text,
}

impl ValueKind {
    /// Parse the single-letter code used by the CF attribute table ("N" or "S").
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(Self::Numeric),
            "S" => Ok(Self::Text),
            _ => Err(ModelError::UnknownValueKind(s.to_string())),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Type entry for a single attribute in the CF attribute table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTypeSpec {
    /// Attribute name (e.g., "false_easting").
    pub name: String,
    /// Expected value type.
    pub kind: ValueKind,
    /// Whether a value-level condition (range, cardinality, vocabulary)
    /// applies on top of the type check.
    pub extra_condition: bool,
}

impl AttributeTypeSpec {
    /// Create a new attribute type entry.
    pub fn new(name: impl Into<String>, kind: ValueKind, extra_condition: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            extra_condition,
        }
    }
}

/// Raw attribute value as read from a dataset.
///
/// netCDF attributes are either a text scalar or a vector of numbers; a
/// numeric scalar is a vector of length one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAttributeValue")]
pub enum AttributeValue {
    /// Numeric values (scalar or vector).
    Numbers(Vec<f64>),
    /// A text scalar.
    Text(String),
}

impl AttributeValue {
    /// Build a numeric scalar value.
    pub fn number(value: f64) -> Self {
        Self::Numbers(vec![value])
    }

    /// Build a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric values, if this is a non-empty numeric attribute.
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Self::Numbers(values) if !values.is_empty() => Some(values),
            _ => None,
        }
    }

    /// Text content, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Numbers(_) => None,
        }
    }

    /// Short description of the stored kind, for messages.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Numbers(values) if values.is_empty() => "empty numeric array",
            Self::Numbers(_) => "numeric",
            Self::Text(_) => "string",
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<Vec<f64>> for AttributeValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Numbers(values)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => write!(f, "'{value}'"),
            Self::Numbers(values) if values.len() == 1 => write!(f, "{}", values[0]),
            Self::Numbers(values) => {
                let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Numbers(values) if values.len() == 1 => serializer.serialize_f64(values[0]),
            Self::Numbers(values) => values.serialize(serializer),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// Wire shape accepted when deserializing attribute values.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttributeValue {
    Number(f64),
    Numbers(Vec<f64>),
    Text(String),
}

impl From<RawAttributeValue> for AttributeValue {
    fn from(raw: RawAttributeValue) -> Self {
        match raw {
            RawAttributeValue::Number(value) => Self::Numbers(vec![value]),
            RawAttributeValue::Numbers(values) => Self::Numbers(values),
            RawAttributeValue::Text(value) => Self::Text(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cf_type_codes() {
        assert_eq!(ValueKind::parse("N"), Ok(ValueKind::Numeric));
        assert_eq!(ValueKind::parse(" s "), Ok(ValueKind::Text));
        assert!(ValueKind::parse("D").is_err());
    }

    #[test]
    fn deserializes_scalars_vectors_and_text() {
        let scalar: AttributeValue = serde_json::from_str("25.0").unwrap();
        assert_eq!(scalar, AttributeValue::number(25.0));

        let integer: AttributeValue = serde_json::from_str("10").unwrap();
        assert_eq!(integer, AttributeValue::number(10.0));

        let vector: AttributeValue = serde_json::from_str("[25.0, 45.0]").unwrap();
        assert_eq!(vector, AttributeValue::Numbers(vec![25.0, 45.0]));

        let text: AttributeValue = serde_json::from_str("\"WGS 84\"").unwrap();
        assert_eq!(text, AttributeValue::text("WGS 84"));
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let json = serde_json::to_string(&AttributeValue::Numbers(vec![25.0, 45.0])).unwrap();
        assert_eq!(json, "[25.0,45.0]");
        let json = serde_json::to_string(&AttributeValue::text("Oslo")).unwrap();
        assert_eq!(json, "\"Oslo\"");
    }

    #[test]
    fn empty_numeric_array_is_not_numeric() {
        let value = AttributeValue::Numbers(vec![]);
        assert!(value.as_numbers().is_none());
        assert_eq!(value.kind_label(), "empty numeric array");
    }

    #[test]
    fn display_formats_values() {
        assert_eq!(AttributeValue::number(1.5).to_string(), "1.5");
        assert_eq!(AttributeValue::Numbers(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(AttributeValue::text("Paris").to_string(), "'Paris'");
    }
}
