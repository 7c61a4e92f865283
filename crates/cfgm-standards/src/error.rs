//! Error types for building the rule registry.

use cfgm_model::ConventionVersion;
use thiserror::Error;

/// Errors that can occur while loading or merging the CF tables.
///
/// Every variant indicates broken table data, not bad user input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Failed to read or parse a CSV table.
    #[error("Failed to read CSV {file}: {source}")]
    CsvRead {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Invalid value in a CSV field.
    #[error("Invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
    },

    /// The same key appears twice in one table.
    #[error("Duplicate {table} entry '{key}' in {file}")]
    DuplicateEntry {
        table: &'static str,
        key: String,
        file: String,
    },

    /// A delta tries to redefine an entry its predecessor already published.
    #[error("{version} redefines {table} entry '{key}' inherited from {predecessor}")]
    Redefinition {
        version: ConventionVersion,
        predecessor: ConventionVersion,
        table: &'static str,
        key: String,
    },

    /// A rule references an attribute missing from the attribute table.
    #[error("{version} grid mapping '{mapping}' references unknown attribute '{attribute}'")]
    UnknownAttribute {
        version: ConventionVersion,
        mapping: String,
        attribute: String,
    },

    /// A rule's groups contradict each other.
    #[error("{version} grid mapping '{mapping}': {message}")]
    Contradiction {
        version: ConventionVersion,
        mapping: String,
        message: String,
    },

    /// A version was extended before its predecessor was loaded.
    #[error("{version} requires {predecessor} to be loaded first")]
    MissingPredecessor {
        version: ConventionVersion,
        predecessor: ConventionVersion,
    },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
