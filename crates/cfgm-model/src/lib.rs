//! Data model for validating CF grid mapping declarations.
//!
//! A grid mapping variable names a projection through `grid_mapping_name`
//! and carries the projection parameters as attributes. This crate holds the
//! types shared by the rule registry, the vocabulary matcher and the
//! validator:
//!
//! - [`ConventionVersion`]: CF revisions with encoded tables
//! - [`AttributeTypeSpec`] / [`AttributeValue`]: attribute typing and raw values
//! - [`GridMappingRule`] / [`AttributeGroup`]: structural rules per mapping
//! - [`ControlledVocabulary`]: datum, prime meridian and ellipsoid names
//! - [`ValidationResult`] / [`Finding`]: what a validation pass reports

pub mod attribute;
pub mod conformance;
pub mod error;
pub mod rule;
pub mod version;
pub mod vocabulary;

pub use attribute::{AttributeTypeSpec, AttributeValue, ValueKind};
pub use conformance::{Category, Finding, Severity, ValidationResult};
pub use error::{ModelError, Result};
pub use rule::{AttributeGroup, GridMappingRule};
pub use version::ConventionVersion;
pub use vocabulary::{ControlledVocabulary, VocabularyKind};
