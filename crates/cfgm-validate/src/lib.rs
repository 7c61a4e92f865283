//! CF grid mapping validation.
//!
//! Checks a grid mapping declaration (a mapping name plus its attribute bag)
//! against the rule tables of a CF convention version:
//!
//! - **Structure**: required attributes, exactly-one-of choices, mutually
//!   exclusive attributes, coordinate standard names
//! - **Types**: numeric vs string values, ranges and value counts
//! - **Vocabularies**: datum, prime meridian and ellipsoid names, with
//!   "did you mean" suggestions
//!
//! Findings are data; validation never fails with an `Err`.
//!
//! # Example
//!
//! ```
//! use cfgm_standards::RuleRegistry;
//! use cfgm_validate::{GridMappingInput, validate};
//!
//! let registry = RuleRegistry::load().unwrap();
//! let input = GridMappingInput::new("mercator")
//!     .with_attribute("longitude_of_projection_origin", 10.0)
//!     .with_attribute("standard_parallel", 20.0);
//!
//! let result = validate(&registry, "1.6", &input);
//! assert!(result.passed());
//! ```

mod checks;
mod issue;
mod validator;

pub use checks::conditions::Condition;
pub use issue::Issue;
pub use validator::{GridMappingInput, GridMappingValidator, validate};
