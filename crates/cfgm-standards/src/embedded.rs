//! Embedded CF tables.
//!
//! Every table is embedded at compile time using `include_str!()`, so the
//! registry needs no file I/O at runtime.
//!
//! # Structure
//!
//! - CF-1.6: base grid mapping rules and attribute types
//! - CF-1.7: additions only (new mappings, new attributes, the three
//!   geodetic name vocabularies)
//!
//! # Adding a convention version
//!
//! Add a `data/cf-X.Y/` directory holding only the entries the revision
//! introduces, add the constants below and a [`ConventionVersion`] variant,
//! then extend [`sources_for_version`]. The loader rejects any entry that
//! redefines something an earlier version already published.

use cfgm_model::{ConventionVersion, VocabularyKind};

// =============================================================================
// CF-1.6
// =============================================================================

/// CF-1.6 grid mapping rules.
pub const CF_1_6_GRID_MAPPINGS: &str = include_str!("../data/cf-1.6/grid_mappings.csv");

/// CF-1.6 attribute type table.
pub const CF_1_6_ATTRIBUTES: &str = include_str!("../data/cf-1.6/attributes.csv");

// =============================================================================
// CF-1.7 (delta over CF-1.6)
// =============================================================================

/// Grid mappings added in CF-1.7.
pub const CF_1_7_GRID_MAPPINGS: &str = include_str!("../data/cf-1.7/grid_mappings.csv");

/// Attributes added in CF-1.7.
pub const CF_1_7_ATTRIBUTES: &str = include_str!("../data/cf-1.7/attributes.csv");

/// Horizontal datum names, from the CF `horiz_datum.csv` list.
pub const CF_1_7_HORIZONTAL_DATUMS: &str = include_str!("../data/cf-1.7/horiz_datum.csv");

/// Prime meridian names, from the CF `prime_meridian.csv` list.
pub const CF_1_7_PRIME_MERIDIANS: &str = include_str!("../data/cf-1.7/prime_meridian.csv");

/// Reference ellipsoid names, from the CF `ellipsoid.csv` list.
pub const CF_1_7_ELLIPSOIDS: &str = include_str!("../data/cf-1.7/ellipsoid.csv");

/// Raw table content for one convention version.
///
/// Each entry is a `(file name, CSV content)` pair; the file name is only
/// used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct VersionSources {
    pub grid_mappings: (&'static str, &'static str),
    pub attributes: (&'static str, &'static str),
    pub vocabularies: &'static [(VocabularyKind, &'static str, &'static str)],
}

/// Get the embedded tables a version introduces.
pub fn sources_for_version(version: ConventionVersion) -> VersionSources {
    match version {
        ConventionVersion::Cf16 => VersionSources {
            grid_mappings: ("cf-1.6/grid_mappings.csv", CF_1_6_GRID_MAPPINGS),
            attributes: ("cf-1.6/attributes.csv", CF_1_6_ATTRIBUTES),
            vocabularies: &[],
        },
        ConventionVersion::Cf17 => VersionSources {
            grid_mappings: ("cf-1.7/grid_mappings.csv", CF_1_7_GRID_MAPPINGS),
            attributes: ("cf-1.7/attributes.csv", CF_1_7_ATTRIBUTES),
            vocabularies: &[
                (
                    VocabularyKind::HorizontalDatum,
                    "cf-1.7/horiz_datum.csv",
                    CF_1_7_HORIZONTAL_DATUMS,
                ),
                (
                    VocabularyKind::PrimeMeridian,
                    "cf-1.7/prime_meridian.csv",
                    CF_1_7_PRIME_MERIDIANS,
                ),
                (
                    VocabularyKind::ReferenceEllipsoid,
                    "cf-1.7/ellipsoid.csv",
                    CF_1_7_ELLIPSOIDS,
                ),
            ],
        },
    }
}
