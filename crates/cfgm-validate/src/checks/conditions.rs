//! Extra conditions for flagged attributes.
//!
//! The attribute table only says *that* an attribute has an extra condition.
//! Which condition applies is decided here by attribute name.

use cfgm_model::VocabularyKind;

use crate::issue::Issue;

const LATITUDE: &str = "[-90, 90]";
const LONGITUDE: &str = "[-180, 360]";
const POSITIVE: &str = "(0, inf)";

/// Value-level condition attached to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Single value in [-90, 90].
    Latitude,
    /// Single value in [-180, 360]; signed and 0-360 longitudes are both valid.
    Longitude,
    /// Single value greater than zero.
    Positive,
    /// One or two values, each a latitude.
    StandardParallel,
    /// Three, six or seven Helmert parameters.
    HelmertParameters,
    /// Text drawn from a controlled vocabulary.
    Vocabulary(VocabularyKind),
    /// Any text that is not blank.
    NonBlank,
}

impl Condition {
    /// Condition for an attribute name, if one is defined.
    pub fn for_attribute(attribute: &str) -> Option<Self> {
        let condition = match attribute {
            "latitude_of_projection_origin" => Self::Latitude,
            "longitude_of_central_meridian"
            | "longitude_of_prime_meridian"
            | "longitude_of_projection_origin"
            | "straight_vertical_longitude_from_pole" => Self::Longitude,
            "scale_factor_at_central_meridian" | "scale_factor_at_projection_origin" => {
                Self::Positive
            }
            "standard_parallel" => Self::StandardParallel,
            "towgs84" => Self::HelmertParameters,
            "horizontal_datum_name" => Self::Vocabulary(VocabularyKind::HorizontalDatum),
            "prime_meridian_name" => Self::Vocabulary(VocabularyKind::PrimeMeridian),
            "reference_ellipsoid_name" => Self::Vocabulary(VocabularyKind::ReferenceEllipsoid),
            "projected_crs_name" => Self::NonBlank,
            _ => return None,
        };
        Some(condition)
    }

    /// Check numeric values. Text conditions are not handled here.
    pub fn check_numbers(&self, attribute: &str, values: &[f64]) -> Option<Issue> {
        match self {
            Self::Latitude => single(attribute, values)
                .or_else(|| in_range(attribute, values, -90.0, 90.0, LATITUDE)),
            Self::Longitude => single(attribute, values)
                .or_else(|| in_range(attribute, values, -180.0, 360.0, LONGITUDE)),
            Self::Positive => single(attribute, values).or_else(|| {
                values
                    .iter()
                    .find(|v| !(v.is_finite() && **v > 0.0))
                    .map(|&value| out_of_range(attribute, value, POSITIVE))
            }),
            Self::StandardParallel => {
                if values.len() > 2 {
                    Some(cardinality(attribute, "one or two values", values.len()))
                } else {
                    in_range(attribute, values, -90.0, 90.0, LATITUDE)
                }
            }
            Self::HelmertParameters => (!matches!(values.len(), 3 | 6 | 7))
                .then(|| cardinality(attribute, "3, 6 or 7 values", values.len())),
            Self::Vocabulary(_) | Self::NonBlank => None,
        }
    }
}

fn single(attribute: &str, values: &[f64]) -> Option<Issue> {
    (values.len() != 1).then(|| cardinality(attribute, "exactly one value", values.len()))
}

/// First value outside `[min, max]`. NaN and infinities are always outside.
fn in_range(
    attribute: &str,
    values: &[f64],
    min: f64,
    max: f64,
    allowed: &'static str,
) -> Option<Issue> {
    values
        .iter()
        .find(|v| !(min..=max).contains(*v))
        .map(|&value| out_of_range(attribute, value, allowed))
}

fn out_of_range(attribute: &str, value: f64, allowed: &'static str) -> Issue {
    Issue::OutOfRange {
        attribute: attribute.to_string(),
        value,
        allowed,
    }
}

fn cardinality(attribute: &str, expected: &'static str, found: usize) -> Issue {
    Issue::WrongCardinality {
        attribute: attribute.to_string(),
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(attribute: &str, values: &[f64]) -> Option<Issue> {
        Condition::for_attribute(attribute)
            .and_then(|condition| condition.check_numbers(attribute, values))
    }

    #[test]
    fn latitude_bounds_are_inclusive() {
        for ok in [-90.0, 0.0, 90.0] {
            assert_eq!(check("latitude_of_projection_origin", &[ok]), None);
        }
        for bad in [-90.0001, 90.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check("latitude_of_projection_origin", &[bad]),
                Some(Issue::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn longitude_accepts_signed_and_unsigned() {
        assert_eq!(check("longitude_of_central_meridian", &[-180.0]), None);
        assert_eq!(check("longitude_of_central_meridian", &[359.5]), None);
        assert!(check("longitude_of_central_meridian", &[360.5]).is_some());
        assert!(check("straight_vertical_longitude_from_pole", &[-181.0]).is_some());
    }

    #[test]
    fn longitude_bounds_are_inclusive() {
        for ok in [-180.0, 360.0] {
            assert_eq!(check("longitude_of_projection_origin", &[ok]), None);
        }
        for bad in [-180.0001, 360.0001, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                check("longitude_of_projection_origin", &[bad]),
                Some(Issue::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn scale_factor_must_be_positive() {
        assert_eq!(check("scale_factor_at_projection_origin", &[0.9996]), None);
        assert!(check("scale_factor_at_projection_origin", &[0.0]).is_some());
        assert!(check("scale_factor_at_central_meridian", &[-1.0]).is_some());
    }

    #[test]
    fn scalar_conditions_reject_vectors() {
        assert!(matches!(
            check("latitude_of_projection_origin", &[10.0, 20.0]),
            Some(Issue::WrongCardinality { found: 2, .. })
        ));
    }

    #[test]
    fn standard_parallel_takes_one_or_two() {
        assert_eq!(check("standard_parallel", &[33.0]), None);
        assert_eq!(check("standard_parallel", &[33.0, 45.0]), None);
        assert!(matches!(
            check("standard_parallel", &[10.0, 20.0, 30.0]),
            Some(Issue::WrongCardinality { found: 3, .. })
        ));
        assert!(matches!(
            check("standard_parallel", &[33.0, 91.0]),
            Some(Issue::OutOfRange { value, .. }) if value == 91.0
        ));
    }

    #[test]
    fn towgs84_parameter_counts() {
        assert_eq!(check("towgs84", &[0.0; 3]), None);
        assert_eq!(check("towgs84", &[0.0; 7]), None);
        assert!(check("towgs84", &[0.0; 4]).is_some());
    }

    #[test]
    fn unflagged_names_have_no_condition() {
        assert_eq!(Condition::for_attribute("false_easting"), None);
        assert_eq!(
            Condition::for_attribute("prime_meridian_name"),
            Some(Condition::Vocabulary(VocabularyKind::PrimeMeridian))
        );
    }
}
