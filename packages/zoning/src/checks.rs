//! Zoning constraint evaluation for a proposed development.
//!
//! Verdict policy: an absent district constraint means there is nothing
//! to check, so the row reports [`Compliance::Meets`]; a present
//! constraint whose application datum is missing reports
//! [`Compliance::Unknown`]. The two cases are never conflated.

use geojson::Geometry;
use permit_map_geometry::relate;
use permit_map_zoning_models::{Compliance, ComplianceCheck, ProjectDetails, ZoningDistrict};

use crate::parking;

/// Shown in the `expected` column when a district imposes no limit.
const NO_LIMIT: &str = "no limit";
/// Shown in the `actual` column when the application omits the datum.
const NOT_PROVIDED: &str = "not provided";
/// Placeholder for cells with nothing to display.
const EMPTY_CELL: &str = "-";

/// Evaluates every constraint family of `district` against `project`.
///
/// Always returns one row per family, in a stable display order, so the
/// review table keeps a consistent shape regardless of which constraints
/// the district defines.
#[must_use]
pub fn evaluate_district(
    district: &ZoningDistrict,
    project: &ProjectDetails,
) -> Vec<ComplianceCheck> {
    vec![
        check_plot_size(district, project),
        check_coverage(district, project),
        check_height(district, project),
        check_setbacks(district, project),
        check_parking(district, project),
        check_density(district),
    ]
}

/// Finds the first district whose boundary fully contains the parcel.
///
/// Districts without a boundary never match.
#[must_use]
pub fn locate_district<'a>(
    parcel: &Geometry,
    districts: &'a [ZoningDistrict],
) -> Option<&'a ZoningDistrict> {
    districts
        .iter()
        .find(|district| relate::is_contained(Some(parcel), district.boundary.as_ref()))
}

/// Applies the shared verdict policy for a numeric limit.
fn judge(limit: Option<f64>, actual: Option<f64>, meets: fn(f64, f64) -> bool) -> Compliance {
    match (limit, actual) {
        (None, _) => Compliance::Meets,
        (Some(_), None) => Compliance::Unknown,
        (Some(limit), Some(actual)) => Compliance::from_bool(meets(actual, limit)),
    }
}

fn check_plot_size(district: &ZoningDistrict, project: &ProjectDetails) -> ComplianceCheck {
    ComplianceCheck {
        requirement: "Minimum plot size".to_string(),
        expected: district
            .min_plot_size
            .map_or_else(|| NO_LIMIT.to_string(), |min| format!("at least {min:.0} m²")),
        actual: project
            .plot_size
            .map_or_else(|| NOT_PROVIDED.to_string(), |size| format!("{size:.0} m²")),
        status: judge(district.min_plot_size, project.plot_size, |actual, limit| {
            actual >= limit
        }),
    }
}

fn check_coverage(district: &ZoningDistrict, project: &ProjectDetails) -> ComplianceCheck {
    let ratio = coverage_ratio(project);
    ComplianceCheck {
        requirement: "Maximum site coverage".to_string(),
        expected: district.max_coverage.map_or_else(
            || NO_LIMIT.to_string(),
            |max| format!("at most {:.0}%", max * 100.0),
        ),
        actual: ratio.map_or_else(
            || NOT_PROVIDED.to_string(),
            |value| format!("{:.0}%", value * 100.0),
        ),
        status: judge(district.max_coverage, ratio, |actual, limit| actual <= limit),
    }
}

/// Construction footprint over plot size, when both are known and the
/// plot size is positive.
fn coverage_ratio(project: &ProjectDetails) -> Option<f64> {
    let plot = project.plot_size.filter(|size| *size > 0.0)?;
    let built = project.construction_area?;
    Some(built / plot)
}

fn check_height(district: &ZoningDistrict, project: &ProjectDetails) -> ComplianceCheck {
    ComplianceCheck {
        requirement: "Maximum building height".to_string(),
        expected: district
            .max_height
            .map_or_else(|| NO_LIMIT.to_string(), |max| format!("at most {max:.1} m")),
        actual: project
            .building_height
            .map_or_else(|| NOT_PROVIDED.to_string(), |height| format!("{height:.1} m")),
        status: judge(district.max_height, project.building_height, |actual, limit| {
            actual <= limit
        }),
    }
}

fn check_setbacks(district: &ZoningDistrict, project: &ProjectDetails) -> ComplianceCheck {
    let requirement = "Setbacks".to_string();
    let Some(limits) = district.setbacks else {
        return ComplianceCheck {
            requirement,
            expected: NO_LIMIT.to_string(),
            actual: EMPTY_CELL.to_string(),
            status: Compliance::Meets,
        };
    };
    let proposed = project.setbacks.unwrap_or_default();
    let required: Vec<(&str, f64, Option<f64>)> = [
        ("front", limits.front, proposed.front),
        ("rear", limits.rear, proposed.rear),
        ("left", limits.left.or(limits.sides), proposed.left.or(proposed.sides)),
        (
            "right",
            limits.right.or(limits.sides),
            proposed.right.or(proposed.sides),
        ),
    ]
    .into_iter()
    .filter_map(|(side, limit, actual)| limit.map(|limit| (side, limit, actual)))
    .collect();

    if required.is_empty() {
        return ComplianceCheck {
            requirement,
            expected: NO_LIMIT.to_string(),
            actual: EMPTY_CELL.to_string(),
            status: Compliance::Meets,
        };
    }

    let expected = required
        .iter()
        .map(|(side, limit, _)| format!("{side} at least {limit:.1} m"))
        .collect::<Vec<_>>()
        .join(", ");
    let actual = required
        .iter()
        .map(|(side, _, value)| match value {
            Some(value) => format!("{side} {value:.1} m"),
            None => format!("{side} {NOT_PROVIDED}"),
        })
        .collect::<Vec<_>>()
        .join(", ");

    // A clear violation on one side outranks a missing value on another.
    let mut status = Compliance::Meets;
    for &(_, limit, value) in &required {
        match value {
            None => {
                if status != Compliance::Violates {
                    status = Compliance::Unknown;
                }
            }
            Some(value) if value < limit => status = Compliance::Violates,
            Some(_) => {}
        }
    }

    ComplianceCheck {
        requirement,
        expected,
        actual,
        status,
    }
}

fn check_parking(district: &ZoningDistrict, project: &ProjectDetails) -> ComplianceCheck {
    let requirement = "Parking".to_string();
    let actual = project
        .parking_spaces
        .map_or_else(|| NOT_PROVIDED.to_string(), |count| format!("{count} spaces"));
    let rule = district
        .parking_requirement
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());
    let Some(rule) = rule else {
        return ComplianceCheck {
            requirement,
            expected: NO_LIMIT.to_string(),
            actual,
            status: Compliance::Meets,
        };
    };
    let expected = rule.to_string();
    let (Some(required), Some(provided)) = (required_spaces(rule, project), project.parking_spaces)
    else {
        // Unparseable rule, per-unit rule without a unit count, or no
        // declared space count: cannot verify.
        log::debug!("parking rule cannot be verified: {rule}");
        return ComplianceCheck {
            requirement,
            expected,
            actual,
            status: Compliance::Unknown,
        };
    };
    ComplianceCheck {
        requirement,
        expected,
        actual,
        status: Compliance::from_bool(f64::from(provided) >= required),
    }
}

/// Resolves the rule text to a concrete space count for this project.
///
/// Per-unit rates scale by the declared unit count; guessing a default
/// count would turn "cannot verify" into a verdict, so an absent count
/// keeps the result `None`.
fn required_spaces(rule: &str, project: &ProjectDetails) -> Option<f64> {
    let parsed = parking::parse_parking_requirement(Some(rule), project.construction_area)?;
    if parking::per_unit_rate(rule).is_some() {
        return project.units.map(|units| parsed * f64::from(units));
    }
    Some(parsed)
}

fn check_density(district: &ZoningDistrict) -> ComplianceCheck {
    let rule = district
        .density
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());
    match rule {
        // Free text the engine does not evaluate numerically; the rule
        // is surfaced with an indeterminate verdict.
        Some(text) => ComplianceCheck {
            requirement: "Density".to_string(),
            expected: text.to_string(),
            actual: "not assessed".to_string(),
            status: Compliance::Unknown,
        },
        None => ComplianceCheck {
            requirement: "Density".to_string(),
            expected: NO_LIMIT.to_string(),
            actual: EMPTY_CELL.to_string(),
            status: Compliance::Meets,
        },
    }
}
