#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Zoning district and compliance verdict types.
//!
//! These mirror the JSON shapes returned by the permit API. Every
//! constraint field is optional: an absent field means the district
//! imposes no such limit, which the checks treat as compliant by
//! convention.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Minimum structure-to-boundary distances in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Setbacks {
    /// Distance from the front boundary.
    pub front: Option<f64>,
    /// Distance from the rear boundary.
    pub rear: Option<f64>,
    /// Distance from the left boundary.
    pub left: Option<f64>,
    /// Distance from the right boundary.
    pub right: Option<f64>,
    /// Uniform side distance for districts that do not distinguish
    /// left from right.
    pub sides: Option<f64>,
}

/// A zoning district with its planning constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoningDistrict {
    /// District identifier as issued by the assembly.
    pub id: String,
    /// Human-readable district name (e.g. "Residential Low Density").
    pub name: String,
    /// Short zone code (e.g. "R1").
    pub zone_code: Option<String>,
    /// Minimum plot size in square meters.
    pub min_plot_size: Option<f64>,
    /// Maximum site coverage as a fraction between 0 and 1.
    pub max_coverage: Option<f64>,
    /// Maximum building height in meters.
    pub max_height: Option<f64>,
    /// Required setbacks.
    pub setbacks: Option<Setbacks>,
    /// Free-text parking rule (e.g. "2 spaces per unit").
    pub parking_requirement: Option<String>,
    /// Free-text density rule (e.g. "40 dwellings per hectare").
    pub density: Option<String>,
    /// District boundary geometry.
    pub boundary: Option<geojson::Geometry>,
}

/// Facts about a proposed development, as filled in on the application.
///
/// Applicants complete forms incrementally, so every field is optional.
/// A missing value downgrades the matching check to
/// [`Compliance::Unknown`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Parcel size in square meters.
    pub plot_size: Option<f64>,
    /// Total construction footprint in square meters.
    pub construction_area: Option<f64>,
    /// Proposed building height in meters.
    pub building_height: Option<f64>,
    /// Declared number of dwelling or commercial units.
    pub units: Option<u32>,
    /// Off-street parking spaces provided.
    pub parking_spaces: Option<u32>,
    /// Proposed setbacks.
    pub setbacks: Option<Setbacks>,
}

/// Tri-state verdict for a single zoning check.
///
/// `Unknown` means the data needed to judge was missing; it must never
/// be collapsed into `Meets` or `Violates`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Compliance {
    /// The constraint is satisfied (or absent).
    Meets,
    /// The constraint is definitely not satisfied.
    Violates,
    /// The data needed to judge the constraint was missing.
    Unknown,
}

impl Compliance {
    /// Converts a definite comparison outcome into a verdict.
    #[must_use]
    pub const fn from_bool(meets: bool) -> Self {
        if meets { Self::Meets } else { Self::Violates }
    }

    /// Returns whether this verdict is a definite pass.
    #[must_use]
    pub const fn is_meets(self) -> bool {
        matches!(self, Self::Meets)
    }
}

/// Outcome of one zoning constraint check, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    /// What was checked (e.g. "Minimum plot size").
    pub requirement: String,
    /// The limit imposed by the district, formatted for display.
    pub expected: String,
    /// The value found on the application, formatted for display.
    pub actual: String,
    /// The verdict.
    pub status: Compliance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_round_trips_through_serde() {
        let json = serde_json::to_string(&Compliance::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
        let parsed: Compliance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Compliance::Unknown);
    }

    #[test]
    fn district_deserializes_with_absent_constraints() {
        let district: ZoningDistrict = serde_json::from_str(
            r#"{"id": "ZD-12", "name": "Residential Low Density",
                "zone_code": "R1", "min_plot_size": null,
                "max_coverage": null, "max_height": null,
                "setbacks": null, "parking_requirement": null,
                "density": null, "boundary": null}"#,
        )
        .unwrap();
        assert_eq!(district.id, "ZD-12");
        assert!(district.min_plot_size.is_none());
        assert!(district.boundary.is_none());
    }

    #[test]
    fn from_bool_maps_to_definite_verdicts() {
        assert_eq!(Compliance::from_bool(true), Compliance::Meets);
        assert_eq!(Compliance::from_bool(false), Compliance::Violates);
        assert!(!Compliance::Unknown.is_meets());
    }
}
