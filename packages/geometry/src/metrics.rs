//! Area, perimeter, and vertex-count reductions over `GeoJSON` geometries.
//!
//! Raw values are in meters or square meters; the `format_` wrappers
//! bucket them into the units the review screens display (m²/ha/km² for
//! surfaces, m/km for lengths). Any failure collapses to `"N/A"` after
//! logging.

use geo::{ChamberlainDuquetteArea, Distance, Haversine, Polygon};
use geojson::{Geometry, Position, Value};

use crate::{GeometryError, ring_to_line_string};

/// Sentinel returned whenever a measurement cannot be produced.
pub const NOT_AVAILABLE: &str = "N/A";

const SQ_METERS_PER_HECTARE: f64 = 10_000.0;
const SQ_METERS_PER_SQ_KM: f64 = 1_000_000.0;
const METERS_PER_KM: f64 = 1_000.0;

/// A raw measurement before display formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    /// Meters for linear geometries, square meters otherwise.
    pub value: f64,
    /// Whether the value is a length rather than a surface.
    pub linear: bool,
}

/// Counts every coordinate in the geometry, recursively for collections.
///
/// A `Point` counts as 1; polygon counts include the closing duplicate
/// of each ring.
#[must_use]
pub fn vertex_count(geometry: &Geometry) -> usize {
    count_value(&geometry.value)
}

fn count_value(value: &Value) -> usize {
    match value {
        Value::Point(_) => 1,
        Value::MultiPoint(positions) | Value::LineString(positions) => positions.len(),
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines.iter().map(Vec::len).sum(),
        Value::MultiPolygon(polygons) => polygons.iter().flatten().map(Vec::len).sum(),
        Value::GeometryCollection(members) => members.iter().map(vertex_count).sum(),
    }
}

/// Formats the area of a geometry for display.
///
/// Linear geometries report their length instead. Missing or malformed
/// geometry yields `"N/A"`.
#[must_use]
pub fn format_area(geometry: Option<&Geometry>) -> String {
    let Some(geometry) = geometry else {
        log::warn!("area requested for a missing geometry");
        return NOT_AVAILABLE.to_string();
    };
    match try_measure(&geometry.value) {
        Ok(measure) if measure.linear => format_length(measure.value),
        Ok(measure) => format_surface(measure.value),
        Err(err) => {
            log::warn!("failed to measure geometry: {err}");
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Formats the perimeter of a geometry for display.
///
/// Point geometries have no outline and report the literal `"0 m"`.
/// Missing or malformed geometry yields `"N/A"`.
#[must_use]
pub fn format_perimeter(geometry: Option<&Geometry>) -> String {
    let Some(geometry) = geometry else {
        log::warn!("perimeter requested for a missing geometry");
        return NOT_AVAILABLE.to_string();
    };
    if matches!(geometry.value, Value::Point(_) | Value::MultiPoint(_)) {
        return "0 m".to_string();
    }
    match try_perimeter(&geometry.value) {
        Ok(meters) => format_length(meters),
        Err(err) => {
            log::warn!("failed to compute perimeter: {err}");
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Measures a geometry: spherical-excess area in m² for polygonal kinds,
/// haversine length in meters for linear kinds, zero for points.
///
/// A collection sums both kinds into one accumulator; the `linear` flag
/// is late-bound, so a mixed collection formats with the length units.
///
/// # Errors
///
/// Returns an error for empty coordinate sequences or positions with
/// fewer than two coordinates.
pub fn try_measure(value: &Value) -> Result<Measure, GeometryError> {
    match value {
        Value::Point(_) | Value::MultiPoint(_) => Ok(Measure {
            value: 0.0,
            linear: false,
        }),
        Value::LineString(line) => Ok(Measure {
            value: path_length_m(line)?,
            linear: true,
        }),
        Value::MultiLineString(lines) => {
            let mut total = 0.0;
            for line in lines {
                total += path_length_m(line)?;
            }
            Ok(Measure {
                value: total,
                linear: true,
            })
        }
        Value::Polygon(rings) => Ok(Measure {
            value: rings_area_m2(rings)?,
            linear: false,
        }),
        Value::MultiPolygon(polygons) => {
            let mut total = 0.0;
            for rings in polygons {
                total += rings_area_m2(rings)?;
            }
            Ok(Measure {
                value: total,
                linear: false,
            })
        }
        Value::GeometryCollection(members) => {
            let mut total = 0.0;
            let mut linear = false;
            for member in members {
                let measure = try_measure(&member.value)?;
                total += measure.value;
                linear |= measure.linear;
            }
            Ok(Measure {
                value: total,
                linear,
            })
        }
    }
}

/// Sums ring lengths for polygonal kinds and path lengths for linear
/// kinds, recursively for collections. Points contribute zero.
///
/// # Errors
///
/// Returns an error for empty coordinate sequences or positions with
/// fewer than two coordinates.
pub fn try_perimeter(value: &Value) -> Result<f64, GeometryError> {
    match value {
        Value::Point(_) | Value::MultiPoint(_) => Ok(0.0),
        Value::LineString(line) => path_length_m(line),
        Value::MultiLineString(lines) => {
            let mut total = 0.0;
            for line in lines {
                total += path_length_m(line)?;
            }
            Ok(total)
        }
        Value::Polygon(rings) => rings_perimeter_m(rings),
        Value::MultiPolygon(polygons) => {
            let mut total = 0.0;
            for rings in polygons {
                total += rings_perimeter_m(rings)?;
            }
            Ok(total)
        }
        Value::GeometryCollection(members) => {
            let mut total = 0.0;
            for member in members {
                total += try_perimeter(&member.value)?;
            }
            Ok(total)
        }
    }
}

/// Spherical-excess area of a ring set. Every ring contributes
/// positively, holes included; parcel boundaries in the portal's data
/// are single-ring.
fn rings_area_m2(rings: &[Vec<Position>]) -> Result<f64, GeometryError> {
    if rings.is_empty() {
        return Err(GeometryError::EmptyCoordinates { context: "polygon" });
    }
    let mut total = 0.0;
    for ring in rings {
        let exterior = ring_to_line_string(ring, "polygon ring")?;
        total += Polygon::new(exterior, Vec::new()).chamberlain_duquette_unsigned_area();
    }
    Ok(total)
}

/// Ring lengths summed, holes included.
fn rings_perimeter_m(rings: &[Vec<Position>]) -> Result<f64, GeometryError> {
    if rings.is_empty() {
        return Err(GeometryError::EmptyCoordinates { context: "polygon" });
    }
    let mut total = 0.0;
    for ring in rings {
        total += path_length_m(ring)?;
    }
    Ok(total)
}

/// Haversine length of a coordinate sequence in meters.
fn path_length_m(line: &[Position]) -> Result<f64, GeometryError> {
    let path = ring_to_line_string(line, "line string")?;
    Ok(path
        .points()
        .zip(path.points().skip(1))
        .map(|(a, b)| Haversine.distance(a, b))
        .sum())
}

fn format_surface(sq_meters: f64) -> String {
    if sq_meters < SQ_METERS_PER_HECTARE {
        format!("{sq_meters:.2} m²")
    } else if sq_meters < SQ_METERS_PER_SQ_KM {
        format!("{:.2} ha", sq_meters / SQ_METERS_PER_HECTARE)
    } else {
        format!("{:.2} km²", sq_meters / SQ_METERS_PER_SQ_KM)
    }
}

fn format_length(meters: f64) -> String {
    if meters < METERS_PER_KM {
        format!("{meters:.2} m")
    } else {
        format!("{:.2} km", meters / METERS_PER_KM)
    }
}
