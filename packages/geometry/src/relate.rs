//! Containment and proximity predicates over `GeoJSON` geometries.
//!
//! These answer "does this parcel sit inside its zoning district" and
//! "is the project site close enough to a registered location". Both
//! predicates swallow malformed input: the cause is logged and the
//! answer is `false`, so a broken boundary never blocks a review.

use geo::{Centroid, Contains, Distance, Haversine, Point, Polygon};
use geojson::{Geometry, Position, Value};

use crate::position_to_point;

/// Default distance threshold for [`is_near`], in meters.
pub const DEFAULT_PROXIMITY_METERS: f64 = 100.0;

/// Returns whether `inner` lies fully inside the `outer` polygon.
///
/// Point and polygon inners use a proper containment test; any other
/// inner kind is reduced to its centroid first. Missing inputs, a
/// non-polygon outer, or an unconvertible geometry all yield `false`.
/// A polygon contains itself.
#[must_use]
pub fn is_contained(inner: Option<&Geometry>, outer: Option<&Geometry>) -> bool {
    let (Some(inner), Some(outer)) = (inner, outer) else {
        return false;
    };
    let Some(boundary) = outer_polygon(outer) else {
        return false;
    };
    match &inner.value {
        Value::Point(position) => match position_to_point(position) {
            Ok(point) => boundary.contains(&point),
            Err(err) => {
                log::warn!("invalid point for containment test: {err}");
                false
            }
        },
        Value::Polygon(_) => {
            to_geo_polygon(inner).is_some_and(|parcel| boundary.contains(&parcel))
        }
        _ => centroid(inner).is_some_and(|center| boundary.contains(&center)),
    }
}

/// Returns whether the representative points of `a` and `b` lie within
/// `max_distance_meters` of each other along a great circle.
///
/// The representative point is the centroid when one exists, otherwise
/// the first coordinate. Missing inputs yield `false`.
#[must_use]
pub fn is_near(a: Option<&Geometry>, b: Option<&Geometry>, max_distance_meters: f64) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    let (Some(point_a), Some(point_b)) = (representative_point(a), representative_point(b))
    else {
        return false;
    };
    Haversine.distance(point_a, point_b) <= max_distance_meters
}

/// The outer side of a containment test must be a polygon.
fn outer_polygon(outer: &Geometry) -> Option<Polygon> {
    if matches!(outer.value, Value::Polygon(_)) {
        to_geo_polygon(outer)
    } else {
        log::debug!("containment outer geometry is not a polygon");
        None
    }
}

fn to_geo_polygon(geometry: &Geometry) -> Option<Polygon> {
    match Polygon::try_from(geometry.value.clone()) {
        Ok(polygon) => Some(polygon),
        Err(err) => {
            log::warn!("failed to convert polygon geometry: {err}");
            None
        }
    }
}

fn to_geo(geometry: &Geometry) -> Option<geo::Geometry> {
    match geo::Geometry::try_from(geometry.value.clone()) {
        Ok(converted) => Some(converted),
        Err(err) => {
            log::warn!("failed to convert geometry: {err}");
            None
        }
    }
}

fn centroid(geometry: &Geometry) -> Option<Point> {
    to_geo(geometry).and_then(|converted| converted.centroid())
}

/// Centroid when computable, otherwise the first coordinate.
fn representative_point(geometry: &Geometry) -> Option<Point> {
    if let Some(center) = centroid(geometry) {
        return Some(center);
    }
    first_position(&geometry.value).and_then(|position| position_to_point(position).ok())
}

fn first_position(value: &Value) -> Option<&Position> {
    match value {
        Value::Point(position) => Some(position),
        Value::MultiPoint(positions) | Value::LineString(positions) => positions.first(),
        Value::MultiLineString(lines) => lines.first().and_then(|line| line.first()),
        Value::Polygon(rings) => rings.first().and_then(|ring| ring.first()),
        Value::MultiPolygon(polygons) => polygons
            .first()
            .and_then(|rings| rings.first())
            .and_then(|ring| ring.first()),
        Value::GeometryCollection(members) => members
            .iter()
            .find_map(|member| first_position(&member.value)),
    }
}
