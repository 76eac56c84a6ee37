//! Evenly spaced vertex sampling for boundary previews.
//!
//! The application form and review screens show a handful of boundary
//! coordinates rather than a full ring. This module picks a bounded,
//! order-preserving subset that always keeps the first and final vertex.

use geojson::{Geometry, Position, Value};

/// Default number of positions shown by the boundary preview widgets.
pub const DEFAULT_MAX_SAMPLES: usize = 5;

/// Extracts up to `max_samples` positions from a geometry's primary
/// coordinate sequence.
///
/// Sequences that fit the budget are returned whole, in order. Larger
/// ones are strided evenly from index 0, and the final vertex is
/// appended when the stride did not land on it. Collections yield the
/// first member with a non-empty sample. Malformed or empty geometry
/// yields an empty vec, never a panic.
#[must_use]
pub fn sample_positions(geometry: &Geometry, max_samples: usize) -> Vec<Position> {
    if max_samples == 0 {
        return Vec::new();
    }
    if let Value::GeometryCollection(members) = &geometry.value {
        return members
            .iter()
            .map(|member| sample_positions(member, max_samples))
            .find(|sample| !sample.is_empty())
            .unwrap_or_default();
    }
    let Some(line) = primary_line(&geometry.value) else {
        log::warn!("geometry has no coordinate sequence to sample");
        return Vec::new();
    };
    if line.is_empty() {
        log::warn!("geometry has an empty coordinate sequence");
        return Vec::new();
    }
    if line.len() <= max_samples {
        return line.to_vec();
    }
    let step = (line.len() / max_samples).max(1);
    let mut sampled: Vec<Position> = line
        .iter()
        .step_by(step)
        .take(max_samples - 1)
        .cloned()
        .collect();
    let last = &line[line.len() - 1];
    if sampled.last() != Some(last) {
        sampled.push(last.clone());
    }
    sampled
}

/// Returns the primary coordinate sequence of a non-collection geometry:
/// the exterior ring for polygons, the first line for multi-lines.
fn primary_line(value: &Value) -> Option<&[Position]> {
    match value {
        Value::Point(position) => Some(std::slice::from_ref(position)),
        Value::MultiPoint(positions) | Value::LineString(positions) => Some(positions),
        Value::MultiLineString(lines) => lines.first().map(Vec::as_slice),
        Value::Polygon(rings) => rings.first().map(Vec::as_slice),
        Value::MultiPolygon(polygons) => polygons
            .first()
            .and_then(|rings| rings.first())
            .map(Vec::as_slice),
        Value::GeometryCollection(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(count: u8) -> Vec<Position> {
        (0..count).map(|i| vec![f64::from(i), 0.0]).collect()
    }

    #[test]
    fn large_ring_keeps_first_and_final_vertex() {
        let parcel = Geometry::new(Value::Polygon(vec![ring(12)]));
        let sampled = sample_positions(&parcel, 5);
        assert_eq!(sampled.len(), 5);
        assert_eq!(sampled[0], vec![0.0, 0.0]);
        assert_eq!(sampled[4], vec![11.0, 0.0]);
    }

    #[test]
    fn small_ring_is_returned_whole() {
        let parcel = Geometry::new(Value::Polygon(vec![ring(4)]));
        assert_eq!(sample_positions(&parcel, 5), ring(4));
    }

    #[test]
    fn exact_fit_is_returned_whole() {
        let parcel = Geometry::new(Value::Polygon(vec![ring(5)]));
        assert_eq!(sample_positions(&parcel, 5), ring(5));
    }

    #[test]
    fn multi_polygon_samples_first_exterior_ring_only() {
        let first = ring(3);
        let second = ring(12);
        let multi = Geometry::new(Value::MultiPolygon(vec![vec![first.clone()], vec![second]]));
        assert_eq!(sample_positions(&multi, 5), first);
    }

    #[test]
    fn point_samples_its_single_position() {
        let site = Geometry::new(Value::Point(vec![-1.0, 9.0]));
        assert_eq!(sample_positions(&site, 5), vec![vec![-1.0, 9.0]]);
    }

    #[test]
    fn collection_yields_first_non_empty_member() {
        let mixed = Geometry::new(Value::GeometryCollection(vec![
            Geometry::new(Value::Polygon(Vec::new())),
            Geometry::new(Value::LineString(ring(3))),
        ]));
        assert_eq!(sample_positions(&mixed, 5), ring(3));
    }

    #[test]
    fn empty_geometry_samples_nothing() {
        let empty = Geometry::new(Value::LineString(Vec::new()));
        assert!(sample_positions(&empty, 5).is_empty());
    }

    #[test]
    fn zero_budget_samples_nothing() {
        let parcel = Geometry::new(Value::Polygon(vec![ring(12)]));
        assert!(sample_positions(&parcel, 0).is_empty());
    }
}
