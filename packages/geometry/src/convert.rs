//! Approximate UTM to lat/lng conversion for the coordinate-entry widget.
//!
//! This is the affine approximation the portal has always shipped,
//! anchored on the survey sheets' reference meridian and parallel. It is
//! not a real projection: no ellipsoid, no zone parameter, and the
//! longitude term multiplies by cos(lat) instead of dividing. The
//! constants must stay bit-for-bit until the widget migrates to a proper
//! geodesy library.

use geo::{Bearing, Distance, Haversine, Point};

const METERS_PER_DEGREE: f64 = 111_320.0;
const FALSE_EASTING_M: f64 = 500_000.0;
const NORTHING_OFFSET_M: f64 = 1_000_000.0;
const REFERENCE_LAT_DEG: f64 = 9.0;
const REFERENCE_LNG_DEG: f64 = -1.0;

/// Converts UTM-style easting/northing to an approximate `(lat, lng)`
/// pair near the reference meridian and parallel.
#[must_use]
pub fn utm_to_lat_lng(easting: f64, northing: f64) -> (f64, f64) {
    let lat = (northing - NORTHING_OFFSET_M) / METERS_PER_DEGREE + REFERENCE_LAT_DEG;
    let lng =
        (easting - FALSE_EASTING_M) / METERS_PER_DEGREE * lat.to_radians().cos() + REFERENCE_LNG_DEG;
    (lat, lng)
}

/// Great-circle distance in meters between two lng/lat points.
#[must_use]
pub fn distance_meters(a: Point, b: Point) -> f64 {
    Haversine.distance(a, b)
}

/// Forward azimuth in degrees, clockwise from north.
#[must_use]
pub fn bearing_degrees(a: Point, b: Point) -> f64 {
    Haversine.bearing(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_origin_maps_to_anchor_point() {
        let (lat, lng) = utm_to_lat_lng(500_000.0, 1_000_000.0);
        assert!((lat - 9.0).abs() < 1e-12);
        assert!((lng - -1.0).abs() < 1e-12);
    }

    #[test]
    fn northing_moves_latitude_linearly() {
        let (lat, lng) = utm_to_lat_lng(500_000.0, 1_111_320.0);
        assert!((lat - 10.0).abs() < 1e-12);
        assert!((lng - -1.0).abs() < 1e-12);
    }

    #[test]
    fn easting_scales_by_cosine_of_latitude() {
        let (lat, lng) = utm_to_lat_lng(611_320.0, 1_000_000.0);
        assert!((lat - 9.0).abs() < 1e-12);
        let expected = 9.0_f64.to_radians().cos() - 1.0;
        assert!((lng - expected).abs() < 1e-12);
    }

    #[test]
    fn eastward_bearing_is_ninety_degrees() {
        let origin = Point::new(0.0, 0.0);
        let east = Point::new(1.0, 0.0);
        assert!((bearing_degrees(origin, east) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn distance_along_equator_matches_arc_length() {
        let origin = Point::new(0.0, 0.0);
        let nearby = Point::new(0.001, 0.0);
        assert!((distance_meters(origin, nearby) - 111.19).abs() < 0.1);
    }
}
