#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pure geometry calculations for parcel and zoning boundaries.
//!
//! Every function consumes plain `GeoJSON` geometries as returned by the
//! permit API and produces display-ready scalars: formatted areas and
//! perimeters, sampled boundary coordinates, containment and proximity
//! verdicts. Errors never escape to the caller; each entry point catches
//! malformed input, logs the cause, and returns a neutral sentinel
//! (`"N/A"`, `false`, an empty vec) so one bad geometry cannot take down
//! an entire review screen.

pub mod convert;
pub mod metrics;
pub mod relate;
pub mod sample;

use geo::{Coord, LineString, Point};
use geojson::Position;
use thiserror::Error;

/// Errors raised while measuring or relating geometries.
///
/// These stay internal to the `try_` functions; the public wrappers
/// convert them to sentinel values after logging.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A position carried fewer than two coordinates.
    #[error("position has {count} coordinates, expected at least 2")]
    ShortPosition {
        /// Number of coordinates found.
        count: usize,
    },

    /// A ring, line, or polygon had no coordinates at all.
    #[error("empty coordinate sequence in {context}")]
    EmptyCoordinates {
        /// Which structure was empty.
        context: &'static str,
    },
}

/// Converts a `GeoJSON` position to a point, ignoring any elevation.
pub(crate) fn position_to_point(position: &[f64]) -> Result<Point, GeometryError> {
    if position.len() < 2 {
        return Err(GeometryError::ShortPosition {
            count: position.len(),
        });
    }
    Ok(Point::new(position[0], position[1]))
}

/// Converts a coordinate sequence to a line string, rejecting empty
/// sequences and short positions so every calculator fails the same way.
pub(crate) fn ring_to_line_string(
    ring: &[Position],
    context: &'static str,
) -> Result<LineString, GeometryError> {
    if ring.is_empty() {
        return Err(GeometryError::EmptyCoordinates { context });
    }
    let coords = ring
        .iter()
        .map(|position| {
            if position.len() < 2 {
                Err(GeometryError::ShortPosition {
                    count: position.len(),
                })
            } else {
                Ok(Coord {
                    x: position[0],
                    y: position[1],
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(coords))
}
