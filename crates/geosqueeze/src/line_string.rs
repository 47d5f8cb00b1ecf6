//! Interop with the [`geo`] crate's geometry types.
//!
//! [`compress_line_string`] runs the engine directly on a
//! `geo::LineString`, so callers already holding `geo` geometries (from
//! WKT, GeoJSON, shapefiles, ...) need not convert by hand.

use geo::{Coord, LineString};

use crate::simplify::simplify;
use crate::types::{Point, Polyline, SqueezeConfig, SqueezeError};

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<&LineString<f64>> for Polyline {
    fn from(line: &LineString<f64>) -> Self {
        Self::new(line.coords().map(|&c| Point::from(c)).collect())
    }
}

impl From<Polyline> for LineString<f64> {
    fn from(polyline: Polyline) -> Self {
        Self::new(polyline.into_points().into_iter().map(Coord::from).collect())
    }
}

/// Simplify a `geo::LineString`.
///
/// Line strings with fewer than three coordinates are returned as-is.
///
/// # Errors
///
/// Same as [`simplify_points`](crate::simplify::simplify_points).
pub fn compress_line_string(
    line: &LineString<f64>,
    config: &SqueezeConfig,
) -> Result<LineString<f64>, SqueezeError> {
    simplify(&Polyline::from(line), config).map(LineString::from)
}
