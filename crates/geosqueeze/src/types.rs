//! Shared types for geosqueeze: points, polylines, configuration, errors.

use serde::{Deserialize, Serialize};

/// A 2D point.
///
/// Equality is by coordinate value. The engine never relies on two
/// points being "the same point" by value; positions within a line are
/// tracked by index instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate (longitude, easting, ...).
    pub x: f64,
    /// Vertical coordinate (latitude, northing, ...).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}

/// An ordered sequence of points forming an open line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polyline and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

/// Configuration for turn-angle simplification.
///
/// Fields are public; call [`validate`](Self::validate) (the engine entry
/// points do this for you) to reject values the engine cannot honor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqueezeConfig {
    /// Maximum turn angle in degrees for a vertex to be eliminated.
    ///
    /// Vertices whose turn is at or below this value are removed,
    /// straightest first. A negative tolerance removes nothing.
    pub tolerance: f64,

    /// Number of decimal digits coordinates are rounded to before
    /// simplification. Negative values round to tens, hundreds, ...
    pub precision: i32,
}

impl SqueezeConfig {
    /// Default turn tolerance in degrees.
    pub const DEFAULT_TOLERANCE: f64 = 8.0;

    /// Default coordinate precision in decimal digits.
    pub const DEFAULT_PRECISION: i32 = 6;

    /// Smallest accepted precision.
    pub const MIN_PRECISION: i32 = -15;

    /// Largest accepted precision. `f64` carries roughly 15-16
    /// significant decimal digits, so finer rounding has no meaning.
    pub const MAX_PRECISION: i32 = 15;

    /// Create a configuration from a tolerance and precision.
    #[must_use]
    pub const fn new(tolerance: f64, precision: i32) -> Self {
        Self {
            tolerance,
            precision,
        }
    }

    /// Check that the configuration can be used by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::InvalidConfig`] if `tolerance` is NaN or
    /// infinite, or if `precision` lies outside
    /// [`MIN_PRECISION`](Self::MIN_PRECISION)..=[`MAX_PRECISION`](Self::MAX_PRECISION).
    pub fn validate(&self) -> Result<(), SqueezeError> {
        if !self.tolerance.is_finite() {
            return Err(SqueezeError::InvalidConfig(format!(
                "tolerance must be finite, got {}",
                self.tolerance,
            )));
        }
        if !(Self::MIN_PRECISION..=Self::MAX_PRECISION).contains(&self.precision) {
            return Err(SqueezeError::InvalidConfig(format!(
                "precision must be within {}..={}, got {}",
                Self::MIN_PRECISION,
                Self::MAX_PRECISION,
                self.precision,
            )));
        }
        Ok(())
    }
}

impl Default for SqueezeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE, Self::DEFAULT_PRECISION)
    }
}

/// Errors that can occur during simplification.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum SqueezeError {
    /// A vertex was given a line whose shared endpoint is not the
    /// vertex's reference point.
    ///
    /// Signals malformed geometry (for example a NaN coordinate, which
    /// never equals itself) or an inconsistently built vertex.
    #[error(
        "lines do not intersect: expected shared point ({}, {}), found ({}, {})",
        .expected.x, .expected.y, .found.x, .found.y
    )]
    LinesDoNotIntersect {
        /// The vertex's reference point.
        expected: Point,
        /// The endpoint actually offered by the line.
        found: Point,
    },

    /// Configuration is invalid.
    #[error("invalid simplification configuration: {0}")]
    InvalidConfig(String),
}
