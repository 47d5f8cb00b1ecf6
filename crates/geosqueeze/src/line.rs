//! Directed line segments with a compass-style direction.
//!
//! Directions are measured in degrees clockwise from +Y ("north"), in
//! `[0, 360)`: `atan2(dx, dy)` rather than the usual `atan2(dy, dx)`.
//! A zero-length segment has direction 0.

use crate::types::Point;

/// An immutable directed segment from `start` to `end`.
///
/// The direction is derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    direction: f64,
}

impl Line {
    /// Create a line from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            direction: direction(start, end),
        }
    }

    /// Create a line from two raw `[x, y]` coordinate pairs.
    #[must_use]
    pub fn from_coords(start: [f64; 2], end: [f64; 2]) -> Self {
        Self::new(Point::new(start[0], start[1]), Point::new(end[0], end[1]))
    }

    /// The starting point.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// The ending point.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Direction in degrees, clockwise from north, in `[0, 360)`.
    #[must_use]
    pub const fn direction(&self) -> f64 {
        self.direction
    }
}

fn direction(start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let angle = dx.atan2(dy).to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}
