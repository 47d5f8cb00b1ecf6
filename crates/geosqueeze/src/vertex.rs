//! Vertices: the interior point shared by two consecutive lines.
//!
//! A vertex measures how sharply the line turns at its point. The
//! turn angle is the plain absolute difference of the two line
//! directions, so it lies in `[0, 360)` and is *not* folded onto
//! `[0, 180]`: a north-to-northwest bend reports 315, not 45.

use crate::line::Line;
use crate::types::{Point, SqueezeError};

/// The point where `line_a` ends and `line_b` starts.
///
/// The reference point is fixed at construction. Both incident lines
/// may be replaced later, but only by lines that still meet at the
/// reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    reference: Point,
    line_a: Line,
    line_b: Line,
    turn: f64,
}

impl Vertex {
    /// Create a vertex from the line arriving at a point and the line
    /// leaving it.
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::LinesDoNotIntersect`] if `line_a.end()`
    /// does not equal `line_b.start()`.
    pub fn new(line_a: Line, line_b: Line) -> Result<Self, SqueezeError> {
        let reference = line_a.end();
        ensure_meets(reference, line_b.start())?;
        Ok(Self {
            reference,
            line_a,
            line_b,
            turn: turn(&line_a, &line_b),
        })
    }

    /// Replace the arriving line and recompute the turn.
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::LinesDoNotIntersect`] if `line.end()` is
    /// not this vertex's point. The vertex is left unchanged.
    pub fn set_line_a(&mut self, line: Line) -> Result<(), SqueezeError> {
        ensure_meets(self.reference, line.end())?;
        self.line_a = line;
        self.turn = turn(&self.line_a, &self.line_b);
        Ok(())
    }

    /// Replace the leaving line and recompute the turn.
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::LinesDoNotIntersect`] if `line.start()`
    /// is not this vertex's point. The vertex is left unchanged.
    pub fn set_line_b(&mut self, line: Line) -> Result<(), SqueezeError> {
        ensure_meets(self.reference, line.start())?;
        self.line_b = line;
        self.turn = turn(&self.line_a, &self.line_b);
        Ok(())
    }

    /// Turn angle in degrees; 0 is perfectly straight.
    #[must_use]
    pub const fn turn(&self) -> f64 {
        self.turn
    }

    /// Elimination priority, `360 - turn`. Straighter vertices rank higher.
    #[must_use]
    pub const fn priority(&self) -> f64 {
        360.0 - self.turn
    }

    /// The shared point.
    #[must_use]
    pub const fn point(&self) -> Point {
        self.reference
    }

    /// The line arriving at this vertex.
    #[must_use]
    pub const fn line_a(&self) -> &Line {
        &self.line_a
    }

    /// The line leaving this vertex.
    #[must_use]
    pub const fn line_b(&self) -> &Line {
        &self.line_b
    }

    /// The line that replaces both incident lines once this vertex is
    /// removed.
    #[must_use]
    pub fn bridge(&self) -> Line {
        Line::new(self.line_a.start(), self.line_b.end())
    }
}

fn ensure_meets(expected: Point, found: Point) -> Result<(), SqueezeError> {
    if expected == found {
        Ok(())
    } else {
        Err(SqueezeError::LinesDoNotIntersect { expected, found })
    }
}

// Always recomputed from both directions, never adjusted incrementally,
// so equal geometry yields bit-identical priorities.
fn turn(line_a: &Line, line_b: &Line) -> f64 {
    (line_a.direction() - line_b.direction()).abs()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Unit compass headings, clockwise from north, with the turn each
    /// produces against a line pointing north.
    const HEADINGS: [([f64; 2], f64); 8] = [
        ([0.0, 1.0], 0.0),
        ([1.0, 1.0], 45.0),
        ([1.0, 0.0], 90.0),
        ([1.0, -1.0], 135.0),
        ([0.0, -1.0], 180.0),
        ([-1.0, -1.0], 225.0),
        ([-1.0, 0.0], 270.0),
        ([-1.0, 1.0], 315.0),
    ];

    /// A line with the given heading that ends at `target`.
    fn arriving(heading: [f64; 2], target: [f64; 2]) -> Line {
        Line::from_coords(
            [target[0] - heading[0], target[1] - heading[1]],
            target,
        )
    }

    /// A line with the given heading that starts at `origin`.
    fn leaving(origin: [f64; 2], heading: [f64; 2]) -> Line {
        Line::from_coords(origin, [origin[0] + heading[0], origin[1] + heading[1]])
    }

    fn north_into(target: [f64; 2]) -> Line {
        arriving([0.0, 1.0], target)
    }

    #[test]
    fn turn_against_north() {
        for (heading, expected) in HEADINGS {
            let vertex = Vertex::new(arriving(heading, [0.0, 0.0]), leaving([0.0, 0.0], [0.0, 1.0]))
                .unwrap();
            assert!(
                (vertex.turn() - expected).abs() < EPS,
                "heading {heading:?}: expected {expected}, got {}",
                vertex.turn(),
            );
        }
    }

    #[test]
    fn priority_is_inverse_of_turn() {
        for (heading, expected) in HEADINGS {
            let vertex = Vertex::new(arriving(heading, [0.0, 0.0]), leaving([0.0, 0.0], [0.0, 1.0]))
                .unwrap();
            assert!((vertex.priority() - (360.0 - expected)).abs() < EPS);
        }
    }

    #[test]
    fn north_then_northeast_turns_45() {
        let vertex = Vertex::new(north_into([0.0, 1.0]), leaving([0.0, 1.0], [1.0, 1.0])).unwrap();
        assert!((vertex.turn() - 45.0).abs() < EPS);
        assert!((vertex.priority() - 315.0).abs() < EPS);
    }

    #[test]
    fn set_line_a_recomputes_turn() {
        for (heading, expected) in HEADINGS {
            let mut vertex =
                Vertex::new(north_into([0.0, 0.0]), leaving([0.0, 0.0], [0.0, 1.0])).unwrap();
            vertex.set_line_a(arriving(heading, [0.0, 0.0])).unwrap();
            assert!((vertex.turn() - expected).abs() < EPS);
        }
    }

    #[test]
    fn set_line_b_recomputes_turn() {
        for (heading, expected) in HEADINGS {
            let mut vertex =
                Vertex::new(north_into([2.0, 3.0]), leaving([2.0, 3.0], [0.0, 1.0])).unwrap();
            vertex.set_line_b(leaving([2.0, 3.0], heading)).unwrap();
            assert!((vertex.turn() - expected).abs() < EPS);
        }
    }

    #[test]
    fn disjoint_lines_are_rejected() {
        let result = Vertex::new(north_into([0.0, 1.0]), north_into([0.0, 0.0]));
        assert_eq!(
            result,
            Err(SqueezeError::LinesDoNotIntersect {
                expected: Point::new(0.0, 1.0),
                found: Point::new(0.0, -1.0),
            })
        );
    }

    #[test]
    fn set_line_with_wrong_endpoint_leaves_vertex_unchanged() {
        let mut vertex =
            Vertex::new(north_into([0.0, 0.0]), leaving([0.0, 0.0], [1.0, 0.0])).unwrap();
        let before = vertex.clone();

        assert!(vertex.set_line_a(north_into([5.0, 5.0])).is_err());
        assert!(vertex.set_line_b(leaving([5.0, 5.0], [0.0, 1.0])).is_err());
        assert_eq!(vertex, before);
    }

    #[test]
    fn point_is_the_shared_endpoint() {
        let line_a = north_into([0.0, 0.0]);
        let vertex = Vertex::new(line_a, leaving([0.0, 0.0], [0.0, 1.0])).unwrap();
        assert_eq!(vertex.point(), line_a.end());
    }

    #[test]
    fn nan_point_never_intersects() {
        let p = [f64::NAN, 0.0];
        let result = Vertex::new(Line::from_coords([0.0, 0.0], p), Line::from_coords(p, [1.0, 1.0]));
        assert!(matches!(
            result,
            Err(SqueezeError::LinesDoNotIntersect { .. })
        ));
    }

    #[test]
    fn bridge_spans_both_lines() {
        let vertex = Vertex::new(
            Line::from_coords([0.0, 0.0], [0.0, 1.0]),
            Line::from_coords([0.0, 1.0], [1.0, 2.0]),
        )
        .unwrap();
        let bridge = vertex.bridge();
        assert_eq!(bridge.start(), Point::new(0.0, 0.0));
        assert_eq!(bridge.end(), Point::new(1.0, 2.0));
    }
}
