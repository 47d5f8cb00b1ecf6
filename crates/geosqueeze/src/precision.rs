//! Coordinate precision reduction.
//!
//! Rounding happens before the vertex chain is built so that turn
//! angles are measured on the coordinates that will actually be
//! emitted.

use crate::types::Point;

/// Round every coordinate to `digits` decimal places, producing a new
/// point sequence.
#[must_use = "returns the rounded points"]
pub fn reduce_precision(points: &[Point], digits: i32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(round_to(p.x, digits), round_to(p.y, digits)))
        .collect()
}

/// Round `value` to `digits` decimal places, halves away from zero.
///
/// Negative `digits` round to the left of the decimal point
/// (`round_to(1234.0, -2) == 1200.0`). Values too large to scale are
/// already coarser than the requested precision and come back
/// unchanged, as do NaN and infinities.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    if digits >= 0 {
        let factor = 10f64.powi(digits);
        let scaled = value * factor;
        if scaled.is_finite() {
            scaled.round() / factor
        } else {
            value
        }
    } else {
        // Divide by an exact power of ten instead of multiplying by an
        // inexact 10^-n.
        let factor = 10f64.powi(-digits);
        let rounded = (value / factor).round() * factor;
        if rounded.is_finite() { rounded } else { value }
    }
}
