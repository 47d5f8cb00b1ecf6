//! Simplification diagnostics: timing and counts for one run.
//!
//! The core crate does no I/O and reads no clocks of its own; callers
//! supply a [`Clock`] so the same code can be timed natively, in a
//! browser, or with a fake clock in tests.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::simplify::{EliminationStats, simplify_with_stats};
use crate::types::{Polyline, SqueezeConfig, SqueezeError};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// A source of timestamps.
pub trait Clock {
    /// Opaque timestamp type.
    type Instant;

    /// The current time.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Diagnostics collected from a single simplification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqueezeDiagnostics {
    /// Turn tolerance in degrees.
    pub tolerance: f64,
    /// Coordinate precision in decimal digits.
    pub precision: i32,
    /// Points in the input polyline.
    pub points_before: usize,
    /// Points in the simplified polyline.
    pub points_after: usize,
    /// Reduction ratio: `1.0 - (after / before)`.
    pub reduction_ratio: f64,
    /// Elimination loop counters.
    pub stats: EliminationStats,
    /// Wall-clock duration of the run (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl SqueezeDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Simplification Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Config: tolerance={:.2} deg  precision={}",
            self.tolerance, self.precision,
        ));
        lines.push(format!("Duration: {:.3}ms", duration_ms(self.duration)));
        lines.push(String::new());
        lines.push(format!(
            "Points: {} -> {} ({:.1}% reduction)",
            self.points_before,
            self.points_after,
            self.reduction_ratio * 100.0,
        ));
        lines.push(format!(
            "Vertices: {}  removed={}  stale_reinserts={}  promotions={}",
            self.stats.vertices,
            self.stats.removed,
            self.stats.stale_reinserts,
            self.stats.promotions,
        ));

        lines.join("\n")
    }
}

/// Simplify a polyline, timing the run with `clock`.
///
/// # Errors
///
/// Same as [`simplify`](crate::simplify::simplify).
pub fn simplify_with_diagnostics<C: Clock>(
    polyline: &Polyline,
    config: &SqueezeConfig,
    clock: &C,
) -> Result<(Polyline, SqueezeDiagnostics), SqueezeError> {
    let start = clock.now();
    let (simplified, stats) = simplify_with_stats(polyline, config)?;
    let duration = clock.elapsed(&start);

    let diagnostics = SqueezeDiagnostics {
        tolerance: config.tolerance,
        precision: config.precision,
        points_before: polyline.len(),
        points_after: simplified.len(),
        reduction_ratio: reduction_ratio(polyline.len(), simplified.len()),
        stats,
        duration,
    };
    Ok((simplified, diagnostics))
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[allow(clippy::cast_precision_loss)]
fn reduction_ratio(before: usize, after: usize) -> f64 {
    if before == 0 {
        0.0
    } else {
        1.0 - after as f64 / before as f64
    }
}
