//! Turn-angle vertex elimination.
//!
//! Repeatedly removes the straightest interior vertex (smallest turn
//! angle) while its turn is at or below the tolerance. Removing a vertex
//! bridges its neighbors with one line, which changes their turns; the
//! queue absorbs those changes lazily.
//!
//! # Lazy invalidation
//!
//! Queue entries remember the priority they were pushed with. When an
//! entry is popped and the vertex's live priority differs, the entry is
//! stale: the vertex is pushed again under its live priority and the
//! loop moves on. No decrease-key is needed, at the cost of the queue
//! temporarily holding more than one entry per vertex.
//!
//! Stale entries only ever sit *above* the vertex's live priority if the
//! vertex became sharper. A neighbor that became straighter would be
//! stuck below the live priority, possibly behind the entry that stops
//! the loop, so such neighbors are pushed again right away. Entries for
//! vertices that were removed in the meantime are dropped on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::chain::{VertexChain, VertexId};
use crate::precision::reduce_precision;
use crate::types::{Point, Polyline, SqueezeConfig, SqueezeError};

/// Counters describing one elimination run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationStats {
    /// Interior vertices in the chain (input points minus the two ends).
    pub vertices: usize,
    /// Vertices removed.
    pub removed: usize,
    /// Popped entries whose priority had gone stale and were pushed again.
    pub stale_reinserts: usize,
    /// Neighbors pushed again because a removal made them straighter.
    pub promotions: usize,
}

/// Simplify a point sequence.
///
/// Rounds every coordinate to `precision` decimal digits, then removes
/// interior points whose turn angle is at or below `tolerance` degrees,
/// straightest first. The first and last points always survive. Inputs
/// with fewer than three points are returned unchanged (and unrounded).
///
/// # Errors
///
/// Returns [`SqueezeError::InvalidConfig`] for a non-finite tolerance or
/// an out-of-range precision, and [`SqueezeError::LinesDoNotIntersect`]
/// if the points cannot form a vertex chain (a NaN coordinate).
pub fn simplify_points(
    points: &[Point],
    tolerance: f64,
    precision: i32,
) -> Result<Vec<Point>, SqueezeError> {
    let config = SqueezeConfig::new(tolerance, precision);
    squeeze(points, &config).map(|(points, _)| points)
}

/// Simplify a polyline using `config`.
///
/// See [`simplify_points`] for the algorithm.
///
/// # Errors
///
/// Same as [`simplify_points`].
pub fn simplify(polyline: &Polyline, config: &SqueezeConfig) -> Result<Polyline, SqueezeError> {
    simplify_with_stats(polyline, config).map(|(polyline, _)| polyline)
}

/// Simplify a polyline and report what the elimination loop did.
///
/// # Errors
///
/// Same as [`simplify_points`].
pub fn simplify_with_stats(
    polyline: &Polyline,
    config: &SqueezeConfig,
) -> Result<(Polyline, EliminationStats), SqueezeError> {
    squeeze(polyline.points(), config).map(|(points, stats)| (Polyline::new(points), stats))
}

fn squeeze(
    points: &[Point],
    config: &SqueezeConfig,
) -> Result<(Vec<Point>, EliminationStats), SqueezeError> {
    config.validate()?;

    if points.len() < 3 {
        return Ok((points.to_vec(), EliminationStats::default()));
    }

    let rounded = reduce_precision(points, config.precision);
    let mut chain = VertexChain::from_points(&rounded)?;
    let mut kept = vec![true; rounded.len()];

    let stats = eliminate(&mut chain, config.tolerance, &mut kept)?;

    let simplified: Vec<Point> = rounded
        .iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(&p, _)| p)
        .collect();

    debug!(
        "squeezed {} -> {} points (tolerance={}, precision={}, stale={}, promotions={})",
        points.len(),
        simplified.len(),
        config.tolerance,
        config.precision,
        stats.stale_reinserts,
        stats.promotions,
    );

    Ok((simplified, stats))
}

/// Run the elimination loop over `chain`, clearing `kept` for every
/// removed vertex's point.
fn eliminate(
    chain: &mut VertexChain,
    tolerance: f64,
    kept: &mut [bool],
) -> Result<EliminationStats, SqueezeError> {
    let mut stats = EliminationStats {
        vertices: chain.len(),
        ..EliminationStats::default()
    };

    let mut queue: BinaryHeap<QueueEntry> = chain
        .ids()
        .map(|id| QueueEntry::new(id, chain.vertex(id).priority()))
        .collect();

    while let Some(entry) = queue.pop() {
        if chain.is_removed(entry.vertex) {
            continue;
        }

        let vertex = chain.vertex(entry.vertex);
        let current = vertex.priority();

        // Bitwise comparison: both sides come from the same stored turn,
        // and a NaN priority must still match itself.
        if entry.priority.to_bits() != current.to_bits() {
            trace!(
                "stale entry for vertex {}: queued {}, now {}",
                entry.vertex.index(),
                entry.priority,
                current,
            );
            stats.stale_reinserts += 1;
            queue.push(QueueEntry::new(entry.vertex, current));
            continue;
        }

        if vertex.turn() > tolerance {
            trace!(
                "stopping at vertex {} with turn {} > {tolerance}",
                entry.vertex.index(),
                vertex.turn(),
            );
            break;
        }

        trace!(
            "removing vertex {} with turn {}",
            entry.vertex.index(),
            vertex.turn(),
        );
        let deletion = chain.delete(entry.vertex)?;
        kept[deletion.point_index] = false;
        stats.removed += 1;

        for id in deletion.promoted() {
            stats.promotions += 1;
            queue.push(QueueEntry::new(id, chain.vertex(id).priority()));
        }
    }

    Ok(stats)
}

/// A queued vertex with the priority it was pushed under.
///
/// Orders by priority (highest first out of the max-heap), then by
/// lowest [`VertexId`] so equal priorities pop in point order.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    priority: f64,
    vertex: VertexId,
}

impl QueueEntry {
    const fn new(vertex: VertexId, priority: f64) -> Self {
        Self { priority, vertex }
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}
