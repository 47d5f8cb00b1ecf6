//! The vertex chain: a doubly linked list of interior vertices.
//!
//! Vertices live in a flat arena addressed by [`VertexId`]; `prev` and
//! `next` are plain indices into it. Links change only through
//! [`VertexChain::delete`], which keeps `next(prev(v)) == v` (and its
//! mirror) true for every live vertex.

use crate::line::Line;
use crate::types::{Point, SqueezeError};
use crate::vertex::Vertex;

/// Identifies a vertex within one [`VertexChain`].
///
/// Vertex `i` sits on point `i + 1` of the line the chain was built
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of this vertex in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Debug, Clone)]
struct Node {
    vertex: Vertex,
    point_index: usize,
    prev: Option<VertexId>,
    next: Option<VertexId>,
    removed: bool,
}

/// Outcome of removing one vertex from the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    /// Index of the removed vertex's point in the source point slice.
    pub point_index: usize,
    /// Neighbors whose priority rose because of the bridging line.
    promoted: [Option<VertexId>; 2],
}

impl Deletion {
    /// Neighbors that became straighter (higher priority) when the
    /// vertex was bridged over.
    pub fn promoted(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.promoted.iter().flatten().copied()
    }
}

/// Every interior vertex of one polyline, linked in point order.
#[derive(Debug, Clone, Default)]
pub struct VertexChain {
    nodes: Vec<Node>,
    head: Option<VertexId>,
    live: usize,
}

impl VertexChain {
    /// Build the chain for a point sequence: `n - 1` lines and one
    /// vertex per interior point (`n - 2`). Sequences with fewer than
    /// three points produce an empty chain.
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::LinesDoNotIntersect`] if consecutive lines
    /// fail to meet, which happens when a point has a NaN coordinate.
    pub fn from_points(points: &[Point]) -> Result<Self, SqueezeError> {
        let lines: Vec<Line> = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
        let count = lines.len().saturating_sub(1);

        let nodes = lines
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                Ok(Node {
                    vertex: Vertex::new(pair[0], pair[1])?,
                    point_index: i + 1,
                    prev: i.checked_sub(1).map(VertexId),
                    next: (i + 1 < count).then_some(VertexId(i + 1)),
                    removed: false,
                })
            })
            .collect::<Result<Vec<_>, SqueezeError>>()?;

        Ok(Self {
            head: (!nodes.is_empty()).then_some(VertexId(0)),
            live: nodes.len(),
            nodes,
        })
    }

    /// Total number of vertices ever in the chain, removed ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the chain was built without any vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of vertices not yet removed.
    #[must_use]
    pub const fn live_len(&self) -> usize {
        self.live
    }

    /// All vertex ids in arena order, removed ones included.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.nodes.len()).map(VertexId)
    }

    /// Live vertex ids, walking the links from the first vertex.
    pub fn live_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        std::iter::successors(self.head, |&id| self.next(id))
    }

    /// The vertex for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this chain.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.nodes[id.0].vertex
    }

    /// The previous live vertex, if any.
    #[must_use]
    pub fn prev(&self, id: VertexId) -> Option<VertexId> {
        self.nodes[id.0].prev
    }

    /// The next live vertex, if any.
    #[must_use]
    pub fn next(&self, id: VertexId) -> Option<VertexId> {
        self.nodes[id.0].next
    }

    /// Index of the vertex's point in the point slice the chain was
    /// built from.
    #[must_use]
    pub fn point_index(&self, id: VertexId) -> usize {
        self.nodes[id.0].point_index
    }

    /// Whether the vertex has been deleted.
    #[must_use]
    pub fn is_removed(&self, id: VertexId) -> bool {
        self.nodes[id.0].removed
    }

    /// Remove a vertex, bridging its neighbors with a single line.
    ///
    /// The line from the start of the vertex's arriving line to the end
    /// of its leaving line becomes the previous vertex's leaving line
    /// and the next vertex's arriving line, and both neighbors' turns are
    /// recomputed. The neighbors are then linked to each other. A vertex
    /// with no neighbors is simply marked removed.
    ///
    /// Deleting an already removed vertex changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::LinesDoNotIntersect`] if a neighbor
    /// rejects the bridging line. The bridge is built from the exact
    /// endpoints the neighbors already share, so this indicates a
    /// corrupted chain.
    pub fn delete(&mut self, id: VertexId) -> Result<Deletion, SqueezeError> {
        let node = &self.nodes[id.0];
        let point_index = node.point_index;
        debug_assert!(!node.removed, "vertex {} deleted twice", id.0);
        if node.removed {
            return Ok(Deletion {
                point_index,
                promoted: [None, None],
            });
        }

        let (prev, next) = (node.prev, node.next);
        let bridge = node.vertex.bridge();
        let mut promoted = [None, None];

        if let Some(prev_id) = prev {
            let neighbor = &mut self.nodes[prev_id.0];
            let before = neighbor.vertex.priority();
            neighbor.vertex.set_line_b(bridge)?;
            neighbor.next = next;
            if neighbor.vertex.priority() > before {
                promoted[0] = Some(prev_id);
            }
        }

        if let Some(next_id) = next {
            let neighbor = &mut self.nodes[next_id.0];
            let before = neighbor.vertex.priority();
            neighbor.vertex.set_line_a(bridge)?;
            neighbor.prev = prev;
            if neighbor.vertex.priority() > before {
                promoted[1] = Some(next_id);
            }
        }

        if self.head == Some(id) {
            self.head = next;
        }

        let node = &mut self.nodes[id.0];
        node.removed = true;
        node.prev = None;
        node.next = None;
        self.live -= 1;

        Ok(Deletion {
            point_index,
            promoted,
        })
    }
}
