//! geosqueeze: turn-angle polyline simplification (sans-IO).
//!
//! Shrinks the point count of a line while bounding how much its
//! direction can change:
//! precision reduction -> vertex chain -> prioritized elimination ->
//! surviving points.
//!
//! Each interior point becomes a [`Vertex`] scored by the turn angle
//! between its two incident lines. The straightest vertex is removed
//! first, its neighbors are re-scored against the line that bridges
//! the gap, and elimination stops once the straightest remaining
//! vertex turns more than the configured tolerance.
//!
//! This crate has **no I/O dependencies**: it operates on in-memory
//! point sequences and returns structured data. Loading and saving
//! geometries is left to callers; [`compress_line_string`] accepts the
//! `geo` crate's line strings directly.
//!
//! ```
//! use geosqueeze::{Point, Polyline, SqueezeConfig};
//!
//! let line = Polyline::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(0.0, 2.0),
//!     Point::new(1.0, 2.0),
//! ]);
//! let simplified = geosqueeze::simplify(&line, &SqueezeConfig::default())?;
//! assert_eq!(simplified.len(), 3);
//! # Ok::<(), geosqueeze::SqueezeError>(())
//! ```

pub mod chain;
pub mod diagnostics;
pub mod line;
pub mod line_string;
pub mod precision;
pub mod simplify;
pub mod types;
pub mod vertex;

pub use chain::{Deletion, VertexChain, VertexId};
pub use diagnostics::{Clock, SqueezeDiagnostics, simplify_with_diagnostics};
pub use line::Line;
pub use line_string::compress_line_string;
pub use simplify::{EliminationStats, simplify, simplify_points, simplify_with_stats};
pub use types::{Point, Polyline, SqueezeConfig, SqueezeError};
pub use vertex::Vertex;
