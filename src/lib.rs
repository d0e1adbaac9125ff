//! convexcut - Minimum convex decomposition of simple polygons
//!
//! Convex pieces are what downstream geometry wants to work with. This
//! library cuts a simple polygon into the fewest convex pieces reachable
//! by inserting diagonals between mutually visible vertices — the exact
//! optimum, not an approximation — using a visibility-pruned dynamic
//! program with exact-sign predicates.

pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;

pub use error::DecompError;
pub use polygon::{
    min_convex_decomposition, visible_vertices, Decomposer, Decomposition, EventKind, Polygon,
    VisibilitySweep,
};
pub use predicates::{
    collinear, distance, left, orient2d, right, segments_intersect, Metrics, Orientation,
};
pub use primitives::{Homog, Point2, Vec2};
