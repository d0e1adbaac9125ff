//! Polygon representation, visibility, and minimum convex decomposition.
//!
//! The central entry point is [`min_convex_decomposition`], which splits a
//! simple polygon into the fewest convex pieces reachable with diagonals.
//! [`visible_vertices`] exposes the underlying visibility computation on
//! its own, and [`Decomposer`] adds an observation hook for callers that
//! want to watch a run unfold.
//!
//! # Example
//!
//! ```
//! use convexcut::polygon::{min_convex_decomposition, Polygon};
//!
//! let l_shape: Polygon<f64> = Polygon::from_coords(&[
//!     (0.0, 0.0),
//!     (2.0, 0.0),
//!     (2.0, 1.0),
//!     (1.0, 1.0),
//!     (1.0, 2.0),
//!     (0.0, 2.0),
//! ]);
//!
//! let result = min_convex_decomposition(&l_shape).unwrap();
//! assert_eq!(result.weight, 1); // one cut makes both pieces convex
//! ```

mod core;
mod decompose;
mod frontier;
mod reflex;
mod table;
mod visibility;

pub use self::core::{polygon_contains, polygon_is_convex, polygon_signed_area, Polygon};
pub use self::decompose::{min_convex_decomposition, Decomposer, Decomposition, EventKind};
pub use self::visibility::{visible_vertices, BoundaryTag, VisibilitySweep};
