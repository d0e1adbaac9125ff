//! Visibility polygon computation from a polygon vertex.
//!
//! Computes, in a single O(n) sweep, which vertices of a simple polygon
//! are visible from a chosen vertex. The sweep walks the boundary once,
//! maintaining a stack of visibility-polygon vertices tagged as *walls*
//! (true polygon edges on the visible boundary) or *lids* (provisional
//! chords bridging a concavity). Concavities — *bays* — are skipped with a
//! winding-number scan along the ray from the origin through the bay's
//! mouth.
//!
//! # Example
//!
//! ```
//! use convexcut::polygon::{visible_vertices, Polygon};
//! use convexcut::Metrics;
//!
//! let square: Polygon<f64> =
//!     Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
//! let mut metrics = Metrics::new();
//! let mut seen = visible_vertices(&square, 0, &mut metrics).unwrap();
//! seen.sort_unstable();
//! assert_eq!(seen, vec![0, 1, 2, 3]); // every corner of a square sees every other
//! ```

use crate::error::DecompError;
use crate::polygon::Polygon;
use crate::predicates::{left, right, Metrics};
use crate::primitives::{Homog, Point2};
use num_traits::Float;

/// Tag for one vertex on the visibility-polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryTag {
    /// A polygon edge on the right side of the visible region.
    RightWall,
    /// A polygon edge on the left side of the visible region.
    LeftWall,
    /// A provisional chord closing a bay on the right side.
    RightLid,
    /// A provisional chord closing a bay on the left side.
    LeftLid,
}

/// Single-origin visibility sweep over a simple polygon.
///
/// The sweep is reusable: call [`VisibilitySweep::build`] once per origin
/// and drain the result with [`VisibilitySweep::pop_visible`]; the stack
/// storage is recycled between builds.
///
/// The polygon must be simple — that precondition is not checked, but a
/// boundary that self-intersects makes the bay scans diverge, which is
/// caught by a 3n step bound and reported as
/// [`DecompError::DegenerateInput`].
#[derive(Debug)]
pub struct VisibilitySweep<'p, F> {
    poly: &'p Polygon<F>,
    origin: Point2<F>,
    /// Boundary vertices as (unwrapped index, tag), origin at the bottom.
    stack: Vec<(usize, BoundaryTag)>,
    left_lid: usize,
    right_lid: Option<usize>,
}

impl<'p, F: Float> VisibilitySweep<'p, F> {
    /// Creates a sweep over `poly`. The polygon must have at least 3 vertices.
    pub fn new(poly: &'p Polygon<F>) -> Self {
        VisibilitySweep {
            poly,
            origin: poly.vertex(0),
            stack: Vec::with_capacity(poly.len()),
            left_lid: 0,
            right_lid: None,
        }
    }

    /// Vertex `j` with cyclic wrap-around.
    #[inline]
    fn at(&self, j: usize) -> Point2<F> {
        self.poly.cyclic(j)
    }

    #[inline]
    fn push(&mut self, idx: usize, tag: BoundaryTag) {
        self.stack.push((idx, tag));
    }

    fn top_point(&self) -> Result<Point2<F>, DecompError> {
        self.stack
            .last()
            .map(|&(i, _)| self.at(i))
            .ok_or(DecompError::DegenerateInput)
    }

    /// Removes the current lid vertices from the stack, remembering them.
    fn save_lid(&mut self) -> Result<(), DecompError> {
        if matches!(self.stack.last(), Some(&(_, BoundaryTag::LeftWall))) {
            self.stack.pop();
        }
        let (lid, _) = self.stack.pop().ok_or(DecompError::DegenerateInput)?;
        self.left_lid = lid;
        self.right_lid = match self.stack.last() {
            Some(&(idx, BoundaryTag::RightLid)) => {
                self.stack.pop();
                Some(idx)
            }
            _ => None,
        };
        Ok(())
    }

    /// Puts the saved lid back on the stack.
    fn restore_lid(&mut self) {
        if let Some(r) = self.right_lid {
            self.push(r, BoundaryTag::RightLid);
        }
        self.push(self.left_lid, BoundaryTag::LeftLid);
    }

    /// Builds the visibility polygon for the vertex at `origin`.
    ///
    /// The boundary is left on the internal stack; consume it with
    /// [`VisibilitySweep::pop_visible`].
    pub fn build(&mut self, origin: usize, metrics: &mut Metrics) -> Result<(), DecompError> {
        let n = self.poly.len();
        let end = origin + n;
        self.origin = self.poly.vertex(origin);
        self.stack.clear();

        self.push(origin, BoundaryTag::RightWall);
        let mut j = origin + 1;
        loop {
            self.push(j, BoundaryTag::RightWall);
            j += 1;
            if j >= end {
                return Ok(());
            }
            let mut edge = Homog::join(self.at(j - 1), self.at(j));
            if edge.left(self.origin) {
                // The new edge extends the visible boundary: plain wall.
            } else if !edge.left(self.at(j - 2)) {
                // The boundary turned back above the last visible edge.
                let bottom = self.top_point()?;
                j = self.exit_right_bay(j, bottom, Homog::open(), metrics)?;
                self.push(j, BoundaryTag::RightLid);
                j += 1;
            } else {
                // The new vertex dips below the visible boundary and
                // starts hiding previously visible vertices.
                self.save_lid()?;
                loop {
                    if j >= 3 * n {
                        return Err(DecompError::DegenerateInput);
                    }
                    let top = self.top_point()?;
                    if left(self.origin, top, self.at(j), metrics) {
                        if right(self.at(j), self.at(j + 1), self.origin, metrics) {
                            // Still walking away: keep hiding.
                            j += 1;
                        } else if edge.left(self.at(j + 1)) {
                            // Turned up into a bay on the left side.
                            let lid_prev = self
                                .left_lid
                                .checked_sub(1)
                                .ok_or(DecompError::DegenerateInput)?;
                            let lid = Homog::join(self.at(self.left_lid), self.at(lid_prev));
                            j = self.exit_left_bay(j, self.at(j), lid, metrics)? + 1;
                        } else {
                            // Turned back down: the saved lid survives and
                            // the new edge joins the visible boundary.
                            self.restore_lid();
                            self.push(j, BoundaryTag::LeftWall);
                            j += 1;
                            break;
                        }
                        edge = Homog::join(self.at(j - 1), self.at(j));
                    } else if !edge.left(top) {
                        // The lid itself stopped being visible: the sweep
                        // entered a right bay and must scan out of it.
                        j = self.exit_right_bay(j, top, edge.neg(), metrics)?;
                        self.push(j, BoundaryTag::RightLid);
                        j += 1;
                        break;
                    } else {
                        // One more visible vertex got hidden.
                        self.save_lid()?;
                    }
                }
            }
            if j >= end {
                return Ok(());
            }
        }
    }

    /// Pops the next visible polygon vertex, skipping lid entries.
    ///
    /// Returns wrapped vertex indices; the origin itself comes out last.
    pub fn pop_visible(&mut self) -> Option<usize> {
        while let Some(&(_, tag)) = self.stack.last() {
            if matches!(tag, BoundaryTag::RightLid | BoundaryTag::LeftLid) {
                self.stack.pop();
            } else {
                break;
            }
        }
        self.stack.pop().map(|(idx, _)| idx % self.poly.len())
    }

    /// Scans forward out of a bay on the right of the ray origin→`bottom`.
    ///
    /// Counts signed crossings of the ray; on each 0→1 transition checks
    /// whether the crossing edge lies inside the window between the bay
    /// mouth and `lid`. Returns the index whose edge forms the bay's new
    /// lid. The scan must resolve within 3n steps on a simple polygon;
    /// exceeding that budget reports the input as degenerate.
    fn exit_right_bay(
        &self,
        mut j: usize,
        bottom: Point2<F>,
        lid: Homog<F>,
        metrics: &mut Metrics,
    ) -> Result<usize, DecompError> {
        let n = self.poly.len();
        let mouth = Homog::join(self.origin, bottom);
        let mut winding: i32 = 0;
        let mut curr_left = false;
        loop {
            j += 1;
            if j >= 3 * n {
                return Err(DecompError::DegenerateInput);
            }
            let last_left = curr_left;
            curr_left = mouth.left(self.at(j));
            if curr_left != last_left
                && left(self.at(j - 1), self.at(j), self.origin, metrics) == curr_left
            {
                if !curr_left {
                    winding -= 1;
                } else {
                    winding += 1;
                    if winding == 1 {
                        let edge = Homog::join(self.at(j - 1), self.at(j));
                        if edge.left(bottom) && !Homog::clockwise(mouth, edge, lid) {
                            return Ok(j - 1);
                        }
                    }
                }
            }
        }
    }

    /// Mirror image of [`VisibilitySweep::exit_right_bay`] for left bays.
    fn exit_left_bay(
        &self,
        mut j: usize,
        bottom: Point2<F>,
        lid: Homog<F>,
        metrics: &mut Metrics,
    ) -> Result<usize, DecompError> {
        let n = self.poly.len();
        let mouth = Homog::join(self.origin, bottom);
        let mut winding: i32 = 0;
        let mut curr_right = false;
        loop {
            j += 1;
            if j >= 3 * n {
                return Err(DecompError::DegenerateInput);
            }
            let last_right = curr_right;
            curr_right = mouth.right(self.at(j));
            if curr_right != last_right
                && right(self.at(j - 1), self.at(j), self.origin, metrics) == curr_right
            {
                if !curr_right {
                    winding += 1;
                } else {
                    winding -= 1;
                    if winding == -1 {
                        let edge = Homog::join(self.at(j - 1), self.at(j));
                        if edge.right(bottom) && !Homog::clockwise(mouth, edge, lid) {
                            return Ok(j - 1);
                        }
                    }
                }
            }
        }
    }
}

/// Collects the vertices visible from `origin` in a simple polygon.
///
/// The origin is included in its own visibility set. Indices come out in
/// reverse boundary order (origin last).
///
/// # Errors
///
/// [`DecompError::InvalidPolygon`] for fewer than 3 vertices;
/// [`DecompError::DegenerateInput`] if a bay scan diverges, which means
/// the polygon was not simple.
pub fn visible_vertices<F: Float>(
    poly: &Polygon<F>,
    origin: usize,
    metrics: &mut Metrics,
) -> Result<Vec<usize>, DecompError> {
    if poly.len() < 3 {
        return Err(DecompError::InvalidPolygon { got: poly.len() });
    }
    let mut sweep = VisibilitySweep::new(poly);
    sweep.build(origin, metrics)?;
    let mut seen = Vec::new();
    while let Some(j) = sweep.pop_visible() {
        seen.push(j);
    }
    Ok(seen)
}
