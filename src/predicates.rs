//! Exact-sign geometric predicates.
//!
//! These classify strictly by the sign of the floating-point expression:
//! no tolerance windows, no epsilon arguments. Inputs in general position
//! are classified correctly; near-degenerate inputs are the caller's
//! problem, not smoothed over here.
//!
//! Every counted predicate takes a [`Metrics`] context so callers can
//! measure how much geometry a computation performed. The counters travel
//! with the computation that owns them instead of living in process-global
//! state.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn counter-clockwise (positive area).
    CounterClockwise,
    /// Points turn clockwise (negative area).
    Clockwise,
    /// Points are exactly collinear.
    Collinear,
}

/// Predicate counters for one computation.
///
/// Reset at the start of a run, readable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Orientation (sidedness) tests performed.
    pub orientation_tests: u64,
    /// Square roots taken (distance evaluations).
    pub square_roots: u64,
    /// Weight comparisons made by the decomposition recurrence.
    pub comparisons: u64,
}

impl Metrics {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Twice the signed area of the triangle (a, b, c).
#[inline]
fn signed_area2<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, metrics: &mut Metrics) -> F {
    metrics.orientation_tests += 1;
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Computes the exact orientation of three points.
///
/// Returns the orientation of the triangle formed by `a`, `b`, `c`:
/// `CounterClockwise` if `c` is to the left of the directed line a→b,
/// `Clockwise` if to the right, `Collinear` if exactly on it.
#[inline]
pub fn orient2d<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    metrics: &mut Metrics,
) -> Orientation {
    let area = signed_area2(a, b, c, metrics);
    if area > F::zero() {
        Orientation::CounterClockwise
    } else if area < F::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// True if `c` is strictly to the left of the directed line a→b.
#[inline]
pub fn left<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, metrics: &mut Metrics) -> bool {
    signed_area2(a, b, c, metrics) > F::zero()
}

/// True if `c` is strictly to the right of the directed line a→b.
#[inline]
pub fn right<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, metrics: &mut Metrics) -> bool {
    signed_area2(a, b, c, metrics) < F::zero()
}

/// True if the three points are exactly collinear.
#[inline]
pub fn collinear<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    metrics: &mut Metrics,
) -> bool {
    signed_area2(a, b, c, metrics) == F::zero()
}

/// Euclidean distance between two points, counted as a square root.
#[inline]
pub fn distance<F: Float>(p: Point2<F>, q: Point2<F>, metrics: &mut Metrics) -> F {
    metrics.square_roots += 1;
    p.distance(q)
}

/// Dot product of the vectors o→p and o→q.
#[inline]
fn dot_from<F: Float>(o: Point2<F>, p: Point2<F>, q: Point2<F>) -> F {
    (p - o).dot(q - o)
}

/// Tests whether the closed segments a–b and c–d intersect.
///
/// Two orientation tests per segment, with a collinear fallback: when all
/// four points lie on one line the segments intersect iff their spans
/// overlap (shared endpoints count).
pub fn segments_intersect<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    d: Point2<F>,
    metrics: &mut Metrics,
) -> bool {
    let abc = signed_area2(a, b, c, metrics);
    let abd = signed_area2(a, b, d, metrics);
    if abc * abd > F::zero() {
        return false;
    }
    if abc == F::zero() && abd == F::zero() {
        // All four collinear: overlap test by dot-product signs.
        return dot_from(c, a, b) <= F::zero()
            || dot_from(d, a, b) <= F::zero()
            || dot_from(a, c, d) <= F::zero();
    }
    let cda = signed_area2(c, d, a, metrics);
    let cdb = signed_area2(c, d, b, metrics);
    cda * cdb <= F::zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_orientation_cases() {
        let mut m = Metrics::new();
        assert_eq!(
            orient2d(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), &mut m),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orient2d(p(0.0, 0.0), p(1.0, 0.0), p(0.0, -1.0), &mut m),
            Orientation::Clockwise
        );
        assert_eq!(
            orient2d(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), &mut m),
            Orientation::Collinear
        );
        assert_eq!(m.orientation_tests, 3);
    }

    #[test]
    fn test_left_right_are_strict() {
        let mut m = Metrics::new();
        let on = p(3.0, 0.0);
        assert!(!left(p(0.0, 0.0), p(1.0, 0.0), on, &mut m));
        assert!(!right(p(0.0, 0.0), p(1.0, 0.0), on, &mut m));
        assert!(collinear(p(0.0, 0.0), p(1.0, 0.0), on, &mut m));
    }

    #[test]
    fn test_distance_counts_square_roots() {
        let mut m = Metrics::new();
        assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0), &mut m), 5.0);
        assert_eq!(m.square_roots, 1);
    }

    #[test]
    fn test_segments_crossing() {
        let mut m = Metrics::new();
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(2.0, 0.0),
            &mut m
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        let mut m = Metrics::new();
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0),
            &mut m
        ));
        // Same line, disjoint spans.
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0),
            &mut m
        ));
    }

    #[test]
    fn test_segments_touching_endpoint() {
        let mut m = Metrics::new();
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 0.0),
            &mut m
        ));
    }

    #[test]
    fn test_segments_collinear_overlap() {
        let mut m = Metrics::new();
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(3.0, 0.0),
            &mut m
        ));
    }

    #[test]
    fn test_metrics_reset() {
        let mut m = Metrics::new();
        let _ = left(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), &mut m);
        assert!(m.orientation_tests > 0);
        m.reset();
        assert_eq!(m, Metrics::default());
    }
}
