//! Homogeneous (projective) coordinates for lines and points.
//!
//! A triple (w, x, y) represents the line `w + x·px + y·py = 0`, or —
//! after a `meet` — the point (x/w, y/w). Working projectively lets two
//! lines always intersect: parallel lines meet at a point at infinity,
//! signalled by w = 0, with no special-casing in the formulas themselves.

use super::Point2;
use num_traits::Float;

/// A line (or meet point) in homogeneous coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homog<F> {
    pub w: F,
    pub x: F,
    pub y: F,
}

impl<F: Float> Homog<F> {
    /// Creates a homogeneous triple directly.
    #[inline]
    pub fn new(w: F, x: F, y: F) -> Self {
        Self { w, x, y }
    }

    /// The line through two points, oriented from `p` to `q`.
    ///
    /// Points to the left of the directed line p→q test positive with
    /// [`Homog::left`].
    #[inline]
    pub fn join(p: Point2<F>, q: Point2<F>) -> Self {
        Self {
            w: p.x * q.y - p.y * q.x,
            x: p.y - q.y,
            y: q.x - p.x,
        }
    }

    /// The intersection of two lines, as a homogeneous point.
    ///
    /// For parallel lines the result has `w == 0`: a direction rather
    /// than a finite location. See [`Homog::is_at_infinity`].
    #[inline]
    pub fn meet(self, other: Self) -> Self {
        Self {
            w: self.x * other.y - self.y * other.x,
            x: other.w * self.y - self.w * other.y,
            y: self.w * other.x - other.w * self.x,
        }
    }

    /// A pseudo-line with every finite point strictly to its left.
    ///
    /// Used as the open window bound when a bay scan has no saved lid.
    #[inline]
    pub fn open() -> Self {
        Self {
            w: F::one(),
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Reverses the line's orientation (swaps its left and right sides).
    #[inline]
    pub fn neg(self) -> Self {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
        }
    }

    /// True for a meet of parallel lines.
    #[inline]
    pub fn is_at_infinity(self) -> bool {
        self.w == F::zero()
    }

    /// Converts a homogeneous point back to Cartesian coordinates.
    ///
    /// Returns `None` for a point at infinity.
    #[inline]
    pub fn to_point(self) -> Option<Point2<F>> {
        if self.is_at_infinity() {
            None
        } else {
            Some(Point2::new(self.x / self.w, self.y / self.w))
        }
    }

    /// Signed incidence of a point with this line.
    #[inline]
    fn eval(self, p: Point2<F>) -> F {
        self.w + self.x * p.x + self.y * p.y
    }

    /// True if `p` is strictly to the left of this directed line.
    #[inline]
    pub fn left(self, p: Point2<F>) -> bool {
        self.eval(p) > F::zero()
    }

    /// True if `p` is strictly to the right of this directed line.
    #[inline]
    pub fn right(self, p: Point2<F>) -> bool {
        self.eval(p) < F::zero()
    }

    #[inline]
    fn perp_dot(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Signed determinant of three homogeneous elements.
    #[inline]
    pub fn det(p: Self, q: Self, r: Self) -> F {
        p.w * q.perp_dot(r) - q.w * p.perp_dot(r) + r.w * p.perp_dot(q)
    }

    /// True if the triple (p, q, r) is clockwise (negative determinant).
    #[inline]
    pub fn clockwise(p: Self, q: Self, r: Self) -> bool {
        Self::det(p, q, r) < F::zero()
    }

    /// True if the triple (p, q, r) is counter-clockwise.
    #[inline]
    pub fn counter_clockwise(p: Self, q: Self, r: Self) -> bool {
        Self::det(p, q, r) > F::zero()
    }
}
