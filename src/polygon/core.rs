//! Core polygon type and basic operations.

use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// Vertices are stored in counter-clockwise order. The polygon is
/// implicitly closed (the last vertex connects to the first); the closing
/// vertex is not repeated. Simplicity — a boundary that does not
/// self-intersect — is the caller's responsibility and is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in CCW order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    ///
    /// The vertices should be in counter-clockwise order for a positive
    /// area. If provided in clockwise order, area calculations will be
    /// negative and reflex classification inverts.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Builds a polygon from `(x, y)` coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point2<F> {
        self.vertices[i]
    }

    /// Returns vertex `i` with cyclic wrap-around.
    ///
    /// Indices at or past `len()` wrap modulo the vertex count, so a scan
    /// may walk several times around the boundary without bookkeeping.
    #[inline]
    pub fn cyclic(&self, i: usize) -> Point2<F> {
        self.vertices[i % self.vertices.len()]
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// True if all cross products of consecutive edges share one sign.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);

        if cross != F::zero() {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::from_coords(&[(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)])
    }

    #[test]
    fn test_signed_area() {
        let sq = square(2.0);
        assert_eq!(sq.signed_area(), 4.0);
        let mut cw = sq.clone();
        cw.vertices.reverse();
        assert_eq!(cw.signed_area(), -4.0);
        cw.ensure_ccw();
        assert_eq!(cw.signed_area(), 4.0);
    }

    #[test]
    fn test_cyclic_access() {
        let sq = square(1.0);
        assert_eq!(sq.cyclic(0), sq.cyclic(4));
        assert_eq!(sq.cyclic(5), sq.vertex(1));
        assert_eq!(sq.cyclic(11), sq.vertex(3));
    }

    #[test]
    fn test_contains() {
        let sq = square(10.0);
        assert!(sq.contains(Point2::new(5.0, 5.0)));
        assert!(!sq.contains(Point2::new(15.0, 5.0)));
        assert!(!sq.contains(Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_is_convex() {
        assert!(square(1.0).is_convex());

        let l_shape = Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert!(!l_shape.is_convex());
    }
}
