//! Minimum convex decomposition of a simple polygon.
//!
//! Partitions a simple polygon into the fewest convex pieces obtainable by
//! inserting diagonals between mutually visible vertices. Dynamic program
//! over boundary intervals (i, k), pruned to intervals with a reflex
//! endpoint: convex vertices never force a cut. Each interval keeps a
//! frontier of tied optimal splits so the recurrence can decide in
//! amortized constant time whether extending a convex piece absorbs a
//! chord or a genuine diagonal is unavoidable, and so the final diagonal
//! set can be reconstructed exactly.
//!
//! # Example
//!
//! ```
//! use convexcut::polygon::{min_convex_decomposition, Polygon};
//!
//! // A square is already convex: nothing to cut.
//! let square: Polygon<f64> =
//!     Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
//! let result = min_convex_decomposition(&square).unwrap();
//! assert_eq!(result.weight, 0);
//! assert!(result.diagonals.is_empty());
//!
//! // One reflex notch needs exactly one diagonal.
//! let dart: Polygon<f64> = Polygon::from_coords(&[
//!     (0.0, 0.0),
//!     (10.0, 0.0),
//!     (5.0, 2.0),
//!     (10.0, 10.0),
//!     (0.0, 10.0),
//! ]);
//! let result = min_convex_decomposition(&dart).unwrap();
//! assert_eq!(result.weight, 1);
//! assert_eq!(result.diagonals.len(), 1);
//! ```

use crate::error::DecompError;
use crate::polygon::reflex::ReflexChain;
use crate::polygon::table::{SubTable, UNSOLVED};
use crate::polygon::visibility::VisibilitySweep;
use crate::polygon::Polygon;
use crate::predicates::{left, right, Metrics};
use num_traits::Float;

/// What an observation callback is being told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A visibility edge between two vertices was established.
    VisibilityEdge,
    /// A diagonal of the final decomposition was chosen.
    Diagonal,
}

/// Result of a decomposition run.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Minimal number of diagonals needed.
    pub weight: usize,
    /// The chosen diagonals, as vertex-index pairs with the smaller index
    /// first. `weight == diagonals.len()` on every successful run.
    pub diagonals: Vec<(usize, usize)>,
    /// Predicate counters accumulated during the run.
    pub metrics: Metrics,
}

/// Computes a minimum convex decomposition of a simple polygon.
///
/// The polygon must list at least three vertices in counter-clockwise
/// order and must be simple; simplicity is the caller's contract and is
/// not verified up front, though grossly violating it is usually caught
/// as [`DecompError::DegenerateInput`].
pub fn min_convex_decomposition<F: Float>(
    polygon: &Polygon<F>,
) -> Result<Decomposition, DecompError> {
    Decomposer::new(polygon)?.run()
}

/// Builder for a single decomposition run.
///
/// Lets a caller attach an observation hook before running:
///
/// ```
/// use convexcut::polygon::{Decomposer, EventKind, Polygon};
///
/// let dart: Polygon<f64> = Polygon::from_coords(&[
///     (0.0, 0.0),
///     (10.0, 0.0),
///     (5.0, 2.0),
///     (10.0, 10.0),
///     (0.0, 10.0),
/// ]);
/// let mut chosen = Vec::new();
/// let mut hook = |kind, i, j| {
///     if kind == EventKind::Diagonal {
///         chosen.push((i, j));
///     }
/// };
/// let result = Decomposer::new(&dart).unwrap().with_observer(&mut hook).run().unwrap();
/// assert_eq!(chosen, result.diagonals);
/// ```
pub struct Decomposer<'a, F> {
    poly: &'a Polygon<F>,
    observer: Option<&'a mut dyn FnMut(EventKind, usize, usize)>,
}

impl<'a, F: Float> Decomposer<'a, F> {
    /// Prepares a run over `polygon`.
    ///
    /// Fails eagerly with [`DecompError::InvalidPolygon`] if fewer than
    /// three vertices were supplied.
    pub fn new(polygon: &'a Polygon<F>) -> Result<Self, DecompError> {
        if polygon.len() < 3 {
            return Err(DecompError::InvalidPolygon { got: polygon.len() });
        }
        Ok(Decomposer {
            poly: polygon,
            observer: None,
        })
    }

    /// Attaches an observation hook for this run.
    ///
    /// The hook is called synchronously after each resolved visibility
    /// edge and each chosen diagonal; it cannot alter the outcome.
    pub fn with_observer(mut self, observer: &'a mut dyn FnMut(EventKind, usize, usize)) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Runs the decomposition.
    pub fn run(self) -> Result<Decomposition, DecompError> {
        let poly = self.poly;
        let n = poly.len();
        let mut metrics = Metrics::new();
        let reflex = ReflexChain::classify(poly, &mut metrics);
        log::debug!("decomposing {}-gon with {} reflex vertices", n, reflex.count());

        let table = SubTable::new(reflex.flags());
        let mut engine = Engine {
            poly,
            n,
            reflex,
            table,
            metrics,
            observer: self.observer,
        };

        engine.init_visibility()?;
        engine.init_subproblems();
        engine.fill();
        let diagonals = engine.recover()?;
        let weight = engine.table.weight(0, n - 1) as usize;
        log::debug!("minimum decomposition uses {} diagonals", weight);

        Ok(Decomposition {
            weight,
            diagonals,
            metrics: engine.metrics,
        })
    }
}

/// Which recurrence mirror is being applied to an interval (i, j, k).
///
/// The two cases are reflections of each other: which endpoint is reflex
/// decides which sub-interval's frontier is consulted and from which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitKind {
    /// Left endpoint i is reflex; consult (i, j) from the back.
    ReflexLeft,
    /// Right endpoint k is reflex and i is not; consult (j, k) from the front.
    ReflexRight,
}

/// One decomposition run's working state.
struct Engine<'a, F> {
    poly: &'a Polygon<F>,
    n: usize,
    reflex: ReflexChain,
    table: SubTable,
    metrics: Metrics,
    observer: Option<&'a mut dyn FnMut(EventKind, usize, usize)>,
}

impl<F: Float> Engine<'_, F> {
    fn notify(&mut self, kind: EventKind, i: usize, j: usize) {
        if let Some(obs) = self.observer.as_deref_mut() {
            obs(kind, i, j);
        }
    }

    /// Marks every vertex pair seen by some reflex vertex as visible.
    fn init_visibility(&mut self) -> Result<(), DecompError> {
        let mut sweep = VisibilitySweep::new(self.poly);
        let origins: Vec<usize> = self.reflex.iter().collect();
        for origin in origins {
            sweep.build(origin, &mut self.metrics)?;
            let mut count = 0usize;
            while let Some(j) = sweep.pop_visible() {
                if j < origin {
                    self.table.set_weight(j, origin, UNSOLVED);
                } else {
                    self.table.set_weight(origin, j, UNSOLVED);
                }
                if j != origin {
                    count += 1;
                    self.notify(EventKind::VisibilityEdge, origin, j);
                }
            }
            log::trace!("visibility from {}: {} vertices", origin, count);
        }
        Ok(())
    }

    /// Solves the interval after reflex vertex `i`: the edge (i, i+1) is
    /// free, and the two-edge chain to i+2 costs nothing if its closing
    /// chord is visible.
    fn set_after(&mut self, i: usize) {
        debug_assert!(self.reflex.is_reflex(i));
        self.table.set_weight(i, i + 1, 0);
        if i + 2 < self.n && self.table.visible(i, i + 2) {
            self.table.seed(i, i + 2, 0, i + 1, i + 1);
        }
    }

    /// Mirror of `set_after` for the interval ending at reflex vertex `i`.
    fn set_before(&mut self, i: usize) {
        debug_assert!(self.reflex.is_reflex(i));
        self.table.set_weight(i - 1, i, 0);
        if i >= 2 && self.table.visible(i - 2, i) {
            self.table.seed(i - 2, i, 0, i - 1, i - 1);
        }
    }

    /// Seeds all length-1 and length-2 intervals around reflex vertices.
    ///
    /// The ladder mirrors the index arithmetic limits: vertex 0 has no
    /// predecessor interval, vertex 1's predecessor is the seam edge, and
    /// the last two vertices have no successor chain to seed.
    fn init_subproblems(&mut self) {
        let n = self.n;
        let mut i = self.reflex.first();
        if i == 0 {
            self.set_after(i);
            i = self.reflex.next_after(i);
        }
        if i == 1 {
            self.table.set_weight(0, 1, 0);
            self.set_after(i);
            i = self.reflex.next_after(i);
        }
        while i + 2 < n {
            self.set_before(i);
            self.set_after(i);
            i = self.reflex.next_after(i);
        }
        if i + 2 == n {
            self.set_before(i);
            self.table.set_weight(i, i + 1, 0);
            i = self.reflex.next_after(i);
        }
        if i + 1 == n {
            self.set_before(i);
        }
    }

    /// Fills the table in order of increasing interval length.
    fn fill(&mut self) {
        let n = self.n;
        for l in 3..n {
            // Intervals whose left endpoint is reflex.
            let mut i = self.reflex.first();
            while i + l < n {
                let k = i + l;
                if self.table.visible(i, k) {
                    self.table.begin(i, k);
                    if self.reflex.is_reflex(k) {
                        for j in i + 1..k {
                            self.relax_split(SplitKind::ReflexLeft, i, j, k);
                        }
                    } else {
                        let mut j = self.reflex.at_or_after(i + 1);
                        while j + 1 < k {
                            self.relax_split(SplitKind::ReflexLeft, i, j, k);
                            j = self.reflex.next_after(j);
                        }
                        self.relax_split(SplitKind::ReflexLeft, i, k - 1, k);
                    }
                }
                i = self.reflex.next_after(i);
            }
            // Intervals whose left endpoint is convex but whose right
            // endpoint is reflex.
            let mut k = self.reflex.at_or_after(l);
            while k < n {
                let i = k - l;
                if !self.reflex.is_reflex(i) && self.table.visible(i, k) {
                    self.table.begin(i, k);
                    self.relax_split(SplitKind::ReflexRight, i, i + 1, k);
                    let mut j = self.reflex.at_or_after(i + 2);
                    while j < k {
                        self.relax_split(SplitKind::ReflexRight, i, j, k);
                        j = self.reflex.next_after(j);
                    }
                }
                k = self.reflex.next_after(k);
            }
        }
    }

    /// Tries splitting interval (i, k) at vertex j and records the result.
    fn relax_split(&mut self, kind: SplitKind, i: usize, j: usize, k: usize) {
        let (near, far) = match kind {
            SplitKind::ReflexLeft => ((i, j), (j, k)),
            SplitKind::ReflexRight => ((j, k), (i, j)),
        };
        if !self.table.visible(near.0, near.1) {
            return;
        }
        let mut w = self.table.weight(near.0, near.1);
        if far.1 - far.0 > 1 {
            if !self.table.visible(far.0, far.1) {
                return;
            }
            w += self.table.weight(far.0, far.1) + 1;
        }
        let mut top = j;
        if near.1 - near.0 > 1 {
            match self.absorb_split(kind, i, j, k) {
                Some(t) => top = t,
                None => w += 1,
            }
        }
        let (a, b) = match kind {
            SplitKind::ReflexLeft => (top, j),
            SplitKind::ReflexRight => (j, top),
        };
        self.update(i, k, w, a, b);
    }

    /// Decides whether the convex piece at the split can be widened to
    /// absorb the chord toward the reflex endpoint.
    ///
    /// Walks the near interval's frontier from the side matching `kind`,
    /// discarding splits that are no longer compatible with the new apex.
    /// Returns the surviving split index, or `None` when every stored
    /// split fails and a genuine diagonal is unavoidable.
    fn absorb_split(&mut self, kind: SplitKind, i: usize, j: usize, k: usize) -> Option<usize> {
        let poly = self.poly;
        let m = &mut self.metrics;
        let (pi, pj, pk) = (poly.vertex(i), poly.vertex(j), poly.vertex(k));
        match kind {
            SplitKind::ReflexLeft => {
                let pair = self.table.frontier_mut(i, j);
                if pair.back_empty() || left(pk, pj, poly.vertex(pair.back_pair().1), m) {
                    return None;
                }
                while pair.back_more() && !left(pk, pj, poly.vertex(pair.back_under().1), m) {
                    pair.pop_back();
                }
                if !pair.back_empty() && !right(pk, pi, poly.vertex(pair.back_pair().0), m) {
                    Some(pair.back_pair().0)
                } else {
                    None
                }
            }
            SplitKind::ReflexRight => {
                let pair = self.table.frontier_mut(j, k);
                if pair.front_empty() || right(pi, pj, poly.vertex(pair.front_pair().0), m) {
                    return None;
                }
                while pair.front_more() && !right(pi, pj, poly.vertex(pair.front_under().0), m) {
                    pair.pop_front();
                }
                if !pair.front_empty() && !left(pi, pk, poly.vertex(pair.front_pair().1), m) {
                    Some(pair.front_pair().1)
                } else {
                    None
                }
            }
        }
    }

    /// Records a weight-`w` solution for (a, b) splitting at (i, j).
    ///
    /// A strictly better weight discards the frontier; a tie joins it.
    fn update(&mut self, a: usize, b: usize, w: u32, i: usize, j: usize) {
        self.metrics.comparisons += 1;
        let ow = self.table.weight(a, b);
        if w <= ow {
            if w < ow {
                self.table.frontier_mut(a, b).flush();
                self.table.set_weight(a, b, w);
            }
            self.table.frontier_mut(a, b).push_narrow(i, j);
        }
    }

    fn emit_diagonal(&mut self, out: &mut Vec<(usize, usize)>, i: usize, j: usize) {
        log::trace!("diagonal {}-{}", i, j);
        out.push((i, j));
        self.notify(EventKind::Diagonal, i, j);
    }

    /// Walks the solved table and extracts the chosen diagonal set.
    ///
    /// An explicit worklist replaces call-stack recursion so deep interval
    /// nests cannot overflow the stack; the guard counter preserves the
    /// fail-loud behavior on an inconsistent table. Split pairs with equal
    /// coordinates mark genuine diagonals; unequal coordinates mark
    /// virtual splits whose sub-frontier must be re-derived and realigned
    /// before descending.
    fn recover(&mut self) -> Result<Vec<(usize, usize)>, DecompError> {
        let n = self.n;
        let mut diagonals = Vec::new();
        let mut work: Vec<(usize, usize)> = vec![(0, n - 1)];
        let mut guard = 3 * n;

        while let Some((i, k)) = work.pop() {
            if guard == 0 {
                return Err(DecompError::RecursionOverrun);
            }
            guard -= 1;
            if k - i <= 1 {
                continue;
            }

            if self.reflex.is_reflex(i) {
                let fr = self.table.frontier_mut(i, k);
                if fr.back_empty() {
                    return Err(DecompError::RecursionOverrun);
                }
                let (a, b) = fr.back_pair();
                let j = b;
                if k - j > 1 {
                    self.emit_diagonal(&mut diagonals, j, k);
                }
                if j - i > 1 {
                    if a != b {
                        let sub = self.table.frontier_mut(i, j);
                        sub.restore();
                        while !sub.back_empty() && sub.back_pair().0 != a {
                            sub.pop_back();
                        }
                        if sub.back_empty() {
                            return Err(DecompError::RecursionOverrun);
                        }
                    } else {
                        self.emit_diagonal(&mut diagonals, i, j);
                    }
                    work.push((i, j));
                }
                work.push((j, k));
            } else {
                let fr = self.table.frontier_mut(i, k);
                if fr.front_empty() {
                    return Err(DecompError::RecursionOverrun);
                }
                let (a, b) = fr.front_pair();
                let j = a;
                if j - i > 1 {
                    self.emit_diagonal(&mut diagonals, i, j);
                }
                if k - j > 1 {
                    if a != b {
                        let sub = self.table.frontier_mut(j, k);
                        sub.restore();
                        while !sub.front_empty() && sub.front_pair().1 != b {
                            sub.pop_front();
                        }
                        if sub.front_empty() {
                            return Err(DecompError::RecursionOverrun);
                        }
                    } else {
                        self.emit_diagonal(&mut diagonals, j, k);
                    }
                    work.push((j, k));
                }
                work.push((i, j));
            }
        }
        Ok(diagonals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::visibility::visible_vertices;
    use rand::{Rng, SeedableRng};

    fn poly(coords: &[(f64, f64)]) -> Polygon<f64> {
        Polygon::from_coords(coords)
    }

    fn dart() -> Polygon<f64> {
        poly(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (5.0, 2.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ])
    }

    /// Random star-shaped polygon: strictly increasing angles around the
    /// origin with jittered radii. Always simple, usually heavily reflex.
    fn star_polygon(n: usize, seed: u64) -> Polygon<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let tau = std::f64::consts::PI * 2.0;
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let theta = (i as f64 + rng.gen_range(0.05..0.95)) / n as f64 * tau;
                let r = rng.gen_range(2.0..10.0);
                (r * theta.cos(), r * theta.sin())
            })
            .collect();
        Polygon::from_coords(&coords)
    }

    fn assert_diagonals_mutually_visible(p: &Polygon<f64>, result: &Decomposition) {
        for &(a, b) in &result.diagonals {
            let from_a = visible_vertices(p, a, &mut Metrics::new()).unwrap();
            let from_b = visible_vertices(p, b, &mut Metrics::new()).unwrap();
            assert!(
                from_a.contains(&b) && from_b.contains(&a),
                "diagonal ({}, {}) endpoints are not mutually visible",
                a,
                b
            );
        }
    }

    #[test]
    fn test_square_needs_nothing() {
        let result = min_convex_decomposition(&poly(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]))
        .unwrap();
        assert_eq!(result.weight, 0);
        assert!(result.diagonals.is_empty());
    }

    #[test]
    fn test_regular_polygons_need_nothing() {
        for n in 3..12 {
            let tau = std::f64::consts::PI * 2.0;
            let coords: Vec<(f64, f64)> = (0..n)
                .map(|i| {
                    let theta = i as f64 / n as f64 * tau;
                    (theta.cos(), theta.sin())
                })
                .collect();
            let result = min_convex_decomposition(&Polygon::from_coords(&coords)).unwrap();
            assert_eq!(result.weight, 0, "regular {}-gon", n);
            assert!(result.diagonals.is_empty());
        }
    }

    #[test]
    fn test_dart_needs_one_diagonal() {
        let p = dart();
        let result = min_convex_decomposition(&p).unwrap();
        assert_eq!(result.weight, 1);
        // The only cut resolving the notch at 2 runs to vertex 0.
        assert_eq!(result.diagonals, vec![(0, 2)]);
        assert_diagonals_mutually_visible(&p, &result);
    }

    #[test]
    fn test_l_shape_needs_one_diagonal() {
        let p = poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        let result = min_convex_decomposition(&p).unwrap();
        assert_eq!(result.weight, 1);
        assert_eq!(result.diagonals.len(), 1);
        let (a, b) = result.diagonals[0];
        // The cut must resolve the reflex corner at index 3.
        assert!(a == 3 || b == 3);
        assert_diagonals_mutually_visible(&p, &result);
    }

    #[test]
    fn test_double_notch_hexagon_needs_two() {
        // Two gentle notches (1 and 4) on opposite sides, offset so no
        // single diagonal resolves both. Each notch has exactly one
        // resolving cut: 1→5 and 4→2.
        let p = poly(&[
            (0.0, 0.0),
            (3.0, 2.0),
            (12.0, 0.0),
            (12.0, 6.0),
            (9.0, 4.0),
            (0.0, 6.0),
        ]);
        let result = min_convex_decomposition(&p).unwrap();
        assert_eq!(result.weight, 2);
        let mut got = result.diagonals.clone();
        got.sort_unstable();
        assert_eq!(got, vec![(1, 5), (2, 4)]);
        // Independent notches: the two cuts share no endpoint.
        assert_ne!(got[0].0, got[1].0);
        assert_ne!(got[0].1, got[1].1);
        assert_ne!(got[0].0, got[1].1);
        assert_ne!(got[0].1, got[1].0);
        assert_diagonals_mutually_visible(&p, &result);
    }

    #[test]
    fn test_u_shape_needs_two() {
        let p = poly(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (8.0, 10.0),
            (8.0, 3.0),
            (2.0, 3.0),
            (2.0, 10.0),
            (0.0, 10.0),
        ]);
        let result = min_convex_decomposition(&p).unwrap();
        assert_eq!(result.weight, 2);
        assert_eq!(result.diagonals.len(), 2);
        assert_diagonals_mutually_visible(&p, &result);
    }

    #[test]
    fn test_self_intersecting_input_fails() {
        let bowtie = poly(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_eq!(
            min_convex_decomposition(&bowtie),
            Err(DecompError::DegenerateInput)
        );
    }

    #[test]
    fn test_too_few_vertices_fails_eagerly() {
        let two = poly(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            min_convex_decomposition(&two),
            Err(DecompError::InvalidPolygon { got: 2 })
        );
    }

    #[test]
    fn test_triangle_is_trivial() {
        let result =
            min_convex_decomposition(&poly(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)])).unwrap();
        assert_eq!(result.weight, 0);
        assert!(result.diagonals.is_empty());
    }

    #[test]
    fn test_observer_sees_edges_and_diagonals() {
        let p = dart();
        let mut events = Vec::new();
        let mut hook = |kind, i, j| events.push((kind, i, j));
        let result = Decomposer::new(&p)
            .unwrap()
            .with_observer(&mut hook)
            .run()
            .unwrap();

        let edges: Vec<_> = events
            .iter()
            .filter(|(k, _, _)| *k == EventKind::VisibilityEdge)
            .collect();
        let diags: Vec<_> = events
            .iter()
            .filter(|(k, _, _)| *k == EventKind::Diagonal)
            .map(|&(_, i, j)| (i, j))
            .collect();
        assert!(!edges.is_empty());
        assert_eq!(diags, result.diagonals);
    }

    #[test]
    fn test_observer_silent_on_convex_input() {
        let p = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let mut diagonal_events = 0;
        let mut hook = |kind, _i, _j| {
            if kind == EventKind::Diagonal {
                diagonal_events += 1;
            }
        };
        Decomposer::new(&p)
            .unwrap()
            .with_observer(&mut hook)
            .run()
            .unwrap();
        assert_eq!(diagonal_events, 0);
    }

    #[test]
    fn test_metrics_are_populated() {
        let result = min_convex_decomposition(&dart()).unwrap();
        assert!(result.metrics.orientation_tests > 0);
        assert!(result.metrics.comparisons > 0);
        // The decomposition itself never measures distances.
        assert_eq!(result.metrics.square_roots, 0);
    }

    #[test]
    fn test_idempotent_runs() {
        let p = star_polygon(40, 7);
        let first = min_convex_decomposition(&p).unwrap();
        let second = min_convex_decomposition(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_star_polygons_stress() {
        for &(n, seed) in &[(10usize, 1u64), (20, 2), (33, 3), (60, 4), (120, 5)] {
            let p = star_polygon(n, seed);
            let result = min_convex_decomposition(&p)
                .unwrap_or_else(|e| panic!("star n={} seed={}: {}", n, seed, e));
            assert_eq!(
                result.weight,
                result.diagonals.len(),
                "weight/diagonal mismatch for n={} seed={}",
                n,
                seed
            );
            assert_diagonals_mutually_visible(&p, &result);
        }
    }

    #[test]
    fn test_large_star_recovers_within_guard() {
        let p = star_polygon(500, 42);
        let result = min_convex_decomposition(&p).unwrap();
        assert_eq!(result.weight, result.diagonals.len());
        assert!(result.weight > 0);
    }
}
