//! Reflex vertex classification and traversal.
//!
//! A reflex vertex (interior angle over 180°) is where decomposition work
//! happens: convex vertices never force a diagonal. One O(n) pass labels
//! every vertex, and a backward pass threads a "next reflex" chain so the
//! engine can walk only the r reflex vertices in O(r).

use crate::polygon::Polygon;
use crate::predicates::{right, Metrics};
use num_traits::Float;

/// Reflex flags plus an O(1)-step linked traversal over reflex vertices.
#[derive(Debug, Clone)]
pub(crate) struct ReflexChain {
    flags: Vec<bool>,
    next: Vec<usize>,
    first: usize,
}

impl ReflexChain {
    /// Classifies every vertex of `poly` and builds the traversal chain.
    ///
    /// Vertex 0 is always classified reflex regardless of its geometric
    /// turn; it anchors the chain. The decomposition recurrence tolerates
    /// the extra entry (a convex polygon still decomposes with weight 0).
    pub fn classify<F: Float>(poly: &Polygon<F>, metrics: &mut Metrics) -> Self {
        let n = poly.len();
        let mut flags = vec![false; n];
        flags[0] = true;

        let mut wrap = 0;
        for i in (1..n).rev() {
            flags[i] = right(poly.vertex(i - 1), poly.vertex(i), poly.vertex(wrap), metrics);
            wrap = i;
        }

        let mut next = vec![n; n];
        let mut first = n;
        for i in (0..n).rev() {
            next[i] = first;
            if flags[i] {
                first = i;
            }
        }

        ReflexChain { flags, next, first }
    }

    /// True if vertex `i` is classified reflex.
    #[inline]
    pub fn is_reflex(&self, i: usize) -> bool {
        self.flags[i]
    }

    /// The per-vertex reflex flags, in index order.
    #[inline]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// The first reflex vertex (always 0 by the anchor convention).
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// The next reflex vertex strictly after `i`, or `n` if none remain.
    #[inline]
    pub fn next_after(&self, i: usize) -> usize {
        self.next[i]
    }

    /// The first reflex vertex at or after `i`, or `n` if none remain.
    #[inline]
    pub fn at_or_after(&self, i: usize) -> usize {
        if i == 0 {
            return self.first;
        }
        if i > self.next.len() {
            return self.next.len();
        }
        self.next[i - 1]
    }

    /// Number of reflex vertices (including the anchored vertex 0).
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Iterates over reflex vertex indices in increasing order.
    pub fn iter(&self) -> ReflexIter<'_> {
        ReflexIter {
            chain: self,
            at: self.first,
        }
    }
}

/// Forward iterator over reflex vertex indices.
pub(crate) struct ReflexIter<'a> {
    chain: &'a ReflexChain,
    at: usize,
}

impl Iterator for ReflexIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.at >= self.chain.next.len() {
            return None;
        }
        let i = self.at;
        self.at = self.chain.next[i];
        Some(i)
    }
}
