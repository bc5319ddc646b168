//! Circular doubly-linked ring of hull candidates, stored as an arena.
//!
//! Nodes live in a `Vec` and link by index; splicing a node out rewrites two
//! links and leaves the slot unreachable until the whole ring is dropped.

use crate::geometry::{orient, HullPoint};

#[derive(Clone, Debug)]
pub(crate) struct Ring {
    pts: Vec<HullPoint>,
    next: Vec<usize>,
    prev: Vec<usize>,
    head: usize,
    tail: usize,
    live: usize,
}

impl Ring {
    /// Ring over `chain` in order; `tail.next == head`. `None` for an empty chain.
    pub(crate) fn from_chain(chain: &[HullPoint]) -> Option<Self> {
        let n = chain.len();
        if n == 0 {
            return None;
        }
        Some(Self {
            pts: chain.to_vec(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            head: 0,
            tail: n - 1,
            live: n,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Splice `node` out. Head and tail are anchors and are never passed here.
    fn unlink(&mut self, node: usize) {
        debug_assert!(node != self.head && node != self.tail);
        let p = self.prev[node];
        let n = self.next[node];
        self.next[p] = n;
        self.prev[n] = p;
        self.live -= 1;
    }

    /// Drop every node that does not make a strict clockwise turn with its
    /// neighbours. Returns the number of nodes removed.
    ///
    /// The walk starts at the head, advances while `(a, a.next, a.next.next)`
    /// turns clockwise, and on removal steps back one node (never before the
    /// head) to re-test the triple the removal created. It ends once `a.next`
    /// is the tail, so anchors always survive and rings of one or two nodes
    /// return immediately.
    pub(crate) fn refine(&mut self) -> usize {
        let before = self.live;
        let mut a = self.head;
        loop {
            let b = self.next[a];
            if b == self.tail || b == self.head {
                break;
            }
            let c = self.next[b];
            if orient(self.pts[a], self.pts[b], self.pts[c]) < 0.0 {
                a = b;
            } else {
                self.unlink(b);
                if a != self.head {
                    a = self.prev[a];
                }
            }
        }
        before - self.live
    }

    /// Points from head to tail in link order.
    pub(crate) fn points(&self) -> Vec<HullPoint> {
        let mut out = Vec::with_capacity(self.len());
        let mut cur = self.head;
        for _ in 0..self.len() {
            out.push(self.pts[cur]);
            if cur == self.tail {
                break;
            }
            cur = self.next[cur];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn links_are_circular() {
        let r = Ring::from_chain(&[vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 0.0]]).unwrap();
        assert_eq!(r.next[r.tail], r.head);
        assert_eq!(r.prev[r.head], r.tail);
        assert_eq!(r.len(), 3);
        assert!(Ring::from_chain(&[]).is_none());
    }

    #[test]
    fn refine_keeps_clockwise_turns() {
        // Upper chain left → right over the top: a clockwise turn at (1,1).
        let chain = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 0.0]];
        let mut r = Ring::from_chain(&chain).unwrap();
        assert_eq!(r.refine(), 0);
        assert_eq!(r.points(), chain.to_vec());
    }

    #[test]
    fn refine_removes_dents_and_backs_up() {
        // (1,1) and (3,1.5) sit under the chain; dropping (3,1.5) backs the
        // walk up to re-test from (0,0).
        let chain = [
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 3.0],
            vector![3.0, 1.5],
            vector![4.0, 4.0],
            vector![5.0, 0.0],
        ];
        let mut r = Ring::from_chain(&chain).unwrap();
        let removed = r.refine();
        let pts = r.points();
        assert_eq!(pts.first(), Some(&vector![0.0, 0.0]));
        assert_eq!(pts.last(), Some(&vector![5.0, 0.0]));
        assert_eq!(removed, chain.len() - pts.len());
        assert_eq!(
            pts,
            vec![vector![0.0, 0.0], vector![2.0, 3.0], vector![4.0, 4.0], vector![5.0, 0.0]]
        );
        for w in pts.windows(3) {
            assert!(orient(w[0], w[1], w[2]) < 0.0);
        }
    }

    #[test]
    fn refine_drops_collinear_middles() {
        let chain = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        let mut r = Ring::from_chain(&chain).unwrap();
        assert_eq!(r.refine(), 1);
        assert_eq!(r.points(), vec![vector![0.0, 0.0], vector![2.0, 0.0]]);
    }

    #[test]
    fn minimal_rings_are_left_alone() {
        let mut one = Ring::from_chain(&[vector![3.0, 3.0]]).unwrap();
        assert_eq!(one.refine(), 0);
        assert_eq!(one.points(), vec![vector![3.0, 3.0]]);
        let mut two = Ring::from_chain(&[vector![0.0, 0.0], vector![0.0, 0.0]]).unwrap();
        assert_eq!(two.refine(), 0);
        assert_eq!(two.points().len(), 2);
    }
}
