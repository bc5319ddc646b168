//! Closed polygon returned by hull construction.

use std::cmp::Ordering;

use crate::geometry::{lex_cmp, orient, HullPoint};

/// Closed vertex ring: `vertices.first() == vertices.last()`.
///
/// For non-degenerate hulls there are at least three distinct vertices plus
/// the closing repeat, in clockwise order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<HullPoint>,
}

impl Polygon {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.vertices.first() == self.vertices.last()
    }

    /// Vertices without the closing repeat.
    pub fn distinct_vertices(&self) -> &[HullPoint] {
        if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }

    /// Shoelace area; negative for clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let v = self.distinct_vertices();
        if v.len() < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..v.len() {
            let p = v[i];
            let q = v[(i + 1) % v.len()];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    /// Arithmetic mean of the distinct vertices.
    pub fn vertex_mean(&self) -> Option<HullPoint> {
        let v = self.distinct_vertices();
        if v.is_empty() {
            return None;
        }
        let sum = v.iter().fold(HullPoint::zeros(), |acc, p| acc + p);
        Some(sum / v.len() as f64)
    }

    /// Point-in-convex-polygon test with slack `eps`, for either winding.
    ///
    /// `eps > 0` is permissive (boundary band counts as inside). Degenerate
    /// rings (zero area) contain only points on their segment.
    pub fn contains_eps(&self, p: HullPoint, eps: f64) -> bool {
        let v = self.distinct_vertices();
        if v.is_empty() {
            return false;
        }
        let area = self.signed_area();
        if area == 0.0 {
            return on_segment_hull(v, p, eps);
        }
        let s = area.signum();
        (0..v.len()).all(|i| {
            let a = v[i];
            let b = v[(i + 1) % v.len()];
            s * orient(a, b, p) >= -eps
        })
    }
}

fn on_segment_hull(v: &[HullPoint], p: HullPoint, eps: f64) -> bool {
    let mut a = v[0];
    let mut b = v[0];
    for q in v {
        if lex_cmp(q, &a) == Ordering::Less {
            a = *q;
        }
        if lex_cmp(q, &b) == Ordering::Greater {
            b = *q;
        }
    }
    let lo = a.inf(&b);
    let hi = a.sup(&b);
    let in_box = p.x >= lo.x - eps && p.x <= hi.x + eps && p.y >= lo.y - eps && p.y <= hi.y + eps;
    in_box && orient(a, b, p).abs() <= eps.max(0.0)
}
