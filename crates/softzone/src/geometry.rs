//! Planar point type and the predicates shared by clustering and hulls.

use nalgebra::Vector2;
use std::cmp::Ordering;

/// Planar coordinate (order location, centroid, polygon vertex).
pub type Point2 = Vector2<f64>;
/// Bare coordinate used inside hull construction.
pub type HullPoint = Point2;

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive for counterclockwise, negative for clockwise, zero if collinear.
/// Evaluated as `a.x*(b.y-c.y) + b.x*(c.y-a.y) + c.x*(a.y-b.y)`; partition and
/// refinement both go through this one expression.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (a - b).norm()
}

/// Lexicographic `(x, y)` order. Incomparable components (NaN) compare equal.
#[inline]
pub fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Same quantity as `orient`, via the homogeneous 3×3 determinant.
/// Only used to cross-check `orient` in tests.
#[cfg(test)]
fn orient_det(a: Point2, b: Point2, c: Point2) -> f64 {
    let m = nalgebra::Matrix3::new(a.x, a.y, 1.0, b.x, b.y, 1.0, c.x, c.y, 1.0);
    m.determinant()
}
