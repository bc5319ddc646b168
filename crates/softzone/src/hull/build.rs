//! Chain partition, ring refinement, stitching and inflation.

use std::collections::VecDeque;

use super::polygon::Polygon;
use super::ring::Ring;
use super::sort::quicksort;
use crate::cfg::INFLATION;
use crate::geometry::{orient, HullPoint};

/// Which vertices feed the centre of the outward inflation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InflationCentroid {
    /// Mean over every vertex of the closed ring, the closing repeat
    /// included (weights the first vertex twice).
    #[default]
    WithClosingVertex,
    /// Mean over the distinct vertices only.
    DistinctVertices,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Relative outward push: `v' = v + (v - centre) * inflation`.
    pub inflation: f64,
    pub centroid: InflationCentroid,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            inflation: INFLATION,
            centroid: InflationCentroid::WithClosingVertex,
        }
    }
}

/// Closed, inflated convex polygon around `points` with default settings.
pub fn build_hull(points: &[HullPoint]) -> Polygon {
    build_hull_with(points, HullCfg::default())
}

/// Closed convex polygon around `points`, inflated per `cfg`.
///
/// Pre: `points.len() >= 3` (debug-checked). Callers skip clusters of two or
/// fewer members.
pub fn build_hull_with(points: &[HullPoint], cfg: HullCfg) -> Polygon {
    let mut poly = convex_polygon(points);
    inflate(&mut poly, cfg);
    poly
}

/// Closed convex polygon around `points`, before inflation.
///
/// Vertices run clockwise starting at the lexicographically largest point:
/// lower chain right → left, then upper chain left → right, then the first
/// vertex again. Collinear input collapses to `[right, left, right]`;
/// identical input to `[p, p, p]`.
pub fn convex_polygon(points: &[HullPoint]) -> Polygon {
    debug_assert!(points.len() >= 3, "hull needs at least three points");
    if points.is_empty() {
        return Polygon::default();
    }
    let mut sorted = points.to_vec();
    quicksort(&mut sorted);
    let left = sorted[0];
    let right = sorted[sorted.len() - 1];

    // Upper chain ascends in x, lower chain descends (prepend keeps it so).
    let mut upper: Vec<HullPoint> = Vec::with_capacity(sorted.len() + 1);
    let mut lower: VecDeque<HullPoint> = VecDeque::with_capacity(sorted.len() + 1);
    upper.push(left);
    lower.push_back(left);
    for &p in &sorted {
        let o = orient(left, right, p);
        if o > 0.0 {
            upper.push(p);
        } else if o < 0.0 {
            lower.push_front(p);
        }
    }
    upper.push(right);
    lower.push_front(right);

    let lower = refined_chain(lower.make_contiguous());
    let mut upper = refined_chain(&upper);

    // Stitch at the shared anchors.
    if lower.last() == upper.first() {
        upper.remove(0);
    }
    if !upper.is_empty() && upper.last() == lower.first() {
        upper.pop();
    }

    let mut vertices = lower;
    vertices.extend(upper);
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    Polygon { vertices }
}

fn refined_chain(chain: &[HullPoint]) -> Vec<HullPoint> {
    match Ring::from_chain(chain) {
        Some(mut ring) => {
            ring.refine();
            ring.points()
        }
        None => Vec::new(),
    }
}

/// Push every vertex away from the inflation centre by `cfg.inflation`.
///
/// The closing repeat goes through the same arithmetic as the first vertex,
/// so closure is preserved bit for bit.
pub fn inflate(poly: &mut Polygon, cfg: HullCfg) {
    let basis: &[HullPoint] = match cfg.centroid {
        InflationCentroid::WithClosingVertex => &poly.vertices,
        InflationCentroid::DistinctVertices => poly.distinct_vertices(),
    };
    if basis.is_empty() {
        return;
    }
    let centre = basis.iter().fold(HullPoint::zeros(), |acc, p| acc + p) / basis.len() as f64;
    for v in poly.vertices.iter_mut() {
        *v += (*v - centre) * cfg.inflation;
    }
}
