//! Soft-zone hulls: convex polygon around one cluster, inflated outward.
//!
//! Purpose
//! - Turn the member locations of one cluster into a closed convex polygon
//!   (first vertex repeated last), then push every vertex 1% away from the
//!   vertex mean so order points keep a margin from the zone boundary.
//!
//! Model
//! - Sort lexicographically (quicksort, median-of-three pivot), split the
//!   points into an upper and a lower chain by the side of the
//!   `left → right` axis they fall on, refine each chain in a circular
//!   doubly-linked ring (arena of index links) Graham-style, then stitch the
//!   chains at their shared anchors.
//! - Output order is clockwise for non-degenerate input. No winding
//!   normalization is applied; consumers that need a fixed orientation
//!   normalize themselves (`Polygon::signed_area` gives the sign).
//! - Collinear or identical inputs produce a degenerate closed ring, never a
//!   panic.
//!
//! Code cross-refs: `geometry::orient`, `zones::plan_zones` (caller).

mod build;
mod polygon;
mod ring;
mod sort;

pub use build::{build_hull, build_hull_with, convex_polygon, inflate, HullCfg, InflationCentroid};
pub use polygon::Polygon;
