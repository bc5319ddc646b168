//! Curated API for callers (UNSTABLE).
//!
//! Important
//! - Breaking changes are allowed while the host integration settles.
//! - Prefer these re-exports over reaching into submodules.

// Clustering
pub use crate::cluster::{
    cluster, refine, seed_centroids, Centroid, ClusterCfg, ClusterRun, SeedSource, WeightedPoint,
};
// Hull construction
pub use crate::hull::{
    build_hull, build_hull_with, convex_polygon, inflate, HullCfg, InflationCentroid, Polygon,
};
// Orchestration
pub use crate::zones::{plan_zones, PlanError, Zone, ZoneCfg, ZonePlan};
// Synthetic inputs
pub use crate::sample::{draw_order_blobs, OrderBlobCfg, ReplayToken as PlanReplay};
// Predicates
pub use crate::geometry::{distance, lex_cmp, orient, HullPoint, Point2};
