//! Order clustering and soft-zone synthesis.
//!
//! Pipeline
//! - `cluster`: partition order locations into `k` groups (distance-weighted
//!   seeding, then bounded Lloyd refinement).
//! - `hull`: turn one group into a closed convex polygon, inflated 1% outward.
//! - `zones`: validate inputs, run both steps and group the results per route.
//!
//! API Policy
//! - The crate is consumed by the `softzone` CLI and by host integrations that
//!   own persistence. There is no stable public API yet; `api` is the curated
//!   surface callers should import from.

pub mod api;
mod cfg;
pub mod cluster;
pub mod geometry;
pub mod hull;
pub mod sample;
pub mod zones;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::{HullPoint, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cluster::{cluster, Centroid, ClusterCfg, ClusterRun, SeedSource, WeightedPoint};
    pub use crate::geometry::{distance, orient, HullPoint, Point2};
    pub use crate::hull::{build_hull, build_hull_with, convex_polygon, HullCfg, InflationCentroid, Polygon};
    pub use crate::sample::{draw_order_blobs, OrderBlobCfg, ReplayToken};
    pub use crate::zones::{plan_zones, PlanError, Zone, ZoneCfg, ZonePlan};
    pub use nalgebra::Vector2 as Vec2;
}
