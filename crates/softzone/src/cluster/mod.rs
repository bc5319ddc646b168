//! Order clustering: distance-weighted seeding plus Lloyd refinement.
//!
//! Purpose
//! - Partition `n` order locations into `k` spatially coherent groups, one per
//!   route, and report each group's centroid and population.
//!
//! Model
//! - Seeding picks the first centroid uniformly, then each further centroid by
//!   roulette selection proportional to the (raw, not squared) distance to the
//!   nearest centroid chosen so far.
//! - Refinement alternates assign/update for at most `ClusterCfg::max_iterations`
//!   passes and stops at the first pass without reassignment.
//! - Randomness only enters through `SeedSource`, so runs are reproducible
//!   from a seeded RNG or a scripted sequence.
//!
//! Code cross-refs: `zones::plan_zones` (caller), `geometry::distance`.

mod lloyd;
mod seed;
mod types;

pub use lloyd::refine;
pub use seed::{seed_centroids, SeedSource};
pub use types::{Centroid, ClusterCfg, ClusterRun, WeightedPoint};

/// Cluster `points` into `k` groups, writing each point's `cluster_id`.
///
/// Pre: `k >= 1` and `points.len() >= k` (checked in debug builds only; the
/// orchestrator validates before calling).
/// Post: every `cluster_id` lies in `0..k` and the centroid member counts sum
/// to `points.len()`.
pub fn cluster<S: SeedSource + ?Sized>(
    points: &mut [WeightedPoint],
    k: usize,
    cfg: ClusterCfg,
    source: &mut S,
) -> ClusterRun {
    debug_assert!(k >= 1, "need at least one cluster");
    debug_assert!(points.len() >= k, "need at least k points");
    let mut centroids = seed_centroids(points, k, source);
    let iterations = refine(points, &mut centroids, cfg);
    ClusterRun {
        centroids,
        iterations,
    }
}

#[cfg(test)]
mod tests;
