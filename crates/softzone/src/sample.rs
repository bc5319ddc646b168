//! Reproducible synthetic order sets (dense blobs) and run seeds.
//!
//! Purpose
//! - Provide deterministic inputs for benches, the CLI `demo` command and
//!   tests: a few blob centres spread over a square, orders scattered in a
//!   disc around each centre.
//! - `ReplayToken` is also the seed the CLI records for clustering runs, so a
//!   plan can be replayed from its provenance sidecar.
//!
//! Code cross-refs: `zones::plan_zones`, `cluster::SeedSource`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point2;

/// Blob sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct OrderBlobCfg {
    pub blobs: usize,
    pub orders_per_blob: usize,
    /// Radius of the disc around each centre.
    pub blob_radius: f64,
    /// Centres are uniform in `[-spread, spread]²`.
    pub spread: f64,
}

impl Default for OrderBlobCfg {
    fn default() -> Self {
        Self {
            blobs: 4,
            orders_per_blob: 30,
            blob_radius: 1.0,
            spread: 20.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// RNG for this token; the same token always yields the same stream.
    #[inline]
    pub fn rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `blobs * orders_per_blob` order locations, grouped blob by blob.
pub fn draw_order_blobs(cfg: OrderBlobCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.rng();
    let spread = cfg.spread.abs();
    let radius = cfg.blob_radius.max(0.0);
    let mut out = Vec::with_capacity(cfg.blobs * cfg.orders_per_blob);
    for _ in 0..cfg.blobs {
        let centre = Vector2::new(
            (rng.gen::<f64>() * 2.0 - 1.0) * spread,
            (rng.gen::<f64>() * 2.0 - 1.0) * spread,
        );
        for _ in 0..cfg.orders_per_blob {
            // sqrt keeps the disc uniform in area
            let r = radius * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            out.push(centre + Vector2::new(th.cos() * r, th.sin() * r));
        }
    }
    out
}
