//! Distance-weighted centroid seeding.

use rand::Rng;

use super::types::{Centroid, WeightedPoint};
use crate::geometry::distance;

/// Source of the two random draws seeding needs.
///
/// Every `rand::Rng` is a `SeedSource`; tests can implement it directly to
/// replay a fixed sequence.
pub trait SeedSource {
    /// Uniform index in `0..n` (`n >= 1`).
    fn pick_index(&mut self, n: usize) -> usize;
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> SeedSource for R {
    #[inline]
    fn pick_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
    #[inline]
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Choose `k` initial centroids from `points`.
///
/// The first is uniform; centroid `j` is drawn with probability proportional
/// to each point's distance to the nearest of centroids `0..j`. When the walk
/// never triggers (all remaining distances zero) the last point is taken.
/// Returned centroids have `member_count == 0`.
pub fn seed_centroids<S: SeedSource + ?Sized>(
    points: &[WeightedPoint],
    k: usize,
    source: &mut S,
) -> Vec<Centroid> {
    let n = points.len();
    let mut centroids: Vec<Centroid> = Vec::with_capacity(k);
    if n == 0 || k == 0 {
        return centroids;
    }
    let first = source.pick_index(n).min(n - 1);
    centroids.push(Centroid {
        location: points[first].location,
        member_count: 0,
        cluster_id: 0,
    });

    // d[i]: distance from point i to the nearest centroid chosen so far.
    let mut d: Vec<f64> = points
        .iter()
        .map(|p| distance(p.location, centroids[0].location))
        .collect();
    for j in 1..k {
        let total: f64 = d.iter().sum();
        let mut r = source.unit() * total;
        let mut chosen = n - 1;
        for (i, &di) in d.iter().enumerate() {
            if r < di {
                chosen = i;
                break;
            }
            r -= di;
        }
        let location = points[chosen].location;
        centroids.push(Centroid {
            location,
            member_count: 0,
            cluster_id: j,
        });
        for (di, p) in d.iter_mut().zip(points) {
            let dj = distance(p.location, location);
            if dj < *di {
                *di = dj;
            }
        }
    }
    centroids
}
