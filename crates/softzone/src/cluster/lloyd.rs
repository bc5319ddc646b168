//! Lloyd-style refinement with a bounded pass count.

use super::types::{Centroid, ClusterCfg, WeightedPoint};
use crate::geometry::distance;

/// Alternate assignment and mean update until a pass changes nothing or the
/// pass cap is hit. Returns the number of passes executed.
///
/// Assignment picks the first centroid whose distance compares exactly equal
/// to the minimum distance, so ties go to the lowest cluster index.
/// Clusters that end a pass empty keep their previous location.
pub fn refine(points: &mut [WeightedPoint], centroids: &mut [Centroid], cfg: ClusterCfg) -> usize {
    let k = centroids.len();
    if k == 0 {
        return 0;
    }
    let mut sum_x = vec![0.0f64; k];
    let mut sum_y = vec![0.0f64; k];
    let mut count = vec![0usize; k];
    let mut dist = vec![0.0f64; k];
    let mut iterations = 0usize;

    while iterations < cfg.max_iterations {
        iterations += 1;
        sum_x.fill(0.0);
        sum_y.fill(0.0);
        count.fill(0);
        let mut changed = false;

        for p in points.iter_mut() {
            for (dj, c) in dist.iter_mut().zip(centroids.iter()) {
                *dj = distance(p.location, c.location);
            }
            let min = dist.iter().copied().fold(f64::INFINITY, f64::min);
            if let Some(j) = dist.iter().position(|&dj| dj == min) {
                if j != p.cluster_id {
                    p.cluster_id = j;
                    changed = true;
                }
            }
            // Ids outside 0..k (stale input) or NaN distances: park in cluster 0.
            if p.cluster_id >= k {
                p.cluster_id = 0;
                changed = true;
            }
            let j = p.cluster_id;
            sum_x[j] += p.location.x;
            sum_y[j] += p.location.y;
            count[j] += 1;
        }

        for (j, c) in centroids.iter_mut().enumerate() {
            c.member_count = count[j];
            if count[j] > 0 {
                let m = count[j] as f64;
                c.location.x = sum_x[j] / m;
                c.location.y = sum_y[j] / m;
            }
        }

        if !changed {
            break;
        }
    }
    iterations
}
