//! Data types for one clustering run.

use crate::cfg::MAX_ITERATIONS;
use crate::geometry::Point2;

/// Input order location plus the cluster it is currently assigned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedPoint {
    pub location: Point2,
    pub cluster_id: usize,
}

impl WeightedPoint {
    /// Fresh point, assigned to cluster 0.
    #[inline]
    pub fn new(location: Point2) -> Self {
        Self {
            location,
            cluster_id: 0,
        }
    }
}

/// Representative point and population of one cluster.
///
/// `member_count == 0` is a valid terminal state: the location then keeps the
/// value from the last pass in which the cluster had members (or its seed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    pub location: Point2,
    pub member_count: usize,
    pub cluster_id: usize,
}

/// Final centroids plus the number of refinement passes executed.
#[derive(Clone, Debug)]
pub struct ClusterRun {
    pub centroids: Vec<Centroid>,
    pub iterations: usize,
}

impl ClusterRun {
    /// Sum of member counts over all centroids.
    #[inline]
    pub fn total_members(&self) -> usize {
        self.centroids.iter().map(|c| c.member_count).sum()
    }

    /// Number of clusters that ended with at least one member.
    #[inline]
    pub fn non_empty(&self) -> usize {
        self.centroids.iter().filter(|c| c.member_count > 0).count()
    }
}

/// Refinement configuration.
#[derive(Clone, Copy, Debug)]
pub struct ClusterCfg {
    /// Hard cap on assign/update passes.
    pub max_iterations: usize,
}

impl Default for ClusterCfg {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
        }
    }
}
