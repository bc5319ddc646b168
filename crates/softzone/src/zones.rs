//! Zone planning for one day: validate, cluster, build one hull per route.
//!
//! Purpose
//! - Glue between the host (which owns orders, routes and persisted zones)
//!   and the two pure steps in `cluster` and `hull`.
//!
//! Policy
//! - Precondition failures (`PlanError`) are reported before any work is done
//!   and carry the user-facing status message the host shows instead.
//! - Cluster `j` corresponds to route `j`. A cluster with fewer than
//!   `ZoneCfg::min_zone_members` members gets no polygon.
//! - Hulls are built per cluster with no shared state.

use std::fmt;

use crate::cfg::MIN_ZONE_MEMBERS;
use crate::cluster::{cluster, Centroid, ClusterCfg, SeedSource, WeightedPoint};
use crate::geometry::Point2;
use crate::hull::{build_hull_with, HullCfg, Polygon};

/// Why a plan was not attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    NoOrders,
    NoRoutes,
    InsufficientOrders { orders: usize, routes: usize },
}

impl PlanError {
    /// Status line shown to the planner in place of zones.
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::NoOrders => "No orders found",
            Self::NoRoutes => "No routes found",
            Self::InsufficientOrders { .. } => "Insufficient number of orders",
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientOrders { orders, routes } => write!(
                f,
                "{} ({orders} orders for {routes} routes)",
                self.status_message()
            ),
            _ => f.write_str(self.status_message()),
        }
    }
}

impl std::error::Error for PlanError {}

/// Planning configuration.
#[derive(Clone, Copy, Debug)]
pub struct ZoneCfg {
    pub cluster: ClusterCfg,
    pub hull: HullCfg,
    /// Smallest cluster that gets a polygon.
    pub min_zone_members: usize,
}

impl Default for ZoneCfg {
    fn default() -> Self {
        Self {
            cluster: ClusterCfg::default(),
            hull: HullCfg::default(),
            min_zone_members: MIN_ZONE_MEMBERS,
        }
    }
}

/// One route's share of the orders and its soft zone, if any.
#[derive(Clone, Debug)]
pub struct Zone {
    pub route: usize,
    /// Indices into the input order slice, ascending.
    pub members: Vec<usize>,
    pub polygon: Option<Polygon>,
}

/// Result of one planning run.
#[derive(Clone, Debug)]
pub struct ZonePlan {
    /// Route index per input order.
    pub assignments: Vec<usize>,
    pub centroids: Vec<Centroid>,
    pub iterations: usize,
    /// One entry per route, in route order.
    pub zones: Vec<Zone>,
}

impl ZonePlan {
    /// Zones that received a polygon.
    pub fn polygons(&self) -> impl Iterator<Item = (usize, &Polygon)> {
        self.zones
            .iter()
            .filter_map(|z| z.polygon.as_ref().map(|p| (z.route, p)))
    }
}

/// Check the order/route counts the way the host does before clustering.
pub fn validate(orders: usize, routes: usize) -> Result<(), PlanError> {
    if orders == 0 {
        return Err(PlanError::NoOrders);
    }
    if routes == 0 {
        return Err(PlanError::NoRoutes);
    }
    if orders <= routes {
        return Err(PlanError::InsufficientOrders { orders, routes });
    }
    Ok(())
}

/// Cluster `orders` into `routes` groups and build a zone per group.
pub fn plan_zones<S: SeedSource + ?Sized>(
    orders: &[Point2],
    routes: usize,
    cfg: &ZoneCfg,
    source: &mut S,
) -> Result<ZonePlan, PlanError> {
    validate(orders.len(), routes)?;

    let mut points: Vec<WeightedPoint> = orders.iter().copied().map(WeightedPoint::new).collect();
    let run = cluster(&mut points, routes, cfg.cluster, source);
    tracing::debug!(
        orders = orders.len(),
        routes,
        iterations = run.iterations,
        non_empty = run.non_empty(),
        "clustered"
    );

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); routes];
    for (i, p) in points.iter().enumerate() {
        members[p.cluster_id].push(i);
    }

    let zones = members
        .into_iter()
        .enumerate()
        .map(|(route, members)| {
            let polygon = if members.len() >= cfg.min_zone_members.max(3) {
                let pts: Vec<Point2> = members.iter().map(|&i| orders[i]).collect();
                Some(build_hull_with(&pts, cfg.hull))
            } else {
                tracing::debug!(route, members = members.len(), "too few orders for a zone");
                None
            };
            Zone {
                route,
                members,
                polygon,
            }
        })
        .collect();

    Ok(ZonePlan {
        assignments: points.iter().map(|p| p.cluster_id).collect(),
        centroids: run.centroids,
        iterations: run.iterations,
        zones,
    })
}
