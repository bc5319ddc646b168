//! JSON plan documents written by `plan` and `demo`.

use anyhow::{Context, Result};
use serde::Serialize;
use softzone::api::{PlanError, ZonePlan};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ZoneRecord {
    pub route: usize,
    pub members: Vec<usize>,
    pub centroid: [f64; 2],
    /// Closed ring, first vertex repeated last. `None` below three members.
    pub polygon: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Serialize)]
pub struct PlanDocument {
    pub status: String,
    pub orders: usize,
    pub routes: usize,
    pub seed: u64,
    pub iterations: Option<usize>,
    pub zones: Vec<ZoneRecord>,
}

impl PlanDocument {
    pub fn from_plan(plan: &ZonePlan, orders: usize, routes: usize, seed: u64) -> Self {
        let zones = plan
            .zones
            .iter()
            .map(|z| {
                let c = plan.centroids[z.route].location;
                ZoneRecord {
                    route: z.route,
                    members: z.members.clone(),
                    centroid: [c.x, c.y],
                    polygon: z
                        .polygon
                        .as_ref()
                        .map(|p| p.vertices.iter().map(|v| [v.x, v.y]).collect()),
                }
            })
            .collect();
        Self {
            status: "ok".to_string(),
            orders,
            routes,
            seed,
            iterations: Some(plan.iterations),
            zones,
        }
    }

    /// Document for a plan that was not attempted; `status` carries the
    /// user-facing message.
    pub fn skipped(err: &PlanError, orders: usize, routes: usize, seed: u64) -> Self {
        Self {
            status: err.status_message().to_string(),
            orders,
            routes,
            seed,
            iterations: None,
            zones: Vec::new(),
        }
    }
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(out: P, doc: &T) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
