use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use softzone::api::{
    draw_order_blobs, plan_zones, ClusterCfg, HullCfg, InflationCentroid, OrderBlobCfg,
    PlanReplay, Point2, ZoneCfg,
};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod orders;
mod output;
mod provenance;

use output::{write_json, PlanDocument};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "softzone")]
#[command(about = "Cluster orders into routes and synthesize soft zones")]
struct Cmd {
    /// Debug-level logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan zones for the orders in a CSV file
    Plan {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        routes: usize,
        #[arg(long)]
        out: PathBuf,
        /// Seed for centroid seeding; recorded in the provenance sidecar
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value = "x")]
        x_col: String,
        #[arg(long, default_value = "y")]
        y_col: String,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Plan zones for synthetic order blobs
    Demo {
        #[arg(long)]
        routes: usize,
        #[arg(long, default_value_t = 4)]
        blobs: usize,
        #[arg(long, default_value_t = 30)]
        per_blob: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct Tuning {
    #[arg(long, default_value_t = ClusterCfg::default().max_iterations)]
    max_iterations: usize,
    #[arg(long, default_value_t = HullCfg::default().inflation)]
    inflation: f64,
    /// Inflate around the mean of the distinct hull vertices
    #[arg(long)]
    distinct_centroid: bool,
}

impl Tuning {
    fn zone_cfg(self) -> ZoneCfg {
        let centroid = if self.distinct_centroid {
            InflationCentroid::DistinctVertices
        } else {
            InflationCentroid::WithClosingVertex
        };
        ZoneCfg {
            cluster: ClusterCfg {
                max_iterations: self.max_iterations,
            },
            hull: HullCfg {
                inflation: self.inflation,
                centroid,
            },
            ..ZoneCfg::default()
        }
    }

    fn params(self) -> serde_json::Value {
        json!({
            "max_iterations": self.max_iterations,
            "inflation": self.inflation,
            "distinct_centroid": self.distinct_centroid,
        })
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Plan {
            input,
            routes,
            out,
            seed,
            x_col,
            y_col,
            tuning,
        } => {
            let orders = orders::load_orders(&input, &x_col, &y_col)?;
            let payload = Payload::new(json!({
                "cmd": "plan",
                "routes": routes,
                "seed": seed,
                "x_col": x_col,
                "y_col": y_col,
                "tuning": tuning.params(),
            }))
            .with_input(&input);
            run_plan(&orders, routes, seed, tuning.zone_cfg(), &out, payload)
        }
        Action::Demo {
            routes,
            blobs,
            per_blob,
            seed,
            out,
            tuning,
        } => {
            let blob_cfg = OrderBlobCfg {
                blobs,
                orders_per_blob: per_blob,
                ..OrderBlobCfg::default()
            };
            let orders = draw_order_blobs(blob_cfg, PlanReplay { seed, index: 0 });
            let payload = Payload::new(json!({
                "cmd": "demo",
                "routes": routes,
                "blobs": blobs,
                "per_blob": per_blob,
                "seed": seed,
                "tuning": tuning.params(),
            }));
            run_plan(&orders, routes, seed, tuning.zone_cfg(), &out, payload)
        }
        Action::Report => report(),
    }
}

/// Plan, write the JSON document and its provenance sidecar.
///
/// A plan refused on order/route counts is not a process error: the status
/// message is logged and written in place of zones.
fn run_plan(
    orders: &[Point2],
    routes: usize,
    seed: u64,
    cfg: ZoneCfg,
    out: &Path,
    payload: Payload,
) -> Result<()> {
    let mut rng = PlanReplay { seed, index: 1 }.rng();
    let doc = match plan_zones(orders, routes, &cfg, &mut rng) {
        Ok(plan) => {
            tracing::info!(
                orders = orders.len(),
                routes,
                iterations = plan.iterations,
                zones = plan.polygons().count(),
                "planned"
            );
            PlanDocument::from_plan(&plan, orders.len(), routes, seed)
        }
        Err(e) => {
            tracing::warn!(status = e.status_message(), orders = orders.len(), routes, "plan_skipped");
            PlanDocument::skipped(&e, orders.len(), routes, seed)
        }
    };
    write_json(out, &doc)?;
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "softzone_version": softzone::VERSION,
        "defaults": {
            "max_iterations": ClusterCfg::default().max_iterations,
            "inflation": HullCfg::default().inflation,
            "min_zone_members": ZoneCfg::default().min_zone_members,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
