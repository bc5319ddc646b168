//! Plan zones for a synthetic day and print a per-route summary.
//!
//! Usage:
//!   cargo run -p softzone --example plan_day -- [routes] [seed]

use softzone::api::{draw_order_blobs, plan_zones, OrderBlobCfg, PlanReplay, ZoneCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let routes: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let orders = draw_order_blobs(
        OrderBlobCfg {
            blobs: routes,
            ..OrderBlobCfg::default()
        },
        PlanReplay { seed, index: 0 },
    );
    let mut rng = PlanReplay { seed, index: 1 }.rng();
    match plan_zones(&orders, routes, &ZoneCfg::default(), &mut rng) {
        Ok(plan) => {
            println!("{} orders, {} iterations", orders.len(), plan.iterations);
            for z in &plan.zones {
                let verts = z.polygon.as_ref().map(|p| p.distinct_vertices().len());
                println!("route {}: members={}, zone vertices={:?}", z.route, z.members.len(), verts);
            }
        }
        Err(e) => eprintln!("{}", e.status_message()),
    }
}
