use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Replays fixed draws; `unit` falls back to 0.0 once exhausted.
struct Scripted {
    indices: Vec<usize>,
    units: Vec<f64>,
}

impl SeedSource for Scripted {
    fn pick_index(&mut self, n: usize) -> usize {
        if self.indices.is_empty() {
            0
        } else {
            self.indices.remove(0) % n
        }
    }
    fn unit(&mut self) -> f64 {
        if self.units.is_empty() {
            0.0
        } else {
            self.units.remove(0)
        }
    }
}

fn wrap(points: &[Vector2<f64>]) -> Vec<WeightedPoint> {
    points.iter().copied().map(WeightedPoint::new).collect()
}

fn two_groups(offset: f64) -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![0.5, 0.5],
        vector![offset, offset],
        vector![offset + 1.0, offset],
        vector![offset, offset + 1.0],
        vector![offset + 1.0, offset + 1.0],
        vector![offset + 0.5, offset + 0.5],
    ]
}

fn assert_groups_split(points: &[WeightedPoint]) {
    let a = points[0].cluster_id;
    let b = points[5].cluster_id;
    assert_ne!(a, b);
    assert!(points[..5].iter().all(|p| p.cluster_id == a));
    assert!(points[5..].iter().all(|p| p.cluster_id == b));
}

#[test]
fn seeding_first_pick_is_the_drawn_index() {
    let pts = wrap(&two_groups(100.0));
    let mut src = Scripted {
        indices: vec![7],
        units: vec![],
    };
    let cs = seed_centroids(&pts, 1, &mut src);
    assert_eq!(cs.len(), 1);
    assert_eq!(cs[0].location, pts[7].location);
    assert_eq!(cs[0].member_count, 0);
}

#[test]
fn seeding_roulette_walks_in_input_order() {
    // Distances from (0,0): 0, 1, 2, 3. Total 6.
    let pts = wrap(&[
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![3.0, 0.0],
    ]);
    // r = 3: not below 0, 1 or 2 (r drops to 2, then 0), so index 3 wins.
    let mut src = Scripted {
        indices: vec![0],
        units: vec![0.5],
    };
    let cs = seed_centroids(&pts, 2, &mut src);
    assert_eq!(cs[1].location, vector![3.0, 0.0]);
    assert_eq!(cs[1].cluster_id, 1);

    // r = 0.6 < d[1].
    let mut src = Scripted {
        indices: vec![0],
        units: vec![0.1],
    };
    let cs = seed_centroids(&pts, 2, &mut src);
    assert_eq!(cs[1].location, vector![1.0, 0.0]);
}

#[test]
fn seeding_zero_total_falls_back_to_last_point() {
    let pts = wrap(&[vector![2.0, 2.0]; 4]);
    let mut src = Scripted {
        indices: vec![1],
        units: vec![0.9, 0.3],
    };
    let cs = seed_centroids(&pts, 3, &mut src);
    assert_eq!(cs.len(), 3);
    for (j, c) in cs.iter().enumerate() {
        assert_eq!(c.cluster_id, j);
        assert_eq!(c.location, vector![2.0, 2.0]);
    }
}

#[test]
fn seeding_never_draws_an_existing_centroid_when_spread_exists() {
    let pts = wrap(&[vector![0.0, 0.0], vector![0.0, 0.0], vector![5.0, 0.0]]);
    for u in [0.0, 0.25, 0.5, 0.999] {
        let mut src = Scripted {
            indices: vec![0],
            units: vec![u],
        };
        let cs = seed_centroids(&pts, 2, &mut src);
        assert_eq!(cs[1].location, vector![5.0, 0.0]);
    }
}

#[test]
fn two_visible_groups_scripted() {
    let mut pts = wrap(&two_groups(100.0));
    let mut src = Scripted {
        indices: vec![0],
        units: vec![0.5],
    };
    let run = cluster(&mut pts, 2, ClusterCfg::default(), &mut src);
    assert_groups_split(&pts);
    assert_eq!(run.total_members(), 10);
    assert_eq!(run.non_empty(), 2);
    let c = run.centroids[pts[5].cluster_id].location;
    assert!((c - vector![100.5, 100.5]).norm() < 1e-12);
}

#[test]
fn two_visible_groups_seeded() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pts = wrap(&two_groups(1.0e4));
        let run = cluster(&mut pts, 2, ClusterCfg::default(), &mut rng);
        assert_groups_split(&pts);
        assert!(run.iterations <= ClusterCfg::default().max_iterations);
    }
}

#[test]
fn identical_points_converge_in_one_pass() {
    let mut pts = wrap(&[vector![3.5, -1.25]; 6]);
    let mut rng = StdRng::seed_from_u64(7);
    let run = cluster(&mut pts, 3, ClusterCfg::default(), &mut rng);
    assert_eq!(run.iterations, 1);
    assert_eq!(run.non_empty(), 1);
    assert_eq!(run.centroids[0].member_count, 6);
    assert_eq!(run.total_members(), 6);
    assert!(pts.iter().all(|p| p.cluster_id == 0));
}

#[test]
fn refeeding_a_stable_assignment_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut pts = wrap(&two_groups(50.0));
    let run = cluster(&mut pts, 2, ClusterCfg::default(), &mut rng);
    assert!(run.iterations >= 2);
    let before: Vec<usize> = pts.iter().map(|p| p.cluster_id).collect();
    let mut centroids = run.centroids.clone();
    let again = refine(&mut pts, &mut centroids, ClusterCfg::default());
    assert_eq!(again, 1);
    let after: Vec<usize> = pts.iter().map(|p| p.cluster_id).collect();
    assert_eq!(before, after);
    assert_eq!(centroids, run.centroids);
}

#[test]
fn empty_cluster_keeps_its_location() {
    let mut pts = wrap(&[vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 1.0]]);
    let far = vector![1000.0, 1000.0];
    let mut centroids = vec![
        Centroid {
            location: vector![0.0, 0.0],
            member_count: 0,
            cluster_id: 0,
        },
        Centroid {
            location: far,
            member_count: 0,
            cluster_id: 1,
        },
    ];
    let it = refine(&mut pts, &mut centroids, ClusterCfg::default());
    assert_eq!(it, 1);
    assert_eq!(centroids[1].member_count, 0);
    assert_eq!(centroids[1].location, far);
    assert_eq!(centroids[0].member_count, 3);
    assert!((centroids[0].location - vector![1.0, 1.0 / 3.0]).norm() < 1e-12);
}

#[test]
fn ties_go_to_the_lowest_cluster_index() {
    let mut pts = vec![WeightedPoint {
        location: vector![0.0, 0.0],
        cluster_id: 1,
    }];
    let mut centroids = vec![
        Centroid {
            location: vector![-1.0, 0.0],
            member_count: 0,
            cluster_id: 0,
        },
        Centroid {
            location: vector![1.0, 0.0],
            member_count: 0,
            cluster_id: 1,
        },
    ];
    let cfg = ClusterCfg { max_iterations: 1 };
    let it = refine(&mut pts, &mut centroids, cfg);
    assert_eq!(it, 1);
    assert_eq!(pts[0].cluster_id, 0);
    assert_eq!(centroids[0].member_count, 1);
    assert_eq!(centroids[0].location, vector![0.0, 0.0]);
}

#[test]
fn pass_cap_is_respected() {
    let mut rng = StdRng::seed_from_u64(3);
    let raw: Vec<Vector2<f64>> = (0..200)
        .map(|_| Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let mut pts = wrap(&raw);
    let run = cluster(&mut pts, 8, ClusterCfg { max_iterations: 2 }, &mut rng);
    assert!(run.iterations <= 2);
    assert_eq!(run.total_members(), 200);
}

proptest! {
    #[test]
    fn every_point_lands_in_exactly_one_cluster(
        raw in prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 1..60),
        k_frac in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let n = raw.len();
        let k = 1 + ((n - 1) as f64 * k_frac) as usize;
        let mut pts: Vec<WeightedPoint> = raw
            .iter()
            .map(|&(x, y)| WeightedPoint::new(Vector2::new(x, y)))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let run = cluster(&mut pts, k, ClusterCfg::default(), &mut rng);
        prop_assert_eq!(run.centroids.len(), k);
        prop_assert!(pts.iter().all(|p| p.cluster_id < k));
        prop_assert_eq!(run.total_members(), n);
        for (j, c) in run.centroids.iter().enumerate() {
            let members = pts.iter().filter(|p| p.cluster_id == j).count();
            prop_assert_eq!(c.member_count, members);
        }
    }
}
