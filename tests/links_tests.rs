// Host-side tests for the proximity linker.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/device.rs"]
mod device;
#[path = "../src/core/config.rs"]
mod config;
#[path = "../src/core/surface.rs"]
mod surface;
#[path = "../src/core/field.rs"]
mod field;
#[path = "../src/core/links.rs"]
mod links;

use field::Particle;
use links::*;
use std::collections::BTreeSet;

fn at(x: f32, y: f32) -> Particle {
    Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        radius: 1.0,
        opacity: 0.5,
    }
}

/// Deterministic scatter without pulling in an RNG.
fn scatter(n: usize, w: f32, h: f32) -> Vec<Particle> {
    (0..n)
        .map(|k| {
            let k = k as f32;
            at((k * 73.7) % w, (k * 41.3) % h)
        })
        .collect()
}

#[test]
fn uncapped_links_are_exactly_the_pairs_below_threshold() {
    let pool = scatter(40, 500.0, 300.0);
    let threshold = 120.0;

    let mut expected = BTreeSet::new();
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            if distance(&pool[i], &pool[j]) < threshold {
                expected.insert((i, j));
            }
        }
    }
    let got: BTreeSet<(usize, usize)> = link_pairs(&pool, threshold, usize::MAX)
        .map(|l| (l.i, l.j))
        .collect();
    assert_eq!(got, expected);
    assert!(!got.is_empty(), "scatter should produce some close pairs");
}

#[test]
fn uncapped_pair_set_is_permutation_invariant() {
    let pool = scatter(30, 400.0, 400.0);
    let mut shuffled = pool.clone();
    shuffled.reverse();
    shuffled.swap(0, 10);
    shuffled.swap(3, 25);

    let key = |p: &Particle| (p.x.to_bits(), p.y.to_bits());
    let pairs_of = |ps: &[Particle]| -> BTreeSet<_> {
        link_pairs(ps, 120.0, usize::MAX)
            .map(|l| {
                let (a, b) = (key(&ps[l.i]), key(&ps[l.j]));
                if a < b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect()
    };
    assert_eq!(pairs_of(&pool), pairs_of(&shuffled));
}

#[test]
fn per_particle_cap_bounds_emissions() {
    let pool = scatter(60, 300.0, 200.0);
    let cap = 2;
    let links: Vec<Link> = link_pairs(&pool, 150.0, cap).collect();
    for i in 0..pool.len() {
        let emitted = links.iter().filter(|l| l.i == i).count();
        assert!(emitted <= cap, "particle {i} emitted {emitted} links");
    }
}

#[test]
fn cap_truncates_a_dense_neighborhood_in_pool_order() {
    // A hub with three spokes within range; spokes are mutually out of
    // range. With cap 2 the hub links only to the first two in pool order.
    let pool = vec![
        at(0.0, 0.0),
        at(50.0, 0.0),
        at(-25.0, 43.3),
        at(-25.0, -43.3),
    ];
    let links: Vec<Link> = link_pairs(&pool, 60.0, 2).collect();
    let from_hub: Vec<usize> = links.iter().filter(|l| l.i == 0).map(|l| l.j).collect();
    assert_eq!(from_hub, vec![1, 2]);
    assert_eq!(links.len(), 2);
}

#[test]
fn zero_cap_emits_nothing() {
    let pool = scatter(20, 200.0, 200.0);
    assert_eq!(link_pairs(&pool, 150.0, 0).count(), 0);
}

#[test]
fn alpha_is_exact_at_the_endpoints() {
    assert_eq!(link_alpha(0.0, 120.0), 1.0);
    assert_eq!(link_alpha(120.0, 120.0), 0.0);
    assert_eq!(link_alpha(200.0, 120.0), 0.0);
    assert!((link_alpha(60.0, 120.0) - 0.5).abs() < 1e-6);
}

#[test]
fn alpha_is_monotonically_non_increasing_in_distance() {
    let threshold = 120.0;
    let mut prev = link_alpha(0.0, threshold);
    for step in 1..=300 {
        let d = step as f32 * 0.5;
        let a = link_alpha(d, threshold);
        assert!(a <= prev, "alpha increased at distance {d}");
        prev = a;
    }
}

#[test]
fn equal_distance_pair_is_not_linked() {
    // distance < threshold is strict
    let pool = vec![at(0.0, 0.0), at(120.0, 0.0)];
    assert_eq!(link_pairs(&pool, 120.0, usize::MAX).count(), 0);
}

#[test]
fn emitted_alphas_match_the_falloff() {
    let pool = scatter(25, 300.0, 300.0);
    let threshold = 140.0;
    for l in link_pairs(&pool, threshold, usize::MAX) {
        let d = distance(&pool[l.i], &pool[l.j]);
        assert!((l.alpha - link_alpha(d, threshold)).abs() < 1e-6);
        assert!(l.alpha > 0.0 && l.alpha <= 1.0);
        assert!(l.i < l.j);
    }
}

#[test]
fn tiny_pools_yield_no_links() {
    assert_eq!(link_pairs(&[], 120.0, 3).count(), 0);
    assert_eq!(link_pairs(&[at(1.0, 1.0)], 120.0, 3).count(), 0);
}
