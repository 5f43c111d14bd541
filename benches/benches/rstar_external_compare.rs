// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point, Rect};
use understory_quadtree::QuadtreeNode;

use rstar::RTree;

const WORLD: f64 = 2000.0;

fn gen_random_points(count: usize) -> Vec<[f64; 2]> {
    let mut s = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        ((s >> 11) as f64) / ((1u64 << 53) as f64) * WORLD
    };
    (0..count).map(|_| [next(), next()]).collect()
}

fn world_root() -> QuadtreeNode<[f64; 2]> {
    let centre = [WORLD / 2.0, WORLD / 2.0];
    QuadtreeNode::new(centre, Rect::new(0.0, 0.0, WORLD, WORLD))
}

fn bench_circle_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_external_compare");
    for &n in &[4_096usize, 16_384, 65_536] {
        let points = gen_random_points(n);
        let (cx, cy, r) = (1000.0, 1000.0, 150.0);
        let circle = Circle::new(Point::new(cx, cy), r);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut root = world_root();
                    root.extend(points);
                    let hits = root.query_circle(circle).count();
                    black_box(hits);
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let hits = tree.locate_within_distance([cx, cy], r * r).count();
                    black_box(hits);
                },
                BatchSize::LargeInput,
            )
        });

        let mut root = world_root();
        root.extend(points.iter().copied());
        let tree = RTree::bulk_load(points.clone());
        group.bench_function(format!("quadtree_query_n{}", n), |b| {
            b.iter(|| black_box(root.find_in_circle(cx, cy, r).len()))
        });
        group.bench_function(format!("rstar_query_n{}", n), |b| {
            b.iter(|| black_box(tree.locate_within_distance([cx, cy], r * r).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_circle_external_compare);
criterion_main!(benches);
