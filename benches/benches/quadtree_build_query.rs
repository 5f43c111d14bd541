// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point, Rect};
use understory_quadtree::QuadtreeNode;

const WORLD: f64 = 2000.0;

fn world() -> Rect {
    Rect::new(0.0, 0.0, WORLD, WORLD)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect()
}

/// Jittered lattice, visited in a shuffled order so the tree stays shallow.
fn gen_jittered_grid(n: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let cell = WORLD / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let px = (x as f64 + 0.1 + 0.8 * rng.next_f64()) * cell;
            let py = (y as f64 + 0.1 + 0.8 * rng.next_f64()) * cell;
            out.push(Point::new(px, py));
        }
    }
    for i in (1..out.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for _ in 0..per_cluster {
        for &(cx, cy) in &centers {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(
                (cx + dx).clamp(0.0, WORLD),
                (cy + dy).clamp(0.0, WORLD),
            ));
        }
    }
    out
}

fn build(points: &[Point]) -> QuadtreeNode<Point> {
    let mut root = QuadtreeNode::new(Point::new(WORLD / 2.0, WORLD / 2.0), world());
    root.extend(points.iter().copied());
    root
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_random_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_random_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(build(&points)),
                BatchSize::LargeInput,
            )
        });
    }
    let points = gen_jittered_grid(128);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("insert_jittered_grid_128", |b| {
        b.iter_batched(
            || points.clone(),
            |points| black_box(build(&points)),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let datasets = [
        ("random", gen_random_points(50_000)),
        ("grid", gen_jittered_grid(224)),
        ("clustered", gen_clustered_points(32, 1_500, 120.0)),
    ];
    for (name, points) in &datasets {
        let root = build(points);
        for &r in &[10.0_f64, 50.0, 200.0] {
            group.bench_function(format!("find_in_circle_{name}_r{r}"), |b| {
                let mut rng = Rng::new(0x0123_4567_89AB_CDEF);
                b.iter(|| {
                    let cx = rng.next_f64() * WORLD;
                    let cy = rng.next_f64() * WORLD;
                    black_box(root.query_circle(Circle::new((cx, cy), r)).count())
                })
            });
        }
        group.bench_function(format!("iter_{name}"), |b| {
            b.iter(|| black_box(root.iter().count()))
        });
    }

    // Baseline: a linear scan over the same points.
    let points = &datasets[0].1;
    group.bench_function("linear_scan_random_r50", |b| {
        let mut rng = Rng::new(0x0123_4567_89AB_CDEF);
        b.iter(|| {
            let c = Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD);
            let hits = points
                .iter()
                .filter(|p| (**p - c).hypot2() <= 50.0 * 50.0)
                .count();
            black_box(hits)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
