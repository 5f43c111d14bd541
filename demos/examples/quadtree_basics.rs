// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small tree, walk it, run circle queries, and watch a boundary point
//! get stored twice.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_basics`
//! - `RUST_LOG=understory_quadtree=trace cargo run -p understory_demos --example quadtree_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Quadrant, QuadtreeNode};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // Root at the origin; y grows downward.
    let mut root = QuadtreeNode::new(Point::ORIGIN, Rect::new(-10.0, -10.0, 10.0, 10.0));
    root.extend([
        Point::new(5.0, 5.0),
        Point::new(-5.0, 5.0),
        Point::new(-5.0, -5.0),
        Point::new(5.0, -5.0),
    ]);
    println!("size: {}", root.size());
    for (quadrant, child) in root.children() {
        println!(
            "quadrant {}: anchor {:?} covering {:?}",
            quadrant.number(),
            child.anchor(),
            child.bounds()
        );
    }

    // Pre-order: root, then quadrants 1 to 4.
    println!("all points: {:?}", root.all_points());

    let near = root.find_in_circle(0.0, 0.0, 1.0);
    println!("within 1 of origin: {near:?}");
    assert_eq!(near, [&Point::ORIGIN]);

    let wide = root.find_in_circle(0.0, 0.0, 8.0);
    println!("within 8 of origin: {} points", wide.len());
    assert_eq!(wide.len(), 5, "corners are 5√2 from the origin");

    // A point on the x axis through an anchor is stored once per matching quadrant.
    let mut fresh = QuadtreeNode::new(Point::ORIGIN, Rect::new(-10.0, -10.0, 10.0, 10.0));
    let on_axis = Point::new(5.0, 0.0);
    let matched: Vec<u8> = fresh
        .classify(&on_axis)
        .quadrants()
        .map(Quadrant::number)
        .collect();
    println!("{on_axis:?} falls in quadrants {matched:?}");
    assert_eq!(matched, [1, 4]);
    fresh.insert(on_axis);
    println!(
        "boundary point stored in quadrants 1 and 4: {} / {}",
        fresh.has_child(Quadrant::First),
        fresh.has_child(Quadrant::Fourth)
    );
    assert_eq!(fresh.size(), 3, "root plus two copies");
}
