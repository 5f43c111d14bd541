// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checked insertion.
//!
//! Index labelled sightings behind `Rc`, reject bad input with `try_insert`, and
//! compare with the silent drops of plain `insert`.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_checked`

use std::rc::Rc;

use kurbo::Rect;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Point2D, QuadtreeNode};

#[derive(Debug)]
struct Sighting {
    label: &'static str,
    x: f64,
    y: f64,
}

impl Point2D for Sighting {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

fn sighting(label: &'static str, x: f64, y: f64) -> Rc<Sighting> {
    Rc::new(Sighting { label, x, y })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let map = Rect::new(0.0, 0.0, 640.0, 480.0);
    let mut root = match QuadtreeNode::try_new(sighting("camp", 320.0, 240.0), map) {
        Ok(root) => root,
        Err(e) => {
            warn!("cannot build tree: {e}");
            return;
        }
    };

    let incoming = [
        sighting("heron", 100.0, 80.0),
        sighting("fox", 500.0, 400.0),
        sighting("owl", 700.0, 100.0),
        sighting("glitch", f64::NAN, 10.0),
        sighting("deer", 330.0, 250.0),
    ];
    for s in &incoming {
        match root.try_insert(Rc::clone(s)) {
            Ok(()) => info!(label = s.label, "indexed"),
            Err(e) => warn!(label = s.label, "rejected: {e}"),
        }
    }
    println!("stored: {}", root.size());

    for s in root.find_in_circle(320.0, 240.0, 20.0) {
        println!("near camp: {} at ({}, {})", s.label, s.x, s.y);
    }

    // The unchecked path drops the same points with only a `warn` event.
    let mut lenient = QuadtreeNode::new(sighting("camp", 320.0, 240.0), map);
    lenient.extend(incoming.iter().cloned());
    assert_eq!(lenient.size(), root.size());
}
