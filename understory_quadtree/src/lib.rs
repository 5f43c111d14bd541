// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point quadtree with circle-range queries.
//!
//! A point quadtree stores one point per node and splits the node's rectangle into
//! four quadrants *at that point*, rather than at a fixed midpoint. It is the
//! structure described by Finkel and Bentley: cheap to build incrementally, never
//! rebalanced, and good at pruning range queries when points arrive in a
//! reasonably shuffled order.
//!
//! - Insert any type implementing [`Point2D`] (Kurbo points, tuples, arrays, or your own types
//!   behind `&T`/`Rc<T>`/`Arc<T>`).
//! - Enumerate points in pre-order with [`QuadtreeNode::iter`] / [`QuadtreeNode::all_points`].
//! - Find every point within a radius with [`QuadtreeNode::find_in_circle`], pruning whole
//!   subtrees whose rectangle misses the circle.
//!
//! There is no separate tree type; a tree is its root [`QuadtreeNode`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::{Quadrant, QuadtreeNode};
//!
//! // y grows downward, so (5, -5) is upper right: quadrant 1.
//! let mut root = QuadtreeNode::new(Point::ORIGIN, Rect::new(-10.0, -10.0, 10.0, 10.0));
//! root.insert(Point::new(5.0, 5.0));
//! root.insert(Point::new(-5.0, 5.0));
//! root.insert(Point::new(-5.0, -5.0));
//! root.insert(Point::new(5.0, -5.0));
//! assert_eq!(root.size(), 5);
//! assert!(root.has_child(Quadrant::First));
//!
//! // Only the root is within 1 of the origin; the corners are 5√2 away.
//! assert_eq!(root.find_in_circle(0.0, 0.0, 1.0), [&Point::ORIGIN]);
//! assert_eq!(root.find_in_circle(0.0, 0.0, 8.0).len(), 5);
//! ```
//!
//! ## Boundary points
//!
//! Quadrant ranges are closed, so a point on a line through an anchor belongs to two
//! quadrants and is stored in both. Queries and [`QuadtreeNode::size`] report every
//! stored copy.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::{Quadrant, QuadtreeNode, Quadrants};
//!
//! let mut root = QuadtreeNode::new(Point::ORIGIN, Rect::new(-10.0, -10.0, 10.0, 10.0));
//! let on_axis = Point::new(5.0, 0.0);
//! let matched = root.classify(&on_axis);
//! assert_eq!(matched, Quadrants::FIRST | Quadrants::FOURTH);
//! let numbers: Vec<u8> = matched.quadrants().map(Quadrant::number).collect();
//! assert_eq!(numbers, [1, 4]);
//! root.insert(on_axis);
//! assert_eq!(root.size(), 3);
//! ```
//!
//! ## Checked input
//!
//! [`QuadtreeNode::insert`] trusts its input: a point outside the root rectangle or with a
//! NaN coordinate is dropped. [`QuadtreeNode::try_new`] and [`QuadtreeNode::try_insert`]
//! reject such points with a [`QuadtreeError`] instead.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::{QuadtreeError, QuadtreeNode};
//!
//! let mut root = QuadtreeNode::new(Point::ORIGIN, Rect::new(-10.0, -10.0, 10.0, 10.0));
//! let err = root.try_insert(Point::new(20.0, 0.0)).unwrap_err();
//! assert!(matches!(err, QuadtreeError::OutOfBounds { .. }));
//! assert_eq!(root.size(), 1);
//! ```
//!
//! ## Diagnostics
//!
//! Insertion emits [`tracing`] events: `trace` for each new leaf, `debug` when a boundary
//! point is duplicated, and `warn` when a point matches no quadrant and is dropped.
//! No subscriber is installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod node;
pub mod point;
pub mod quadrant;
pub mod query;

pub use error::QuadtreeError;
pub use node::QuadtreeNode;
pub use point::Point2D;
pub use quadrant::{Quadrant, Quadrants};
pub use query::{InCircle, Iter};
