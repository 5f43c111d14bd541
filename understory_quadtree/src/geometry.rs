// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle predicates used to prune circle-range queries.
//!
//! Both compare squared distances against the squared radius, so no square root
//! is taken and the circle's boundary counts as inside.

use kurbo::{Circle, Point, Rect};

/// Whether `p` lies inside or on `circle`.
#[inline]
pub fn point_in_circle(p: Point, circle: &Circle) -> bool {
    let dx = p.x - circle.center.x;
    let dy = p.y - circle.center.y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Whether `circle` touches `rect`.
///
/// Finds the point of `rect` closest to the circle's centre by clamping the centre
/// into it, then tests that point against the circle. The clamp is written as
/// `max` followed by `min` so an inverted rectangle cannot panic.
#[inline]
pub fn circle_intersects_rect(circle: &Circle, rect: &Rect) -> bool {
    let c = circle.center;
    let x = c.x.max(rect.x0).min(rect.x1);
    let y = c.y.max(rect.y0).min(rect.y1);
    point_in_circle(Point::new(x, y), circle)
}
