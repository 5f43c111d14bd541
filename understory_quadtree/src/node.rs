// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree node: construction, insertion, and structural accessors.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Circle, Point, Rect};
use tracing::{debug, trace, warn};

use crate::error::QuadtreeError;
use crate::point::Point2D;
use crate::quadrant::{Quadrant, Quadrants};
use crate::query::{InCircle, Iter};

/// A node of a point quadtree, and the subtree below it.
///
/// There is no separate tree type: the root is simply a node nobody owns. Each node
/// stores one point, its *anchor*, and covers a rectangle. The rectangle is split
/// at the anchor into four [`Quadrant`]s, and each quadrant holds at most one child
/// node, created the first time a point lands there.
///
/// ## Geometry
///
/// `bounds` uses Kurbo's `(x0, y0, x1, y1)` with y growing downward, so `y0` is the
/// upper edge. The constructor trusts `x0 ≤ x1`, `y0 ≤ y1`, and that the anchor
/// lies inside; use [`try_new`](Self::try_new) to have that checked. A child's
/// rectangle is always the parent's quadrant region, so every descendant lies
/// inside its ancestors' rectangles. Queries rely on this to prune.
///
/// ## Boundary points
///
/// Quadrant ranges are closed. A point on a line through an anchor matches two
/// quadrants (four, if it equals the anchor) and is stored in each of them, so it
/// is counted and reported once per copy. This is why [`insert`](Self::insert)
/// needs `P: Clone`; store `Rc<T>` or `&T` if cloning `T` is expensive.
///
/// ## Limits
///
/// The tree is never rebalanced and points are never removed. Sorted input builds a
/// chain as deep as the number of points; traversals use explicit work lists, so
/// depth costs time but not call stack.
pub struct QuadtreeNode<P> {
    pub(crate) anchor: P,
    pub(crate) bounds: Rect,
    pub(crate) children: [Option<Box<Self>>; 4],
}

impl<P: Point2D> QuadtreeNode<P> {
    /// Create a leaf anchored at `anchor`, covering `bounds`.
    pub fn new(anchor: P, bounds: Rect) -> Self {
        Self {
            anchor,
            bounds,
            children: [None, None, None, None],
        }
    }

    /// Create a leaf from the corner coordinates `(x1, y1)`–`(x2, y2)`.
    pub fn from_coords(anchor: P, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(anchor, Rect::new(x1, y1, x2, y2))
    }

    /// Like [`new`](Self::new), but rejects a non-finite anchor or one outside `bounds`.
    ///
    /// An inverted rectangle contains nothing, so it is rejected as well.
    pub fn try_new(anchor: P, bounds: Rect) -> Result<Self, QuadtreeError> {
        check_point(anchor.position(), bounds)?;
        Ok(Self::new(anchor, bounds))
    }

    /// The quadrants of this node that `p` falls in.
    ///
    /// Usually a single quadrant. Two or more means `p` sits on a line through the
    /// anchor. Empty means `p` is outside this node's rectangle or has a NaN coordinate.
    pub fn classify(&self, p: &P) -> Quadrants {
        self.classify_position(p.position())
    }

    fn classify_position(&self, p: Point) -> Quadrants {
        let anchor = self.anchor.position();
        Quadrant::ALL
            .into_iter()
            .filter(|q| q.accepts(self.bounds, anchor, p))
            .collect()
    }

    /// Insert `p` below this node.
    ///
    /// Descends into every quadrant `p` falls in, creating a leaf in the first empty
    /// slot reached along each path. Points outside this node's rectangle, or with NaN
    /// coordinates, match no quadrant and are dropped without error; see
    /// [`try_insert`](Self::try_insert) for the checked form.
    pub fn insert(&mut self, p: P)
    where
        P: Clone,
    {
        let pos = p.position();
        let mut pending: Vec<&mut Self> = vec![self];
        while let Some(node) = pending.pop() {
            let matched = node.classify_position(pos);
            if matched.is_empty() {
                warn!(
                    x = pos.x,
                    y = pos.y,
                    bounds = ?node.bounds,
                    "point matches no quadrant; dropped"
                );
                continue;
            }
            if matched.bits().count_ones() > 1 {
                debug!(
                    x = pos.x,
                    y = pos.y,
                    quadrants = ?matched,
                    "point on a quadrant boundary; storing a copy per quadrant"
                );
            }
            let anchor = node.anchor.position();
            let bounds = node.bounds;
            let slots = Quadrant::ALL.into_iter().zip(node.children.iter_mut());
            for (quadrant, slot) in slots {
                if !matched.has(quadrant) {
                    continue;
                }
                match slot {
                    Some(child) => pending.push(&mut **child),
                    None => {
                        let region = quadrant.region(bounds, anchor);
                        trace!(
                            quadrant = quadrant.number(),
                            x = pos.x,
                            y = pos.y,
                            "new leaf"
                        );
                        *slot = Some(Box::new(Self::new(p.clone(), region)));
                    }
                }
            }
        }
    }

    /// Insert `p`, rejecting non-finite points and points outside this node's rectangle.
    ///
    /// Accepted points are placed exactly as [`insert`](Self::insert) places them.
    pub fn try_insert(&mut self, p: P) -> Result<(), QuadtreeError>
    where
        P: Clone,
    {
        check_point(p.position(), self.bounds)?;
        self.insert(p);
        Ok(())
    }

    /// Stored points within `cr` of `(cx, cy)`, boundary included, in pre-order.
    ///
    /// `cr` is assumed to be non-negative. See [`query_circle`](Self::query_circle)
    /// for the lazy form.
    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&P> {
        self.query_circle(Circle::new((cx, cy), cr)).collect()
    }

    /// Lazily yield the stored points inside or on `circle`, in pre-order.
    ///
    /// Subtrees whose rectangle misses the circle are skipped without being visited.
    pub fn query_circle(&self, circle: Circle) -> InCircle<'_, P> {
        InCircle::new(self, circle)
    }
}

impl<P> QuadtreeNode<P> {
    /// The point anchoring this node.
    pub fn anchor(&self) -> &P {
        &self.anchor
    }

    /// The rectangle this node and its subtree cover.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The child in `quadrant`, if one has been created.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children[quadrant.slot()].as_deref()
    }

    /// Whether `quadrant` has a child.
    pub fn has_child(&self, quadrant: Quadrant) -> bool {
        self.children[quadrant.slot()].is_some()
    }

    /// The existing children in quadrant order.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &Self)> + '_ {
        Quadrant::ALL
            .into_iter()
            .filter_map(|q| self.child(q).map(|c| (q, c)))
    }

    /// The quadrants that have a child.
    pub fn occupied(&self) -> Quadrants {
        self.children().map(|(q, _)| q).collect()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Iterate over every stored point in pre-order: a node's anchor, then its
    /// children's subtrees in quadrant order 1 to 4.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(self)
    }

    /// Every stored point in pre-order. See [`iter`](Self::iter).
    pub fn all_points(&self) -> Vec<&P> {
        self.iter().collect()
    }

    /// Number of stored points, this node's anchor included.
    ///
    /// Counted afresh on each call. Boundary points count once per stored copy.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels in the subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1_usize)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children().map(|(_, c)| (c, level + 1)));
        }
        deepest
    }
}

impl<P: Point2D + Clone> Extend<P> for QuadtreeNode<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<'a, P> IntoIterator for &'a QuadtreeNode<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P> Drop for QuadtreeNode<P> {
    fn drop(&mut self) {
        // Detach descendants so a deep chain is freed in a loop, not by nested drops.
        let mut pending: Vec<Box<Self>> = Vec::new();
        pending.extend(self.children.iter_mut().filter_map(Option::take));
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<P: Debug> Debug for QuadtreeNode<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadtreeNode")
            .field("anchor", &self.anchor)
            .field("bounds", &self.bounds)
            .field("occupied", &self.occupied())
            .finish_non_exhaustive()
    }
}

fn check_point(p: Point, bounds: Rect) -> Result<(), QuadtreeError> {
    let Point { x, y } = p;
    if !(x.is_finite() && y.is_finite()) {
        return Err(QuadtreeError::NonFinite { x, y });
    }
    // Closed on all sides, unlike `Rect::contains`.
    let inside = bounds.x0 <= x && x <= bounds.x1 && bounds.y0 <= y && y <= bounds.y1;
    if !inside {
        return Err(QuadtreeError::OutOfBounds { x, y, bounds });
    }
    Ok(())
}
