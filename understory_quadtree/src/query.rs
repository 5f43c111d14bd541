// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-order traversals over a quadtree.
//!
//! Both iterators keep their own stack of nodes still to visit. Children are pushed
//! in reverse quadrant order so quadrant 1 is popped first, which reproduces the
//! order of a recursive walk without using the call stack.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use kurbo::Circle;

use crate::geometry::{circle_intersects_rect, point_in_circle};
use crate::node::QuadtreeNode;
use crate::point::Point2D;

/// Pre-order iterator over every stored point.
///
/// Created by [`QuadtreeNode::iter`].
pub struct Iter<'a, P> {
    pending: Vec<&'a QuadtreeNode<P>>,
}

impl<'a, P> Iter<'a, P> {
    pub(crate) fn new(root: &'a QuadtreeNode<P>) -> Self {
        Self {
            pending: vec![root],
        }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        push_children(&mut self.pending, node);
        Some(&node.anchor)
    }
}

impl<P> FusedIterator for Iter<'_, P> {}

impl<P> Debug for Iter<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending_nodes", &self.pending.len())
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator over the stored points inside or on a circle.
///
/// Created by [`QuadtreeNode::query_circle`]. A node whose rectangle misses the
/// circle is discarded together with its whole subtree.
pub struct InCircle<'a, P> {
    circle: Circle,
    pending: Vec<&'a QuadtreeNode<P>>,
}

impl<'a, P> InCircle<'a, P> {
    pub(crate) fn new(root: &'a QuadtreeNode<P>, circle: Circle) -> Self {
        Self {
            circle,
            pending: vec![root],
        }
    }
}

impl<'a, P: Point2D> Iterator for InCircle<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.pending.pop() {
            if !circle_intersects_rect(&self.circle, &node.bounds) {
                continue;
            }
            push_children(&mut self.pending, node);
            if point_in_circle(node.anchor.position(), &self.circle) {
                return Some(&node.anchor);
            }
        }
        None
    }
}

impl<P: Point2D> FusedIterator for InCircle<'_, P> {}

impl<P> Debug for InCircle<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InCircle")
            .field("circle", &self.circle)
            .field("pending_nodes", &self.pending.len())
            .finish_non_exhaustive()
    }
}

fn push_children<'a, P>(pending: &mut Vec<&'a QuadtreeNode<P>>, node: &'a QuadtreeNode<P>) {
    pending.extend(node.children.iter().rev().flatten().map(|c| &**c));
}
