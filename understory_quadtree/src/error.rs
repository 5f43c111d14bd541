// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the checked quadtree API.

use kurbo::Rect;

/// Reasons a checked operation refused its input.
///
/// Only [`QuadtreeNode::try_new`](crate::QuadtreeNode::try_new),
/// [`QuadtreeNode::try_insert`](crate::QuadtreeNode::try_insert) and
/// `Quadrant::try_from` produce these; the unchecked operations never fail.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum QuadtreeError {
    /// A coordinate was NaN or infinite.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinite {
        /// Horizontal coordinate of the rejected point.
        x: f64,
        /// Vertical coordinate of the rejected point.
        y: f64,
    },
    /// The point lies outside the rectangle covered by the node.
    #[error("point ({x}, {y}) lies outside {bounds:?}")]
    OutOfBounds {
        /// Horizontal coordinate of the rejected point.
        x: f64,
        /// Vertical coordinate of the rejected point.
        y: f64,
        /// Rectangle the point had to fall in.
        bounds: Rect,
    },
    /// Quadrant numbers run from 1 to 4.
    #[error("quadrant number {0} is not in 1..=4")]
    InvalidQuadrant(u8),
}
