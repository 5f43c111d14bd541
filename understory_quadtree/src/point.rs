// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinate capability required of stored points.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use kurbo::Point;

/// Anything with a readable 2D position.
///
/// The tree reads coordinates when a point is inserted and again on every query,
/// so they must stay fixed while the value is stored. Mutating a point's position
/// (through interior mutability, for example) after insertion silently corrupts
/// the tree's geometry.
///
/// Coordinates are expected to be finite. A NaN coordinate fails every comparison,
/// so such a point is dropped by [`QuadtreeNode::insert`](crate::QuadtreeNode::insert)
/// and rejected by [`QuadtreeNode::try_insert`](crate::QuadtreeNode::try_insert).
///
/// Shared handles (`&T`, [`Rc`], [`Arc`], [`Box`]) forward to the pointee, which is
/// the usual way to index heavy payloads: a point on a quadrant boundary is stored
/// once per matching quadrant, and cloning a handle is cheap.
pub trait Point2D {
    /// Horizontal coordinate.
    fn x(&self) -> f64;

    /// Vertical coordinate (grows downward).
    fn y(&self) -> f64;

    /// The position as a Kurbo point.
    #[inline]
    fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

impl Point2D for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn position(&self) -> Point {
        *self
    }
}

impl Point2D for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Point2D for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

macro_rules! forward_point2d {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Point2D + ?Sized> Point2D for $ty {
                #[inline]
                fn x(&self) -> f64 {
                    (**self).x()
                }

                #[inline]
                fn y(&self) -> f64 {
                    (**self).y()
                }
            }
        )*
    };
}

forward_point2d!(&T, Box<T>, Rc<T>, Arc<T>);
