// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant numbering and the region math that splits a node at its anchor.
//!
//! Quadrants are numbered the way the anchor's neighbourhood reads on screen,
//! with y growing downward:
//!
//! ```text
//!            x0        ax        x1
//!         y0 +---------+---------+
//!            |    2    |    1    |
//!         ay +---------A---------+
//!            |    3    |    4    |
//!         y1 +---------+---------+
//! ```
//!
//! Every range is closed, so a point on the line through the anchor belongs to
//! both quadrants sharing that line, and the anchor itself belongs to all four.

use kurbo::{Point, Rect};

use crate::error::QuadtreeError;

/// One of the four regions of a node's rectangle, split at its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Upper right: `ax ≤ x ≤ x1`, `y0 ≤ y ≤ ay`.
    First,
    /// Upper left: `x0 ≤ x ≤ ax`, `y0 ≤ y ≤ ay`.
    Second,
    /// Lower left: `x0 ≤ x ≤ ax`, `ay ≤ y ≤ y1`.
    Third,
    /// Lower right: `ax ≤ x ≤ x1`, `ay ≤ y ≤ y1`.
    Fourth,
}

impl Quadrant {
    /// All quadrants in visiting order.
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// The conventional number of this quadrant, 1 through 4.
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }

    /// Index of this quadrant's child slot.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }

    /// The part of `bounds` this quadrant covers when split at `anchor`.
    pub fn region(self, bounds: Rect, anchor: Point) -> Rect {
        let Point { x: ax, y: ay } = anchor;
        match self {
            Self::First => Rect::new(ax, bounds.y0, bounds.x1, ay),
            Self::Second => Rect::new(bounds.x0, bounds.y0, ax, ay),
            Self::Third => Rect::new(bounds.x0, ay, ax, bounds.y1),
            Self::Fourth => Rect::new(ax, ay, bounds.x1, bounds.y1),
        }
    }

    /// Whether `p` falls in this quadrant of `bounds` split at `anchor`.
    ///
    /// Boundaries are inclusive. Any NaN coordinate makes this false.
    pub fn accepts(self, bounds: Rect, anchor: Point, p: Point) -> bool {
        let right = anchor.x <= p.x && p.x <= bounds.x1;
        let left = bounds.x0 <= p.x && p.x <= anchor.x;
        let upper = bounds.y0 <= p.y && p.y <= anchor.y;
        let lower = anchor.y <= p.y && p.y <= bounds.y1;
        match self {
            Self::First => right && upper,
            Self::Second => left && upper,
            Self::Third => left && lower,
            Self::Fourth => right && lower,
        }
    }

    const fn flag(self) -> Quadrants {
        match self {
            Self::First => Quadrants::FIRST,
            Self::Second => Quadrants::SECOND,
            Self::Third => Quadrants::THIRD,
            Self::Fourth => Quadrants::FOURTH,
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = QuadtreeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            _ => Err(QuadtreeError::InvalidQuadrant(number)),
        }
    }
}

bitflags::bitflags! {
    /// A set of quadrants.
    ///
    /// Returned by [`QuadtreeNode::classify`](crate::QuadtreeNode::classify), where more
    /// than one bit means the point sits on a boundary and will be stored in each
    /// quadrant, and by [`QuadtreeNode::occupied`](crate::QuadtreeNode::occupied).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// Quadrant 1, upper right.
        const FIRST  = 0b0001;
        /// Quadrant 2, upper left.
        const SECOND = 0b0010;
        /// Quadrant 3, lower left.
        const THIRD  = 0b0100;
        /// Quadrant 4, lower right.
        const FOURTH = 0b1000;
    }
}

impl Quadrants {
    /// Whether `quadrant` is in the set.
    pub const fn has(self, quadrant: Quadrant) -> bool {
        self.contains(quadrant.flag())
    }

    /// The members of the set in visiting order.
    pub fn quadrants(self) -> impl Iterator<Item = Quadrant> {
        Quadrant::ALL.into_iter().filter(move |q| self.has(*q))
    }
}

impl From<Quadrant> for Quadrants {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.flag()
    }
}

impl FromIterator<Quadrant> for Quadrants {
    fn from_iter<I: IntoIterator<Item = Quadrant>>(iter: I) -> Self {
        let mut set = Self::empty();
        for q in iter {
            set |= Self::from(q);
        }
        set
    }
}
