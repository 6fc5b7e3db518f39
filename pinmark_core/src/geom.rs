// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer geometry in surface coordinate space.
//!
//! Drawing primitives and marker positions use integer coordinates, the same
//! space the underlying surface rasterizes in. Curve and path geometry stays in
//! [`kurbo`] floating-point types until a marker position is needed, at which
//! point [`IntPoint::from_point`] truncates it.

use kurbo::Point;

/// A point with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl IntPoint {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a floating-point point by truncating each coordinate toward
    /// zero.
    ///
    /// NaN maps to `0` and out-of-range values saturate, following `as`
    /// conversion semantics.
    #[inline]
    #[must_use]
    pub fn from_point(p: Point) -> Self {
        Self {
            x: truncate(p.x),
            y: truncate(p.y),
        }
    }
}

impl From<(i32, i32)> for IntPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<IntPoint> for Point {
    #[inline]
    fn from(p: IntPoint) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// An origin-plus-extent rectangle with integer coordinates.
///
/// Width and height are signed; negative extents are kept as given rather than
/// normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRect {
    /// Left edge (for non-negative width).
    pub x: i32,
    /// Top edge (for non-negative height).
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl IntRect {
    /// Creates a rectangle from its origin and extent.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the corners in the order top-left, top-right, bottom-right,
    /// bottom-left.
    ///
    /// The far edges use wrapping addition.
    #[inline]
    #[must_use]
    pub const fn corners(&self) -> [IntPoint; 4] {
        let right = self.x.wrapping_add(self.width);
        let bottom = self.y.wrapping_add(self.height);
        [
            IntPoint::new(self.x, self.y),
            IntPoint::new(right, self.y),
            IntPoint::new(right, bottom),
            IntPoint::new(self.x, bottom),
        ]
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "marker positions are truncated toward zero by definition"
)]
#[inline]
fn truncate(v: f64) -> i32 {
    v as i32
}
