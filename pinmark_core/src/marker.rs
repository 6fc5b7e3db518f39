// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markers and the deferred marker queue.
//!
//! A [`Marker`] is an immutable snapshot of everything needed to draw one
//! marker later: position, size, color, and the transform that was active when
//! it was requested. [`DeferredQueue`] buffers markers in request order until
//! the overlay drains it.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use core::num::NonZeroU32;

use kurbo::Affine;

use crate::color::Color;
use crate::geom::IntPoint;
use crate::surface::Surface;

/// A marker request captured for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Center in surface units, before `transform` is applied.
    pub position: IntPoint,
    /// Diameter in surface units.
    pub size: NonZeroU32,
    /// Fill color.
    pub color: Color,
    /// Transform to draw under.
    pub transform: Affine,
}

impl Marker {
    /// Creates a marker.
    #[inline]
    #[must_use]
    pub const fn new(position: IntPoint, size: NonZeroU32, color: Color, transform: Affine) -> Self {
        Self {
            position,
            size,
            color,
            transform,
        }
    }

    /// Returns the bounding box of the marker circle as `(x, y, width, height)`.
    ///
    /// The half-size uses integer division, so odd sizes extend one unit
    /// further right and down than left and up.
    #[must_use]
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let size = i32::try_from(self.size.get()).unwrap_or(i32::MAX);
        let half = size / 2;
        (
            self.position.x.wrapping_sub(half),
            self.position.y.wrapping_sub(half),
            size,
            size,
        )
    }

    /// Draws the marker as a filled circle.
    ///
    /// Sets `surface`'s transform to the marker's, fills in the marker color,
    /// then restores the previous color. The transform is left as set.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_transform(self.transform);
        let previous = surface.color();
        surface.set_color(self.color);
        let (x, y, width, height) = self.bounds();
        surface.fill_oval(x, y, width, height);
        surface.set_color(previous);
    }
}

/// FIFO buffer of markers awaiting rendering.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    markers: VecDeque<Marker>,
}

impl DeferredQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a marker at the back.
    #[inline]
    pub fn push(&mut self, marker: Marker) {
        self.markers.push_back(marker);
    }

    /// Number of buffered markers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the queue is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterates over buffered markers in insertion order.
    pub fn iter(&self) -> vec_deque::Iter<'_, Marker> {
        self.markers.iter()
    }

    /// Removes markers front to back.
    ///
    /// The queue is empty once the returned iterator is dropped, even if it
    /// was not fully consumed.
    pub fn drain(&mut self) -> vec_deque::Drain<'_, Marker> {
        self.markers.drain(..)
    }
}

impl<'a> IntoIterator for &'a DeferredQueue {
    type Item = &'a Marker;
    type IntoIter = vec_deque::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
