// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface contract.
//!
//! Pinmark does not rasterize. Hosts provide a [`Surface`] over whatever 2D
//! API they already draw with (a software rasterizer, a canvas binding, a GPU
//! command encoder). The overlay consumes that capability and exposes the same
//! trait, so host drawing code can be pointed at either without change.
//!
//! # What the overlay relies on
//!
//! - **State**: [`transform`](Surface::transform) and
//!   [`color`](Surface::color) report what subsequent primitives will use, and
//!   their setters replace it.
//! - **Ellipse fill**: markers are rendered with
//!   [`fill_oval`](Surface::fill_oval).
//! - **Primitives**: every other method is forwarded unchanged. Validation of
//!   parameters (for example negative sizes) is the implementor's concern.
//!
//! Rectangle-like primitives take an origin plus extent in integer surface
//! units. Angles are in degrees.

use kurbo::Affine;

use crate::color::Color;
use crate::geom::IntPoint;
use crate::shape::Shape;

/// A 2D drawing surface.
///
/// Both the host's own surfaces and
/// [`MarkerOverlay`](crate::overlay::MarkerOverlay) implement this trait,
/// enabling generic drawing code and test doubles.
pub trait Surface {
    /// Returns the active transform.
    fn transform(&self) -> Affine;

    /// Replaces the active transform.
    fn set_transform(&mut self, transform: Affine);

    /// Returns the active drawing color.
    fn color(&self) -> Color;

    /// Replaces the active drawing color.
    fn set_color(&mut self, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Strokes the outline of an axis-aligned rectangle.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Fills a rectangle with rounded corners.
    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    );

    /// Strokes a rectangle with rounded corners.
    fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    );

    /// Fills the ellipse inscribed in the given bounding box.
    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Strokes the ellipse inscribed in the given bounding box.
    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Fills a pie-shaped elliptical arc.
    fn fill_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: i32,
        arc_angle: i32,
    );

    /// Strokes an elliptical arc.
    fn draw_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: i32,
        arc_angle: i32,
    );

    /// Fills a polygon; closure from the last vertex to the first is implicit.
    fn fill_polygon(&mut self, points: &[IntPoint]);

    /// Strokes the outline of a polygon.
    fn draw_polygon(&mut self, points: &[IntPoint]);

    /// Strokes a line between two points.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Strokes an arbitrary shape.
    fn draw_shape(&mut self, shape: &Shape<'_>);

    /// Fills an arbitrary shape.
    fn fill_shape(&mut self, shape: &Shape<'_>);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn transform(&self) -> Affine {
        (**self).transform()
    }

    #[inline]
    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }

    #[inline]
    fn color(&self) -> Color {
        (**self).color()
    }

    #[inline]
    fn set_color(&mut self, color: Color) {
        (**self).set_color(color);
    }

    #[inline]
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).fill_rect(x, y, width, height);
    }

    #[inline]
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).draw_rect(x, y, width, height);
    }

    #[inline]
    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        (**self).fill_round_rect(x, y, width, height, arc_width, arc_height);
    }

    #[inline]
    fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        (**self).draw_round_rect(x, y, width, height, arc_width, arc_height);
    }

    #[inline]
    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).fill_oval(x, y, width, height);
    }

    #[inline]
    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).draw_oval(x, y, width, height);
    }

    #[inline]
    fn fill_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: i32,
        arc_angle: i32,
    ) {
        (**self).fill_arc(x, y, width, height, start_angle, arc_angle);
    }

    #[inline]
    fn draw_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: i32,
        arc_angle: i32,
    ) {
        (**self).draw_arc(x, y, width, height, start_angle, arc_angle);
    }

    #[inline]
    fn fill_polygon(&mut self, points: &[IntPoint]) {
        (**self).fill_polygon(points);
    }

    #[inline]
    fn draw_polygon(&mut self, points: &[IntPoint]) {
        (**self).draw_polygon(points);
    }

    #[inline]
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        (**self).draw_line(x1, y1, x2, y2);
    }

    #[inline]
    fn draw_shape(&mut self, shape: &Shape<'_>) {
        (**self).draw_shape(shape);
    }

    #[inline]
    fn fill_shape(&mut self, shape: &Shape<'_>) {
        (**self).fill_shape(shape);
    }
}
