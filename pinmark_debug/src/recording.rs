// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records calls instead of drawing.
//!
//! [`RecordingSurface`] tracks the active color and transform like a real
//! surface and appends one [`DrawCall`] per primitive, stamped with the color
//! and transform in effect at the time. Wrap it in a
//! [`MarkerOverlay`](pinmark_core::overlay::MarkerOverlay) to capture exactly
//! what the overlay would have drawn.

use kurbo::{Affine, CubicBez, Line, PathEl, QuadBez};

use pinmark_core::color::Color;
use pinmark_core::geom::{IntPoint, IntRect};
use pinmark_core::shape::{Shape, ShapeKind};
use pinmark_core::surface::Surface;

/// Geometry of one recorded primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// `fill_rect` / `draw_rect`.
    Rect(IntRect),
    /// `fill_round_rect` / `draw_round_rect`.
    RoundRect {
        /// Bounding box.
        bounds: IntRect,
        /// Horizontal corner diameter.
        arc_width: i32,
        /// Vertical corner diameter.
        arc_height: i32,
    },
    /// `fill_oval` / `draw_oval`.
    Oval(IntRect),
    /// `fill_arc` / `draw_arc`.
    Arc {
        /// Bounding box.
        bounds: IntRect,
        /// Start angle in degrees.
        start_angle: i32,
        /// Angular extent in degrees.
        arc_angle: i32,
    },
    /// `fill_polygon` / `draw_polygon`.
    Polygon(Vec<IntPoint>),
    /// `draw_line`.
    Line {
        /// Start point.
        from: IntPoint,
        /// End point.
        to: IntPoint,
    },
    /// `draw_shape` / `fill_shape`.
    Shape(RecordedShape),
}

/// Owned copy of a [`Shape`] passed to `draw_shape` or `fill_shape`.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedShape {
    /// [`Shape::Rect`].
    Rect(IntRect),
    /// [`Shape::RoundedRect`].
    RoundedRect {
        /// Bounding box.
        bounds: IntRect,
        /// Horizontal corner diameter.
        arc_width: i32,
        /// Vertical corner diameter.
        arc_height: i32,
    },
    /// [`Shape::Ellipse`].
    Ellipse(IntRect),
    /// [`Shape::Arc`].
    Arc {
        /// Bounding box.
        bounds: IntRect,
        /// Start angle in degrees.
        start_angle: i32,
        /// Angular extent in degrees.
        arc_angle: i32,
    },
    /// [`Shape::Polygon`].
    Polygon(Vec<IntPoint>),
    /// [`Shape::Line`].
    Line(Line),
    /// [`Shape::QuadCurve`].
    QuadCurve(QuadBez),
    /// [`Shape::CubicCurve`].
    CubicCurve(CubicBez),
    /// [`Shape::Path`].
    Path(Vec<PathEl>),
}

impl RecordedShape {
    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.as_shape().kind()
    }

    /// Borrows the recording as a [`Shape`].
    #[must_use]
    pub fn as_shape(&self) -> Shape<'_> {
        match self {
            Self::Rect(r) => Shape::Rect(*r),
            Self::RoundedRect {
                bounds,
                arc_width,
                arc_height,
            } => Shape::RoundedRect {
                bounds: *bounds,
                arc_width: *arc_width,
                arc_height: *arc_height,
            },
            Self::Ellipse(r) => Shape::Ellipse(*r),
            Self::Arc {
                bounds,
                start_angle,
                arc_angle,
            } => Shape::Arc {
                bounds: *bounds,
                start_angle: *start_angle,
                arc_angle: *arc_angle,
            },
            Self::Polygon(points) => Shape::Polygon(points),
            Self::Line(l) => Shape::Line(*l),
            Self::QuadCurve(q) => Shape::QuadCurve(*q),
            Self::CubicCurve(c) => Shape::CubicCurve(*c),
            Self::Path(elements) => Shape::Path(elements),
        }
    }
}

impl From<&Shape<'_>> for RecordedShape {
    fn from(shape: &Shape<'_>) -> Self {
        match *shape {
            Shape::Rect(r) => Self::Rect(r),
            Shape::RoundedRect {
                bounds,
                arc_width,
                arc_height,
            } => Self::RoundedRect {
                bounds,
                arc_width,
                arc_height,
            },
            Shape::Ellipse(r) => Self::Ellipse(r),
            Shape::Arc {
                bounds,
                start_angle,
                arc_angle,
            } => Self::Arc {
                bounds,
                start_angle,
                arc_angle,
            },
            Shape::Polygon(points) => Self::Polygon(points.to_vec()),
            Shape::Line(l) => Self::Line(l),
            Shape::QuadCurve(q) => Self::QuadCurve(q),
            Shape::CubicCurve(c) => Self::CubicCurve(c),
            Shape::Path(elements) => Self::Path(elements.to_vec()),
        }
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    /// `true` for fill calls, `false` for stroke calls.
    pub filled: bool,
    /// What was drawn.
    pub primitive: Primitive,
    /// Active color at the time of the call.
    pub color: Color,
    /// Active transform at the time of the call.
    pub transform: Affine,
}

impl DrawCall {
    /// Whether this call is a filled oval, which is how markers are rendered.
    #[must_use]
    pub fn is_filled_oval(&self) -> bool {
        self.filled && matches!(self.primitive, Primitive::Oval(_))
    }
}

/// A surface that records every primitive.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    color: Color,
    transform: Affine,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            color: Color::BLACK,
            transform: Affine::IDENTITY,
        }
    }
}

impl RecordingSurface {
    /// Creates an empty recording with black color and identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Removes and returns the recorded calls, keeping color and transform.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        core::mem::take(&mut self.calls)
    }

    /// Discards the recorded calls, keeping color and transform.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Iterates over filled-oval calls.
    pub fn markers(&self) -> impl Iterator<Item = &DrawCall> + '_ {
        self.calls.iter().filter(|c| c.is_filled_oval())
    }

    fn record(&mut self, filled: bool, primitive: Primitive) {
        self.calls.push(DrawCall {
            filled,
            primitive,
            color: self.color,
            transform: self.transform,
        });
    }

    fn record_shape(&mut self, filled: bool, shape: &Shape<'_>) {
        self.record(filled, Primitive::Shape(RecordedShape::from(shape)));
    }
}

impl Surface for RecordingSurface {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(true, Primitive::Rect(IntRect::new(x, y, width, height)));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(false, Primitive::Rect(IntRect::new(x, y, width, height)));
    }

    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        self.record(
            true,
            Primitive::RoundRect {
                bounds: IntRect::new(x, y, width, height),
                arc_width,
                arc_height,
            },
        );
    }

    fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        self.record(
            false,
            Primitive::RoundRect {
                bounds: IntRect::new(x, y, width, height),
                arc_width,
                arc_height,
            },
        );
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(true, Primitive::Oval(IntRect::new(x, y, width, height)));
    }

    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(false, Primitive::Oval(IntRect::new(x, y, width, height)));
    }

    fn fill_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: i32,
        arc_angle: i32,
    ) {
        self.record(
            true,
            Primitive::Arc {
                bounds: IntRect::new(x, y, width, height),
                start_angle,
                arc_angle,
            },
        );
    }

    fn draw_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: i32,
        arc_angle: i32,
    ) {
        self.record(
            false,
            Primitive::Arc {
                bounds: IntRect::new(x, y, width, height),
                start_angle,
                arc_angle,
            },
        );
    }

    fn fill_polygon(&mut self, points: &[IntPoint]) {
        self.record(true, Primitive::Polygon(points.to_vec()));
    }

    fn draw_polygon(&mut self, points: &[IntPoint]) {
        self.record(false, Primitive::Polygon(points.to_vec()));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.record(
            false,
            Primitive::Line {
                from: IntPoint::new(x1, y1),
                to: IntPoint::new(x2, y2),
            },
        );
    }

    fn draw_shape(&mut self, shape: &Shape<'_>) {
        self.record_shape(false, shape);
    }

    fn fill_shape(&mut self, shape: &Shape<'_>) {
        self.record_shape(true, shape);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
