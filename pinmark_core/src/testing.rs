// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-crate surface double for unit tests.

use alloc::vec::Vec;

use kurbo::Affine;

use crate::color::Color;
use crate::geom::{IntPoint, IntRect};
use crate::shape::{Shape, ShapeKind};
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    FillOval {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
        transform: Affine,
    },
    Rect {
        filled: bool,
        bounds: IntRect,
    },
    Polygon {
        filled: bool,
        points: Vec<IntPoint>,
    },
    Line {
        from: IntPoint,
        to: IntPoint,
    },
    Shape {
        filled: bool,
        kind: ShapeKind,
    },
    Other(&'static str),
}

#[derive(Debug)]
pub(crate) struct TestSurface {
    pub(crate) ops: Vec<Op>,
    transform: Affine,
    color: Color,
}

impl TestSurface {
    pub(crate) fn new() -> Self {
        Self {
            ops: Vec::new(),
            transform: Affine::IDENTITY,
            color: Color::BLACK,
        }
    }

    pub(crate) fn ovals(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::FillOval { .. }))
            .collect()
    }
}

impl Surface for TestSurface {
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
        self.ops.push(Op::Rect {
            filled: true,
            bounds: IntRect::new(x, y, width, height),
        });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(Op::Rect {
            filled: false,
            bounds: IntRect::new(x, y, width, height),
        });
    }

    fn fill_round_rect(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {
        self.ops.push(Op::Other("fill_round_rect"));
    }

    fn draw_round_rect(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {
        self.ops.push(Op::Other("draw_round_rect"));
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(Op::FillOval {
            x,
            y,
            width,
            height,
            color: self.color,
            transform: self.transform,
        });
    }

    fn draw_oval(&mut self, _: i32, _: i32, _: i32, _: i32) {
        self.ops.push(Op::Other("draw_oval"));
    }

    fn fill_arc(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {
        self.ops.push(Op::Other("fill_arc"));
    }

    fn draw_arc(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {
        self.ops.push(Op::Other("draw_arc"));
    }

    fn fill_polygon(&mut self, points: &[IntPoint]) {
        self.ops.push(Op::Polygon {
            filled: true,
            points: points.to_vec(),
        });
    }

    fn draw_polygon(&mut self, points: &[IntPoint]) {
        self.ops.push(Op::Polygon {
            filled: false,
            points: points.to_vec(),
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(Op::Line {
            from: IntPoint::new(x1, y1),
            to: IntPoint::new(x2, y2),
        });
    }

    fn draw_shape(&mut self, shape: &Shape<'_>) {
        self.ops.push(Op::Shape {
            filled: false,
            kind: shape.kind(),
        });
    }

    fn fill_shape(&mut self, shape: &Shape<'_>) {
        self.ops.push(Op::Shape {
            filled: true,
            kind: shape.kind(),
        });
    }
}
