// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape descriptors passed to drawing calls.
//!
//! [`Shape`] is a closed set of variants. Every consumer, most importantly
//! [`decompose`](crate::decompose::decompose), matches on it exhaustively, so
//! adding a variant is a compile error until each consumer handles it.
//!
//! Anything that is not one of the named primitives is described as a
//! [`Shape::Path`]. A [`kurbo::Shape`] can be presented that way through its
//! path elements:
//!
//! ```
//! use pinmark_core::kurbo::{Circle, Shape as _};
//! use pinmark_core::shape::Shape;
//!
//! let path = Circle::new((50.0, 50.0), 10.0).to_path(0.1);
//! let shape = Shape::Path(path.elements());
//! assert_eq!(shape.kind(), pinmark_core::shape::ShapeKind::Path);
//! ```

use kurbo::{CubicBez, Line, PathEl, QuadBez};

use crate::geom::{IntPoint, IntRect};

/// A drawable shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'a> {
    /// Axis-aligned rectangle.
    Rect(IntRect),
    /// Rectangle with rounded corners.
    RoundedRect {
        /// Bounding box.
        bounds: IntRect,
        /// Horizontal diameter of the corner arcs.
        arc_width: i32,
        /// Vertical diameter of the corner arcs.
        arc_height: i32,
    },
    /// Ellipse inscribed in a bounding box.
    Ellipse(IntRect),
    /// Elliptical arc inscribed in a bounding box.
    Arc {
        /// Bounding box of the full ellipse.
        bounds: IntRect,
        /// Start angle in degrees.
        start_angle: i32,
        /// Angular extent in degrees.
        arc_angle: i32,
    },
    /// Polygon given by its vertices. Closure is implicit.
    Polygon(&'a [IntPoint]),
    /// Straight line segment.
    Line(Line),
    /// Quadratic Bézier curve.
    QuadCurve(QuadBez),
    /// Cubic Bézier curve.
    CubicCurve(CubicBez),
    /// Arbitrary path.
    Path(&'a [PathEl]),
}

/// Field-less tag identifying a [`Shape`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Shape::Rect`].
    Rect,
    /// [`Shape::RoundedRect`].
    RoundedRect,
    /// [`Shape::Ellipse`].
    Ellipse,
    /// [`Shape::Arc`].
    Arc,
    /// [`Shape::Polygon`].
    Polygon,
    /// [`Shape::Line`].
    Line,
    /// [`Shape::QuadCurve`].
    QuadCurve,
    /// [`Shape::CubicCurve`].
    CubicCurve,
    /// [`Shape::Path`].
    Path,
}

impl Shape<'_> {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect(_) => ShapeKind::Rect,
            Self::RoundedRect { .. } => ShapeKind::RoundedRect,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Arc { .. } => ShapeKind::Arc,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Line(_) => ShapeKind::Line,
            Self::QuadCurve(_) => ShapeKind::QuadCurve,
            Self::CubicCurve(_) => ShapeKind::CubicCurve,
            Self::Path(_) => ShapeKind::Path,
        }
    }
}

impl ShapeKind {
    /// Returns a short lowercase name for diagnostics output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::RoundedRect => "round-rect",
            Self::Ellipse => "ellipse",
            Self::Arc => "arc",
            Self::Polygon => "polygon",
            Self::Line => "line",
            Self::QuadCurve => "quad",
            Self::CubicCurve => "cubic",
            Self::Path => "path",
        }
    }
}

impl From<Line> for Shape<'_> {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<QuadBez> for Shape<'_> {
    fn from(quad: QuadBez) -> Self {
        Self::QuadCurve(quad)
    }
}

impl From<CubicBez> for Shape<'_> {
    fn from(cubic: CubicBez) -> Self {
        Self::CubicCurve(cubic)
    }
}

impl<'a> From<&'a kurbo::BezPath> for Shape<'a> {
    fn from(path: &'a kurbo::BezPath) -> Self {
        Self::Path(path.elements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{BezPath, CubicBez, Line, QuadBez};

    #[test]
    fn kind_matches_variant() {
        let r = IntRect::new(0, 0, 1, 1);
        assert_eq!(Shape::Rect(r).kind(), ShapeKind::Rect);
        assert_eq!(
            Shape::Arc {
                bounds: r,
                start_angle: 0,
                arc_angle: 90,
            }
            .kind(),
            ShapeKind::Arc
        );
        assert_eq!(Shape::Polygon(&[]).kind(), ShapeKind::Polygon);
    }

    #[test]
    fn curve_types_convert_to_their_variants() {
        let line = Line::new((0.0, 0.0), (1.0, 1.0));
        let quad = QuadBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 0.0));
        let cubic = CubicBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0));
        assert_eq!(Shape::from(line), Shape::Line(line));
        assert_eq!(Shape::from(quad).kind(), ShapeKind::QuadCurve);
        assert_eq!(Shape::from(cubic), Shape::CubicCurve(cubic));
    }

    #[test]
    fn bez_path_converts_to_path_variant() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 1.0));
        let shape = Shape::from(&path);
        assert!(matches!(shape, Shape::Path(els) if els.len() == 2));
    }
}
