// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape decomposition into marker points.
//!
//! [`decompose`] maps a [`Shape`] to the ordered points that receive markers.
//! It is a pure function: the returned [`MarkerPoints`] iterator borrows the
//! shape's point or path-element slice and allocates nothing.
//!
//! # Rules
//!
//! | Shape | Points |
//! |---|---|
//! | rect, rounded rect, ellipse, arc | bounding-box corners: TL, TR, BR, BL |
//! | polygon | every vertex, as given |
//! | line | start, end |
//! | quad curve | start, control, end |
//! | cubic curve | start, control 1, control 2, end |
//! | path | per segment, the coordinates it introduces |
//!
//! Path segments contribute one point for move-to and line-to, two for quad-to
//! (control, end), three for cubic-to (control 1, control 2, end), and none for
//! close. Curved shapes are marked at their bounding box, not on the curve.
//!
//! Degenerate shapes are decomposed by the same rules; an empty polygon or path
//! yields nothing. Coincident points are not merged.
//!
//! Floating-point coordinates are truncated toward zero; see
//! [`IntPoint::from_point`].

use core::iter::FusedIterator;
use core::slice;

use kurbo::{PathEl, Point};

use crate::geom::IntPoint;
use crate::shape::Shape;

/// Returns the marker points for `shape`, in the shape's natural order.
#[must_use]
pub fn decompose<'a>(shape: &Shape<'a>) -> MarkerPoints<'a> {
    let inner = match *shape {
        Shape::Rect(bounds)
        | Shape::RoundedRect { bounds, .. }
        | Shape::Ellipse(bounds)
        | Shape::Arc { bounds, .. } => Inner::Fixed(Pending::from_slice(&bounds.corners())),
        Shape::Polygon(vertices) => Inner::Polygon(vertices.iter()),
        Shape::Line(line) => Inner::Fixed(Pending::from_points(&[line.p0, line.p1])),
        Shape::QuadCurve(q) => Inner::Fixed(Pending::from_points(&[q.p0, q.p1, q.p2])),
        Shape::CubicCurve(c) => Inner::Fixed(Pending::from_points(&[c.p0, c.p1, c.p2, c.p3])),
        Shape::Path(elements) => return path_points(elements),
    };
    MarkerPoints { inner }
}

/// Returns the marker points for a sequence of path elements.
///
/// This is the rule [`decompose`] applies to [`Shape::Path`].
#[must_use]
pub fn path_points(elements: &[PathEl]) -> MarkerPoints<'_> {
    MarkerPoints {
        inner: Inner::Path {
            elements: elements.iter(),
            pending: Pending::EMPTY,
        },
    }
}

/// Iterator over the marker points of one shape.
///
/// Produced by [`decompose`] and [`path_points`].
#[derive(Clone, Debug)]
pub struct MarkerPoints<'a> {
    inner: Inner<'a>,
}

#[derive(Clone, Debug)]
enum Inner<'a> {
    Fixed(Pending),
    Polygon(slice::Iter<'a, IntPoint>),
    Path {
        elements: slice::Iter<'a, PathEl>,
        pending: Pending,
    },
}

/// Up to four buffered points, consumed front to back.
#[derive(Clone, Copy, Debug)]
struct Pending {
    points: [IntPoint; 4],
    len: u8,
    next: u8,
}

impl Pending {
    const EMPTY: Self = Self {
        points: [IntPoint::ZERO; 4],
        len: 0,
        next: 0,
    };

    fn from_slice(src: &[IntPoint]) -> Self {
        debug_assert!(src.len() <= 4, "at most four buffered points");
        let mut out = Self::EMPTY;
        for (slot, p) in out.points.iter_mut().zip(src) {
            *slot = *p;
            out.len += 1;
        }
        out
    }

    fn from_points(src: &[Point]) -> Self {
        debug_assert!(src.len() <= 4, "at most four buffered points");
        let mut out = Self::EMPTY;
        for (slot, p) in out.points.iter_mut().zip(src) {
            *slot = IntPoint::from_point(*p);
            out.len += 1;
        }
        out
    }

    fn remaining(&self) -> usize {
        usize::from(self.len - self.next)
    }

    fn pop(&mut self) -> Option<IntPoint> {
        if self.next >= self.len {
            return None;
        }
        let p = self.points[usize::from(self.next)];
        self.next += 1;
        Some(p)
    }
}

/// Points a single path segment introduces.
fn segment_points(el: &PathEl) -> Pending {
    match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => Pending::from_points(&[p]),
        PathEl::QuadTo(c, p) => Pending::from_points(&[c, p]),
        PathEl::CurveTo(c1, c2, p) => Pending::from_points(&[c1, c2, p]),
        PathEl::ClosePath => Pending::EMPTY,
    }
}

impl Iterator for MarkerPoints<'_> {
    type Item = IntPoint;

    fn next(&mut self) -> Option<IntPoint> {
        match &mut self.inner {
            Inner::Fixed(pending) => pending.pop(),
            Inner::Polygon(vertices) => vertices.next().copied(),
            Inner::Path { elements, pending } => loop {
                if let Some(p) = pending.pop() {
                    return Some(p);
                }
                *pending = segment_points(elements.next()?);
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Fixed(pending) => {
                let n = pending.remaining();
                (n, Some(n))
            }
            Inner::Polygon(vertices) => vertices.size_hint(),
            Inner::Path { elements, pending } => {
                let buffered = pending.remaining();
                let upper = elements
                    .len()
                    .checked_mul(3)
                    .and_then(|n| n.checked_add(buffered));
                (buffered, upper)
            }
        }
    }
}

impl FusedIterator for MarkerPoints<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::IntRect;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{BezPath, CubicBez, Line, QuadBez};

    fn pts(shape: &Shape<'_>) -> Vec<IntPoint> {
        decompose(shape).collect()
    }

    fn ip(x: i32, y: i32) -> IntPoint {
        IntPoint::new(x, y)
    }

    #[test]
    fn rect_corners_in_order() {
        let r = IntRect::new(10, 20, 30, 40);
        assert_eq!(
            pts(&Shape::Rect(r)),
            vec![ip(10, 20), ip(40, 20), ip(40, 60), ip(10, 60)]
        );
    }

    #[test]
    fn rect_with_negative_extent() {
        let r = IntRect::new(5, 5, -10, -2);
        assert_eq!(
            pts(&Shape::Rect(r)),
            vec![ip(5, 5), ip(-5, 5), ip(-5, 3), ip(5, 3)]
        );
    }

    #[test]
    fn bounded_shapes_mark_bounding_box() {
        let bounds = IntRect::new(0, 0, 8, 4);
        let expected = vec![ip(0, 0), ip(8, 0), ip(8, 4), ip(0, 4)];
        assert_eq!(pts(&Shape::Ellipse(bounds)), expected);
        assert_eq!(
            pts(&Shape::RoundedRect {
                bounds,
                arc_width: 3,
                arc_height: 3,
            }),
            expected
        );
        assert_eq!(
            pts(&Shape::Arc {
                bounds,
                start_angle: 45,
                arc_angle: 270,
            }),
            expected
        );
    }

    #[test]
    fn zero_size_rect_still_has_four_corners() {
        let r = IntRect::new(3, 3, 0, 0);
        assert_eq!(pts(&Shape::Rect(r)), vec![ip(3, 3); 4]);
    }

    #[test]
    fn polygon_vertices_without_implicit_closure() {
        let vertices = [ip(0, 0), ip(10, 0), ip(5, 8)];
        assert_eq!(pts(&Shape::Polygon(&vertices)), vertices.to_vec());

        let closed = [ip(0, 0), ip(10, 0), ip(5, 8), ip(0, 0)];
        assert_eq!(pts(&Shape::Polygon(&closed)).len(), 4);
    }

    #[test]
    fn empty_polygon_and_path_yield_nothing() {
        assert!(pts(&Shape::Polygon(&[])).is_empty());
        assert!(pts(&Shape::Path(&[])).is_empty());
    }

    #[test]
    fn line_endpoints() {
        let line = Line::new((1.0, 2.0), (3.0, 4.0));
        assert_eq!(pts(&Shape::Line(line)), vec![ip(1, 2), ip(3, 4)]);
    }

    #[test]
    fn standalone_quad_includes_start() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        assert_eq!(
            pts(&Shape::QuadCurve(q)),
            vec![ip(0, 0), ip(5, 10), ip(10, 0)]
        );
    }

    #[test]
    fn quad_segment_in_path_omits_start() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.quad_to((5.0, 10.0), (10.0, 0.0));
        let points: Vec<_> = path_points(path.elements()).collect();
        // Start comes from the move-to, not from the quad segment.
        assert_eq!(points, vec![ip(0, 0), ip(5, 10), ip(10, 0)]);

        let quad_only = [PathEl::QuadTo((5.0, 10.0).into(), (10.0, 0.0).into())];
        let points: Vec<_> = path_points(&quad_only).collect();
        assert_eq!(points, vec![ip(5, 10), ip(10, 0)]);
    }

    #[test]
    fn standalone_cubic_has_four_points() {
        let c = CubicBez::new((0.0, 0.0), (1.0, 5.0), (4.0, 5.0), (5.0, 0.0));
        assert_eq!(
            pts(&Shape::CubicCurve(c)),
            vec![ip(0, 0), ip(1, 5), ip(4, 5), ip(5, 0)]
        );
    }

    #[test]
    fn path_segment_counts() {
        let elements = [
            PathEl::MoveTo((0.0, 0.0).into()),
            PathEl::LineTo((10.0, 0.0).into()),
            PathEl::QuadTo((15.0, 5.0).into(), (10.0, 10.0).into()),
            PathEl::CurveTo((8.0, 12.0).into(), (2.0, 12.0).into(), (0.0, 10.0).into()),
            PathEl::ClosePath,
        ];
        assert_eq!(
            path_points(&elements).collect::<Vec<_>>(),
            vec![
                ip(0, 0),
                ip(10, 0),
                ip(15, 5),
                ip(10, 10),
                ip(8, 12),
                ip(2, 12),
                ip(0, 10),
            ]
        );
    }

    #[test]
    fn path_keeps_coincident_points() {
        let elements = [
            PathEl::MoveTo((1.0, 1.0).into()),
            PathEl::LineTo((1.0, 1.0).into()),
            PathEl::ClosePath,
            PathEl::MoveTo((1.0, 1.0).into()),
        ];
        assert_eq!(path_points(&elements).count(), 3);
    }

    #[test]
    fn curve_coordinates_truncate_toward_zero() {
        let q = QuadBez::new((0.9, -0.9), (2.5, -2.5), (-7.99, 7.99));
        assert_eq!(
            pts(&Shape::QuadCurve(q)),
            vec![ip(0, 0), ip(2, -2), ip(-7, 7)]
        );

        let elements = [PathEl::MoveTo((3.7, -3.7).into())];
        assert_eq!(path_points(&elements).collect::<Vec<_>>(), vec![ip(3, -3)]);
    }

    #[test]
    fn decomposition_is_repeatable() {
        let elements = [
            PathEl::MoveTo((0.0, 0.0).into()),
            PathEl::CurveTo((1.0, 1.0).into(), (2.0, 2.0).into(), (3.0, 3.0).into()),
        ];
        let shape = Shape::Path(&elements);
        assert_eq!(pts(&shape), pts(&shape));

        let iter = decompose(&shape);
        assert_eq!(iter.clone().collect::<Vec<_>>(), iter.collect::<Vec<_>>());
    }

    #[test]
    fn fixed_shapes_report_exact_size() {
        let r = IntRect::new(0, 0, 1, 1);
        let mut iter = decompose(&Shape::Rect(r));
        assert_eq!(iter.size_hint(), (4, Some(4)));
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }
}
