// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded drawing calls.
//!
//! [`export`] writes the calls captured by a
//! [`RecordingSurface`](crate::recording::RecordingSurface) as a JSON array,
//! one object per call, suitable for diffing frames or feeding external
//! viewers.

use std::io::{self, Write};

use kurbo::{Affine, PathEl, Point};
use serde_json::{Value, json};

use pinmark_core::color::Color;
use pinmark_core::geom::{IntPoint, IntRect};

use crate::recording::{DrawCall, Primitive, RecordedShape};

/// Exports recorded calls as a JSON array.
///
/// Each object carries `"op"` (`"draw"` or `"fill"`), `"primitive"`, the
/// primitive's geometry, a `"color"` as `[r, g, b, a]`, and a `"transform"` as
/// the six affine coefficients. Shapes passed to `draw_shape`/`fill_shape`
/// carry a `"kind"` and their full geometry: `"bounds"` for rectangle-like
/// kinds, `"points"` for polygons and curves, `"from"`/`"to"` for lines, and
/// `"elements"` for paths.
pub fn export(calls: &[DrawCall], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = calls.iter().map(call_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn call_value(call: &DrawCall) -> Value {
    let mut value = primitive_value(&call.primitive);
    value["op"] = json!(if call.filled { "fill" } else { "draw" });
    value["color"] = color_value(call.color);
    value["transform"] = transform_value(call.transform);
    value
}

fn primitive_value(p: &Primitive) -> Value {
    match p {
        Primitive::Rect(r) => json!({ "primitive": "rect", "bounds": rect_value(*r) }),
        Primitive::RoundRect {
            bounds,
            arc_width,
            arc_height,
        } => json!({
            "primitive": "round-rect",
            "bounds": rect_value(*bounds),
            "arc_width": arc_width,
            "arc_height": arc_height,
        }),
        Primitive::Oval(r) => json!({ "primitive": "oval", "bounds": rect_value(*r) }),
        Primitive::Arc {
            bounds,
            start_angle,
            arc_angle,
        } => json!({
            "primitive": "arc",
            "bounds": rect_value(*bounds),
            "start_angle": start_angle,
            "arc_angle": arc_angle,
        }),
        Primitive::Polygon(points) => json!({
            "primitive": "polygon",
            "points": points.iter().map(|p| int_point_value(*p)).collect::<Vec<_>>(),
        }),
        Primitive::Line { from, to } => json!({
            "primitive": "line",
            "from": int_point_value(*from),
            "to": int_point_value(*to),
        }),
        Primitive::Shape(shape) => {
            let mut value = shape_value(shape);
            value["primitive"] = json!("shape");
            value["kind"] = json!(shape.kind().as_str());
            value
        }
    }
}

fn shape_value(shape: &RecordedShape) -> Value {
    match shape {
        RecordedShape::Rect(r) | RecordedShape::Ellipse(r) => {
            json!({ "bounds": rect_value(*r) })
        }
        RecordedShape::RoundedRect {
            bounds,
            arc_width,
            arc_height,
        } => json!({
            "bounds": rect_value(*bounds),
            "arc_width": arc_width,
            "arc_height": arc_height,
        }),
        RecordedShape::Arc {
            bounds,
            start_angle,
            arc_angle,
        } => json!({
            "bounds": rect_value(*bounds),
            "start_angle": start_angle,
            "arc_angle": arc_angle,
        }),
        RecordedShape::Polygon(points) => json!({
            "points": points.iter().map(|p| int_point_value(*p)).collect::<Vec<_>>(),
        }),
        RecordedShape::Line(l) => json!({
            "from": point_value(l.p0),
            "to": point_value(l.p1),
        }),
        RecordedShape::QuadCurve(q) => json!({
            "points": [point_value(q.p0), point_value(q.p1), point_value(q.p2)],
        }),
        RecordedShape::CubicCurve(c) => json!({
            "points": [
                point_value(c.p0),
                point_value(c.p1),
                point_value(c.p2),
                point_value(c.p3)
            ],
        }),
        RecordedShape::Path(elements) => json!({
            "elements": elements.iter().map(element_value).collect::<Vec<_>>(),
        }),
    }
}

fn rect_value(r: IntRect) -> Value {
    json!([r.x, r.y, r.width, r.height])
}

fn int_point_value(p: IntPoint) -> Value {
    json!([p.x, p.y])
}

fn point_value(p: Point) -> Value {
    json!([p.x, p.y])
}

fn element_value(el: &PathEl) -> Value {
    match *el {
        PathEl::MoveTo(p) => json!({ "move_to": point_value(p) }),
        PathEl::LineTo(p) => json!({ "line_to": point_value(p) }),
        PathEl::QuadTo(c, p) => json!({ "quad_to": [point_value(c), point_value(p)] }),
        PathEl::CurveTo(c1, c2, p) => {
            json!({ "curve_to": [point_value(c1), point_value(c2), point_value(p)] })
        }
        PathEl::ClosePath => json!("close"),
    }
}

fn color_value(c: Color) -> Value {
    json!(c.to_rgba8())
}

fn transform_value(t: Affine) -> Value {
    json!(t.as_coeffs())
}
