// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker overlay.
//!
//! [`MarkerOverlay`] borrows a host [`Surface`] and implements [`Surface`]
//! itself. Each drawing call is forwarded unchanged, then, while debugging is
//! enabled, the shape is [decomposed](crate::decompose) and one marker is
//! requested per point using the current marker color and size.
//!
//! # Immediate and deferred markers
//!
//! Outside deferred mode a marker request draws at once: the surface transform
//! is set to the marker's, the circle is filled in the marker color, and the
//! previous color is restored. The transform is **not** restored, so drawing
//! calls after a marker see the marker's transform.
//!
//! Inside deferred mode each request is captured as a [`Marker`] (position,
//! size, color, transform) and queued. [`MarkerOverlay::flush_deferred`] leaves
//! deferred mode, then renders the queue front to back, each marker with its
//! own captured settings. Deferring a batch and flushing at the end puts every
//! marker above the batch's shapes.
//!
//! ```rust,ignore
//! let mut overlay = MarkerOverlay::new(&mut surface);
//! overlay.start_deferring();
//! draw_scene(&mut overlay);
//! overlay.flush_deferred();
//! ```

use core::num::NonZeroU32;

use kurbo::{Affine, Line};

use crate::color::Color;
use crate::config::OverlayConfig;
use crate::decompose::decompose;
use crate::geom::{IntPoint, IntRect};
use crate::marker::{DeferredQueue, Marker};
use crate::shape::Shape;
use crate::surface::Surface;
use crate::trace::{
    FlushEvent, MarkerDisposition, MarkerEvent, ModeEvent, ModeSwitch, PaintOp, ShapeEvent, Tracer,
};

/// A [`Surface`] wrapper that marks the significant points of every shape it
/// draws.
///
/// The overlay owns its settings and deferred queue. It is meant to be driven
/// from one call stack; wrap it in external synchronization if it must be
/// shared.
pub struct MarkerOverlay<'s, 't, S: Surface + ?Sized> {
    surface: &'s mut S,
    config: OverlayConfig,
    queue: DeferredQueue,
    tracer: Tracer<'t>,
}

impl<S: Surface + ?Sized> core::fmt::Debug for MarkerOverlay<'_, '_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarkerOverlay")
            .field("config", &self.config)
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}

impl<'s, 't, S: Surface + ?Sized> MarkerOverlay<'s, 't, S> {
    /// Wraps `surface` with the default configuration.
    #[must_use]
    pub fn new(surface: &'s mut S) -> Self {
        Self::with_config(surface, OverlayConfig::default())
    }

    /// Wraps `surface` with the given configuration.
    ///
    /// If `config.deferring` is set, markers are buffered from the first
    /// drawing call.
    #[must_use]
    pub fn with_config(surface: &'s mut S, config: OverlayConfig) -> Self {
        Self {
            surface,
            config,
            queue: DeferredQueue::new(),
            tracer: Tracer::none(),
        }
    }

    /// Routes overlay events to `tracer`.
    ///
    /// The sink borrow is independent of the surface borrow.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer<'t>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Returns the current settings.
    #[must_use]
    pub fn config(&self) -> OverlayConfig {
        self.config
    }

    /// Returns the wrapped surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Returns the wrapped surface mutably.
    ///
    /// Calls made directly on it bypass the overlay and produce no markers.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    // -- configuration ------------------------------------------------------

    /// Enables marker emission on drawing calls.
    pub fn enable_debugging(&mut self) {
        self.set_switch(ModeSwitch::Debugging, true);
    }

    /// Disables marker emission on drawing calls. Shapes are still drawn.
    pub fn disable_debugging(&mut self) {
        self.set_switch(ModeSwitch::Debugging, false);
    }

    /// Whether drawing calls produce markers.
    #[must_use]
    pub fn is_debugging_enabled(&self) -> bool {
        self.config.debugging_enabled
    }

    /// Marker color used by drawing calls.
    #[must_use]
    pub fn debug_color(&self) -> Color {
        self.config.debug_color
    }

    /// Sets the marker color used by subsequent drawing calls.
    ///
    /// Markers already queued keep the color they were captured with.
    pub fn set_debug_color(&mut self, color: Color) {
        self.config.debug_color = color;
    }

    /// Marker diameter used by drawing calls.
    #[must_use]
    pub fn debug_marker_size(&self) -> NonZeroU32 {
        self.config.debug_marker_size
    }

    /// Sets the marker diameter used by subsequent drawing calls.
    pub fn set_debug_marker_size(&mut self, size: NonZeroU32) {
        self.config.debug_marker_size = size;
    }

    /// Starts buffering marker requests instead of drawing them.
    pub fn start_deferring(&mut self) {
        self.set_switch(ModeSwitch::Deferring, true);
    }

    /// Stops buffering marker requests without flushing.
    ///
    /// Markers already queued stay queued until the next
    /// [`flush_deferred`](Self::flush_deferred).
    pub fn stop_deferring(&mut self) {
        self.set_switch(ModeSwitch::Deferring, false);
    }

    /// Whether marker requests are being buffered.
    #[must_use]
    pub fn is_deferring(&self) -> bool {
        self.config.deferring
    }

    /// Markers waiting for the next flush, in request order.
    #[must_use]
    pub fn pending_markers(&self) -> &DeferredQueue {
        &self.queue
    }

    fn set_switch(&mut self, switch: ModeSwitch, enabled: bool) {
        let slot = match switch {
            ModeSwitch::Debugging => &mut self.config.debugging_enabled,
            ModeSwitch::Deferring => &mut self.config.deferring,
        };
        if *slot != enabled {
            *slot = enabled;
            self.tracer.mode(&ModeEvent { switch, enabled });
        }
    }

    // -- markers ------------------------------------------------------------

    /// Requests a marker at `(x, y)`.
    ///
    /// Outside deferred mode this draws immediately and leaves the surface
    /// transform set to `transform`. In deferred mode the request is queued
    /// with exactly the given `size`, `color`, and `transform`.
    pub fn request_marker(
        &mut self,
        x: i32,
        y: i32,
        size: NonZeroU32,
        color: Color,
        transform: Affine,
    ) {
        let marker = Marker::new(IntPoint::new(x, y), size, color, transform);
        let disposition = if self.config.deferring {
            self.queue.push(marker);
            MarkerDisposition::Deferred
        } else {
            marker.render(&mut *self.surface);
            MarkerDisposition::Rendered
        };
        self.tracer.marker(&MarkerEvent {
            marker,
            disposition,
        });
    }

    /// Requests a marker at `p` with the current marker color and size, under
    /// the surface's active transform.
    pub fn mark_point(&mut self, p: IntPoint) {
        let transform = self.surface.transform();
        self.request_marker(
            p.x,
            p.y,
            self.config.debug_marker_size,
            self.config.debug_color,
            transform,
        );
    }

    /// Marks every point of `shape` without drawing it.
    ///
    /// This ignores [`is_debugging_enabled`](Self::is_debugging_enabled).
    /// Returns the number of markers requested.
    pub fn mark_shape(&mut self, shape: &Shape<'_>) -> usize {
        let mut count = 0;
        for p in decompose(shape) {
            self.mark_point(p);
            count += 1;
        }
        count
    }

    /// Leaves deferred mode and renders every queued marker in request order.
    ///
    /// Each marker uses its captured color, size, and transform. Returns the
    /// number rendered; flushing an empty queue renders nothing.
    pub fn flush_deferred(&mut self) -> usize {
        self.stop_deferring();
        let mut rendered = 0;
        for marker in self.queue.drain() {
            marker.render(&mut *self.surface);
            self.tracer.marker(&MarkerEvent {
                marker,
                disposition: MarkerDisposition::Replayed,
            });
            rendered += 1;
        }
        self.tracer.flush(&FlushEvent { rendered });
        rendered
    }

    fn after_paint(&mut self, op: PaintOp, shape: &Shape<'_>) {
        let markers = if self.config.debugging_enabled {
            self.mark_shape(shape)
        } else {
            0
        };
        self.tracer.shape(&ShapeEvent {
            op,
            kind: shape.kind(),
            markers,
        });
    }
}

impl<S: Surface + ?Sized> Surface for MarkerOverlay<'_, '_, S> {
    fn transform(&self) -> Affine {
        self.surface.transform()
    }

    fn set_transform(&mut self, transform: Affine) {
        self.surface.set_transform(transform);
    }

    fn color(&self) -> Color {
        self.surface.color()
    }

    fn set_color(&mut self, color: Color) {
        self.surface.set_color(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.surface.fill_rect(x, y, width, height);
        self.after_paint(PaintOp::Fill, &Shape::Rect(IntRect::new(x, y, width, height)));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.surface.draw_rect(x, y, width, height);
        self.after_paint(PaintOp::Draw, &Shape::Rect(IntRect::new(x, y, width, height)));
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
        self.surface
            .fill_round_rect(x, y, width, height, arc_width, arc_height);
        let shape = Shape::RoundedRect {
            bounds: IntRect::new(x, y, width, height),
            arc_width,
            arc_height,
        };
        self.after_paint(PaintOp::Fill, &shape);
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
        self.surface
            .draw_round_rect(x, y, width, height, arc_width, arc_height);
        let shape = Shape::RoundedRect {
            bounds: IntRect::new(x, y, width, height),
            arc_width,
            arc_height,
        };
        self.after_paint(PaintOp::Draw, &shape);
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.surface.fill_oval(x, y, width, height);
        self.after_paint(
            PaintOp::Fill,
            &Shape::Ellipse(IntRect::new(x, y, width, height)),
        );
    }

    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.surface.draw_oval(x, y, width, height);
        self.after_paint(
            PaintOp::Draw,
            &Shape::Ellipse(IntRect::new(x, y, width, height)),
        );
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
        self.surface
            .fill_arc(x, y, width, height, start_angle, arc_angle);
        let shape = Shape::Arc {
            bounds: IntRect::new(x, y, width, height),
            start_angle,
            arc_angle,
        };
        self.after_paint(PaintOp::Fill, &shape);
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
        self.surface
            .draw_arc(x, y, width, height, start_angle, arc_angle);
        let shape = Shape::Arc {
            bounds: IntRect::new(x, y, width, height),
            start_angle,
            arc_angle,
        };
        self.after_paint(PaintOp::Draw, &shape);
    }

    fn fill_polygon(&mut self, points: &[IntPoint]) {
        self.surface.fill_polygon(points);
        self.after_paint(PaintOp::Fill, &Shape::Polygon(points));
    }

    fn draw_polygon(&mut self, points: &[IntPoint]) {
        self.surface.draw_polygon(points);
        self.after_paint(PaintOp::Draw, &Shape::Polygon(points));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.surface.draw_line(x1, y1, x2, y2);
        let line = Line::new(
            (f64::from(x1), f64::from(y1)),
            (f64::from(x2), f64::from(y2)),
        );
        self.after_paint(PaintOp::Draw, &Shape::Line(line));
    }

    fn draw_shape(&mut self, shape: &Shape<'_>) {
        self.surface.draw_shape(shape);
        self.after_paint(PaintOp::Draw, shape);
    }

    fn fill_shape(&mut self, shape: &Shape<'_>) {
        self.surface.fill_shape(shape);
        self.after_paint(PaintOp::Fill, shape);
    }
}
