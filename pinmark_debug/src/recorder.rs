// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! `Vec<RecordedEvent>` for later inspection or export.

use pinmark_core::trace::{FlushEvent, MarkerEvent, ModeEvent, ShapeEvent, TraceSink};

/// A recorded overlay event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A [`ShapeEvent`].
    Shape(ShapeEvent),
    /// A [`MarkerEvent`].
    Marker(MarkerEvent),
    /// A [`FlushEvent`].
    Flush(FlushEvent),
    /// A [`ModeEvent`].
    Mode(ModeEvent),
}

/// A [`TraceSink`] that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for RecorderSink {
    fn on_shape(&mut self, e: &ShapeEvent) {
        self.events.push(RecordedEvent::Shape(*e));
    }

    fn on_marker(&mut self, e: &MarkerEvent) {
        self.events.push(RecordedEvent::Marker(*e));
    }

    fn on_flush(&mut self, e: &FlushEvent) {
        self.events.push(RecordedEvent::Flush(*e));
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        self.events.push(RecordedEvent::Mode(*e));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pinmark_core::overlay::MarkerOverlay;
    use pinmark_core::shape::ShapeKind;
    use pinmark_core::surface::Surface;
    use pinmark_core::trace::{MarkerDisposition, ModeSwitch, PaintOp, Tracer};

    use super::*;
    use crate::recording::RecordingSurface;

    #[test]
    fn records_overlay_lifecycle() {
        let mut surface = RecordingSurface::new();
        let mut rec = RecorderSink::new();
        {
            let mut overlay = MarkerOverlay::new(&mut surface).with_tracer(Tracer::new(&mut rec));
            overlay.start_deferring();
            overlay.draw_line(0, 0, 4, 4);
            overlay.flush_deferred();
        }

        let events = rec.events();
        assert_eq!(events.len(), 8);
        assert!(matches!(
            events[0],
            RecordedEvent::Mode(ModeEvent {
                switch: ModeSwitch::Deferring,
                enabled: true,
            })
        ));
        assert!(matches!(
            events[1],
            RecordedEvent::Marker(MarkerEvent {
                disposition: MarkerDisposition::Deferred,
                ..
            })
        ));
        assert!(matches!(
            events[3],
            RecordedEvent::Shape(ShapeEvent {
                op: PaintOp::Draw,
                kind: ShapeKind::Line,
                markers: 2,
            })
        ));
        assert!(matches!(
            events[4],
            RecordedEvent::Mode(ModeEvent {
                switch: ModeSwitch::Deferring,
                enabled: false,
            })
        ));
        match events[5] {
            RecordedEvent::Marker(e) => {
                assert_eq!(e.disposition, MarkerDisposition::Replayed);
                assert_eq!(e.marker.position.x, 0);
            }
            other => panic!("expected Marker, got {other:?}"),
        }
        assert!(matches!(
            events[7],
            RecordedEvent::Flush(FlushEvent { rendered: 2 })
        ));
    }

    #[test]
    fn repeated_switches_emit_once() {
        let mut surface = RecordingSurface::new();
        let mut rec = RecorderSink::new();
        {
            let mut overlay = MarkerOverlay::new(&mut surface).with_tracer(Tracer::new(&mut rec));
            overlay.enable_debugging();
            overlay.disable_debugging();
            overlay.disable_debugging();
            overlay.fill_rect(0, 0, 1, 1);
        }

        let events = rec.into_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            RecordedEvent::Shape(ShapeEvent { markers: 0, .. })
        ));
    }
}
