// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the overlay.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`MarkerOverlay`](crate::overlay::MarkerOverlay) calls as it intercepts
//! drawing calls, emits markers, and flushes its queue. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::marker::Marker;
use crate::shape::ShapeKind;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether a drawing call stroked or filled its shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintOp {
    /// Outline.
    Draw,
    /// Interior.
    Fill,
}

/// What happened to a marker request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerDisposition {
    /// Drawn immediately.
    Rendered,
    /// Appended to the deferred queue.
    Deferred,
    /// Drawn from the deferred queue during a flush.
    Replayed,
}

/// Which overlay switch changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeSwitch {
    /// Marker emission on drawing calls.
    Debugging,
    /// Buffering of marker requests.
    Deferring,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a drawing call has been forwarded and marked.
#[derive(Clone, Copy, Debug)]
pub struct ShapeEvent {
    /// Stroke or fill.
    pub op: PaintOp,
    /// Which shape the call drew.
    pub kind: ShapeKind,
    /// Number of marker requests the call produced (0 while debugging is
    /// disabled).
    pub markers: usize,
}

/// Emitted for each marker the overlay renders or buffers.
#[derive(Clone, Copy, Debug)]
pub struct MarkerEvent {
    /// The marker as requested.
    pub marker: Marker,
    /// What the overlay did with it.
    pub disposition: MarkerDisposition,
}

/// Emitted when a flush completes.
#[derive(Clone, Copy, Debug)]
pub struct FlushEvent {
    /// Number of markers drained and rendered.
    pub rendered: usize,
}

/// Emitted when an overlay switch is set.
#[derive(Clone, Copy, Debug)]
pub struct ModeEvent {
    /// Which switch.
    pub switch: ModeSwitch,
    /// Its new value.
    pub enabled: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the overlay.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after each intercepted drawing call.
    fn on_shape(&mut self, e: &ShapeEvent) {
        _ = e;
    }

    /// Called for each marker rendered, deferred, or replayed.
    fn on_marker(&mut self, e: &MarkerEvent) {
        _ = e;
    }

    /// Called when a flush completes.
    fn on_flush(&mut self, e: &FlushEvent) {
        _ = e;
    }

    /// Called when debugging or deferring is switched.
    fn on_mode(&mut self, e: &ModeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ShapeEvent`].
    #[inline]
    pub fn shape(&mut self, e: &ShapeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_shape(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MarkerEvent`].
    #[inline]
    pub fn marker(&mut self, e: &MarkerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_marker(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FlushEvent`].
    #[inline]
    pub fn flush(&mut self, e: &FlushEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_flush(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ModeEvent`].
    #[inline]
    pub fn mode(&mut self, e: &ModeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mode(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_flush(&FlushEvent { rendered: 0 });
        sink.on_mode(&ModeEvent {
            switch: ModeSwitch::Deferring,
            enabled: true,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.flush(&FlushEvent { rendered: 3 });
        tracer.shape(&ShapeEvent {
            op: PaintOp::Fill,
            kind: ShapeKind::Rect,
            markers: 4,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct CountingSink {
            flushes: Vec<usize>,
        }
        impl TraceSink for CountingSink {
            fn on_flush(&mut self, e: &FlushEvent) {
                self.flushes.push(e.rendered);
            }
        }

        let mut sink = CountingSink {
            flushes: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.flush(&FlushEvent { rendered: 2 });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.flushes, &[2]);
    }
}
