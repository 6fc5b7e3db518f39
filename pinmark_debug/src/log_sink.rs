// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge from overlay events to the [`log`] facade.
//!
//! Marker events are logged at `trace` level; everything else at `debug`.

use pinmark_core::trace::{FlushEvent, MarkerEvent, ModeEvent, ShapeEvent, TraceSink};

const TARGET: &str = "pinmark";

/// A [`TraceSink`] that forwards events to the installed [`log`] logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_shape(&mut self, e: &ShapeEvent) {
        log::debug!(
            target: TARGET,
            "{:?} {} markers={}",
            e.op,
            e.kind.as_str(),
            e.markers
        );
    }

    fn on_marker(&mut self, e: &MarkerEvent) {
        let m = &e.marker;
        log::trace!(
            target: TARGET,
            "marker {:?} at=({}, {}) size={} color={:?}",
            e.disposition,
            m.position.x,
            m.position.y,
            m.size,
            m.color
        );
    }

    fn on_flush(&mut self, e: &FlushEvent) {
        log::debug!(target: TARGET, "flushed {} deferred markers", e.rendered);
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        log::debug!(target: TARGET, "{:?} enabled={}", e.switch, e.enabled);
    }
}
