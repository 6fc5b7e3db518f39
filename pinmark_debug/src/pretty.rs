// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::Affine;
use pinmark_core::trace::{
    FlushEvent, MarkerDisposition, MarkerEvent, ModeEvent, ModeSwitch, PaintOp, ShapeEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn op_name(op: PaintOp) -> &'static str {
    match op {
        PaintOp::Draw => "draw",
        PaintOp::Fill => "fill",
    }
}

fn disposition_name(d: MarkerDisposition) -> &'static str {
    match d {
        MarkerDisposition::Rendered => "rendered",
        MarkerDisposition::Deferred => "deferred",
        MarkerDisposition::Replayed => "replayed",
    }
}

fn switch_name(s: ModeSwitch) -> &'static str {
    match s {
        ModeSwitch::Debugging => "debugging",
        ModeSwitch::Deferring => "deferring",
    }
}

/// Formats the transform compactly, eliding the identity.
fn transform_label(t: Affine) -> String {
    if t == Affine::IDENTITY {
        return "identity".to_owned();
    }
    let [a, b, c, d, e, f] = t.as_coeffs();
    format!("[{a} {b} {c} {d} {e} {f}]")
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_shape(&mut self, e: &ShapeEvent) {
        let _ = writeln!(
            self.writer,
            "[shape] {} {} markers={}",
            op_name(e.op),
            e.kind.as_str(),
            e.markers,
        );
    }

    fn on_marker(&mut self, e: &MarkerEvent) {
        let m = &e.marker;
        let _ = writeln!(
            self.writer,
            "[marker:{}] at=({}, {}) size={} color={:?} transform={}",
            disposition_name(e.disposition),
            m.position.x,
            m.position.y,
            m.size,
            m.color,
            transform_label(m.transform),
        );
    }

    fn on_flush(&mut self, e: &FlushEvent) {
        let _ = writeln!(self.writer, "[flush] rendered={}", e.rendered);
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        let _ = writeln!(
            self.writer,
            "[mode] {}={}",
            switch_name(e.switch),
            if e.enabled { "on" } else { "off" },
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
