// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, tracing, and configuration helpers for pinmark overlays.
//!
//! This crate provides the `std`-side tooling around
//! [`pinmark_core`]:
//!
//! - [`recording::RecordingSurface`]: a [`Surface`](pinmark_core::surface::Surface)
//!   that records every primitive with its color and transform.
//! - [`json::export`]: writes recorded calls as JSON.
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory event recording.
//! - [`config::load_config`]: reads an
//!   [`OverlayConfig`](pinmark_core::config::OverlayConfig) from JSON.
//! - `log_sink::LogSink` (feature `log`): forwards events to the `log` facade.

pub mod config;
pub mod json;
#[cfg(feature = "log")]
pub mod log_sink;
pub mod pretty;
pub mod recorder;
pub mod recording;
