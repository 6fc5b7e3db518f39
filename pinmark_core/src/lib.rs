// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker overlay for debugging 2D drawing code.
//!
//! `pinmark_core` wraps any 2D drawing surface and, for every shape drawn or
//! filled through it, draws small filled circles at the shape's significant
//! points: corners, curve control points, and path vertices. The original
//! drawing calls are forwarded untouched. It is `no_std` compatible (with
//! `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   host drawing code
//!       │ Surface calls
//!       ▼
//!   MarkerOverlay ──► Surface (host) ── shape drawn as-is
//!       │
//!       ▼
//!   decompose(shape) ──► points ──► request_marker()
//!                                      │
//!                 ┌────────────────────┴──────────────┐
//!                 ▼ immediate                         ▼ deferring
//!           Marker::render()                    DeferredQueue::push()
//!                                                     │
//!                                  flush_deferred() ──┘ (FIFO replay)
//! ```
//!
//! **[`surface`]**: The [`Surface`](surface::Surface) capability trait that
//! hosts implement over their drawing API, and that the overlay implements in
//! turn.
//!
//! **[`shape`]**: [`Shape`](shape::Shape), the closed set of shape
//! descriptors drawing calls are expressed in.
//!
//! **[`decompose`]**: Pure mapping from a shape to its ordered marker points.
//!
//! **[`marker`]**: Captured [`Marker`](marker::Marker) values, the render
//! primitive, and the FIFO [`DeferredQueue`](marker::DeferredQueue).
//!
//! **[`overlay`]**: [`MarkerOverlay`](overlay::MarkerOverlay), which ties the
//! above together.
//!
//! **[`config`]**: [`OverlayConfig`](config::OverlayConfig) defaults and
//! optional serde support.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! overlay instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! **[`geom`]**, **[`color`]**: Integer geometry and RGBA color values.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `serde` (disabled by default): Derives `Serialize`/`Deserialize` for
//!   configuration and value types.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod config;
pub mod decompose;
pub mod geom;
pub mod marker;
pub mod overlay;
pub mod shape;
pub mod surface;
pub mod trace;

#[cfg(test)]
mod testing;

pub use kurbo;
