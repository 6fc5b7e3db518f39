// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay configuration.

use core::num::NonZeroU32;

use crate::color::Color;

/// Default marker diameter in surface units.
pub const DEFAULT_MARKER_SIZE: NonZeroU32 = NonZeroU32::new(6).unwrap();

/// Settings that govern marker emission.
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Whether drawing calls produce markers.
    pub debugging_enabled: bool,
    /// Marker color used by drawing calls.
    pub debug_color: Color,
    /// Marker diameter used by drawing calls.
    pub debug_marker_size: NonZeroU32,
    /// Whether markers are buffered until a flush instead of drawn at once.
    pub deferring: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            debugging_enabled: true,
            debug_color: Color::RED,
            debug_marker_size: DEFAULT_MARKER_SIZE,
            deferring: false,
        }
    }
}
