// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque RGBA color values.

use core::fmt;

/// An 8-bit-per-channel RGBA color.
///
/// The overlay treats colors as opaque values: it stores, compares, and passes
/// them to the surface, but never blends them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is fully opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    /// Opaque red; the default marker color.
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::from_rgb8(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    #[inline]
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn rgb8_is_opaque() {
        assert_eq!(Color::from_rgb8(1, 2, 3).a, 255);
        assert_eq!(Color::RED.to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", Color::BLUE), "#0000ffff");
        assert_eq!(format!("{:?}", Color::TRANSPARENT), "#00000000");
    }
}
