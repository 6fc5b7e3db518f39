// Copyright 2026 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading [`OverlayConfig`] from JSON.
//!
//! ```json
//! {
//!   "debugging_enabled": true,
//!   "debug_color": { "r": 0, "g": 0, "b": 255, "a": 255 },
//!   "debug_marker_size": 8,
//!   "deferring": false
//! }
//! ```
//!
//! Every field is optional; missing fields take the
//! [defaults](OverlayConfig::default). A `debug_marker_size` of `0` is
//! rejected.

use std::fmt;
use std::io::{self, Read};
use std::path::Path;

use pinmark_core::config::OverlayConfig;

/// Errors from loading an [`OverlayConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the source failed.
    Io(io::Error),
    /// The source is not a valid configuration document.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read overlay config: {err}"),
            Self::Json(err) => write!(f, "invalid overlay config: {err}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Json(err)
        }
    }
}

/// Reads a configuration document from `reader`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if reading fails and [`ConfigError::Json`] if
/// the document is malformed or contains out-of-range values.
pub fn load_config<R: Read>(reader: R) -> Result<OverlayConfig, ConfigError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a configuration document from a string.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] if the document is malformed or contains
/// out-of-range values.
pub fn parse_config(source: &str) -> Result<OverlayConfig, ConfigError> {
    Ok(serde_json::from_str(source)?)
}

/// Reads a configuration document from the file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be opened or read and
/// [`ConfigError::Json`] if its contents are malformed.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<OverlayConfig, ConfigError> {
    let file = std::fs::File::open(path)?;
    load_config(io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use pinmark_core::color::Color;

    use super::*;

    #[test]
    fn full_document() {
        let config = parse_config(
            r#"{
                "debugging_enabled": false,
                "debug_color": { "r": 0, "g": 0, "b": 255, "a": 255 },
                "debug_marker_size": 8,
                "deferring": true
            }"#,
        )
        .unwrap();
        assert!(!config.debugging_enabled);
        assert_eq!(config.debug_color, Color::BLUE);
        assert_eq!(config.debug_marker_size.get(), 8);
        assert!(config.deferring);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = load_config(r#"{ "debug_marker_size": 3 }"#.as_bytes()).unwrap();
        assert_eq!(
            config,
            OverlayConfig {
                debug_marker_size: NonZeroU32::new(3).unwrap(),
                ..OverlayConfig::default()
            }
        );
        assert_eq!(parse_config("{}").unwrap(), OverlayConfig::default());
    }

    #[test]
    fn zero_marker_size_is_rejected() {
        let err = parse_config(r#"{ "debug_marker_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid overlay config"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config_file("/nonexistent/pinmark/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn round_trips_through_serde_json() {
        let config = OverlayConfig {
            deferring: true,
            debug_color: Color::from_rgba8(1, 2, 3, 4),
            ..OverlayConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
