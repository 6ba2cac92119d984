//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the high-level [`operations`](super::operations) module (which decides the
//! target size) and the [`backend`](super::backend) (which does the pixel work).
//!
//! ## Types
//!
//! - [`Quality`] — JPEG quality (1–100, default 85). Out-of-range values are rejected.
//! - [`MaxSize`] — Bounding box the output must fit in (default 1920×1080).
//! - [`CompressSettings`] — Raw user values, before validation.
//! - [`CompressRequest`] — Validated source, output, quality and bounding box.
//! - [`ResizeParams`] — Planned backend operation: source, output, target dimensions, quality.

use super::backend::CompressError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_QUALITY: u32 = 85;
pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Quality setting for lossy JPEG encoding (1-100).
///
/// Unlike a clamp, construction fails for values outside the range so a
/// typo like `quality = 850` is reported instead of silently becoming 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u32) -> Result<Self, CompressError> {
        if (1..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CompressError::InvalidInput(format!(
                "quality must be between 1 and 100, got {value}"
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY as u8)
    }
}

/// Maximum output dimensions. Both bounds are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSize {
    pub width: u32,
    pub height: u32,
}

impl MaxSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CompressError> {
        if width == 0 || height == 0 {
            return Err(CompressError::InvalidInput(format!(
                "maximum size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for MaxSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAX_WIDTH,
            height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Unvalidated compression settings as they come out of config and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressSettings {
    pub quality: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for CompressSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// A single, validated compression job.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    pub quality: Quality,
    pub max_size: MaxSize,
}

impl CompressRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        settings: &CompressSettings,
    ) -> Result<Self, CompressError> {
        let source = source.into();
        let output = output.into();
        if is_blank(&source) || is_blank(&output) {
            return Err(CompressError::InvalidInput(
                "both input and output file paths are required".into(),
            ));
        }
        Ok(Self {
            source,
            output,
            quality: Quality::new(settings.quality)?,
            max_size: MaxSize::new(settings.max_width, settings.max_height)?,
        })
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Parameters for a planned resize + re-encode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_accepts_full_range() {
        assert_eq!(Quality::new(1).unwrap().value(), 1);
        assert_eq!(Quality::new(50).unwrap().value(), 50);
        assert_eq!(Quality::new(100).unwrap().value(), 100);
    }

    #[test]
    fn quality_rejects_out_of_range() {
        assert!(matches!(
            Quality::new(0),
            Err(CompressError::InvalidInput(_))
        ));
        assert!(matches!(
            Quality::new(101),
            Err(CompressError::InvalidInput(_))
        ));
    }

    #[test]
    fn quality_default_is_85() {
        assert_eq!(Quality::default().value(), 85);
    }

    #[test]
    fn max_size_rejects_zero() {
        assert!(MaxSize::new(0, 1080).is_err());
        assert!(MaxSize::new(1920, 0).is_err());
        assert_eq!(MaxSize::new(1, 1).unwrap().as_tuple(), (1, 1));
    }

    #[test]
    fn max_size_default_is_full_hd() {
        assert_eq!(MaxSize::default().as_tuple(), (1920, 1080));
    }

    #[test]
    fn request_from_default_settings() {
        let req =
            CompressRequest::new("in.png", "out.jpg", &CompressSettings::default()).unwrap();
        assert_eq!(req.quality.value(), 85);
        assert_eq!(req.max_size, MaxSize::default());
        assert_eq!(req.source, PathBuf::from("in.png"));
    }

    #[test]
    fn request_requires_both_paths() {
        let settings = CompressSettings::default();
        assert!(CompressRequest::new("", "out.jpg", &settings).is_err());
        assert!(CompressRequest::new("in.jpg", "  ", &settings).is_err());
    }

    #[test]
    fn request_propagates_invalid_settings() {
        let settings = CompressSettings {
            quality: 0,
            ..CompressSettings::default()
        };
        let err = CompressRequest::new("in.jpg", "out.jpg", &settings).unwrap_err();
        assert!(err.to_string().contains("quality"));
    }
}
