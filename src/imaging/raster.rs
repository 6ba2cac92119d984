//! In-memory 8-bit raster shared by the resampler and the encoder.

use image::{DynamicImage, ExtendedColorType};

/// Interleaved 8-bit pixel buffer.
///
/// `channels` is 1 (grayscale) or 3 (RGB). Alpha and high bit depths are
/// flattened on the way in since JPEG carries neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap an existing buffer. Returns `None` if the length does not match.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if !matches!(channels, 1 | 3) || data.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        if img.color().has_color() {
            Self {
                width,
                height,
                channels: 3,
                data: img.into_rgb8().into_raw(),
            }
        } else {
            Self {
                width,
                height,
                channels: 1,
                data: img.into_luma8().into_raw(),
            }
        }
    }

    /// Color layout understood by the `image` crate's encoders.
    pub fn color_type(&self) -> ExtendedColorType {
        match self.channels {
            1 => ExtendedColorType::L8,
            _ => ExtendedColorType::Rgb8,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
