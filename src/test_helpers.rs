//! Shared test utilities for the image-compressor test suite.
//!
//! Synthetic fixtures are generated on the fly with the `image` crate's
//! encoders, so tests need no binary files checked in.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let source = tmp.path().join("source.jpg");
//! create_test_jpeg(&source, 4000, 2000);
//! ```

use crate::imaging::Raster;
use image::{ImageEncoder, RgbImage};
use std::path::Path;

// =========================================================================
// Pixel data
// =========================================================================

/// Gradient with a deterministic pseudo-random texture on top.
///
/// The texture defeats JPEG's smoothing so quality differences show up
/// clearly in output size.
pub fn textured_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let noise = x.wrapping_mul(7919) ^ y.wrapping_mul(104_729);
        image::Rgb([
            (x % 256) as u8,
            (y % 256) as u8,
            (noise.wrapping_mul(2_654_435_761) >> 24) as u8,
        ])
    })
}

/// [`textured_image`] as a [`Raster`].
pub fn noisy_raster(width: u32, height: u32) -> Raster {
    Raster::from_raw(width, height, 3, textured_image(width, height).into_raw()).unwrap()
}

// =========================================================================
// Fixture files
// =========================================================================

/// Create a valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = textured_image(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a valid PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    textured_image(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// EXIF APP1 segment holding a single Orientation (0x0112) tag.
pub fn exif_orientation_segment(orientation: u16) -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\0\x2A");
    tiff.extend_from_slice(&8u32.to_be_bytes()); // first IFD right after header
    tiff.extend_from_slice(&1u16.to_be_bytes()); // one entry
    tiff.extend_from_slice(&0x0112u16.to_be_bytes());
    tiff.extend_from_slice(&3u16.to_be_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_be_bytes());
    tiff.extend_from_slice(&orientation.to_be_bytes());
    tiff.extend_from_slice(&[0, 0]);
    tiff.extend_from_slice(&0u32.to_be_bytes()); // no next IFD

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend(tiff);

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend(payload);
    segment
}

/// Create a JPEG whose pixels are stored `width`×`height` but whose EXIF
/// Orientation tag says how to display them.
pub fn create_test_jpeg_with_orientation(path: &Path, width: u32, height: u32, orientation: u16) {
    let img = textured_image(width, height);
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut jpeg)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();

    // Splice APP1 in right after SOI.
    let mut bytes = jpeg[..2].to_vec();
    bytes.extend(exif_orientation_segment(orientation));
    bytes.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, bytes).unwrap();
}
