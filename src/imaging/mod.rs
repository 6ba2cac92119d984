//! Image processing — pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageDecoder::dimensions`, swapped for 90°/270° EXIF orientation |
//! | **Decode** | `image::ImageReader` (JPEG, PNG, BMP, TIFF, WebP), EXIF orientation applied |
//! | **Resize** | `fast_image_resize` box convolution ([`resample_area`]) |
//! | **Encode** | `JpegEncoder::new_with_quality`, or the format implied by the extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Raster / Area**: 8-bit pixel buffer and the area-averaging resampler
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

mod area;
pub mod backend;
mod calculations;
pub mod operations;
mod params;
mod raster;
pub mod rust_backend;

pub use area::resample_area;
pub use backend::{CompressError, Dimensions, ImageBackend};
pub use calculations::{fit_within, scale_factor};
pub use operations::{CompressReport, compress_image, plan_compression, preview_compression};
pub use params::{CompressRequest, CompressSettings, MaxSize, Quality, ResizeParams};
pub use raster::Raster;
pub use rust_backend::{OutputFormat, RustBackend, encode_raster, load_raster};
