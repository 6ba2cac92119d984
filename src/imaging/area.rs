//! Area-averaging resampler.
//!
//! Shrinking runs a box convolution through `fast_image_resize`. The box is
//! stretched to the resize ratio, so each destination pixel is the average of
//! the source pixels under its footprint and fine detail averages out instead
//! of aliasing.

use super::backend::CompressError;
use super::raster::Raster;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};

fn pixel_type(channels: u8) -> PixelType {
    match channels {
        1 => PixelType::U8,
        _ => PixelType::U8x3,
    }
}

/// Resample `src` to `width`×`height` by area averaging.
///
/// A zero target or source dimension is `InvalidInput`; the planner never
/// produces one.
pub fn resample_area(src: Raster, width: u32, height: u32) -> Result<Raster, CompressError> {
    if width == src.width() && height == src.height() {
        return Ok(src);
    }
    if width == 0 || height == 0 || src.width() == 0 || src.height() == 0 {
        return Err(CompressError::InvalidInput(format!(
            "cannot resample {}x{} to {width}x{height}",
            src.width(),
            src.height()
        )));
    }

    let channels = src.channels();
    let pixels = pixel_type(channels);
    let (src_width, src_height) = (src.width(), src.height());
    let src_image = Image::from_vec_u8(src_width, src_height, src.into_raw(), pixels)
        .map_err(|e| CompressError::InvalidInput(format!("bad source buffer: {e}")))?;
    let mut dst_image = Image::new(width, height, pixels);

    Resizer::new()
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box)),
        )
        .map_err(|e| CompressError::InvalidInput(format!("resize failed: {e}")))?;

    Raster::from_raw(width, height, channels, dst_image.into_vec()).ok_or_else(|| {
        CompressError::InvalidInput(format!("resized buffer does not match {width}x{height}"))
    })
}
