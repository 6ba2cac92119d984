//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageDecoder::dimensions` + EXIF orientation |
//! | Decode (JPEG, PNG, BMP, TIFF, WebP) | `image::ImageReader` (format sniffed from content), `DynamicImage::apply_orientation` |
//! | Resize | `fast_image_resize` box convolution ([`resample_area`](super::area::resample_area)) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |
//! | Encode → PNG / BMP / TIFF / WebP | `image::write_buffer_with_format` (quality unused) |
//!
//! Sizes are always reported and planned for the upright image: a photo
//! tagged with EXIF orientation 6 or 8 has its width and height swapped
//! before the bounding box is applied.

use super::area::resample_area;
use super::backend::{CompressError, Dimensions, ImageBackend};
use super::params::{Quality, ResizeParams};
use super::raster::Raster;
use image::codecs::jpeg::JpegEncoder;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageEncoder, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// Extensions whose decoders are compiled in.
const INPUT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("bmp", ImageFormat::Bmp),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    INPUT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` carries one of the [`supported_input_extensions`].
///
/// Decoding sniffs the content either way; this only drives a warning.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Output encoding, chosen from the destination's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Bmp,
    Tiff,
    WebP,
}

impl OutputFormat {
    /// Map an output path to its encoder.
    ///
    /// A path without extension is written as JPEG; an unknown extension is an
    /// encode error.
    pub fn from_path(path: &Path) -> Result<Self, CompressError> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            warn!(path = %path.display(), "output has no extension, writing JPEG");
            return Ok(Self::Jpeg);
        };

        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            "tif" | "tiff" => Ok(Self::Tiff),
            "webp" => Ok(Self::WebP),
            other => Err(CompressError::encode(
                path,
                format!("unsupported output format: {other}"),
            )),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
            Self::WebP => ImageFormat::WebP,
        }
    }
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// True for the EXIF orientations that turn the image on its side.
fn swaps_axes(orientation: Orientation) -> bool {
    matches!(
        orientation,
        Orientation::Rotate90
            | Orientation::Rotate270
            | Orientation::Rotate90FlipH
            | Orientation::Rotate270FlipH
    )
}

/// Open a decoder with the format sniffed from content, and read its EXIF
/// orientation. Unreadable EXIF counts as upright.
fn open_decoder(path: &Path) -> Result<(impl ImageDecoder, Orientation), CompressError> {
    let mut decoder = ImageReader::open(path)
        .map_err(|e| CompressError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| CompressError::decode(path, e))?
        .into_decoder()
        .map_err(|e| CompressError::decode(path, e))?;

    let orientation = decoder.orientation().unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring unreadable EXIF orientation");
        Orientation::NoTransforms
    });
    Ok((decoder, orientation))
}

/// Load and decode an image from disk into an upright 8-bit raster.
pub fn load_raster(path: &Path) -> Result<Raster, CompressError> {
    let (decoder, orientation) = open_decoder(path)?;
    let mut img =
        DynamicImage::from_decoder(decoder).map_err(|e| CompressError::decode(path, e))?;
    if orientation != Orientation::NoTransforms {
        debug!(path = %path.display(), ?orientation, "applying EXIF orientation");
        img.apply_orientation(orientation);
    }
    Ok(Raster::from_dynamic(img))
}

/// Encode a raster into an in-memory byte stream.
///
/// `quality` only applies to JPEG; the other formats are lossless here.
pub fn encode_raster(
    raster: &Raster,
    format: OutputFormat,
    quality: Quality,
) -> Result<Vec<u8>, String> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut buf, quality.value())
                .write_image(
                    raster.as_raw(),
                    raster.width(),
                    raster.height(),
                    raster.color_type(),
                )
                .map_err(|e| format!("JPEG encode failed: {e}"))?;
        }
        other => {
            image::write_buffer_with_format(
                &mut buf,
                raster.as_raw(),
                raster.width(),
                raster.height(),
                raster.color_type(),
                other.image_format(),
            )
            .map_err(|e| format!("{other:?} encode failed: {e}"))?;
        }
    }

    Ok(buf.into_inner())
}

/// Encode and write to `path` in a single write call.
fn save_raster(raster: &Raster, path: &Path, quality: Quality) -> Result<u64, CompressError> {
    let format = OutputFormat::from_path(path)?;
    let bytes =
        encode_raster(raster, format, quality).map_err(|e| CompressError::encode(path, e))?;
    std::fs::write(path, &bytes).map_err(|e| CompressError::encode(path, e))?;
    Ok(bytes.len() as u64)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, CompressError> {
        if !has_supported_extension(path) {
            warn!(
                path = %path.display(),
                known = ?supported_input_extensions(),
                "unrecognised input extension, detecting format from content"
            );
        }

        let (decoder, orientation) = open_decoder(path)?;
        let (width, height) = decoder.dimensions();
        if swaps_axes(orientation) {
            Ok(Dimensions {
                width: height,
                height: width,
            })
        } else {
            Ok(Dimensions { width, height })
        }
    }

    fn resize(&self, params: &ResizeParams) -> Result<u64, CompressError> {
        let raster = load_raster(&params.source)?;
        debug!(
            source = %params.source.display(),
            width = raster.width(),
            height = raster.height(),
            channels = raster.channels(),
            "decoded"
        );

        let resized = resample_area(raster, params.width, params.height)?;
        let written = save_raster(&resized, &params.output, params.quality)?;
        info!(
            output = %params.output.display(),
            width = params.width,
            height = params.height,
            bytes = written,
            "wrote compressed image"
        );
        Ok(written)
    }
}
