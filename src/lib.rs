//! # Image Compressor
//!
//! Shrinks an image to fit a bounding box and re-encodes it at a chosen JPEG
//! quality. Give it a source file, a destination, a quality and a maximum
//! width/height; it writes one resized, recompressed copy.
//!
//! # The Transform
//!
//! ```text
//! decode    source file  →  upright raster     (image crate, EXIF orientation)
//! plan      WxH, max box →  uniform scale ≤ 1  (calculations)
//! resample  raster       →  smaller raster     (fast_image_resize box filter)
//! encode    raster       →  JPEG bytes → file  (quality 1-100)
//! ```
//!
//! The scale is `min(max_w / w, max_h / h, 1.0)` applied to both axes, so the
//! aspect ratio is kept and images are never enlarged. New dimensions are
//! truncated, never rounded up past the bounding box.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | The transform: parameters, dimension math, resampler, backend, errors |
//! | [`config`] | Optional `image-compressor.toml` defaults, layered under CLI flags |
//! | [`output`] | Success / error message formatting for the command-line shell |
//!
//! # Design Decisions
//!
//! ## Area Averaging
//!
//! The resampler runs a box convolution stretched to the resize ratio, so
//! each destination pixel averages the source pixels under its footprint.
//! For shrinking photos this avoids the moiré and shimmering that
//! point-sampling filters produce, at the cost of some softness.
//!
//! ## Quality Is Validated, Not Clamped
//!
//! A quality outside 1–100 is an `InvalidInput` error rather than being
//! silently clamped, so a mistyped value never produces an unexpected file.
//!
//! ## One Error Per Cause
//!
//! [`imaging::CompressError`] has exactly three variants: `Decode` (input
//! missing, unreadable or not an image), `InvalidInput` (bad parameters or
//! degenerate dimensions) and `Encode` (unsupported output extension or write
//! failure). The shell turns any of them into a single message.
//!
//! ## Stateless
//!
//! Every call is independent. There is no global state, no cache, and no
//! retry; concurrent calls on distinct paths are safe.

pub mod config;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
