//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a validated request, compute the target size, and call the backend.

use super::backend::{CompressError, Dimensions, ImageBackend};
use super::calculations::{fit_within, scale_factor};
use super::params::{CompressRequest, ResizeParams};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, CompressError>;

/// What a compression did, for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub original: Dimensions,
    pub resized: Dimensions,
    pub scale: f64,
    pub quality: u8,
    /// Size of the written file. `None` for a dry run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_written: Option<u64>,
}

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Plan a compression without executing it.
///
/// Fails with `InvalidInput` when the original has a zero dimension.
pub fn plan_compression(request: &CompressRequest, original: (u32, u32)) -> Result<ResizeParams> {
    let (width, height) = fit_within(original, request.max_size.as_tuple()).ok_or_else(|| {
        CompressError::InvalidInput(format!(
            "image has degenerate dimensions {}x{}",
            original.0, original.1
        ))
    })?;

    Ok(ResizeParams {
        source: request.source.clone(),
        output: request.output.clone(),
        width,
        height,
        quality: request.quality,
    })
}

/// Identify the source and plan the resize, without writing anything.
pub fn preview_compression(
    backend: &impl ImageBackend,
    request: &CompressRequest,
) -> Result<CompressReport> {
    let original = get_dimensions(backend, &request.source)?;
    let params = plan_compression(request, original)?;
    Ok(report(request, original, &params, None))
}

/// Compress one image: fit it inside the bounding box and re-encode.
///
/// Writes exactly one file on success. Nothing is retried or cleaned up on
/// failure.
pub fn compress_image(
    backend: &impl ImageBackend,
    request: &CompressRequest,
) -> Result<CompressReport> {
    let original = get_dimensions(backend, &request.source)?;
    let params = plan_compression(request, original)?;
    debug!(
        source = %request.source.display(),
        original_width = original.0,
        original_height = original.1,
        width = params.width,
        height = params.height,
        quality = params.quality.value(),
        "planned resize"
    );

    let written = backend.resize(&params)?;
    Ok(report(request, original, &params, Some(written)))
}

fn report(
    request: &CompressRequest,
    original: (u32, u32),
    params: &ResizeParams,
    bytes_written: Option<u64>,
) -> CompressReport {
    CompressReport {
        source: request.source.clone(),
        output: request.output.clone(),
        original: original.into(),
        resized: (params.width, params.height).into(),
        scale: scale_factor(original, request.max_size.as_tuple()),
        quality: params.quality.value(),
        bytes_written,
    }
}
