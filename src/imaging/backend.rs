//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize (decode → resample → encode → write).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure-Rust codecs.

use super::params::ResizeParams;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// One error kind per failure cause. None of them are retried.
#[derive(Error, Debug)]
pub enum CompressError {
    #[error("could not read {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("could not write {path}: {reason}")]
    Encode { path: String, reason: String },
}

impl CompressError {
    pub(crate) fn decode(path: &Path, reason: impl ToString) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encode(path: &Path, reason: impl ToString) -> Self {
        Self::Encode {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// The single human-readable message shown to the user.
    pub fn user_message(&self) -> String {
        format!("Failed to compress image: {self}")
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Trait for image processing backends.
///
/// `Sync` so one backend can serve independent jobs from several threads.
pub trait ImageBackend: Sync {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, CompressError>;

    /// Decode `params.source`, resample to `params.width`×`params.height`,
    /// encode and write to `params.output`. Returns the number of bytes written.
    fn resize(&self, params: &ResizeParams) -> Result<u64, CompressError>;
}
