// src/error.rs

//! Rendering error types.
//!
//! Contract violations (an invalid UTF-8 lead byte, a mismatched buffer
//! length) panic rather than returning an error; `RenderError` covers the
//! conditions a caller can meaningfully react to.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Errors surfaced by glyph rasterization and line composition.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The compressed glyph bitmap could not be inflated.
    #[error("failed to inflate glyph bitmap: {0}")]
    Inflate(#[from] io::Error),

    /// The glyph bitmap inflated to the wrong number of bytes.
    #[error("glyph bitmap inflated to {actual} bytes, expected {expected}")]
    BitmapSize {
        /// `width * height` of the glyph record.
        expected: usize,
        /// Bytes actually produced by the decompressor.
        actual: usize,
    },

    /// A transient buffer could not be allocated.
    #[error("buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
