// src/lib.rs

//! # epd-text
//!
//! Unicode text rendering for packed 4-bits-per-pixel e-paper framebuffers.
//!
//! This crate provides functionality for:
//! - Decoding UTF-8 byte sequences into codepoints.
//! - Resolving codepoints to glyph records through a sparse interval table.
//! - Inflating zlib-compressed glyph rasters and blitting them into packed
//!   grayscale buffers (two pixels per byte).
//! - Computing the tight bounding box of a string before drawing it.
//! - Composing multi-line text either into transient per-line buffers
//!   submitted to a display sink, or into a caller-owned framebuffer.
//!
//! The font descriptor is a read-only asset built ahead of time; this crate
//! never parses or mutates font data.

#![warn(missing_docs)]

/// Error taxonomy for rendering operations.
pub mod error;
/// Font descriptor types and codepoint-to-glyph resolution.
pub mod font;
/// Packed 4bpp framebuffer and region geometry.
pub mod frame;
/// Text bounding-box computation.
pub mod metrics;
/// Glyph decompression and blitting.
pub mod rasterizer;
/// UTF-8 codepoint decoding.
pub mod utf8;
/// Line and paragraph composition.
pub mod writer;

pub use error::RenderError;
pub use font::{Font, Glyph, UnicodeInterval};
pub use frame::{merge_pixel, PackedFrame, Rect};
pub use metrics::text_bounds;
pub use rasterizer::{draw_glyph, inflate_exact};
pub use utf8::Codepoints;
pub use writer::{write_line, write_text, Cursor, DrawTarget, Output};
