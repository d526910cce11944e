// src/rasterizer.rs

//! Glyph decompression and blitting.
//!
//! Each glyph's raster is stored zlib-compressed in the font's bitmap blob,
//! one byte per pixel. Blitting truncates the 8-bit intensity to 4 bits and
//! merges it into the packed frame, clipping pixels that fall outside the
//! frame.

use std::io::Read;

use flate2::read::ZlibDecoder;
use log::{debug, error};

use crate::error::RenderError;
use crate::font::Font;
use crate::frame::PackedFrame;

/// Inflate `compressed` into exactly `expected` bytes.
///
/// Font assets are validated when they are built, so a stream that fails to
/// inflate or produces the wrong byte count marks the glyph as corrupt and
/// the error propagates; no per-glyph recovery is attempted.
pub fn inflate_exact(compressed: &[u8], expected: usize) -> Result<Vec<u8>, RenderError> {
    let mut raw = Vec::new();
    raw.try_reserve_exact(expected)?;
    let actual = ZlibDecoder::new(compressed).read_to_end(&mut raw)?;
    if actual != expected {
        return Err(RenderError::BitmapSize { expected, actual });
    }
    Ok(raw)
}

/// Draw the glyph for `codepoint` into `frame` at pen position
/// `(*pen_x, pen_y)`, where `pen_y` is the text baseline, then advance
/// `*pen_x` by the glyph's horizontal advance.
///
/// An unresolved codepoint draws nothing and leaves the pen unmoved.
/// Pixels falling outside the frame are silently clipped. A corrupt
/// bitmap propagates as an error with the pen unmoved.
pub fn draw_glyph(
    font: &Font<'_>,
    codepoint: u32,
    frame: &mut PackedFrame,
    pen_x: &mut i32,
    pen_y: i32,
) -> Result<(), RenderError> {
    let Some(glyph) = font.glyph(codepoint) else {
        // TODO: draw a tofu placeholder once the assets carry one.
        debug!("no glyph for U+{codepoint:04X}, skipping");
        return Ok(());
    };

    let width = usize::from(glyph.width);
    let height = usize::from(glyph.height);
    if width * height > 0 {
        let start = glyph.data_offset as usize;
        let end = start + glyph.compressed_size as usize;
        let raw = match inflate_exact(&font.bitmap[start..end], width * height) {
            Ok(raw) => raw,
            Err(err) => {
                error!("corrupt bitmap for U+{codepoint:04X}: {err}");
                return Err(err);
            }
        };

        for (i, &intensity) in raw.iter().enumerate() {
            let xx = *pen_x + i32::from(glyph.left) + (i % width) as i32;
            let yy = pen_y - i32::from(glyph.top) + (i / width) as i32;
            frame.blend_pixel(xx, yy, intensity);
        }
    }

    *pen_x += i32::from(glyph.advance_x);
    Ok(())
}
