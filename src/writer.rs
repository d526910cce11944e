// src/writer.rs

//! Line and paragraph composition.
//!
//! Multi-line text is split on `'\n'` and laid out as a left-aligned block:
//! the horizontal cursor resets to the starting column for every line and
//! the vertical cursor advances by the font's fixed line advance after
//! every line, independent of that line's visual height.
//!
//! Each line is rendered either into a transient buffer sized to the line's
//! bounds and handed to a [`DrawTarget`] for refresh, or directly into a
//! caller-owned full-frame buffer.

use log::debug;

use crate::error::RenderError;
use crate::font::Font;
use crate::frame::{PackedFrame, Rect};
use crate::metrics::text_bounds;
use crate::rasterizer::draw_glyph;
use crate::utf8::Codepoints;

/// Pen position carried across write calls, in display coordinates.
/// `y` is the text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Horizontal position.
    pub x: i32,
    /// Baseline vertical position.
    pub y: i32,
}

/// Sink for rendered line regions.
///
/// Implemented by the display subsystem; called once per rendered line with
/// a buffer laid out per the packed two-pixels-per-byte convention of
/// [`PackedFrame`], sized exactly to `area`.
pub trait DrawTarget {
    /// Refresh `area` of the display from `frame`.
    fn draw_region(&mut self, area: Rect, frame: &PackedFrame);
}

/// Where composed text is rendered.
pub enum Output<'a> {
    /// Render each line into a transient minimal buffer and submit it to
    /// the display. The buffer is dropped after submission.
    Display(&'a mut dyn DrawTarget),
    /// Render at the absolute cursor into a caller-owned framebuffer. The
    /// caller flushes the buffer itself; nothing is submitted.
    Frame(&'a mut PackedFrame),
}

/// Render a single line (no `'\n'` handling) at `cursor`.
///
/// The cursor is not mutated; [`write_text`] owns cursor movement.
pub fn write_line(
    font: &Font<'_>,
    line: &str,
    cursor: &Cursor,
    out: &mut Output<'_>,
) -> Result<(), RenderError> {
    match out {
        Output::Frame(frame) => {
            let mut pen_x = cursor.x;
            for codepoint in Codepoints::new(line.as_bytes()) {
                draw_glyph(font, codepoint, frame, &mut pen_x, cursor.y)?;
            }
            Ok(())
        }
        Output::Display(target) => {
            let Some(bounds) = text_bounds(font, line, cursor.x, cursor.y) else {
                debug!("line resolves no glyphs, nothing to submit");
                return Ok(());
            };
            if bounds.width == 0 || bounds.height == 0 {
                debug!("line bounds are empty, nothing to submit");
                return Ok(());
            }

            let mut frame = PackedFrame::new(bounds.width, bounds.height)?;
            let baseline = cursor.y - bounds.y;
            let mut pen_x = 0;
            let pen_y = bounds.height as i32 - baseline;
            for codepoint in Codepoints::new(line.as_bytes()) {
                draw_glyph(font, codepoint, &mut frame, &mut pen_x, pen_y)?;
            }

            let area = Rect {
                x: bounds.x,
                y: cursor.y - bounds.height as i32 + baseline,
                width: bounds.width,
                height: bounds.height,
            };
            target.draw_region(area, &frame);
            Ok(())
        }
    }
}

/// Render `text` at `cursor`, splitting on line breaks.
///
/// Every line starts at the cursor's original column, and `cursor.y`
/// advances by the font's line advance after every line, the last one
/// included. `cursor.x` is left at its starting value.
pub fn write_text(
    font: &Font<'_>,
    text: &str,
    cursor: &mut Cursor,
    out: &mut Output<'_>,
) -> Result<(), RenderError> {
    let start_x = cursor.x;
    for line in text.split('\n') {
        cursor.x = start_x;
        write_line(font, line, cursor, out)?;
        cursor.y += font.advance_y;
    }
    Ok(())
}
