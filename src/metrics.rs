// src/metrics.rs

//! Text bounding-box computation.

use crate::font::Font;
use crate::frame::Rect;
use crate::utf8::Codepoints;

/// Compute the bounding box of `text` drawn at origin `(x, y)`, without
/// drawing anything.
///
/// The box is the union of every resolved glyph's raster box, with its left
/// edge clamped to the draw origin. Unresolved codepoints contribute no
/// bounds and no advance, matching the rasterizer's skip policy. Returns
/// `None` when no codepoint resolves (callers must treat the line as
/// invisible rather than sizing a buffer from a degenerate box).
///
/// The vertical origin is fixed for the whole call; multi-line layout is
/// the writer's job, one call per line.
#[must_use]
pub fn text_bounds(font: &Font<'_>, text: &str, x: i32, y: i32) -> Option<Rect> {
    let mut pen = x;
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;

    for codepoint in Codepoints::new(text.as_bytes()) {
        let Some(glyph) = font.glyph(codepoint) else {
            continue;
        };
        let x1 = pen + i32::from(glyph.left);
        let y1 = y + i32::from(glyph.top) - i32::from(glyph.height);
        let x2 = x1 + i32::from(glyph.width);
        let y2 = y1 + i32::from(glyph.height);
        min_x = min_x.min(x1);
        min_y = min_y.min(y1);
        max_x = max_x.max(x2);
        max_y = max_y.max(y2);
        pen += i32::from(glyph.advance_x);
    }

    if max_x == i32::MIN {
        return None;
    }
    let left = x.min(min_x);
    Some(Rect {
        x: left,
        y: min_y,
        width: (max_x - left) as u32,
        height: (max_y - min_y) as u32,
    })
}
