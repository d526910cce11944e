// src/font.rs

//! Font descriptor types and codepoint-to-glyph resolution.
//!
//! A [`Font`] borrows pre-built, read-only asset tables: one glyph record
//! per supported codepoint, a sorted table of codepoint intervals mapping
//! ranges onto contiguous runs of glyph records, and a single blob holding
//! every glyph's zlib-compressed raster.

/// Metrics and bitmap location for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Raster width in pixels.
    pub width: u16,
    /// Raster height in pixels.
    pub height: u16,
    /// Horizontal offset from the cursor to the raster's left edge.
    pub left: i16,
    /// Vertical offset from the baseline up to the raster's top edge.
    pub top: i16,
    /// Horizontal cursor advance after drawing this glyph.
    pub advance_x: u16,
    /// Offset of the compressed raster within the font's bitmap blob.
    pub data_offset: u32,
    /// Length of the compressed raster in bytes. `width * height` raw
    /// bytes inflate from exactly this many compressed bytes.
    pub compressed_size: u32,
}

/// An inclusive codepoint range mapped onto contiguous glyph records.
///
/// `offset` indexes the glyph for `first`; each following codepoint in the
/// range maps to the next glyph record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeInterval {
    /// First codepoint of the range.
    pub first: u32,
    /// Last codepoint of the range, inclusive. `first <= last`.
    pub last: u32,
    /// Glyph index of `first`.
    pub offset: u32,
}

/// A read-only font asset.
///
/// Intervals are sorted ascending and non-overlapping. The descriptor is
/// plain shared-borrow data with no interior mutability and can be handed
/// around freely.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    /// Glyph records, ordered to match the interval table.
    pub glyphs: &'a [Glyph],
    /// Sorted codepoint interval table.
    pub intervals: &'a [UnicodeInterval],
    /// Concatenated compressed rasters of every glyph.
    pub bitmap: &'a [u8],
    /// Baseline-to-baseline line advance in pixels.
    pub advance_y: i32,
}

impl<'a> Font<'a> {
    /// Resolve `codepoint` to its glyph record, or `None` if no interval
    /// covers it.
    ///
    /// The interval table is sorted ascending, so the scan stops as soon as
    /// `codepoint` falls below the current interval's start.
    #[must_use]
    pub fn glyph(&self, codepoint: u32) -> Option<&'a Glyph> {
        for interval in self.intervals {
            if codepoint >= interval.first && codepoint <= interval.last {
                let index = interval.offset + (codepoint - interval.first);
                return Some(&self.glyphs[index as usize]);
            }
            if codepoint < interval.first {
                return None;
            }
        }
        None
    }
}
