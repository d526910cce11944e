#![allow(dead_code)]

use std::io::Write;

use epd_text::{DrawTarget, Font, Glyph, PackedFrame, Rect, UnicodeInterval};
use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Owns the tables a `Font` borrows.
pub struct FontFixture {
    glyphs: Vec<Glyph>,
    intervals: Vec<UnicodeInterval>,
    bitmap: Vec<u8>,
    advance_y: i32,
}

impl FontFixture {
    pub fn font(&self) -> Font<'_> {
        Font {
            glyphs: &self.glyphs,
            intervals: &self.intervals,
            bitmap: &self.bitmap,
            advance_y: self.advance_y,
        }
    }
}

/// Metrics and raster fill for one fixture glyph.
#[derive(Clone, Copy)]
pub struct GlyphSpec {
    pub width: u16,
    pub height: u16,
    pub left: i16,
    pub top: i16,
    pub advance_x: u16,
    pub fill: u8,
}

pub fn compress(raw: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw).unwrap();
    encoder.finish().unwrap()
}

/// Build a font whose glyphs cover `first..first + specs.len()` in one
/// interval, each raster filled with its spec's intensity.
pub fn build_font(first: u32, specs: &[GlyphSpec], advance_y: i32) -> FontFixture {
    let mut glyphs = Vec::new();
    let mut bitmap = Vec::new();
    for spec in specs {
        let raw = vec![spec.fill; usize::from(spec.width) * usize::from(spec.height)];
        let compressed = compress(&raw);
        glyphs.push(Glyph {
            width: spec.width,
            height: spec.height,
            left: spec.left,
            top: spec.top,
            advance_x: spec.advance_x,
            data_offset: bitmap.len() as u32,
            compressed_size: compressed.len() as u32,
        });
        bitmap.extend_from_slice(&compressed);
    }
    let last = first + specs.len() as u32 - 1;
    FontFixture {
        glyphs,
        intervals: vec![UnicodeInterval { first, last, offset: 0 }],
        bitmap,
        advance_y,
    }
}

/// A font covering A-Z: solid-black 8x8 rasters sitting on the baseline
/// (`top == height`), advance 10, line advance 12.
pub fn caps_font() -> FontFixture {
    let spec = GlyphSpec {
        width: 8,
        height: 8,
        left: 0,
        top: 8,
        advance_x: 10,
        fill: 0x00,
    };
    build_font(65, &[spec; 26], 12)
}

/// A draw sink that records every submitted region.
#[derive(Default)]
pub struct RecordingTarget {
    pub regions: Vec<SubmittedRegion>,
}

pub struct SubmittedRegion {
    pub area: Rect,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DrawTarget for RecordingTarget {
    fn draw_region(&mut self, area: Rect, frame: &PackedFrame) {
        self.regions.push(SubmittedRegion {
            area,
            bytes: frame.as_bytes().to_vec(),
            width: frame.width(),
            height: frame.height(),
        });
    }
}
