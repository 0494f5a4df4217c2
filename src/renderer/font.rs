//! Built-in 5x7 bitmap font
//!
//! Glyphs are column-major, one byte per column, bit 0 at the top row.
//! Each lit run in a column becomes a single quad, so text goes through the
//! same vertex pipeline as everything else.

use glam::Vec2;

use super::shapes::push_rect;
use super::vertex::Vertex;
use crate::palette::Rgba;
use crate::sim::Rect;

pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: u32 = 7;

/// Text sizes as pixel scale factors for one font cell
pub mod size {
    pub const TINY: f32 = 1.4;
    pub const SMALL: f32 = 1.8;
    pub const MEDIUM: f32 = 2.0;
    pub const LARGE: f32 = 3.0;
    pub const XL: f32 = 4.5;
}

/// Typeface variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Proportional spacing
    #[default]
    Regular,
    /// Proportional, strokes doubled one cell to the right
    Bold,
    /// Fixed six-cell advance
    Mono,
}

/// Printable ASCII, 0x20 through 0x7E
const GLYPHS: [[u8; GLYPH_COLUMNS]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

/// Column bitmaps for `c`; anything outside printable ASCII shows as '?'
pub fn glyph(c: char) -> &'static [u8; GLYPH_COLUMNS] {
    let index = (c as u32)
        .checked_sub(0x20)
        .filter(|i| (*i as usize) < GLYPHS.len())
        .unwrap_or('?' as u32 - 0x20);
    &GLYPHS[index as usize]
}

/// Lit column span of a glyph as (first, count). Blank glyphs get a 3-cell gap.
fn ink_span(columns: &[u8; GLYPH_COLUMNS]) -> (usize, usize) {
    let first = columns.iter().position(|c| *c != 0);
    let last = columns.iter().rposition(|c| *c != 0);
    match (first, last) {
        (Some(first), Some(last)) => (first, last - first + 1),
        _ => (0, 3),
    }
}

/// Horizontal advance of one character, in font cells
fn advance(c: char, style: FontStyle) -> usize {
    match style {
        FontStyle::Mono => GLYPH_COLUMNS + 1,
        FontStyle::Regular => ink_span(glyph(c)).1 + 1,
        FontStyle::Bold => ink_span(glyph(c)).1 + 2,
    }
}

/// Rendered width of `text` in pixels
pub fn text_width(text: &str, style: FontStyle, scale: f32) -> f32 {
    let cells: usize = text.chars().map(|c| advance(c, style)).sum();
    // Drop the trailing inter-character gap
    cells.saturating_sub(1) as f32 * scale
}

/// Rendered height of a line in pixels
pub fn text_height(scale: f32) -> f32 {
    GLYPH_ROWS as f32 * scale
}

/// Append quads for `text` with its top-left corner at `pos`
pub fn draw_text(
    out: &mut Vec<Vertex>,
    text: &str,
    pos: Vec2,
    style: FontStyle,
    scale: f32,
    color: Rgba,
) {
    let mut x = pos.x;
    for c in text.chars() {
        let columns = glyph(c);
        let skip = match style {
            FontStyle::Mono => 0,
            FontStyle::Regular | FontStyle::Bold => ink_span(columns).0,
        };
        for (i, bits) in columns.iter().enumerate().skip(skip) {
            let cx = x + (i - skip) as f32 * scale;
            push_column(out, *bits, cx, pos.y, scale, color);
            if style == FontStyle::Bold {
                push_column(out, *bits, cx + scale, pos.y, scale, color);
            }
        }
        x += advance(c, style) as f32 * scale;
    }
}

/// Draw `text` horizontally centred on `center_x`
pub fn draw_text_centered(
    out: &mut Vec<Vertex>,
    text: &str,
    center_x: f32,
    y: f32,
    style: FontStyle,
    scale: f32,
    color: Rgba,
) {
    let x = center_x - text_width(text, style, scale) / 2.0;
    draw_text(out, text, Vec2::new(x, y), style, scale, color);
}

/// One quad per vertical run of lit rows
fn push_column(out: &mut Vec<Vertex>, bits: u8, x: f32, y: f32, scale: f32, color: Rgba) {
    let mut row = 0;
    while row < GLYPH_ROWS {
        if bits & (1 << row) == 0 {
            row += 1;
            continue;
        }
        let start = row;
        while row < GLYPH_ROWS && bits & (1 << row) != 0 {
            row += 1;
        }
        push_rect(
            out,
            Rect::new(
                x,
                y + start as f32 * scale,
                scale,
                (row - start) as f32 * scale,
            ),
            color,
        );
    }
}
