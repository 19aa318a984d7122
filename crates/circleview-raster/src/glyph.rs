//! Scaled 5x7 bitmap font.
//!
//! Each glyph is five column bytes; bit `n` is row `n` counted from the top.
//! Rows 0..7 sit above the baseline, row 7 is the descender row.

use circleview_core::{color::Argb, geometry::Rect};

use crate::FrameBuffer;

pub const GLYPH_COLUMNS: usize = 5;
/// Rows above the baseline.
pub const GLYPH_ROWS: usize = 7;
const DESCENDER_ROWS: usize = 1;
/// Largest pixel scale; larger sizes draw at this scale.
pub const MAX_GLYPH_SCALE: usize = 4096;

/// Pixel scale used to draw glyphs at `size` pixels.
pub fn glyph_scale(size: f32) -> usize {
    if size.is_nan() || size < GLYPH_ROWS as f32 {
        return 1;
    }
    if size >= (MAX_GLYPH_SCALE * GLYPH_ROWS) as f32 {
        return MAX_GLYPH_SCALE;
    }
    (size / GLYPH_ROWS as f32) as usize
}

fn scaled_extent(units: usize, scale: usize) -> i32 {
    i32::try_from(units.saturating_mul(scale)).unwrap_or(i32::MAX)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GlyphMetrics {
    pub(crate) left: usize,
    pub(crate) width: usize,
    pub(crate) advance: usize,
    /// First and last inked rows, `None` for blank glyphs.
    pub(crate) rows: Option<(usize, usize)>,
}

pub(crate) fn glyph_metrics(c: char, glyph: &[u8; GLYPH_COLUMNS]) -> GlyphMetrics {
    if c == ' ' {
        return GlyphMetrics {
            left: 0,
            width: 0,
            advance: 3,
            rows: None,
        };
    }

    let mut left = GLYPH_COLUMNS;
    let mut right = 0usize;
    let mut column_bits = 0u8;

    for (col, bits) in glyph.iter().enumerate() {
        if *bits != 0 {
            left = left.min(col);
            right = right.max(col);
            column_bits |= bits;
        }
    }

    if left > right {
        return GlyphMetrics {
            left: 0,
            width: 1,
            advance: 2,
            rows: None,
        };
    }

    let top = column_bits.trailing_zeros() as usize;
    let bottom = 7 - column_bits.leading_zeros() as usize;
    let width = right - left + 1;

    GlyphMetrics {
        left,
        width,
        advance: width + 1,
        rows: Some((top, bottom)),
    }
}

/// Ink bounds of `text` relative to a baseline origin at `(0, 0)`.
pub(crate) fn text_ink_bounds(text: &str, scale: usize) -> Rect {
    let mut width = 0usize;
    let mut top = usize::MAX;
    let mut bottom = 0usize;

    for (i, c) in text.chars().enumerate() {
        let c = normalize_glyph_char(c);
        let metrics = glyph_metrics(c, &glyph_5x7(c));
        if i > 0 {
            width += 1;
        }
        width += metrics.advance - 1;
        if let Some((first, last)) = metrics.rows {
            top = top.min(first);
            bottom = bottom.max(last);
        }
    }

    if top == usize::MAX {
        return Rect::new(0, 0, scaled_extent(width, scale), 0);
    }

    let s = scale as i32;
    Rect::new(
        0,
        (top as i32 - GLYPH_ROWS as i32) * s,
        scaled_extent(width, scale),
        (bottom as i32 + 1 - GLYPH_ROWS as i32) * s,
    )
}

/// Draws `text` with its ink starting at `x` and its baseline on `baseline`.
pub(crate) fn draw_text(
    frame: &mut FrameBuffer,
    x: i64,
    baseline: i64,
    text: &str,
    scale: usize,
    color: Argb,
) {
    let s = scale as i64;
    let top = baseline - GLYPH_ROWS as i64 * s;
    let mut pen = x;

    for c in text.chars() {
        let c = normalize_glyph_char(c);
        let glyph = glyph_5x7(c);
        let metrics = glyph_metrics(c, &glyph);
        draw_glyph_5x7(frame, pen - metrics.left as i64 * s, top, &glyph, scale, color);
        pen += metrics.advance as i64 * s;
    }
}

fn draw_glyph_5x7(
    frame: &mut FrameBuffer,
    x: i64,
    y: i64,
    glyph: &[u8; GLYPH_COLUMNS],
    scale: usize,
    color: Argb,
) {
    let s = scale as i64;
    let frame_width = frame.width() as i64;
    let frame_height = frame.height() as i64;

    for (col, bits) in glyph.iter().enumerate() {
        for row in 0..GLYPH_ROWS + DESCENDER_ROWS {
            if (bits & (1 << row)) != 0 {
                let base_x = x + col as i64 * s;
                let base_y = y + row as i64 * s;

                // Only the part of the block inside the frame.
                let x0 = base_x.max(0);
                let x1 = (base_x + s).min(frame_width);
                let y0 = base_y.max(0);
                let y1 = (base_y + s).min(frame_height);

                for py in y0..y1 {
                    for px in x0..x1 {
                        frame.blend_pixel(px as usize, py as usize, color);
                    }
                }
            }
        }
    }
}

pub(crate) fn normalize_glyph_char(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'A',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

pub(crate) fn glyph_5x7(c: char) -> [u8; GLYPH_COLUMNS] {
    match c {
        'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
        'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
        'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
        'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
        'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
        'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
        'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
        'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
        'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
        'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
        'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
        'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
        'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
        'W' => [0x7F, 0x20, 0x18, 0x20, 0x7F],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x03, 0x04, 0x78, 0x04, 0x03],
        'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        'a' => [0x20, 0x54, 0x54, 0x54, 0x78],
        'b' => [0x7F, 0x48, 0x44, 0x44, 0x38],
        'c' => [0x38, 0x44, 0x44, 0x44, 0x20],
        'd' => [0x38, 0x44, 0x44, 0x48, 0x7F],
        'e' => [0x38, 0x54, 0x54, 0x54, 0x18],
        'f' => [0x08, 0x7E, 0x09, 0x01, 0x02],
        'g' => [0x08, 0x14, 0x54, 0x54, 0x3C],
        'h' => [0x7F, 0x08, 0x04, 0x04, 0x78],
        'i' => [0x00, 0x44, 0x7D, 0x40, 0x00],
        'j' => [0x20, 0x40, 0x44, 0x3D, 0x00],
        'k' => [0x7F, 0x10, 0x28, 0x44, 0x00],
        'l' => [0x00, 0x41, 0x7F, 0x40, 0x00],
        'm' => [0x7C, 0x04, 0x18, 0x04, 0x78],
        'n' => [0x7C, 0x08, 0x04, 0x04, 0x78],
        'o' => [0x38, 0x44, 0x44, 0x44, 0x38],
        'p' => [0x7C, 0x14, 0x14, 0x14, 0x08],
        'q' => [0x08, 0x14, 0x14, 0x18, 0x7C],
        'r' => [0x7C, 0x08, 0x04, 0x04, 0x08],
        's' => [0x48, 0x54, 0x54, 0x54, 0x20],
        't' => [0x04, 0x3F, 0x44, 0x40, 0x20],
        'u' => [0x3C, 0x40, 0x40, 0x20, 0x7C],
        'v' => [0x1C, 0x20, 0x40, 0x20, 0x1C],
        'w' => [0x3C, 0x40, 0x30, 0x40, 0x3C],
        'x' => [0x44, 0x28, 0x10, 0x28, 0x44],
        'y' => [0x0C, 0x50, 0x50, 0x50, 0x3C],
        'z' => [0x44, 0x64, 0x54, 0x4C, 0x44],
        '0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
        '1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
        '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
        '4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
        '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
        '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
        '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        ',' => [0x00, 0x80, 0x60, 0x00, 0x00],
        '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        '@' => [0x32, 0x49, 0x79, 0x41, 0x3E],
        '#' => [0x14, 0x7F, 0x14, 0x7F, 0x14],
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00],
        // '?' doubles as the fallback for unknown characters.
        _ => [0x02, 0x01, 0x51, 0x09, 0x06],
    }
}
