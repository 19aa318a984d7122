//! `Surface` implementation for the software framebuffer.

use circleview_core::{
    bitmap::{Bitmap, BitmapTransform},
    color::Argb,
    geometry::{Rect, RectF},
    surface::Surface,
};
use log::trace;

use crate::{
    FrameBuffer,
    glyph::{draw_text, glyph_scale, text_ink_bounds},
};

/// Axis-aligned ellipse inscribed in a rectangle.
#[derive(Clone, Copy, Debug)]
struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    fn inscribed(bounds: RectF) -> Option<Self> {
        let rx = bounds.width() * 0.5;
        let ry = bounds.height() * 0.5;
        if !(rx > 0.0 && ry > 0.0) {
            return None;
        }

        Some(Self {
            cx: bounds.center_x(),
            cy: bounds.center_y(),
            rx,
            ry,
        })
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let nx = (x - self.cx) / self.rx;
        let ny = (y - self.cy) / self.ry;
        nx * nx + ny * ny <= 1.0
    }
}

fn floor_i64(v: f32) -> i64 {
    let t = v as i64;
    if (t as f32) > v { t - 1 } else { t }
}

fn ceil_i64(v: f32) -> i64 {
    let t = v as i64;
    if (t as f32) < v { t + 1 } else { t }
}

fn round_i64(v: f32) -> i64 {
    floor_i64(v + 0.5)
}

impl FrameBuffer {
    /// Visits every pixel whose center lies in the oval inscribed in `bounds`.
    fn for_each_oval_pixel(&mut self, bounds: RectF, mut visit: impl FnMut(&mut Self, usize, usize)) {
        let Some(ellipse) = Ellipse::inscribed(bounds) else {
            return;
        };

        let x_start = floor_i64(bounds.left).max(0) as usize;
        let y_start = floor_i64(bounds.top).max(0) as usize;
        let x_end = ceil_i64(bounds.right).clamp(0, self.width() as i64) as usize;
        let y_end = ceil_i64(bounds.bottom).clamp(0, self.height() as i64) as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                if ellipse.contains(x as f32 + 0.5, y as f32 + 0.5) {
                    visit(self, x, y);
                }
            }
        }
    }
}

/// Text uses the 5x7 font, which covers ASCII. Accented Latin letters fold
/// to their base letter; other characters (Cyrillic, CJK) draw as `'?'`.
impl Surface for FrameBuffer {
    fn fill_oval(&mut self, bounds: RectF, color: Argb) {
        self.for_each_oval_pixel(bounds, |fb, x, y| {
            fb.blend_pixel(x, y, color);
        });
    }

    fn stroke_oval(&mut self, bounds: RectF, stroke_width: f32, color: Argb) {
        if stroke_width <= 0.0 {
            return;
        }

        let half = stroke_width * 0.5;
        let inner = Ellipse::inscribed(bounds.inset(half, half));
        self.for_each_oval_pixel(bounds.inset(-half, -half), |fb, x, y| {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            if inner.is_none_or(|inner| !inner.contains(px, py)) {
                fb.blend_pixel(x, y, color);
            }
        });
    }

    fn fill_oval_with_bitmap(&mut self, bounds: RectF, bitmap: &Bitmap, transform: &BitmapTransform) {
        if bitmap.is_empty() {
            return;
        }

        trace!(
            "raster: bitmap {}x{} into oval {:?}",
            bitmap.width(),
            bitmap.height(),
            bounds
        );
        self.for_each_oval_pixel(bounds, |fb, x, y| {
            let Some((sx, sy)) = transform.invert_point(x as f32 + 0.5, y as f32 + 0.5) else {
                return;
            };
            let color = bitmap.pixel_clamped(floor_i64(sx), floor_i64(sy));
            fb.blend_pixel(x, y, color);
        });
    }

    fn text_bounds(&self, text: &str, size: f32) -> Rect {
        text_ink_bounds(text, glyph_scale(size))
    }

    fn draw_text_centered(
        &mut self,
        text: &str,
        center_x: f32,
        baseline_y: f32,
        size: f32,
        color: Argb,
    ) {
        let scale = glyph_scale(size);
        let ink = text_ink_bounds(text, scale);
        let x = round_i64(center_x - ink.width() as f32 * 0.5);
        draw_text(self, x, round_i64(baseline_y), text, scale, color);
    }
}
