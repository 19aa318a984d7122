//! Heap-allocated ARGB framebuffer.

use alloc::{vec, vec::Vec};

use circleview_core::color::Argb;

/// ARGB framebuffer, rows top to bottom.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl FrameBuffer {
    /// Creates a transparent framebuffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Argb::TRANSPARENT; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Argb) {
        self.pixels.fill(color);
    }

    /// Overwrites a pixel.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Argb) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        self.pixels[y * self.width + x] = color;
        true
    }

    /// Composites `color` over a pixel (source-over).
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: Argb) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let dst = &mut self.pixels[y * self.width + x];
        *dst = color.over(*dst);
        true
    }

    /// Reads a pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixels[y * self.width + x])
    }

    /// Returns one row of pixels.
    pub fn row(&self, y: usize) -> Option<&[Argb]> {
        if y >= self.height {
            return None;
        }

        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Fills an axis-aligned rectangle, clipped to the framebuffer.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Argb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        for py in y..y_end {
            for px in x..x_end {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Composites `src` with its top-left corner at `(x, y)`, clipped.
    pub fn blit(&mut self, src: &FrameBuffer, x: usize, y: usize) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                self.blend_pixel(x + sx, y + sy, src.pixels[sy * src.width + sx]);
            }
        }
    }

    /// Straight RGBA8 bytes, suitable for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            out.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = FrameBuffer::new(4, 3);

        assert!(!fb.set_pixel(4, 0, Argb::WHITE));
        assert!(!fb.set_pixel(0, 3, Argb::WHITE));
        assert!(!fb.blend_pixel(4, 0, Argb::WHITE));
        assert!(fb.pixels().iter().all(|p| *p == Argb::TRANSPARENT));
    }

    #[test]
    fn set_and_read_last_pixel() {
        let mut fb = FrameBuffer::new(4, 3);

        assert!(fb.set_pixel(3, 2, Argb::WHITE));
        assert_eq!(fb.pixel(3, 2), Some(Argb::WHITE));
        assert_eq!(fb.pixel(4, 3), None);
        assert_eq!(fb.row(2).map(|r| r[3]), Some(Argb::WHITE));
        assert_eq!(fb.row(3), None);
    }

    #[test]
    fn blend_composites_over_existing_pixel() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.clear(Argb::WHITE);

        assert!(fb.blend_pixel(0, 0, Argb::new(0x80, 0, 0, 0)));
        assert_eq!(fb.pixel(0, 0), Some(Argb(0xFF7F_7F7F)));
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_rect(2, 2, 10, 10, Argb::BLACK);

        assert_eq!(fb.pixel(1, 1), Some(Argb::TRANSPARENT));
        assert_eq!(fb.pixel(3, 3), Some(Argb::BLACK));
    }

    #[test]
    fn blit_composites_at_offset_and_clips() {
        let mut src = FrameBuffer::new(2, 2);
        src.set_pixel(0, 0, Argb::BLACK);
        src.set_pixel(1, 1, Argb::BLACK);

        let mut fb = FrameBuffer::new(3, 3);
        fb.clear(Argb::WHITE);
        fb.blit(&src, 2, 1);

        assert_eq!(fb.pixel(2, 1), Some(Argb::BLACK));
        assert_eq!(fb.pixel(2, 2), Some(Argb::WHITE));
        assert_eq!(fb.pixel(1, 1), Some(Argb::WHITE));
    }

    #[test]
    fn rgba_bytes_reorder_channels() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.set_pixel(0, 0, Argb(0x8011_2233));
        assert_eq!(fb.to_rgba8(), [0x11, 0x22, 0x33, 0x80]);
    }
}
