//! Owned bitmaps, drawable rasterization and the bitmap-to-circle transform.

use alloc::{vec, vec::Vec};

use crate::{color::Argb, geometry::CircleBounds};

/// Owned ARGB pixel buffer, rows top to bottom.
///
/// A `0x0` bitmap stands for "no image": renderers skip it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl Bitmap {
    /// The empty `0x0` bitmap.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Creates a bitmap filled with one color.
    pub fn filled(width: u32, height: u32, color: Argb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wraps existing pixels.
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Argb>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Sets a pixel.
    ///
    /// Returns `true` when the pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Argb) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        self.pixels[y as usize * self.width as usize + x as usize] = color;
        true
    }

    /// Reads a pixel with coordinates clamped to the nearest edge.
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Argb {
        if self.is_empty() {
            return Argb::TRANSPARENT;
        }

        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }
}

/// Non-bitmap image source that can paint itself into a bitmap.
pub trait Drawable {
    /// Natural size in pixels, if the drawable has one.
    fn intrinsic_size(&self) -> Option<(u32, u32)>;

    /// Paints into `target`, which is sized to the intrinsic size.
    fn draw(&self, target: &mut Bitmap);
}

/// Rasterizes `drawable` at its intrinsic size.
///
/// Drawables without an intrinsic size produce the empty bitmap.
pub fn rasterize(drawable: &dyn Drawable) -> Bitmap {
    let Some((width, height)) = drawable.intrinsic_size() else {
        return Bitmap::empty();
    };

    let mut bitmap = Bitmap::filled(width, height, Argb::TRANSPARENT);
    if !bitmap.is_empty() {
        drawable.draw(&mut bitmap);
    }
    bitmap
}

/// Resolves resource ids and URIs into bitmaps on behalf of the host.
pub trait ImageResolver {
    fn resolve_resource(&mut self, id: u32) -> Option<Bitmap>;
    fn resolve_uri(&mut self, uri: &str) -> Option<Bitmap>;
}

/// Uniform scale followed by translation, from bitmap pixels to view space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BitmapTransform {
    pub scale: f32,
    pub dx: f32,
    pub dy: f32,
}

impl BitmapTransform {
    /// Fits a `width x height` bitmap to `bounds`, keeping the aspect ratio.
    ///
    /// Portrait bitmaps fill the circle horizontally and are centered
    /// vertically; landscape and square bitmaps fill it vertically and are
    /// centered horizontally. The overflowing axis is left to the oval clip.
    /// Returns `None` for an empty bitmap.
    pub fn fit(width: u32, height: u32, bounds: &CircleBounds) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let rect = bounds.rect();
        let (w, h) = (width as f32, height as f32);

        let transform = if width < height {
            let scale = rect.width() / w;
            Self {
                scale,
                dx: rect.left,
                dy: rect.top - h * scale / 2.0 + rect.width() / 2.0,
            }
        } else {
            let scale = rect.height() / h;
            Self {
                scale,
                dx: rect.left - w * scale / 2.0 + rect.width() / 2.0,
                dy: rect.top,
            }
        };

        Some(transform)
    }

    /// Maps a bitmap-space point into view space.
    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale + self.dx, y * self.scale + self.dy)
    }

    /// Maps a view-space point back into bitmap space.
    ///
    /// Returns `None` when the scale is degenerate.
    pub fn invert_point(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.scale == 0.0 {
            return None;
        }

        Some(((x - self.dx) / self.scale, (y - self.dy) / self.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Padding, ViewGeometry, compute_circle_bounds};

    struct Checker {
        size: Option<(u32, u32)>,
    }

    impl Drawable for Checker {
        fn intrinsic_size(&self) -> Option<(u32, u32)> {
            self.size
        }

        fn draw(&self, target: &mut Bitmap) {
            for y in 0..target.height() {
                for x in 0..target.width() {
                    let color = if (x + y) % 2 == 0 {
                        Argb::BLACK
                    } else {
                        Argb::WHITE
                    };
                    target.set_pixel(x, y, color);
                }
            }
        }
    }

    fn bounds_100() -> CircleBounds {
        compute_circle_bounds(&ViewGeometry::new(100, 100))
    }

    #[test]
    fn portrait_bitmap_fills_width_and_centers_vertically() {
        let t = BitmapTransform::fit(50, 100, &bounds_100()).unwrap();

        assert_eq!(t.scale, 2.0);
        assert_eq!(t.dx, 0.0);
        assert_eq!(t.dy, -50.0);
        // Bitmap vertical middle lands on the circle center.
        assert_eq!(t.map_point(25.0, 50.0), (50.0, 50.0));
    }

    #[test]
    fn landscape_bitmap_fills_height_and_centers_horizontally() {
        let t = BitmapTransform::fit(200, 50, &bounds_100()).unwrap();

        assert_eq!(t.scale, 2.0);
        assert_eq!(t.dx, -150.0);
        assert_eq!(t.dy, 0.0);
        assert_eq!(t.map_point(100.0, 25.0), (50.0, 50.0));
    }

    #[test]
    fn square_bitmap_maps_onto_bounds() {
        let geometry = ViewGeometry::new(120, 100).with_padding(Padding::new(10, 0, 10, 0));
        let bounds = compute_circle_bounds(&geometry);
        let t = BitmapTransform::fit(25, 25, &bounds).unwrap();

        assert_eq!(t.scale, 4.0);
        assert_eq!(t.map_point(0.0, 0.0), (10.0, 0.0));
        assert_eq!(t.map_point(25.0, 25.0), (110.0, 100.0));
    }

    #[test]
    fn empty_bitmap_has_no_transform() {
        assert_eq!(BitmapTransform::fit(0, 10, &bounds_100()), None);
        assert_eq!(BitmapTransform::fit(10, 0, &bounds_100()), None);
    }

    #[test]
    fn invert_point_undoes_map_point() {
        let t = BitmapTransform::fit(50, 100, &bounds_100()).unwrap();
        assert_eq!(t.invert_point(50.0, 50.0), Some((25.0, 50.0)));
    }

    #[test]
    fn drawable_rasterizes_at_intrinsic_size() {
        let bitmap = rasterize(&Checker { size: Some((3, 2)) });

        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert_eq!(bitmap.pixel(0, 0), Some(Argb::BLACK));
        assert_eq!(bitmap.pixel(1, 0), Some(Argb::WHITE));
        assert_eq!(bitmap.pixel(3, 0), None);
    }

    #[test]
    fn drawable_without_intrinsic_size_is_empty() {
        assert!(rasterize(&Checker { size: None }).is_empty());
        assert!(rasterize(&Checker { size: Some((0, 4)) }).is_empty());
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![Argb::WHITE; 3]).is_none());
        assert!(Bitmap::from_pixels(2, 2, vec![Argb::WHITE; 4]).is_some());
    }

    #[test]
    fn clamped_reads_stick_to_edges() {
        let mut bitmap = Bitmap::filled(2, 2, Argb::BLACK);
        bitmap.set_pixel(1, 1, Argb::WHITE);

        assert_eq!(bitmap.pixel_clamped(-5, -5), Argb::BLACK);
        assert_eq!(bitmap.pixel_clamped(10, 10), Argb::WHITE);
        assert_eq!(Bitmap::empty().pixel_clamped(0, 0), Argb::TRANSPARENT);
    }
}
