//! Draw adapter seam between the render model and a graphics backend.

use crate::{
    bitmap::{Bitmap, BitmapTransform},
    color::Argb,
    geometry::{Rect, RectF},
};

/// Oval and text primitives a backend provides to the renderers.
pub trait Surface {
    /// Fills the oval inscribed in `bounds`.
    fn fill_oval(&mut self, bounds: RectF, color: Argb);

    /// Strokes the oval inscribed in `bounds`, centered on its edge.
    fn stroke_oval(&mut self, bounds: RectF, stroke_width: f32, color: Argb);

    /// Fills the oval inscribed in `bounds` with `bitmap` placed by
    /// `transform`, clamping samples outside the bitmap to its edges.
    fn fill_oval_with_bitmap(&mut self, bounds: RectF, bitmap: &Bitmap, transform: &BitmapTransform);

    /// Ink bounds of `text` at `size`, relative to a baseline origin at `(0, 0)`.
    fn text_bounds(&self, text: &str, size: f32) -> Rect;

    /// Draws `text` horizontally centered on `center_x` with its baseline on
    /// `baseline_y`.
    fn draw_text_centered(
        &mut self,
        text: &str,
        center_x: f32,
        baseline_y: f32,
        size: f32,
        color: Argb,
    );
}
