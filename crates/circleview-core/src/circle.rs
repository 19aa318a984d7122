//! Circular image renderer: oval-clipped bitmap, stroke ring, press highlight.

use log::{debug, trace};

use crate::{
    attributes::CircleAttributes,
    bitmap::{Bitmap, BitmapTransform, Drawable, ImageResolver, rasterize},
    color::Argb,
    geometry::{CircleBounds, Rect, RectF, ViewGeometry, compute_circle_bounds},
    surface::Surface,
    touch::{TouchEvent, TouchPhase, TouchResult},
};

/// Render model of the circular image widget.
#[derive(Clone, Debug)]
pub struct CircleImageRenderer {
    stroke_color: Argb,
    stroke_width: f32,
    highlight_enable: bool,
    highlight_color: Argb,
    geometry: ViewGeometry,
    circle_bounds: CircleBounds,
    stroke_bounds: RectF,
    bitmap: Bitmap,
    transform: Option<BitmapTransform>,
    pressed: bool,
    pending_redraw: bool,
}

impl Default for CircleImageRenderer {
    fn default() -> Self {
        Self::from_attributes(&CircleAttributes::default())
    }
}

impl CircleImageRenderer {
    pub fn from_attributes(attributes: &CircleAttributes) -> Self {
        Self {
            stroke_color: attributes.stroke_color,
            stroke_width: attributes.stroke_width,
            highlight_enable: attributes.highlight_enable,
            highlight_color: attributes.highlight_color,
            geometry: ViewGeometry::default(),
            circle_bounds: CircleBounds::EMPTY,
            stroke_bounds: RectF::EMPTY,
            bitmap: Bitmap::empty(),
            transform: None,
            pressed: false,
            pending_redraw: true,
        }
    }

    pub fn set_image_bitmap(&mut self, bitmap: Option<Bitmap>) {
        let bitmap = bitmap.unwrap_or_else(|| {
            debug!("circle: no bitmap supplied, clearing image");
            Bitmap::empty()
        });
        self.setup_bitmap(bitmap);
    }

    pub fn set_image_drawable(&mut self, drawable: Option<&dyn Drawable>) {
        let bitmap = match drawable {
            Some(drawable) => rasterize(drawable),
            None => {
                debug!("circle: no drawable supplied, clearing image");
                Bitmap::empty()
            }
        };
        self.setup_bitmap(bitmap);
    }

    pub fn set_image_resource<R: ImageResolver>(&mut self, id: u32, resolver: &mut R) {
        let bitmap = resolver.resolve_resource(id).unwrap_or_else(|| {
            debug!("circle: resource {id} unresolved, clearing image");
            Bitmap::empty()
        });
        self.setup_bitmap(bitmap);
    }

    pub fn set_image_uri<R: ImageResolver>(&mut self, uri: &str, resolver: &mut R) {
        let bitmap = resolver.resolve_uri(uri).unwrap_or_else(|| {
            debug!("circle: uri {uri} unresolved, clearing image");
            Bitmap::empty()
        });
        self.setup_bitmap(bitmap);
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn bitmap_transform(&self) -> Option<BitmapTransform> {
        self.transform
    }

    pub fn set_stroke(&mut self, color: Argb, width: f32) {
        self.stroke_color = color;
        self.set_stroke_width(width);
    }

    pub fn stroke_color(&self) -> Argb {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Argb) {
        self.stroke_color = color;
        self.invalidate();
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
        self.stroke_bounds = self.circle_bounds.stroke_bounds(width);
        self.invalidate();
    }

    pub fn set_highlight(&mut self, enable: bool, color: Argb) {
        self.highlight_enable = enable;
        self.highlight_color = color;
        self.invalidate();
    }

    pub fn is_highlight_enabled(&self) -> bool {
        self.highlight_enable
    }

    pub fn set_highlight_enabled(&mut self, enable: bool) {
        self.highlight_enable = enable;
        self.invalidate();
    }

    pub fn highlight_color(&self) -> Argb {
        self.highlight_color
    }

    pub fn set_highlight_color(&mut self, color: Argb) {
        self.highlight_color = color;
        self.invalidate();
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.geometry
    }

    pub fn circle_bounds(&self) -> CircleBounds {
        self.circle_bounds
    }

    pub fn stroke_bounds(&self) -> RectF {
        self.stroke_bounds
    }

    /// Oval outline for host shadows, from the stroke bounds.
    pub fn outline(&self) -> Rect {
        self.stroke_bounds.truncate()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Recomputes every derived bound after a size or padding change.
    pub fn on_resize(&mut self, geometry: ViewGeometry) {
        self.geometry = geometry;
        self.circle_bounds = compute_circle_bounds(&geometry);
        self.stroke_bounds = self.circle_bounds.stroke_bounds(self.stroke_width);
        self.update_bitmap_transform();
        self.invalidate();
    }

    /// Tracks the pressed state.
    ///
    /// A press outside the circle is ignored. A release or cancel always
    /// clears the pressed state but only reports `Handled` when it lands
    /// inside the circle, so the parent still sees releases that slid out.
    pub fn on_touch(&mut self, event: TouchEvent) -> TouchResult {
        let inside = self.circle_bounds.contains(event.x, event.y);

        match event.phase {
            TouchPhase::Down => {
                if !inside {
                    return TouchResult::NotHandled;
                }
                self.pressed = true;
                self.invalidate();
                TouchResult::Handled
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                self.pressed = false;
                self.invalidate();
                if inside {
                    TouchResult::Handled
                } else {
                    TouchResult::NotHandled
                }
            }
            TouchPhase::Move => TouchResult::NotHandled,
        }
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.pending_redraw)
    }

    pub fn redraw_requested(&self) -> bool {
        self.pending_redraw
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        self.draw_bitmap(surface);
        self.draw_stroke(surface);
        self.draw_highlight(surface);
    }

    pub(crate) fn draw_bitmap<S: Surface>(&self, surface: &mut S) {
        if let Some(transform) = &self.transform {
            surface.fill_oval_with_bitmap(self.circle_bounds.rect(), &self.bitmap, transform);
        }
    }

    pub(crate) fn draw_stroke<S: Surface>(&self, surface: &mut S) {
        if self.stroke_width > 0.0 {
            surface.stroke_oval(self.stroke_bounds, self.stroke_width, self.stroke_color);
        }
    }

    pub(crate) fn draw_highlight<S: Surface>(&self, surface: &mut S) {
        if self.highlight_enable && self.pressed {
            surface.fill_oval(self.circle_bounds.rect(), self.highlight_color);
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.pending_redraw = true;
    }

    fn setup_bitmap(&mut self, bitmap: Bitmap) {
        self.bitmap = bitmap;
        self.update_bitmap_transform();
        self.invalidate();
    }

    fn update_bitmap_transform(&mut self) {
        self.transform =
            BitmapTransform::fit(self.bitmap.width(), self.bitmap.height(), &self.circle_bounds);
        trace!(
            "circle: bitmap {}x{} transform={:?}",
            self.bitmap.width(),
            self.bitmap.height(),
            self.transform
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{DrawOp, RecordingSurface};

    struct MapResolver;

    impl ImageResolver for MapResolver {
        fn resolve_resource(&mut self, id: u32) -> Option<Bitmap> {
            (id == 7).then(|| Bitmap::filled(4, 8, Argb::BLACK))
        }

        fn resolve_uri(&mut self, uri: &str) -> Option<Bitmap> {
            (uri == "file:///avatar.png").then(|| Bitmap::filled(8, 4, Argb::WHITE))
        }
    }

    struct Sizeless;

    impl Drawable for Sizeless {
        fn intrinsic_size(&self) -> Option<(u32, u32)> {
            None
        }

        fn draw(&self, _target: &mut Bitmap) {}
    }

    fn sized(width: i32, height: i32) -> CircleImageRenderer {
        let mut renderer = CircleImageRenderer::default();
        renderer.on_resize(ViewGeometry::new(width, height));
        renderer
    }

    #[test]
    fn resize_recomputes_all_bounds() {
        let mut renderer = CircleImageRenderer::from_attributes(
            &CircleAttributes::default().with_stroke(Argb::BLACK, 4.0),
        );
        renderer.set_image_bitmap(Some(Bitmap::filled(50, 100, Argb::BLACK)));
        renderer.on_resize(ViewGeometry::new(100, 100));

        assert_eq!(renderer.circle_bounds().rect(), RectF::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(renderer.stroke_bounds(), RectF::new(2.0, 2.0, 98.0, 98.0));
        assert_eq!(
            renderer.bitmap_transform(),
            Some(BitmapTransform {
                scale: 2.0,
                dx: 0.0,
                dy: -50.0
            })
        );
    }

    #[test]
    fn stroke_width_change_moves_stroke_bounds() {
        let mut renderer = sized(100, 100);
        renderer.set_stroke(Argb::BLACK, 10.0);
        assert_eq!(renderer.stroke_bounds(), RectF::new(5.0, 5.0, 95.0, 95.0));
        assert_eq!(renderer.outline(), Rect::new(5, 5, 95, 95));
    }

    #[test]
    fn render_order_is_bitmap_stroke_highlight() {
        let mut renderer = sized(100, 100);
        renderer.set_image_bitmap(Some(Bitmap::filled(10, 10, Argb::BLACK)));
        renderer.set_stroke(Argb::WHITE, 2.0);
        renderer.on_touch(TouchEvent::down(50.0, 50.0));

        let mut surface = RecordingSurface::default();
        renderer.render(&mut surface);

        assert_eq!(
            surface.ops,
            vec![
                DrawOp::Bitmap {
                    bounds: RectF::new(0.0, 0.0, 100.0, 100.0),
                    scale: 10.0,
                },
                DrawOp::StrokeOval {
                    bounds: RectF::new(1.0, 1.0, 99.0, 99.0),
                    width: 2.0,
                    color: Argb::WHITE,
                },
                DrawOp::FillOval {
                    bounds: RectF::new(0.0, 0.0, 100.0, 100.0),
                    color: Argb(0x3200_0000),
                },
            ]
        );
    }

    #[test]
    fn non_positive_stroke_draws_nothing() {
        for width in [0.0, -3.0] {
            let mut renderer = sized(100, 100);
            renderer.set_stroke(Argb::BLACK, width);

            let mut surface = RecordingSurface::default();
            renderer.render(&mut surface);
            assert!(surface.ops.is_empty());
        }
    }

    #[test]
    fn disabled_highlight_hides_press() {
        let mut renderer = sized(100, 100);
        renderer.set_highlight_enabled(false);
        assert!(renderer.on_touch(TouchEvent::down(50.0, 50.0)).is_handled());
        assert!(renderer.is_pressed());

        let mut surface = RecordingSurface::default();
        renderer.render(&mut surface);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn down_outside_circle_is_ignored() {
        let mut renderer = sized(100, 100);
        let _ = renderer.take_redraw_request();

        assert_eq!(renderer.on_touch(TouchEvent::down(1.0, 1.0)), TouchResult::NotHandled);
        assert!(!renderer.is_pressed());
        assert!(!renderer.take_redraw_request());
    }

    #[test]
    fn release_outside_clears_press_but_bubbles() {
        let mut renderer = sized(100, 100);

        assert_eq!(renderer.on_touch(TouchEvent::down(50.0, 50.0)), TouchResult::Handled);
        assert!(renderer.is_pressed());
        let _ = renderer.take_redraw_request();

        assert_eq!(
            renderer.on_touch(TouchEvent::up(1000.0, 1000.0)),
            TouchResult::NotHandled
        );
        assert!(!renderer.is_pressed());
        assert!(renderer.take_redraw_request());
    }

    #[test]
    fn cancel_inside_is_handled() {
        let mut renderer = sized(100, 100);
        renderer.on_touch(TouchEvent::down(50.0, 50.0));

        assert_eq!(renderer.on_touch(TouchEvent::cancel(60.0, 40.0)), TouchResult::Handled);
        assert!(!renderer.is_pressed());
    }

    #[test]
    fn move_changes_nothing() {
        let mut renderer = sized(100, 100);
        renderer.on_touch(TouchEvent::down(50.0, 50.0));

        let event = TouchEvent::new(55.0, 55.0, TouchPhase::Move);
        assert_eq!(renderer.on_touch(event), TouchResult::NotHandled);
        assert!(renderer.is_pressed());
    }

    #[test]
    fn missing_sources_clear_the_image() {
        let mut renderer = sized(100, 100);
        renderer.set_image_bitmap(Some(Bitmap::filled(10, 10, Argb::BLACK)));
        assert!(renderer.bitmap_transform().is_some());

        renderer.set_image_bitmap(None);
        assert!(renderer.bitmap().is_empty());
        assert!(renderer.bitmap_transform().is_none());

        renderer.set_image_drawable(Some(&Sizeless));
        assert!(renderer.bitmap().is_empty());

        renderer.set_image_resource(3, &mut MapResolver);
        assert!(renderer.bitmap_transform().is_none());

        let mut surface = RecordingSurface::default();
        renderer.render(&mut surface);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn resolved_sources_replace_the_image() {
        let mut renderer = sized(100, 100);

        renderer.set_image_resource(7, &mut MapResolver);
        assert_eq!((renderer.bitmap().width(), renderer.bitmap().height()), (4, 8));
        assert_eq!(renderer.bitmap_transform().map(|t| t.scale), Some(25.0));

        renderer.set_image_uri("file:///avatar.png", &mut MapResolver);
        assert_eq!((renderer.bitmap().width(), renderer.bitmap().height()), (8, 4));
        assert_eq!(renderer.bitmap_transform().map(|t| t.dx), Some(-50.0));
    }

    #[test]
    fn bitmap_set_before_resize_is_fitted_on_resize() {
        let mut renderer = CircleImageRenderer::default();
        renderer.set_image_bitmap(Some(Bitmap::filled(20, 20, Argb::BLACK)));
        assert_eq!(renderer.bitmap_transform().map(|t| t.scale), Some(0.0));

        renderer.on_resize(ViewGeometry::new(40, 40));
        assert_eq!(renderer.bitmap_transform().map(|t| t.scale), Some(2.0));
    }
}
