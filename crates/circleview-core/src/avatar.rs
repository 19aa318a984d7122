//! Avatar renderer: a circle image that can show an initial letter instead.

use alloc::string::String;

use log::debug;

use crate::{
    Error,
    attributes::{AvatarAttributes, CircleAttributes},
    circle::CircleImageRenderer,
    color::Argb,
    geometry::ViewGeometry,
    surface::Surface,
    text_policy::extract_initial,
    touch::{TouchEvent, TouchResult},
};

/// What the avatar paints inside its circle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum AvatarState {
    /// Solid background with the initial letter of the display text.
    #[default]
    ShowInitial = 1,
    /// The circle image.
    ShowImage = 2,
}

impl TryFrom<i32> for AvatarState {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ShowInitial),
            2 => Ok(Self::ShowImage),
            _ => Err(Error::InvalidArgument { value }),
        }
    }
}

/// Render model of the avatar widget.
///
/// Image, stroke, highlight, resize and touch handling live in the owned
/// [`CircleImageRenderer`].
#[derive(Clone, Debug)]
pub struct AvatarRenderer {
    circle: CircleImageRenderer,
    text: String,
    initial: char,
    text_color: Argb,
    text_size: f32,
    background_color: Argb,
    state: AvatarState,
}

impl Default for AvatarRenderer {
    fn default() -> Self {
        Self::with_circle(
            CircleImageRenderer::default(),
            &AvatarAttributes::default(),
            AvatarState::ShowInitial,
        )
    }
}

impl AvatarRenderer {
    /// Builds an avatar from resolved attributes.
    ///
    /// Fails when `initial_state` is not a valid [`AvatarState`] value.
    pub fn from_attributes(attributes: &AvatarAttributes<'_>) -> Result<Self, Error> {
        let state = AvatarState::try_from(attributes.initial_state)?;
        let circle = CircleImageRenderer::from_attributes(&attributes.circle);
        Ok(Self::with_circle(circle, attributes, state))
    }

    fn with_circle(
        circle: CircleImageRenderer,
        attributes: &AvatarAttributes<'_>,
        state: AvatarState,
    ) -> Self {
        let mut avatar = Self {
            circle,
            text: String::new(),
            initial: extract_initial(None),
            text_color: attributes.text_color,
            text_size: attributes.text_size,
            background_color: attributes.background_color,
            state,
        };
        avatar.store_text(attributes.text);
        avatar
    }

    pub fn circle(&self) -> &CircleImageRenderer {
        &self.circle
    }

    /// Image, stroke and highlight setters live on the circle renderer.
    pub fn circle_mut(&mut self) -> &mut CircleImageRenderer {
        &mut self.circle
    }

    pub fn circle_attributes(&self) -> CircleAttributes {
        CircleAttributes {
            stroke_color: self.circle.stroke_color(),
            stroke_width: self.circle.stroke_width(),
            highlight_enable: self.circle.is_highlight_enabled(),
            highlight_color: self.circle.highlight_color(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn initial(&self) -> char {
        self.initial
    }

    pub fn set_display_text(&mut self, text: Option<&str>) {
        self.store_text(text);
        self.circle.invalidate();
    }

    pub fn state(&self) -> AvatarState {
        self.state
    }

    pub fn set_state(&mut self, state: AvatarState) {
        if self.state != state {
            debug!("avatar: state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.circle.invalidate();
    }

    /// Sets the state from its raw value, leaving it untouched on error.
    pub fn set_state_value(&mut self, value: i32) -> Result<(), Error> {
        let state = AvatarState::try_from(value)?;
        self.set_state(state);
        Ok(())
    }

    pub fn text_color(&self) -> Argb {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Argb) {
        self.text_color = color;
        self.circle.invalidate();
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
        self.circle.invalidate();
    }

    pub fn background_color(&self) -> Argb {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Argb) {
        self.background_color = color;
        self.circle.invalidate();
    }

    pub fn on_resize(&mut self, geometry: ViewGeometry) {
        self.circle.on_resize(geometry);
    }

    pub fn on_touch(&mut self, event: TouchEvent) -> TouchResult {
        self.circle.on_touch(event)
    }

    pub fn take_redraw_request(&mut self) -> bool {
        self.circle.take_redraw_request()
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        match self.state {
            AvatarState::ShowInitial => self.render_initial(surface),
            AvatarState::ShowImage => self.circle.render(surface),
        }
    }

    fn render_initial<S: Surface>(&self, surface: &mut S) {
        let bounds = self.circle.circle_bounds().rect();
        let mut utf8 = [0u8; 4];
        let initial = self.initial.encode_utf8(&mut utf8);

        // Center the glyph ink box, not the baseline, on the circle center.
        let text_bounds = surface.text_bounds(initial, self.text_size);
        let baseline = bounds.center_y() - text_bounds.exact_center_y();

        surface.fill_oval(bounds, self.background_color);
        surface.draw_text_centered(
            initial,
            bounds.center_x(),
            baseline,
            self.text_size,
            self.text_color,
        );
        self.circle.draw_stroke(surface);
        self.circle.draw_highlight(surface);
    }

    fn store_text(&mut self, text: Option<&str>) {
        if text.is_none_or(|t| t.trim().is_empty()) {
            debug!("avatar: blank display text, using fallback initial");
        }
        self.initial = extract_initial(text);
        self.text.clear();
        self.text.push_str(text.unwrap_or(""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bitmap::Bitmap,
        geometry::{Rect, RectF},
        tests::{DrawOp, RecordingSurface},
    };

    fn sized_avatar() -> AvatarRenderer {
        let mut avatar = AvatarRenderer::default();
        avatar.on_resize(ViewGeometry::new(100, 100));
        avatar
    }

    #[test]
    fn defaults_show_initial_of_stock_text() {
        let avatar = AvatarRenderer::default();
        assert_eq!(avatar.state(), AvatarState::ShowInitial);
        assert_eq!(avatar.text(), "A");
        assert_eq!(avatar.initial(), 'A');
        assert_eq!(avatar.text_size(), 90.0);
    }

    #[test]
    fn display_text_derives_initial() {
        let mut avatar = AvatarRenderer::default();

        avatar.set_display_text(Some("Alice"));
        assert_eq!(avatar.initial(), 'A');
        assert_eq!(avatar.text(), "Alice");

        for blank in [None, Some(""), Some("   ")] {
            avatar.set_display_text(blank);
            assert_eq!(avatar.initial(), '?');
        }
        assert_eq!(avatar.text(), "   ");
    }

    #[test]
    fn long_display_text_is_stored_whole() {
        let name = "Maximilian Alexander von Hohenzollern-Sigmaringen the Third of Many";
        let mut avatar = AvatarRenderer::default();

        avatar.set_display_text(Some(name));

        assert_eq!(avatar.text(), name);
        assert_eq!(avatar.initial(), 'M');
    }

    #[test]
    fn invalid_state_value_is_rejected_and_state_kept() {
        let mut avatar = AvatarRenderer::default();
        avatar.set_state(AvatarState::ShowImage);

        assert_eq!(
            avatar.set_state_value(3),
            Err(Error::InvalidArgument { value: 3 })
        );
        assert_eq!(avatar.state(), AvatarState::ShowImage);

        assert_eq!(avatar.set_state_value(1), Ok(()));
        assert_eq!(avatar.state(), AvatarState::ShowInitial);
    }

    #[test]
    fn from_attributes_validates_initial_state() {
        let attributes = AvatarAttributes::default().with_state(0);
        assert_eq!(
            AvatarRenderer::from_attributes(&attributes).err(),
            Some(Error::InvalidArgument { value: 0 })
        );

        let attributes = AvatarAttributes::default()
            .with_state(AvatarState::ShowImage as i32)
            .with_text(Some("  Ben"));
        let avatar = AvatarRenderer::from_attributes(&attributes).unwrap();
        assert_eq!(avatar.state(), AvatarState::ShowImage);
        assert_eq!(avatar.initial(), 'B');
    }

    #[test]
    fn initial_mode_draws_background_text_stroke_highlight() {
        let mut avatar = sized_avatar();
        avatar.set_display_text(Some("Jen"));
        avatar.set_background_color(Argb::opaque(0x0000FF));
        avatar.set_text_color(Argb::BLACK);
        avatar.set_text_size(20.0);
        avatar.circle_mut().set_stroke(Argb::BLACK, 4.0);
        avatar.circle_mut().set_image_bitmap(Some(Bitmap::filled(4, 4, Argb::WHITE)));
        avatar.on_touch(TouchEvent::down(50.0, 50.0));

        // Recorded text bounds for "J" are (0, -20)..(10, 0): exact center y = -10.
        let mut surface = RecordingSurface::with_text_bounds(Rect::new(0, -20, 10, 0));
        avatar.render(&mut surface);

        let full = RectF::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            surface.ops,
            vec![
                DrawOp::FillOval {
                    bounds: full,
                    color: Argb::opaque(0x0000FF),
                },
                DrawOp::Text {
                    text: 'J',
                    center_x: 50.0,
                    baseline_y: 60.0,
                    size: 20.0,
                    color: Argb::BLACK,
                },
                DrawOp::StrokeOval {
                    bounds: RectF::new(2.0, 2.0, 98.0, 98.0),
                    width: 4.0,
                    color: Argb::BLACK,
                },
                DrawOp::FillOval {
                    bounds: full,
                    color: Argb(0x3200_0000),
                },
            ]
        );
    }

    #[test]
    fn image_mode_delegates_to_circle() {
        let mut avatar = sized_avatar();
        avatar.circle_mut().set_image_bitmap(Some(Bitmap::filled(4, 4, Argb::WHITE)));
        avatar.set_state(AvatarState::ShowImage);

        let mut surface = RecordingSurface::default();
        avatar.render(&mut surface);

        assert_eq!(
            surface.ops,
            vec![DrawOp::Bitmap {
                bounds: RectF::new(0.0, 0.0, 100.0, 100.0),
                scale: 25.0,
            }]
        );
    }

    #[test]
    fn setters_request_redraw() {
        let mut avatar = sized_avatar();
        let _ = avatar.take_redraw_request();

        avatar.set_state(AvatarState::ShowImage);
        assert!(avatar.take_redraw_request());
        assert!(!avatar.take_redraw_request());

        avatar.set_text_color(Argb::BLACK);
        assert!(avatar.take_redraw_request());
    }
}
