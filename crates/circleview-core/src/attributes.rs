//! Resolved widget configuration.
//!
//! Values arrive already parsed from whatever styling system the host uses;
//! `Default` carries the stock widget look.

use crate::{avatar::AvatarState, color::Argb};

/// Translucent black drawn over the circle while pressed.
pub const DEFAULT_HIGHLIGHT_COLOR: Argb = Argb(0x3200_0000);
pub const DEFAULT_TEXT: &str = "A";
pub const DEFAULT_TEXT_SIZE: f32 = 90.0;
pub const DEFAULT_TEXT_COLOR: Argb = Argb::WHITE;
pub const DEFAULT_BACKGROUND_COLOR: Argb = Argb::opaque(0xE5_3935);

/// Stroke and highlight options of the circular image widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleAttributes {
    pub stroke_color: Argb,
    /// Pixels; `<= 0` disables the ring.
    pub stroke_width: f32,
    pub highlight_enable: bool,
    pub highlight_color: Argb,
}

impl Default for CircleAttributes {
    fn default() -> Self {
        Self {
            stroke_color: Argb::TRANSPARENT,
            stroke_width: 0.0,
            highlight_enable: true,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        }
    }
}

impl CircleAttributes {
    pub const fn with_stroke(mut self, color: Argb, width: f32) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }

    pub const fn with_highlight(mut self, enable: bool, color: Argb) -> Self {
        self.highlight_enable = enable;
        self.highlight_color = color;
        self
    }
}

/// Options of the avatar widget, on top of the circle options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarAttributes<'a> {
    pub circle: CircleAttributes,
    pub text: Option<&'a str>,
    pub text_color: Argb,
    /// Pixels.
    pub text_size: f32,
    pub background_color: Argb,
    /// Raw state value, validated when the renderer is built.
    pub initial_state: i32,
}

impl Default for AvatarAttributes<'_> {
    fn default() -> Self {
        Self {
            circle: CircleAttributes::default(),
            text: Some(DEFAULT_TEXT),
            text_color: DEFAULT_TEXT_COLOR,
            text_size: DEFAULT_TEXT_SIZE,
            background_color: DEFAULT_BACKGROUND_COLOR,
            initial_state: AvatarState::ShowInitial as i32,
        }
    }
}

impl<'a> AvatarAttributes<'a> {
    pub const fn with_circle(mut self, circle: CircleAttributes) -> Self {
        self.circle = circle;
        self
    }

    pub const fn with_text(mut self, text: Option<&'a str>) -> Self {
        self.text = text;
        self
    }

    pub const fn with_text_style(mut self, color: Argb, size: f32) -> Self {
        self.text_color = color;
        self.text_size = size;
        self
    }

    pub const fn with_background(mut self, color: Argb) -> Self {
        self.background_color = color;
        self
    }

    pub const fn with_state(mut self, state: i32) -> Self {
        self.initial_state = state;
        self
    }
}
