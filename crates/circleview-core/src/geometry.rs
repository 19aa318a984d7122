//! View geometry and inscribed-circle bounds.

use log::trace;

/// Floating point rectangle in view coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Moves every edge inward by `dx` horizontally and `dy` vertically.
    ///
    /// Negative values grow the rectangle.
    pub fn inset(self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right - dx,
            self.bottom - dy,
        )
    }

    /// Integer rectangle with every edge truncated toward zero.
    pub fn truncate(&self) -> Rect {
        Rect::new(
            self.left as i32,
            self.top as i32,
            self.right as i32,
            self.bottom as i32,
        )
    }
}

/// Integer rectangle, used for outlines and measured text bounds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Vertical center without integer rounding.
    pub fn exact_center_y(&self) -> f32 {
        (self.top + self.bottom) as f32 * 0.5
    }

    pub fn exact_center_x(&self) -> f32 {
        (self.left + self.right) as f32 * 0.5
    }
}

/// Padding around the view content, in pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Size and padding of the hosting view.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewGeometry {
    pub width: i32,
    pub height: i32,
    pub padding: Padding,
}

impl ViewGeometry {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding: Padding::ZERO,
        }
    }

    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Content width, clamped at zero when padding exceeds the view.
    pub fn content_width(&self) -> f32 {
        (self.width - self.padding.left - self.padding.right).max(0) as f32
    }

    /// Content height, clamped at zero when padding exceeds the view.
    pub fn content_height(&self) -> f32 {
        (self.height - self.padding.top - self.padding.bottom).max(0) as f32
    }
}

/// Square inscribed in the padded content area of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleBounds {
    rect: RectF,
}

impl CircleBounds {
    pub const EMPTY: Self = Self {
        rect: RectF::EMPTY,
    };

    pub fn rect(&self) -> RectF {
        self.rect
    }

    pub fn diameter(&self) -> f32 {
        self.rect.width()
    }

    pub fn radius(&self) -> f32 {
        self.rect.width() * 0.5
    }

    pub fn center(&self) -> (f32, f32) {
        (self.rect.center_x(), self.rect.center_y())
    }

    /// Returns `true` when `(x, y)` lies within the radius of the center.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = self.rect.center_x() as f64 - x as f64;
        let dy = self.rect.center_y() as f64 - y as f64;
        let radius = self.radius() as f64;
        dx * dx + dy * dy <= radius * radius
    }

    /// Bounds whose stroke centerline sits on the circle edge.
    pub fn stroke_bounds(&self, stroke_width: f32) -> RectF {
        let half = stroke_width * 0.5;
        self.rect.inset(half, half)
    }
}

/// Computes the largest square that fits the padded content area, centered
/// on whichever axis is longer.
pub fn compute_circle_bounds(geometry: &ViewGeometry) -> CircleBounds {
    let content_width = geometry.content_width();
    let content_height = geometry.content_height();
    let mut left = geometry.padding.left as f32;
    let mut top = geometry.padding.top as f32;

    if content_width > content_height {
        left += (content_width - content_height) * 0.5;
    } else {
        top += (content_height - content_width) * 0.5;
    }

    let diameter = content_width.min(content_height);
    trace!(
        "circle bounds: view={}x{} diameter={} origin=({}, {})",
        geometry.width, geometry.height, diameter, left, top
    );

    CircleBounds {
        rect: RectF::new(left, top, left + diameter, top + diameter),
    }
}
