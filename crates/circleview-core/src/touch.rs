//! Touch input abstraction.

/// Phase of a pointer gesture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One touch sample in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub x: f32,
    pub y: f32,
    pub phase: TouchPhase,
}

impl TouchEvent {
    pub const fn new(x: f32, y: f32, phase: TouchPhase) -> Self {
        Self { x, y, phase }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Down)
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Up)
    }

    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Cancel)
    }
}

/// Whether a widget consumed an event or lets it bubble to its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TouchResult {
    Handled,
    NotHandled,
}

impl TouchResult {
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Polled touch source.
pub trait TouchProvider {
    type Error;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error>;
}
