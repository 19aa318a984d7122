//! Errors surfaced by the render model.

use core::fmt;

/// Render model errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// A raw avatar state value is neither `ShowInitial` (1) nor `ShowImage` (2).
    InvalidArgument { value: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { value } => write!(
                f,
                "illegal avatar state value: {value}, use either ShowInitial (1) or ShowImage (2)"
            ),
        }
    }
}

impl core::error::Error for Error {}
