#![cfg_attr(not(test), no_std)]

//! Software ARGB raster backend for the circleview render model.

extern crate alloc;

mod framebuffer;
mod glyph;
mod surface;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;
pub use glyph::{GLYPH_COLUMNS, GLYPH_ROWS, MAX_GLYPH_SCALE, glyph_scale};
