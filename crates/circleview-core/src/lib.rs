#![cfg_attr(not(test), no_std)]

//! Platform-agnostic render model for circular image and avatar widgets.
//!
//! The renderers hold geometry and style only. Drawing goes through the
//! [`surface::Surface`] trait, implemented by a thin platform adapter.

extern crate alloc;

pub mod attributes;
pub mod avatar;
pub mod bitmap;
pub mod circle;
pub mod color;
pub mod error;
pub mod geometry;
pub mod surface;
pub mod text_policy;
pub mod touch;


pub use error::Error;
