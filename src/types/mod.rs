//! Core domain types for signgrid.
//!
//! - `Colour` / `LinearColor` - 8-bit pixels and normalized sign colours
//! - `RenderOptions` - sign size, brightness and grid size settings
//! - `Blueprint` / `SignObject` - the object tree handed to a codec

mod blueprint;
mod colour;
mod options;

pub use blueprint::{
    Blueprint, ColorProperty, Property, Quaternion, SignObject, Transform, Vector3, COLOR_KEYS,
};
pub use colour::{Colour, LinearColor};
pub use options::{
    clamp_image_size, Brightness, RenderOptions, SignSize, ALPHA_THRESHOLD, MAX_IMAGE_SIZE,
};
