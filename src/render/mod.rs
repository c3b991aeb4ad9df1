//! Rendering module for signgrid.
//!
//! Turns an image into a grid of sampled pixels and the grid into sign
//! objects placed on a template blueprint.

mod assemble;
mod duplicate;
mod png;
mod sample;

pub use assemble::{assemble, extract_template, fill};
pub use duplicate::{duplicate, GridLayout, Pixel};
pub use png::write_png;
pub use sample::{apply_brightness, decode, grid_size, sample, PixelGrid};
