//! signgrid - Image to sign blueprint generator
//!
//! A library for turning images into blueprints made of placeholder signs,
//! one coloured sign per pixel, laid out on a flat grid.

pub mod cli;
pub mod codec;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod templates;
pub mod types;

pub use codec::{BlueprintCodec, BlueprintFiles, JsonLinesCodec, WrittenBlueprint};
pub use config::{Config, CONFIG_FILENAME};
pub use error::{Result, SignError};
pub use pipeline::{build, generate, write_files, Generated, DEFAULT_BLUEPRINT_NAME};
pub use render::{assemble, duplicate, sample, GridLayout, Pixel, PixelGrid};
pub use templates::{BuiltinTemplates, DirTemplates, TemplateFiles, TemplateProvider};
pub use types::{
    Blueprint, Brightness, Colour, LinearColor, RenderOptions, SignObject, SignSize,
};
