//! End-to-end image to blueprint conversion.

use crate::codec::{BlueprintCodec, BlueprintFiles};
use crate::error::Result;
use crate::render::{decode, extract_template, fill, sample, PixelGrid};
use crate::templates::TemplateProvider;
use crate::types::{Blueprint, RenderOptions};

/// Default document name for generated blueprints.
pub const DEFAULT_BLUEPRINT_NAME: &str = "SignImage";

/// A generated blueprint together with the grid it was built from.
#[derive(Debug, Clone)]
pub struct Generated {
    pub grid: PixelGrid,
    pub blueprint: Blueprint,
}

impl Generated {
    /// Pixels that did not become signs.
    pub fn skipped(&self) -> usize {
        let cells = self.grid.width() as usize * self.grid.height() as usize;
        cells - self.blueprint.objects.len()
    }
}

/// Build the sign document for an encoded image.
///
/// The template is loaded and checked before the image is decoded, so an
/// unusable template fails without any image work.
pub fn build(
    image: &[u8],
    options: &RenderOptions,
    name: &str,
    templates: &dyn TemplateProvider,
    codec: &dyn BlueprintCodec,
) -> Result<Generated> {
    let files = templates.load(options.sign_size)?;
    let parsed = codec.parse(name, &files.blueprint, &files.config)?;
    let (blueprint, template) = extract_template(parsed)?;

    let decoded = decode(image)?;
    let grid = sample(&decoded, options.image_size, options.brightness)?;
    let blueprint = fill(blueprint, &template, &grid, options);

    Ok(Generated { grid, blueprint })
}

/// Serialize a document into its main file and config file.
pub fn write_files(blueprint: &Blueprint, codec: &dyn BlueprintCodec) -> Result<BlueprintFiles> {
    codec.write(blueprint)?.into_files()
}

/// Convert an encoded image into a sign blueprint file pair.
pub fn generate(
    image: &[u8],
    options: &RenderOptions,
    name: &str,
    templates: &dyn TemplateProvider,
    codec: &dyn BlueprintCodec,
) -> Result<BlueprintFiles> {
    let generated = build(image, options, name, templates, codec)?;
    write_files(&generated.blueprint, codec)
}
