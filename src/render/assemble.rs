//! Blueprint assembly.
//!
//! Takes the first object of a parsed template document as the prototype
//! sign and fills a fresh copy of the document with one sign per retained
//! pixel.

use crate::error::{Result, SignError};
use crate::types::{Blueprint, RenderOptions, SignObject};

use super::duplicate::{duplicate, GridLayout, Pixel};
use super::sample::PixelGrid;

/// Split a parsed template into an emptied document and its prototype sign.
///
/// Every object after the first is dropped.
pub fn extract_template(mut blueprint: Blueprint) -> Result<(Blueprint, SignObject)> {
    if blueprint.objects.is_empty() {
        return Err(SignError::EmptyTemplate);
    }

    let template = blueprint.objects.swap_remove(0);
    blueprint.objects.clear();
    Ok((blueprint, template))
}

/// Append one sign per retained pixel to `blueprint`.
///
/// Pixels are visited column by column: x outer, y inner.
pub fn fill(
    mut blueprint: Blueprint,
    template: &SignObject,
    grid: &PixelGrid,
    options: &RenderOptions,
) -> Blueprint {
    let layout = GridLayout::new(options.sign_size, grid.width(), grid.height());

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let pixel = Pixel::new(x, y, grid.get(x, y));
            let skip = options.skip_transparent_pixels;
            if let Some(sign) = duplicate(template, pixel, &layout, skip) {
                blueprint.objects.push(sign);
            }
        }
    }

    blueprint
}

/// Build a sign blueprint from a parsed template document and a pixel grid.
pub fn assemble(
    template_doc: Blueprint,
    grid: &PixelGrid,
    options: &RenderOptions,
) -> Result<Blueprint> {
    let (blueprint, template) = extract_template(template_doc)?;
    Ok(fill(blueprint, &template, grid, options))
}
