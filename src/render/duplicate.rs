//! Per-pixel sign duplication.

use crate::types::{Colour, SignObject, SignSize, ALPHA_THRESHOLD, COLOR_KEYS};

/// Placement of signs on the blueprint grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Distance between neighbouring signs.
    pub spacing: f64,
    /// Grid width in signs.
    pub width: u32,
    /// Grid height in signs.
    pub height: u32,
}

impl GridLayout {
    pub fn new(size: SignSize, width: u32, height: u32) -> Self {
        Self {
            spacing: size.spacing(),
            width,
            height,
        }
    }

    /// Blueprint `(y, z)` for image cell `(x, y)`.
    ///
    /// Columns are centred around 0. Rows are flipped so the top image row
    /// has the largest z.
    pub fn position(&self, x: u32, y: u32) -> (f64, f64) {
        let s = self.spacing;
        let horizontal = (x as f64 * s + s / 2.0) - s * (self.width as f64 / 2.0);
        let vertical = (self.height as f64 - y as f64) * s;
        (horizontal, vertical)
    }
}

/// One image cell and its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub colour: Colour,
}

impl Pixel {
    pub fn new(x: u32, y: u32, colour: Colour) -> Self {
        Self { x, y, colour }
    }

    pub fn is_transparent(&self) -> bool {
        self.colour.a < ALPHA_THRESHOLD
    }
}

/// Clone `template` for one pixel.
///
/// Returns `None` when the pixel is transparent and `skip_transparent` is
/// set. The copy gets the pixel's grid position and its colour in every
/// colour property the template actually has.
pub fn duplicate(
    template: &SignObject,
    pixel: Pixel,
    layout: &GridLayout,
    skip_transparent: bool,
) -> Option<SignObject> {
    if skip_transparent && pixel.is_transparent() {
        return None;
    }

    let mut sign = template.clone();
    let (y, z) = layout.position(pixel.x, pixel.y);
    sign.transform.translation.y = y;
    sign.transform.translation.z = z;

    let colour = pixel.colour.to_linear();
    for key in COLOR_KEYS {
        sign.set_color(key, colour);
    }

    Some(sign)
}
