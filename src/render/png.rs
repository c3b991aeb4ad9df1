//! PNG preview output.
//!
//! Writes a sampled pixel grid to disk so the sign layout can be checked
//! before importing the blueprint.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{Result, SignError};

use super::PixelGrid;

/// Write a pixel grid to a PNG file.
///
/// # Arguments
///
/// * `grid` - The sampled grid to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(grid: &PixelGrid, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1);

    let width = grid.width() * scale;
    let height = grid.height() * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (x, y, pixel) in grid.image().enumerate_pixels() {
        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(x * scale + sx, y * scale + sy, *pixel);
            }
        }
    }

    img.save(path).map_err(|e| SignError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
