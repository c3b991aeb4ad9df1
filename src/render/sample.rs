//! Image sampling.
//!
//! Decodes the input image, shrinks it so its longest edge fits the grid
//! limit, and applies the brightness multiplier.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::error::{Result, SignError};
use crate::types::{clamp_image_size, Brightness, Colour};

/// A sampled, brightness-adjusted RGBA grid. One pixel becomes one sign.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    image: RgbaImage,
}

impl PixelGrid {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Build a grid from a row-major list of colours.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_colours(width: u32, height: u32, pixels: &[Colour]) -> Option<Self> {
        let raw: Vec<u8> = pixels.iter().flat_map(|c| c.to_rgba()).collect();
        RgbaImage::from_raw(width, height, raw).map(Self::new)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Colour {
        Colour::from(*self.image.get_pixel(x, y))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Decode an encoded image (PNG, JPEG, ...).
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| SignError::Decode {
        message: e.to_string(),
    })
}

/// Grid dimensions for an image of `width`x`height` and a requested size.
///
/// The image is scaled uniformly so neither edge exceeds the clamped size,
/// and is never scaled up.
pub fn grid_size(width: u32, height: u32, image_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let max_size = clamp_image_size(image_size) as f64;
    let scale = (max_size / width as f64)
        .min(max_size / height as f64)
        .min(1.0);

    (
        (width as f64 * scale).floor() as u32,
        (height as f64 * scale).floor() as u32,
    )
}

/// Downsample and brighten an image.
pub fn sample(image: &DynamicImage, image_size: u32, brightness: Brightness) -> Result<PixelGrid> {
    let (w, h) = grid_size(image.width(), image.height(), image_size);
    if w == 0 || h == 0 {
        return Err(SignError::InvalidImage { width: w, height: h });
    }

    let rgba = image.to_rgba8();
    let mut resized = if rgba.dimensions() == (w, h) {
        rgba
    } else {
        imageops::resize(&rgba, w, h, FilterType::Triangle)
    };

    apply_brightness(&mut resized, brightness);
    Ok(PixelGrid::new(resized))
}

/// Scale the RGB channels of every pixel, leaving alpha alone.
pub fn apply_brightness(image: &mut RgbaImage, brightness: Brightness) {
    let multiplier = brightness.multiplier();
    if multiplier == 1.0 {
        return;
    }

    for pixel in image.pixels_mut() {
        *pixel = image::Rgba(Colour::from(*pixel).scaled(multiplier).to_rgba());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[test]
    fn test_grid_size_downscales_longest_edge() {
        assert_eq!(grid_size(288, 144, 144), (144, 72));
        assert_eq!(grid_size(144, 576, 144), (36, 144));
        assert_eq!(grid_size(400, 300, 100), (100, 75));
    }

    #[test]
    fn test_grid_size_never_upscales() {
        assert_eq!(grid_size(10, 20, 144), (10, 20));
        assert_eq!(grid_size(144, 144, 144), (144, 144));
    }

    #[test]
    fn test_grid_size_clamps_requested_size() {
        assert_eq!(grid_size(1000, 1000, 5000), (144, 144));
        assert_eq!(grid_size(1000, 1000, 0), (1, 1));
    }

    #[test]
    fn test_grid_size_follows_floor_law() {
        for (w, h) in [(300, 200), (97, 13), (1920, 1080), (145, 1), (7, 999)] {
            let scale = (144.0 / w as f64).min(144.0 / h as f64).min(1.0);
            let expected = (
                (w as f64 * scale).floor() as u32,
                (h as f64 * scale).floor() as u32,
            );
            assert_eq!(grid_size(w, h, 144), expected, "{}x{}", w, h);
        }
    }

    #[test]
    fn test_sample_thin_strip_is_invalid() {
        let img = solid(1000, 1, [255, 0, 0, 255]);
        let err = sample(&img, 144, Brightness::Normal).unwrap_err();
        assert!(matches!(err, SignError::InvalidImage { width: 144, height: 0 }));
    }

    #[test]
    fn test_sample_resizes() {
        let img = solid(256, 128, [10, 20, 30, 255]);
        let grid = sample(&img, 64, Brightness::Normal).unwrap();
        assert_eq!((grid.width(), grid.height()), (64, 32));
    }

    #[test]
    fn test_sample_keeps_small_images_exact() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));

        let grid = sample(&DynamicImage::ImageRgba8(img), 144, Brightness::Normal).unwrap();
        assert_eq!(grid.get(0, 0), Colour::new(1, 2, 3, 4));
        assert_eq!(grid.get(1, 0), Colour::new(200, 100, 50, 255));
    }

    #[test]
    fn test_sample_high_brightness() {
        let img = solid(3, 3, [100, 170, 0, 77]);
        let grid = sample(&img, 144, Brightness::High).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(grid.get(x, y), Colour::new(150, 255, 0, 77));
            }
        }
    }

    #[test]
    fn test_sample_max_brightness_clamps() {
        let img = solid(1, 1, [127, 128, 255, 0]);
        let grid = sample(&img, 144, Brightness::Max).unwrap();
        assert_eq!(grid.get(0, 0), Colour::new(254, 255, 255, 0));
    }

    #[test]
    fn test_decode_png() {
        let mut bytes = Vec::new();
        solid(4, 2, [0, 0, 255, 255])
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let img = decode(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (4, 2));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode(b"not an image"), Err(SignError::Decode { .. })));
    }

    #[test]
    fn test_from_colours() {
        let grid = PixelGrid::from_colours(2, 1, &[Colour::BLACK, Colour::WHITE]).unwrap();
        assert_eq!(grid.get(1, 0), Colour::WHITE);
        assert!(PixelGrid::from_colours(2, 2, &[Colour::BLACK]).is_none());
    }
}
