//! Colour types.
//!
//! `Colour` is an 8-bit RGBA pixel as read from an image. `LinearColor` is
//! the normalized float form stored in a sign's colour properties.

use std::fmt;

use image::Rgba;
use palette::Srgba;
use serde::{Deserialize, Serialize};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Multiply the RGB channels, clamping at 255. Alpha is kept as-is.
    ///
    /// Halves round to even, the way a clamped 8-bit canvas buffer stores them.
    pub fn scaled(self, multiplier: f64) -> Self {
        let scale = |c: u8| (c as f64 * multiplier).min(255.0).round_ties_even() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Normalize to `[0, 1]` floats rounded to two decimal places.
    pub fn to_linear(self) -> LinearColor {
        let normalized: Srgba<f32> =
            Srgba::new(self.r, self.g, self.b, self.a).into_format();

        LinearColor {
            r: round2(normalized.red),
            g: round2(normalized.green),
            b: round2(normalized.blue),
            a: round2(normalized.alpha),
        }
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A normalized RGBA colour as stored in a sign colour property.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl LinearColor {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Nearest 8-bit colour.
    pub fn to_colour(self) -> Colour {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour::new(quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a))
    }
}

fn round2(value: f32) -> f64 {
    (value as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_linear_rounds_to_two_places() {
        let c = Colour::new(255, 128, 0, 255).to_linear();
        assert_eq!(c, LinearColor::new(1.0, 0.5, 0.0, 1.0));

        let c = Colour::new(1, 64, 200, 25).to_linear();
        assert_eq!(c, LinearColor::new(0.0, 0.25, 0.78, 0.1));
    }

    #[test]
    fn test_scaled_clamps_rgb_and_keeps_alpha() {
        let c = Colour::new(100, 200, 0, 42).scaled(1.5);
        assert_eq!(c, Colour::new(150, 255, 0, 42));
    }

    #[test]
    fn test_scaled_low() {
        let c = Colour::rgb(100, 10, 0).scaled(0.3);
        assert_eq!(c, Colour::rgb(30, 3, 0));
    }

    #[test]
    fn test_scaled_halves_round_to_even() {
        // 15 * 0.3 = 4.5, 35 * 0.3 = 10.5, 51 * 1.5 = 76.5, 53 * 1.5 = 79.5
        assert_eq!(Colour::rgb(15, 35, 0).scaled(0.3), Colour::rgb(4, 10, 0));
        assert_eq!(Colour::rgb(51, 53, 0).scaled(1.5), Colour::rgb(76, 80, 0));
    }

    #[test]
    fn test_to_colour() {
        assert_eq!(LinearColor::new(1.0, 0.5, 0.0, 1.0).to_colour(), Colour::rgb(255, 128, 0));
        assert_eq!(LinearColor::new(2.0, -1.0, 0.0, 0.0).to_colour(), Colour::new(255, 0, 0, 0));
    }

    #[test]
    fn test_from_image_pixel() {
        assert_eq!(Colour::from(Rgba([1, 2, 3, 4])), Colour::new(1, 2, 3, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }
}
