//! Render options and their lookup tables.
//!
//! Sign size picks both the template resource and the grid spacing;
//! brightness picks a linear RGB multiplier.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Largest grid edge, in signs.
pub const MAX_IMAGE_SIZE: u32 = 144;

/// Pixels with alpha below this are treated as transparent.
pub const ALPHA_THRESHOLD: u8 = 10;

/// Physical size of the placeholder sign used for every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignSize {
    Tiny,
    #[default]
    Medium,
    Large,
}

impl SignSize {
    pub const ALL: [SignSize; 3] = [SignSize::Tiny, SignSize::Medium, SignSize::Large];

    /// Distance between neighbouring signs, in game units.
    pub fn spacing(self) -> f64 {
        match self {
            SignSize::Tiny => 50.0,
            SignSize::Medium => 100.0,
            SignSize::Large => 200.0,
        }
    }

    /// Base file name of the bundled template for this size.
    pub fn resource_stem(self) -> &'static str {
        match self {
            SignSize::Tiny => "Tiny",
            SignSize::Medium => "Medium",
            SignSize::Large => "Large",
        }
    }
}

impl fmt::Display for SignSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignSize::Tiny => write!(f, "tiny"),
            SignSize::Medium => write!(f, "medium"),
            SignSize::Large => write!(f, "large"),
        }
    }
}

/// Brightness boost applied to the sampled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Low,
    #[default]
    Normal,
    High,
    Max,
}

impl Brightness {
    pub fn multiplier(self) -> f64 {
        match self {
            Brightness::Low => 0.3,
            Brightness::Normal => 1.0,
            Brightness::High => 1.5,
            Brightness::Max => 2.0,
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brightness::Low => write!(f, "low"),
            Brightness::Normal => write!(f, "normal"),
            Brightness::High => write!(f, "high"),
            Brightness::Max => write!(f, "max"),
        }
    }
}

/// Options controlling one image-to-blueprint conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub sign_size: SignSize,
    pub brightness: Brightness,
    /// Requested longest edge of the grid; clamped by [`RenderOptions::max_size`].
    pub image_size: u32,
    pub skip_transparent_pixels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sign_size: SignSize::default(),
            brightness: Brightness::default(),
            image_size: MAX_IMAGE_SIZE,
            skip_transparent_pixels: true,
        }
    }
}

impl RenderOptions {
    /// The requested image size clamped to `1..=144`.
    pub fn max_size(&self) -> u32 {
        clamp_image_size(self.image_size)
    }
}

pub fn clamp_image_size(image_size: u32) -> u32 {
    image_size.clamp(1, MAX_IMAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_table() {
        assert_eq!(SignSize::Tiny.spacing(), 50.0);
        assert_eq!(SignSize::Medium.spacing(), 100.0);
        assert_eq!(SignSize::Large.spacing(), 200.0);
    }

    #[test]
    fn test_brightness_table() {
        assert_eq!(Brightness::Low.multiplier(), 0.3);
        assert_eq!(Brightness::Normal.multiplier(), 1.0);
        assert_eq!(Brightness::High.multiplier(), 1.5);
        assert_eq!(Brightness::Max.multiplier(), 2.0);
    }

    #[test]
    fn test_max_size_clamps() {
        let mut options = RenderOptions::default();
        assert_eq!(options.max_size(), 144);

        options.image_size = 0;
        assert_eq!(options.max_size(), 1);

        options.image_size = 1000;
        assert_eq!(options.max_size(), 144);

        options.image_size = 32;
        assert_eq!(options.max_size(), 32);
    }

    #[test]
    fn test_serde_names() {
        let size: SignSize = serde_yaml::from_str("tiny").unwrap();
        assert_eq!(size, SignSize::Tiny);

        let brightness: Brightness = serde_yaml::from_str("max").unwrap();
        assert_eq!(brightness, Brightness::Max);
    }

    #[test]
    fn test_display_matches_value_names() {
        for size in SignSize::ALL {
            let value = size.to_possible_value().unwrap();
            assert_eq!(value.get_name(), size.to_string());
        }
    }
}
