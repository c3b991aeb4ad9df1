//! Preview command implementation.
//!
//! Samples an image exactly as `generate` would and writes the grid as a
//! PNG, one pixel per sign.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SignError};
use crate::output::{display_path, Printer};
use crate::render::{decode, sample, write_png};

use super::RenderArgs;

/// Write the sampled sign grid of an image as a PNG
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Image to preview
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Output PNG path (default: <stem>.preview.png next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale factor for the preview
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: PreviewArgs, printer: &Printer) -> Result<PathBuf> {
    let config = args.render.load_config()?;
    let options = args.render.options(&config);

    let bytes = fs::read(&args.input).map_err(|e| SignError::Io {
        path: args.input.clone(),
        message: format!("Failed to read image: {}", e),
    })?;

    let image = decode(&bytes)?;
    let grid = sample(&image, options.image_size, options.brightness)?;

    let output = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        args.input.with_file_name(format!("{}.preview.png", stem))
    });

    write_png(&grid, &output, args.scale)?;
    printer.status(
        "Previewed",
        &format!(
            "{} -> {} ({}x{} signs)",
            display_path(&args.input),
            display_path(&output),
            grid.width(),
            grid.height()
        ),
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Brightness;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_preview_default_output_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("photo.png");
        RgbaImage::from_pixel(256, 128, Rgba([100, 50, 0, 255]))
            .save(&input)
            .unwrap();

        let args = PreviewArgs {
            input,
            render: RenderArgs {
                image_size: Some(32),
                ..Default::default()
            },
            output: None,
            scale: 2,
        };

        let output = run(args, &Printer::new()).unwrap();
        assert_eq!(output, dir.path().join("photo.preview.png"));

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (64, 32));
    }

    #[test]
    fn test_preview_applies_brightness() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dim.png");
        RgbaImage::from_pixel(2, 2, Rgba([100, 50, 0, 255]))
            .save(&input)
            .unwrap();
        let output = dir.path().join("bright.png");

        let args = PreviewArgs {
            input,
            render: RenderArgs {
                brightness: Some(Brightness::Max),
                ..Default::default()
            },
            output: Some(output.clone()),
            scale: 1,
        };

        run(args, &Printer::new()).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(1, 1).0, [200, 100, 0, 255]);
    }
}
