//! Generate command implementation.
//!
//! Converts each input image into a `.sbp` / `.sbpcfg` blueprint pair.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::codec::{BlueprintCodec, JsonLinesCodec};
use crate::discovery::collect_images;
use crate::error::{Result, SignError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{build, write_files, DEFAULT_BLUEPRINT_NAME};
use crate::templates::TemplateProvider;
use crate::types::RenderOptions;

use super::{template_provider, RenderArgs};

/// Convert images into sign blueprints
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Images or directories of images to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Output directory (default: from config, else "dist")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Blueprint name (single input only; default: image file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory with custom templates (Tiny.sbp, Tiny.sbpcfg, ...)
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

/// Paths of one generated blueprint pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFiles {
    pub blueprint: PathBuf,
    pub config: PathBuf,
    pub signs: usize,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<Vec<GeneratedFiles>> {
    let config = args.render.load_config()?;
    let options = args.render.options(&config);
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());
    let templates_dir = args.templates.as_deref().or(config.templates.as_deref());
    let templates = template_provider(templates_dir);
    let codec = JsonLinesCodec::new();

    let images = collect_images(&args.inputs)?;
    if images.is_empty() {
        return Err(SignError::Build {
            message: "No images found".to_string(),
            help: Some("Pass image files or directories containing .png/.jpg files".to_string()),
        });
    }
    if args.name.is_some() && images.len() > 1 {
        return Err(SignError::Build {
            message: format!("--name needs a single input image, got {}", images.len()),
            help: Some("Drop --name to name each blueprint after its image".to_string()),
        });
    }
    if let Some(name) = &args.name {
        check_name(name)?;
    }

    let names: Vec<String> = images
        .iter()
        .map(|image| match &args.name {
            Some(name) => name.clone(),
            None => blueprint_name(image),
        })
        .collect();
    check_unique_names(&images, &names)?;

    fs::create_dir_all(&output).map_err(|e| SignError::Io {
        path: output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    printer.verbose(
        "Options",
        &format!(
            "{} signs, {} brightness, size {}, {}",
            options.sign_size,
            options.brightness,
            options.max_size(),
            if options.skip_transparent_pixels {
                "skipping transparent pixels"
            } else {
                "keeping transparent pixels"
            }
        ),
    );
    if let Some(dir) = templates_dir {
        printer.verbose("Templates", &display_path(dir));
    }

    let mut generated = Vec::new();
    let mut failures = 0;

    for (image, name) in images.iter().zip(&names) {
        match generate_one(image, name, &output, &options, templates.as_ref(), &codec, printer) {
            Ok(files) => generated.push(files),
            Err(e) => {
                failures += 1;
                printer.error("Failed", &format!("{}: {}", display_path(image), e));
            }
        }
    }

    if failures > 0 {
        return Err(SignError::Build {
            message: format!(
                "{} of {} failed",
                plural(failures, "image", "images"),
                images.len()
            ),
            help: None,
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(generated.len(), "blueprint", "blueprints"),
            display_path(&output)
        ),
    );

    Ok(generated)
}

fn generate_one(
    image: &Path,
    name: &str,
    output: &Path,
    options: &RenderOptions,
    templates: &dyn TemplateProvider,
    codec: &dyn BlueprintCodec,
    printer: &Printer,
) -> Result<GeneratedFiles> {
    let bytes = fs::read(image).map_err(|e| SignError::Io {
        path: image.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    let generated = build(&bytes, options, name, templates, codec)?;
    let files = write_files(&generated.blueprint, codec)?;

    let blueprint_path = output.join(format!("{}.sbp", name));
    let config_path = output.join(format!("{}.sbpcfg", name));
    write_file(&blueprint_path, &files.main)?;
    write_file(&config_path, &files.config)?;

    let signs = generated.blueprint.objects.len();
    printer.status(
        "Generated",
        &format!(
            "{} -> {} ({}x{}, {})",
            display_path(image),
            display_path(&blueprint_path),
            generated.grid.width(),
            generated.grid.height(),
            plural(signs, "sign", "signs")
        ),
    );
    if generated.skipped() > 0 {
        printer.verbose(
            "Skipped",
            &plural(generated.skipped(), "transparent pixel", "transparent pixels"),
        );
    }

    Ok(GeneratedFiles {
        blueprint: blueprint_path,
        config: config_path,
        signs,
    })
}

/// Blueprint name for an image: its file stem.
fn blueprint_name(image: &Path) -> String {
    image
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BLUEPRINT_NAME)
        .to_string()
}

/// A blueprint name must be a plain file name inside the output directory.
fn check_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);

    if invalid {
        return Err(SignError::Build {
            message: format!("Invalid blueprint name '{}'", name),
            help: Some("Use a plain name without path separators".to_string()),
        });
    }
    Ok(())
}

/// Two images may not write to the same blueprint files.
fn check_unique_names(images: &[PathBuf], names: &[String]) -> Result<()> {
    let mut seen: BTreeMap<&str, &Path> = BTreeMap::new();

    for (image, name) in images.iter().zip(names) {
        if let Some(first) = seen.insert(name.as_str(), image.as_path()) {
            return Err(SignError::Build {
                message: format!(
                    "{} and {} would both write blueprint '{}'",
                    display_path(first),
                    display_path(image),
                    name
                ),
                help: Some("Rename one of the images or convert them separately".to_string()),
            });
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| SignError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
