pub mod completions;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod preview;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::templates::{BuiltinTemplates, DirTemplates, TemplateProvider};
use crate::types::{Brightness, RenderOptions, SignSize};

/// signgrid - Turn images into placeholder-sign blueprints
#[derive(Parser, Debug)]
#[command(name = "signgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print extra detail while working
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert images into sign blueprints
    Generate(generate::GenerateArgs),

    /// Write the sampled sign grid of an image as a PNG
    Preview(preview::PreviewArgs),

    /// Summarize a blueprint file
    Inspect(inspect::InspectArgs),

    /// Initialize a project (generates signgrid.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Render flags shared by `generate` and `preview`.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Sign size (sets spacing and template)
    #[arg(long, value_enum)]
    pub sign_size: Option<SignSize>,

    /// Brightness boost applied to the image
    #[arg(long, value_enum)]
    pub brightness: Option<Brightness>,

    /// Longest grid edge in signs (1-144)
    #[arg(long)]
    pub image_size: Option<u32>,

    /// Emit signs for nearly transparent pixels too
    #[arg(long)]
    pub keep_transparent: bool,

    /// Config file (default: ./signgrid.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    /// Load the explicit config file, or discover one in the working directory.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::discover(Path::new(".")).map(|(config, _)| config),
        }
    }

    /// Merge flags over config values.
    pub fn options(&self, config: &Config) -> RenderOptions {
        let base = config.render_options();
        RenderOptions {
            sign_size: self.sign_size.unwrap_or(base.sign_size),
            brightness: self.brightness.unwrap_or(base.brightness),
            image_size: self.image_size.unwrap_or(base.image_size),
            skip_transparent_pixels: !self.keep_transparent && base.skip_transparent_pixels,
        }
    }
}

/// Templates from a directory if one is given, otherwise the bundled set.
pub fn template_provider(dir: Option<&Path>) -> Box<dyn TemplateProvider> {
    match dir {
        Some(dir) => Box::new(DirTemplates::new(dir)),
        None => Box::new(BuiltinTemplates),
    }
}
