//! Init command implementation.
//!
//! Writes a `signgrid.yaml` with the default render options spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{Result, SignError};
use crate::output::{display_path, Printer};
use crate::types::RenderOptions;

/// Initialize a signgrid project by generating a signgrid.yaml config
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing signgrid.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(SignError::Build {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let defaults = RenderOptions::default();
    let config = Config {
        sign_size: Some(defaults.sign_size),
        brightness: Some(defaults.brightness),
        image_size: Some(defaults.image_size),
        skip_transparent: Some(defaults.skip_transparent_pixels),
        ..Default::default()
    };

    fs::write(&config_path, config.to_yaml()?).map_err(|e| SignError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
