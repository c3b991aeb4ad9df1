//! Project configuration (signgrid.yaml) parsing.
//!
//! The config file sets default render options and paths so they do not
//! have to be repeated on every command line. Command-line flags win over
//! config values, which win over the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignError};
use crate::types::{Brightness, RenderOptions, SignSize};

/// The name of the project config file.
pub const CONFIG_FILENAME: &str = "signgrid.yaml";

/// Project config loaded from signgrid.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default sign size.
    pub sign_size: Option<SignSize>,

    /// Default brightness.
    pub brightness: Option<Brightness>,

    /// Default longest grid edge, in signs.
    pub image_size: Option<u32>,

    /// Whether nearly transparent pixels are left out.
    pub skip_transparent: Option<bool>,

    /// Output directory for generated blueprints.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory with custom templates (`Tiny.sbp`, `Tiny.sbpcfg`, ...).
    /// Relative paths are resolved against the config file's directory.
    pub templates: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sign_size: None,
            brightness: None,
            image_size: None,
            skip_transparent: None,
            output: default_output(),
            templates: None,
        }
    }
}

impl Config {
    /// Load config from a signgrid.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SignError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let (Some(templates), Some(base)) = (&config.templates, path.parent()) {
            if templates.is_relative() {
                config.templates = Some(base.join(templates));
            }
        }
        Ok(config)
    }

    /// Load `dir/signgrid.yaml` if it exists, otherwise the defaults.
    pub fn discover(dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Ok((Self::load(&path)?, Some(path)))
        } else {
            Ok((Self::default(), None))
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SignError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SignError::Encode {
            message: e.to_string(),
        })
    }

    /// Render options from this config, falling back to the defaults.
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            sign_size: self.sign_size.unwrap_or(defaults.sign_size),
            brightness: self.brightness.unwrap_or(defaults.brightness),
            image_size: self.image_size.unwrap_or(defaults.image_size),
            skip_transparent_pixels: self
                .skip_transparent
                .unwrap_or(defaults.skip_transparent_pixels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: build").unwrap();

        assert_eq!(config.output, PathBuf::from("build"));
        assert!(config.sign_size.is_none());
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
sign_size: large
brightness: high
image_size: 64
skip_transparent: false
output: blueprints
templates: my-templates
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.output, PathBuf::from("blueprints"));
        assert_eq!(config.templates, Some(PathBuf::from("my-templates")));

        let options = config.render_options();
        assert_eq!(options.sign_size, SignSize::Large);
        assert_eq!(options.brightness, Brightness::High);
        assert_eq!(options.image_size, 64);
        assert!(!options.skip_transparent_pixels);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_value() {
        assert!(Config::parse("sign_size: huge").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            sign_size: Some(SignSize::Tiny),
            brightness: Some(Brightness::Low),
            ..Default::default()
        };

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("sign_size: tiny"));
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_resolves_templates_relative_to_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "templates: tpl\n").unwrap();

        let (config, path) = Config::discover(dir.path()).unwrap();
        assert_eq!(path, Some(dir.path().join(CONFIG_FILENAME)));
        assert_eq!(config.templates, Some(dir.path().join("tpl")));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempdir().unwrap();
        let (config, path) = Config::discover(dir.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config, Config::default());
    }
}
