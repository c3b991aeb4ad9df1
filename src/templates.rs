//! Template blueprint lookup.
//!
//! Each sign size maps to a fixed pair of resources: `<Stem>.sbp` (the
//! main file) and `<Stem>.sbpcfg` (its config). The bundled set is compiled
//! into the binary; a directory on disk can stand in for it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SignError};
use crate::types::SignSize;

/// Raw bytes of a template blueprint file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFiles {
    pub blueprint: Vec<u8>,
    pub config: Vec<u8>,
}

/// Source of template blueprints, keyed by sign size.
pub trait TemplateProvider {
    fn load(&self, size: SignSize) -> Result<TemplateFiles>;
}

/// Main file name for a sign size.
pub fn blueprint_file_name(size: SignSize) -> String {
    format!("{}.sbp", size.resource_stem())
}

/// Config file name for a sign size.
pub fn config_file_name(size: SignSize) -> String {
    format!("{}.sbpcfg", size.resource_stem())
}

/// Templates bundled with signgrid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    fn get(size: SignSize) -> (&'static [u8], &'static [u8]) {
        match size {
            SignSize::Tiny => (
                include_bytes!("../templates/Tiny.sbp"),
                include_bytes!("../templates/Tiny.sbpcfg"),
            ),
            SignSize::Medium => (
                include_bytes!("../templates/Medium.sbp"),
                include_bytes!("../templates/Medium.sbpcfg"),
            ),
            SignSize::Large => (
                include_bytes!("../templates/Large.sbp"),
                include_bytes!("../templates/Large.sbpcfg"),
            ),
        }
    }
}

impl TemplateProvider for BuiltinTemplates {
    fn load(&self, size: SignSize) -> Result<TemplateFiles> {
        let (blueprint, config) = Self::get(size);
        Ok(TemplateFiles {
            blueprint: blueprint.to_vec(),
            config: config.to_vec(),
        })
    }
}

/// Templates read from a directory holding `Tiny.sbp`, `Tiny.sbpcfg`, etc.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateProvider for DirTemplates {
    fn load(&self, size: SignSize) -> Result<TemplateFiles> {
        Ok(TemplateFiles {
            blueprint: read_resource(&self.root.join(blueprint_file_name(size)))?,
            config: read_resource(&self.root.join(config_file_name(size)))?,
        })
    }
}

fn read_resource(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| SignError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read template: {}", e),
    })
}
