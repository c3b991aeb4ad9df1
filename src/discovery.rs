//! Input image discovery.
//!
//! Expands command-line inputs into a list of image files. Files are taken
//! as given; directories are walked recursively for known image extensions.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SignError};

/// Extensions treated as images when scanning directories.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Check whether a path has a known image extension (case-insensitive).
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Recursively collect image files under `root`, sorted by path.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_image_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    images.sort();
    images
}

/// Expand files and directories into the list of images to convert.
///
/// Explicit files are kept in argument order even without an image
/// extension. Missing paths are an error.
pub fn collect_images(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            images.extend(scan_directory(input));
        } else if input.is_file() {
            images.push(input.clone());
        } else {
            return Err(SignError::Io {
                path: input.clone(),
                message: "File not found".to_string(),
            });
        }
    }

    Ok(images)
}
