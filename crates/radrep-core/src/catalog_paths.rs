//! Catalog file layout conventions.
//!
//! Pure path-building functions. These define where each modality's static
//! catalog lives relative to the configured catalog directory.

use std::path::{Path, PathBuf};

pub const CONSTRUCTOR_DIR: &str = "xray_constructor";
pub const MAMMOGRAPHY_DIR: &str = "mammography";

pub fn constructor_config(root: &Path) -> PathBuf {
    root.join(CONSTRUCTOR_DIR).join("config.json")
}

pub fn constructor_presets(root: &Path) -> PathBuf {
    root.join(CONSTRUCTOR_DIR).join("presets.json")
}

pub fn mammography_densities(root: &Path) -> PathBuf {
    root.join(MAMMOGRAPHY_DIR).join("densities.json")
}

pub fn mammography_pathologies(root: &Path) -> PathBuf {
    root.join(MAMMOGRAPHY_DIR).join("pathologies.json")
}

pub fn templates(root: &Path) -> PathBuf {
    root.join("templates.json")
}
