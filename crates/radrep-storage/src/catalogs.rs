//! Loaders for the static modality catalogs and constructor presets.
//!
//! Startup loads never fail: a broken catalog file degrades to an empty
//! catalog and the panel simply offers nothing to select.

use std::path::Path;

use radrep_core::catalog_paths;
use radrep_core::models::catalog::{Preset, StudyCatalog};
use radrep_core::models::mammography::MammographyCatalog;
use radrep_core::models::template::Template;

use crate::error::StorageError;
use crate::json::{load_json, load_json_or_default, save_json};

/// Top-level key every constructor catalog must carry.
pub const STUDIES_KEY: &str = "исследования";

pub fn load_study_catalog(root: &Path) -> StudyCatalog {
    let catalog: StudyCatalog = load_json_or_default(&catalog_paths::constructor_config(root));
    tracing::info!(studies = catalog.studies.len(), "constructor catalog loaded");
    catalog
}

/// Load a constructor catalog chosen by the user.
///
/// Unlike startup loading this is strict: the file must parse and must
/// contain the studies key, so a bad import never replaces a good catalog.
pub fn import_study_catalog(path: &Path) -> Result<StudyCatalog, StorageError> {
    let raw: serde_json::Value = load_json(path)?;
    if raw.get(STUDIES_KEY).is_none() {
        return Err(StorageError::InvalidCatalog(format!(
            "{} has no \"{STUDIES_KEY}\" key",
            path.display()
        )));
    }
    let catalog: StudyCatalog = serde_json::from_value(raw)?;
    tracing::info!(
        path = %path.display(),
        studies = catalog.studies.len(),
        "constructor catalog imported"
    );
    Ok(catalog)
}

pub fn load_presets(path: &Path) -> Vec<Preset> {
    load_json_or_default(path)
}

pub fn save_presets(path: &Path, presets: &[Preset]) -> Result<(), StorageError> {
    save_json(path, presets)
}

/// Densities and pathologies live in two files; either may be absent.
pub fn load_mammography_catalog(root: &Path) -> MammographyCatalog {
    let catalog = MammographyCatalog {
        densities: load_json_or_default(&catalog_paths::mammography_densities(root)),
        pathologies: load_json_or_default(&catalog_paths::mammography_pathologies(root)),
    };
    tracing::info!(
        densities = catalog.densities.len(),
        pathologies = catalog.pathologies.len(),
        "mammography catalog loaded"
    );
    catalog
}

/// User-defined substitution templates, in addition to the built-in ones.
pub fn load_templates(root: &Path) -> Vec<Template> {
    load_json_or_default(&catalog_paths::templates(root))
}
