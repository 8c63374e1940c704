use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let value = serde_json::from_str(&contents)?;
    Ok(value)
}

/// Like [`load_json`], but a missing or malformed file yields `T::default()`.
///
/// A missing file is normal on first start and is only logged at debug level.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path) {
        Ok(value) => value,
        Err(StorageError::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "file absent, using empty default");
            T::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load, using empty default");
            T::default()
        }
    }
}

/// Serialize as pretty JSON and write via a temp file + rename.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(|e| StorageError::io(&tmp_path, e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| StorageError::io(path, e))?;

    tracing::info!(path = %path.display(), "saved");
    Ok(())
}
