use std::fs;

use radrep_core::catalog_paths;
use radrep_core::models::catalog::{Preset, Selection};
use radrep_storage::catalogs::{
    import_study_catalog, load_mammography_catalog, load_presets, load_study_catalog,
    load_templates, save_presets,
};
use radrep_storage::error::StorageError;
use tempfile::TempDir;

fn write(dir: &TempDir, rel: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

const CATALOG: &str = r#"{
  "исследования": [
    {
      "id": "ogk",
      "название": "ОГК",
      "сокращение": "ОГК",
      "шаблон_заголовка": "Рентгенография {сокращение}.",
      "патологии": []
    }
  ]
}"#;

#[test]
fn missing_catalog_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(load_study_catalog(dir.path()).is_empty());
    let mammo = load_mammography_catalog(dir.path());
    assert!(mammo.densities.is_empty());
    assert!(mammo.pathologies.is_empty());
    assert!(load_templates(dir.path()).is_empty());
}

#[test]
fn malformed_catalog_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    write(&dir, "xray_constructor/config.json", "{ not json");
    assert!(load_study_catalog(dir.path()).is_empty());
}

#[test]
fn catalog_loads_with_defaults() {
    let dir = TempDir::new().unwrap();
    write(&dir, "xray_constructor/config.json", CATALOG);

    let catalog = load_study_catalog(dir.path());
    let study = catalog.study("ogk").unwrap();
    assert_eq!(study.paragraph_order, ["слева", "справа"]);
    assert!(study.default_description.is_none());
}

#[test]
fn import_requires_studies_key() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", CATALOG);
    let bad = write(&dir, "bad.json", r#"{"studies": []}"#);

    assert_eq!(import_study_catalog(&good).unwrap().studies.len(), 1);
    assert!(matches!(
        import_study_catalog(&bad),
        Err(StorageError::InvalidCatalog(_))
    ));
    assert!(matches!(
        import_study_catalog(&dir.path().join("absent.json")),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn presets_persist_through_a_file() {
    let dir = TempDir::new().unwrap();
    let path = catalog_paths::constructor_presets(dir.path());
    assert!(load_presets(&path).is_empty());

    let presets = vec![Preset {
        name: "Пневмония справа".into(),
        study_id: "ogk".into(),
        selections: vec![Selection::new("pneumonia", "right")],
    }];
    save_presets(&path, &presets).unwrap();

    assert_eq!(load_presets(&path), presets);
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"исследование_id\""));
    assert!(raw.contains("\"pathology_id\""));
}

#[test]
fn mammography_files_load_independently() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "mammography/densities.json",
        r#"{"A": {"description": "жировая"}}"#,
    );

    let catalog = load_mammography_catalog(dir.path());
    assert_eq!(catalog.densities["A"].description, "жировая");
    assert!(catalog.pathologies.is_empty());
}
