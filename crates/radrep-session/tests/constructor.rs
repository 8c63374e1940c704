use std::cell::Cell;
use std::rc::Rc;

use radrep_compose::GeneratedText;
use radrep_core::models::catalog::{Selection, StudyCatalog};
use radrep_session::constructor::{ConstructorSession, CopyStep};
use radrep_session::{Clipboard, MemoryClipboard, PanelState, SessionError};
use serde_json::json;
use tempfile::TempDir;

fn catalog() -> StudyCatalog {
    serde_json::from_value(json!({
        "исследования": [
            {
                "id": "ogk",
                "название": "Органы грудной клетки",
                "сокращение": "ОГК",
                "шаблон_заголовка": "Рентгенография {сокращение}.",
                "текст_по_умолчанию_описание": {
                    "слева": "Слева: норма.",
                    "справа": "Справа: норма."
                },
                "текст_по_умолчанию_заключение": "Без патологии.",
                "патологии": [
                    {
                        "id": "pneumonia",
                        "название": "Пневмония",
                        "стороны": [
                            {"id": "left", "название": "Слева"},
                            {"id": "right", "название": "Справа"}
                        ],
                        "шаблоны": {
                            "описание": {
                                "left": "Слева: инфильтрация.",
                                "right": "Справа: инфильтрация."
                            },
                            "заключение": {
                                "left": "Пневмония слева",
                                "right": "Пневмония справа"
                            }
                        }
                    }
                ]
            },
            {
                "id": "skull",
                "название": "Череп",
                "сокращение": "Ч",
                "патологии": []
            }
        ]
    }))
    .expect("catalog json")
}

fn session() -> ConstructorSession {
    ConstructorSession::new(catalog(), Vec::new(), None)
}

#[test]
fn first_study_is_selected() {
    let session = session();
    assert_eq!(session.study().map(|s| s.id.as_str()), Some("ogk"));
    assert_eq!(
        session.description_text(),
        "Рентгенография ОГК.\n\nСлева: норма.\n\nСправа: норма."
    );
    assert_eq!(session.conclusion_text(), "Без патологии.");
    assert_eq!(session.state(), PanelState::Empty);
}

#[test]
fn adding_without_side_uses_first_side() {
    let mut session = session();
    session.add_pathology("pneumonia", None).unwrap();
    assert_eq!(session.selections(), [Selection::new("pneumonia", "left")]);
    assert_eq!(session.conclusion_text(), "Пневмония слева");
    assert_eq!(session.state(), PanelState::Valid);
}

#[test]
fn side_change_and_removal_recompose() {
    let mut session = session();
    session.add_pathology("pneumonia", Some("left")).unwrap();
    session.add_pathology("pneumonia", Some("right")).unwrap();
    assert_eq!(session.conclusion_text(), "Пневмония слева. Пневмония справа");

    assert!(session.set_side(0, "right"));
    assert!(!session.set_side(5, "right"));
    assert!(session.description_text().contains("Справа: инфильтрация. Справа: инфильтрация."));

    assert_eq!(session.remove_at(1), Some(Selection::new("pneumonia", "right")));
    assert_eq!(session.remove_at(1), None);
    assert_eq!(session.selections().len(), 1);
}

#[test]
fn unknown_pathology_is_rejected() {
    let mut session = session();
    let err = session.add_pathology("fracture", None).unwrap_err();
    assert!(matches!(err, SessionError::UnknownPathology { .. }));
    assert!(session.selections().is_empty());
}

#[test]
fn changing_study_drops_selections() {
    let mut session = session();
    session.add_pathology("pneumonia", None).unwrap();
    session.select_study("skull").unwrap();
    assert!(session.selections().is_empty());
    assert!(session.select_study("spine").is_err());
    assert_eq!(session.study().map(|s| s.id.as_str()), Some("skull"));
}

#[test]
fn form_report_alternates_description_and_conclusion() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut session = session();
    session.set_on_generated(Box::new(move |_: &GeneratedText| {
        counter.set(counter.get() + 1);
    }));
    session.add_pathology("pneumonia", Some("right")).unwrap();
    let mut board = MemoryClipboard::new();

    assert_eq!(session.form_report(&mut board), CopyStep::Conclusion);
    assert_eq!(board.text().unwrap(), session.description_text());
    assert_eq!(session.state(), PanelState::Generated);

    assert_eq!(session.form_report(&mut board), CopyStep::Description);
    assert_eq!(board.text().unwrap(), "Пневмония справа");
    assert_eq!(calls.get(), 1);
}

#[test]
fn editing_resets_the_copy_step() {
    let mut session = session();
    let mut board = MemoryClipboard::new();
    session.form_report(&mut board);
    session.add_pathology("pneumonia", None).unwrap();
    assert_eq!(session.copy_step(), CopyStep::Description);
}

#[test]
fn presets_save_load_delete_and_persist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    let mut session = ConstructorSession::new(catalog(), Vec::new(), Some(path.clone()));

    session.add_pathology("pneumonia", Some("right")).unwrap();
    assert!(matches!(
        session.save_preset("   "),
        Err(SessionError::EmptyPresetName)
    ));
    session.save_preset(" Пневмония ").unwrap();
    assert_eq!(session.presets()[0].name, "Пневмония");
    assert!(path.exists());

    session.select_study("skull").unwrap();
    session.load_preset(0).unwrap();
    assert_eq!(session.study().map(|s| s.id.as_str()), Some("ogk"));
    assert_eq!(session.selections(), [Selection::new("pneumonia", "right")]);
    assert!(matches!(
        session.load_preset(3),
        Err(SessionError::NoSuchPreset(3))
    ));

    let reloaded = radrep_storage::catalogs::load_presets(&path);
    assert_eq!(reloaded.len(), 1);

    session.delete_preset(0).unwrap();
    assert!(session.presets().is_empty());
    assert!(radrep_storage::catalogs::load_presets(&path).is_empty());
}

#[test]
fn export_writes_presets_elsewhere() {
    let dir = TempDir::new().unwrap();
    let mut session = session();
    session.save_preset("Пустой").unwrap();
    let out = dir.path().join("export.json");
    session.export_presets(&out).unwrap();
    assert_eq!(radrep_storage::catalogs::load_presets(&out).len(), 1);
}

#[test]
fn bad_import_keeps_current_catalog() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"studies": []}"#).unwrap();

    let mut session = session();
    session.add_pathology("pneumonia", None).unwrap();
    assert!(session.import_catalog(&bad).is_err());
    assert_eq!(session.catalog().studies.len(), 2);
    assert_eq!(session.selections().len(), 1);

    let good = dir.path().join("good.json");
    std::fs::write(
        &good,
        r#"{"исследования": [{"id": "hand", "название": "Кисть", "патологии": []}]}"#,
    )
    .unwrap();
    session.import_catalog(&good).unwrap();
    assert_eq!(session.study().map(|s| s.id.as_str()), Some("hand"));
    assert!(session.selections().is_empty());
}
