use radrep_core::models::mammography::{BreastSide, MammographyCatalog};
use radrep_session::PanelState;
use radrep_session::mammography::MammographySession;
use serde_json::json;

fn catalog() -> MammographyCatalog {
    serde_json::from_value(json!({
        "densities": {"B": {"description": "фиброзно-жировая"}, "C": {"description": "плотная"}},
        "pathologies": {
            "норма": {
                "name": "Норма",
                "description": {
                    "правая": "Правая: {density}.",
                    "левая": "Левая: {density}."
                },
                "conclusion": "Норма.",
                "birads": {"правая": 1, "левая": 1},
                "followup": "Контроль через 2 года."
            },
            "узел": {
                "name": "Узел",
                "description_replacements": {
                    "левая": {"search": "Левая:", "replace": "Левая: узел,"}
                },
                "requires_side": true,
                "conclusion": "Узел {side}.",
                "birads": {"правая": 4, "левая": 1},
                "followup": "Биопсия."
            }
        }
    }))
    .expect("catalog json")
}

#[test]
fn defaults_and_pickers() {
    let mut session = MammographySession::new(catalog());
    assert_eq!(session.selection().density, "B");
    assert!(!session.side_required());
    assert_eq!(session.state(), PanelState::Empty);

    assert!(session.set_density("C"));
    assert!(!session.set_density("E"));
    assert!(session.set_pathology("узел"));
    assert!(!session.set_pathology("нет"));
    assert!(session.side_required());
}

#[test]
fn generate_fills_editor_and_splits() {
    let mut session = MammographySession::new(catalog());
    session.set_pathology("узел");
    session.set_side(BreastSide::Left);

    let text = session.generate().unwrap();
    assert_eq!(text.description, "Правая: фиброзно-жировая.\n\nЛевая: узел, фиброзно-жировая.");
    assert_eq!(
        text.conclusion,
        "ЗАКЛЮЧЕНИЕ: Узел слева.\nBIRADS 1 справа, BIRADS 4 слева\n\nБиопсия."
    );
    assert_eq!(session.description_text(), text.description);
    assert_eq!(session.conclusion_text(), text.conclusion);
    assert_eq!(session.state(), PanelState::Generated);
}

#[test]
fn edited_editor_is_what_gets_copied() {
    let mut session = MammographySession::new(catalog());
    session.generate().unwrap();
    session.set_report_text("Правки.\n\nЗаключение: своё");
    assert_eq!(session.description_text(), "Правки.");
    assert_eq!(session.conclusion_text(), "Заключение: своё");
    assert_eq!(session.state(), PanelState::PartiallyFilled);
}
