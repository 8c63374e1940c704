use radrep_compose::error::ComposeError;
use radrep_compose::mammography::{
    MammographySelection, compose, compose_report, description_for_side,
};
use radrep_core::models::mammography::{BreastSide, MammographyCatalog};
use serde_json::json;

fn catalog() -> MammographyCatalog {
    serde_json::from_value(json!({
        "densities": {
            "A": {"description": "жировая"},
            "B": {"description": "фиброзно-жировая"}
        },
        "pathologies": {
            "норма": {
                "name": "Норма",
                "description": {
                    "правая": "Правая МЖ: ткань {density}. Образований нет.",
                    "левая": "Левая МЖ: ткань {density}. Образований нет."
                },
                "conclusion": "Патологии не выявлено.",
                "birads": {"правая": 1, "левая": 1},
                "followup": "Контроль через 2 года."
            },
            "киста": {
                "name": "Киста",
                "description_replacements": {
                    "правая": {"search": "Образований нет.", "replace": "Киста 10 мм."},
                    "левая": {"search": "Образований нет.", "replace": "Киста 8 мм."}
                },
                "requires_side": true,
                "conclusion": "Киста {side}.",
                "birads": {"правая": "2", "левая": "1"},
                "followup": "Контроль через год."
            },
            "фиброаденоматоз": {
                "name": "ФАМ",
                "description": {
                    "правая": "Правая МЖ: {density}, фиброз.",
                    "левая": "Левая МЖ: {density}, фиброз."
                },
                "conclusion": "Фиброаденоматоз.",
                "birads": {"правая": 2},
                "followup": ""
            }
        }
    }))
    .expect("catalog json")
}

#[test]
fn default_selection_is_normal_density_b_right() {
    let selection = MammographySelection::default();
    assert_eq!(selection.density, "B");
    assert_eq!(selection.pathology_key, "норма");
    assert_eq!(selection.side, BreastSide::Right);
}

#[test]
fn normal_report_layout() {
    let report = compose_report(&catalog(), &MammographySelection::default()).unwrap();
    assert_eq!(
        report,
        "Правая МЖ: ткань фиброзно-жировая. Образований нет.\n\
\n\
Левая МЖ: ткань фиброзно-жировая. Образований нет.\n\
\n\
ЗАКЛЮЧЕНИЕ: Патологии не выявлено.\n\
BIRADS 1 СПРАВА И СЛЕВА\n\
\n\
Контроль через 2 года."
    );
}

#[test]
fn replacement_applies_only_on_affected_side() {
    let catalog = catalog();
    let selection = MammographySelection {
        density: "A".into(),
        pathology_key: "киста".into(),
        side: BreastSide::Left,
    };
    assert_eq!(
        description_for_side(&catalog, &selection, BreastSide::Left),
        "Левая МЖ: ткань жировая. Киста 8 мм."
    );
    assert_eq!(
        description_for_side(&catalog, &selection, BreastSide::Right),
        "Правая МЖ: ткань жировая. Образований нет."
    );
}

#[test]
fn sided_conclusion_and_birads_follow_the_side() {
    let catalog = catalog();
    let mut selection = MammographySelection {
        pathology_key: "киста".into(),
        ..MammographySelection::default()
    };

    let right = compose_report(&catalog, &selection).unwrap();
    assert!(right.contains("ЗАКЛЮЧЕНИЕ: Киста справа."));
    assert!(right.contains("BIRADS 2 справа, BIRADS 1 слева"));

    selection.side = BreastSide::Left;
    let left = compose_report(&catalog, &selection).unwrap();
    assert!(left.contains("ЗАКЛЮЧЕНИЕ: Киста слева."));
    assert!(left.contains("BIRADS 1 справа, BIRADS 2 слева"));
}

#[test]
fn own_description_substitutes_density() {
    let selection = MammographySelection {
        pathology_key: "фиброаденоматоз".into(),
        ..MammographySelection::default()
    };
    let report = compose_report(&catalog(), &selection).unwrap();
    assert!(report.starts_with("Правая МЖ: фиброзно-жировая, фиброз."));
    assert!(report.contains("BIRADS 2 СПРАВА И СЛЕВА"));
}

#[test]
fn unknown_density_leaves_placeholder_empty() {
    let selection = MammographySelection {
        density: "D".into(),
        ..MammographySelection::default()
    };
    assert_eq!(
        description_for_side(&catalog(), &selection, BreastSide::Right),
        "Правая МЖ: ткань . Образований нет."
    );
}

#[test]
fn split_puts_birads_and_followup_in_conclusion() {
    let text = compose(&catalog(), &MammographySelection::default()).unwrap();
    assert!(text.description.ends_with("Левая МЖ: ткань фиброзно-жировая. Образований нет."));
    assert_eq!(
        text.conclusion,
        "ЗАКЛЮЧЕНИЕ: Патологии не выявлено.\nBIRADS 1 СПРАВА И СЛЕВА\n\nКонтроль через 2 года."
    );
}

#[test]
fn unknown_pathology_is_an_error() {
    let selection = MammographySelection {
        pathology_key: "нет такой".into(),
        ..MammographySelection::default()
    };
    assert!(matches!(
        compose_report(&catalog(), &selection),
        Err(ComposeError::UnknownFinding(key)) if key == "нет такой"
    ));
}
