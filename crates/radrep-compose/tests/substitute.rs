use radrep_compose::substitute;
use radrep_core::models::modality::Modality;
use radrep_core::models::template::Template;

#[test]
fn replacements_run_in_insertion_order() {
    let template = Template::new("Стандартный", Modality::Xray)
        .replace("без изменений", "без патологических изменений")
        .replace("патологических", "видимых патологических");

    assert_eq!(
        substitute::apply("легкие без изменений", &template),
        "легкие без видимых патологических изменений"
    );
}

#[test]
fn order_changes_the_result() {
    let forward = Template::new("a", Modality::Xray)
        .replace("норма", "здоров")
        .replace("здоров", "признаков патологии не определяется");
    let reverse = Template::new("b", Modality::Xray)
        .replace("здоров", "признаков патологии не определяется")
        .replace("норма", "здоров");

    assert_eq!(
        substitute::apply("норма", &forward),
        "признаков патологии не определяется"
    );
    assert_eq!(substitute::apply("норма", &reverse), "здоров");
}

#[test]
fn every_occurrence_is_replaced() {
    let template = Template::new("t", Modality::Mammography).replace("N", "норма");
    assert_eq!(substitute::apply("N и N", &template), "норма и норма");
}

#[test]
fn empty_search_is_ignored() {
    let template = Template::new("t", Modality::Xray).replace("", "x");
    assert_eq!(substitute::apply("текст", &template), "текст");
}

#[test]
fn text_without_matches_is_unchanged() {
    let template = Template::new("t", Modality::Densitometry).replace("остеопороз", "ОП");
    assert_eq!(substitute::apply("норма", &template), "норма");
}
