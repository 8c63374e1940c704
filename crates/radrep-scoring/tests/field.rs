use radrep_scoring::field::{FormatClass, ScoreField, canonicalize, format, parse};

#[test]
fn criterion_accepts_single_digit_forms() {
    assert_eq!(parse("1.5", FormatClass::Criterion), Some(1.5));
    assert_eq!(parse("-2.5", FormatClass::Criterion), Some(-2.5));
    assert_eq!(parse("3", FormatClass::Criterion), Some(3.0));
    assert_eq!(parse(" -1,2 ", FormatClass::Criterion), Some(-1.2));
}

#[test]
fn criterion_rejects_overflowing_text() {
    assert_eq!(parse("12", FormatClass::Criterion), None);
    assert_eq!(parse("1.25", FormatClass::Criterion), None);
    assert_eq!(parse("1.", FormatClass::Criterion), None);
    assert_eq!(parse("-", FormatClass::Criterion), None);
    assert_eq!(parse("abc", FormatClass::Criterion), None);
    assert_eq!(parse("-5.5", FormatClass::Criterion), None);
}

#[test]
fn zero_is_present_not_absent() {
    assert_eq!(parse("0.0", FormatClass::Criterion), Some(0.0));
    assert_eq!(parse("0.000", FormatClass::Density), Some(0.0));
    assert_eq!(parse("0", FormatClass::Frax), Some(0.0));
    assert_eq!(parse("", FormatClass::Criterion), None);
    assert_eq!(parse("   ", FormatClass::Density), None);
    assert_eq!(parse("", FormatClass::Frax), None);
}

#[test]
fn negative_zero_formats_as_zero() {
    assert_eq!(canonicalize("-0.0", FormatClass::Criterion).as_deref(), Some("0.0"));
}

#[test]
fn density_requires_three_decimals() {
    assert_eq!(parse("0.850", FormatClass::Density), Some(0.85));
    assert_eq!(parse("0.85", FormatClass::Density), None);
    assert_eq!(parse("10.850", FormatClass::Density), None);
    assert_eq!(parse("0.8501", FormatClass::Density), None);
    assert_eq!(parse("2.500", FormatClass::Density), None);
}

#[test]
fn frax_is_clamped_integer() {
    assert_eq!(parse("42", FormatClass::Frax), Some(42.0));
    assert_eq!(parse("100", FormatClass::Frax), Some(100.0));
    assert_eq!(parse("250", FormatClass::Frax), Some(100.0));
    assert_eq!(parse("12.5", FormatClass::Frax), None);
    assert_eq!(parse("-3", FormatClass::Frax), None);
}

#[test]
fn canonical_text_is_a_fixed_point() {
    for (raw, class) in [
        ("1.5", FormatClass::Criterion),
        ("-2.0", FormatClass::Criterion),
        ("0.850", FormatClass::Density),
        ("1.999", FormatClass::Density),
        ("7", FormatClass::Frax),
    ] {
        let once = canonicalize(raw, class).expect("canonical input parses");
        assert_eq!(once, raw);
        assert_eq!(canonicalize(&once, class).as_deref(), Some(raw));
    }
}

#[test]
fn format_uses_class_precision() {
    assert_eq!(format(1.0, FormatClass::Criterion), "1.0");
    assert_eq!(format(0.85, FormatClass::Density), "0.850");
    assert_eq!(format(12.0, FormatClass::Frax), "12");
}

#[test]
fn score_field_tracks_raw_and_value() {
    let mut field = ScoreField::with_text(FormatClass::Density, "1.234");
    assert_eq!(field.value(), Some(1.234));
    assert_eq!(field.formatted().as_deref(), Some("1.234"));

    field.set_text("1.2");
    assert_eq!(field.text(), "1.2");
    assert!(!field.is_present());
    assert!(!field.is_empty());

    field.clear();
    assert!(field.is_empty());
    assert_eq!(field.value(), None);
}
