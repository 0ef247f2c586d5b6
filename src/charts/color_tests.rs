use super::*;

#[test]
fn named_colors_parse() {
    assert_eq!(Color::parse("steelblue").unwrap(), Color::rgb(70, 130, 180));
    assert_eq!(Color::parse("black").unwrap(), Color::BLACK);
    assert_eq!(Color::parse("Grey").unwrap(), Color::parse("gray").unwrap());
}

#[test]
fn six_digit_hex_parses() {
    assert_eq!(Color::parse("#4682b4").unwrap(), Color::rgb(70, 130, 180));
    assert_eq!(Color::parse("#FF0000").unwrap(), Color::rgb(255, 0, 0));
}

#[test]
fn three_digit_hex_expands() {
    assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::parse("#f00").unwrap(), Color::rgb(255, 0, 0));
}

#[test]
fn unknown_strings_are_rejected() {
    assert!(matches!(
        Color::parse("not-a-color"),
        Err(crate::error::AhauxError::InvalidColor(_))
    ));
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#gggggg").is_err());
    assert!(Color::parse("").is_err());
}

#[test]
fn resolve_defaults_to_steelblue() {
    assert_eq!(Color::resolve(None).unwrap(), DEFAULT_SERIES);
    assert_eq!(Color::resolve(Some("black")).unwrap(), Color::BLACK);
    assert!(Color::resolve(Some("bogus")).is_err());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(Color::parse("  steelblue ").unwrap(), DEFAULT_SERIES);
}
