use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn parse_accepts_only_stored_literals() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeParseError("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn display_matches_as_str() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn next_after_treats_unknown_as_not_dark() {
    let next = |raw: &str| Theme::next_after(raw.parse().ok());
    assert_eq!(next("dark"), Theme::Light);
    assert_eq!(next("light"), Theme::Dark);
    assert_eq!(next("solarized"), Theme::Dark);
    assert_eq!(Theme::next_after(None), Theme::Dark);
}

#[test]
fn pressed_only_for_light() {
    assert!(Theme::Light.pressed());
    assert!(!Theme::Dark.pressed());
}
