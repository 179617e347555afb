use super::*;

#[test]
fn default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggled_flips_and_round_trips() {
    assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    assert_eq!(MenuState::Open.toggled().toggled(), MenuState::Open);
}

#[test]
fn aria_values_are_strings_and_negations() {
    let mut state = MenuState::Closed;
    for _ in 0..5 {
        let expanded = state.aria_expanded();
        let hidden = state.aria_hidden();
        assert!(matches!(expanded, "true" | "false"));
        assert!(matches!(hidden, "true" | "false"));
        assert_ne!(expanded, hidden);
        state = state.toggled();
    }
}

#[test]
fn closed_reports_collapsed_and_hidden() {
    assert_eq!(MenuState::Closed.aria_expanded(), "false");
    assert_eq!(MenuState::Closed.aria_hidden(), "true");
}
