use super::*;

#[test]
fn starts_with_nothing_active() {
    let selection = ProjectSelection::default();
    assert_eq!(selection.active(), None);
    assert!(!selection.is_active("alpha"));
}

#[test]
fn select_replaces_previous_choice() {
    let mut selection = ProjectSelection::default();
    assert!(selection.select("alpha"));
    assert!(selection.is_active("alpha"));
    assert!(selection.select("beta"));
    assert!(selection.is_active("beta"));
    assert!(!selection.is_active("alpha"));
}

#[test]
fn reselecting_same_id_reports_no_change() {
    let mut selection = ProjectSelection::default();
    selection.select("alpha");
    assert!(!selection.select("alpha"));
    assert_eq!(selection.active(), Some("alpha"));
}
