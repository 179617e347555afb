use super::*;

use crate::components::test_page::TestPage;
use crate::surface::memory::MemorySurface;

fn setup() -> (TestPage, Rc<Menu<MemorySurface>>) {
    let page = TestPage::new();
    let menu = Menu::install(&page.surface, &NavConfig::default()).unwrap();
    (page, menu)
}

fn aria(page: &TestPage) -> (String, String) {
    let s = &page.surface;
    (s.attribute(&page.hamburger, "aria-expanded").unwrap(), s.attribute(&page.menu_panel, "aria-hidden").unwrap())
}

fn overflow(page: &TestPage) -> String {
    page.surface.style(&page.surface.body_id(), "overflow")
}

// =============================================================
// Install
// =============================================================

#[test]
fn install_writes_closed_state() {
    let (page, menu) = setup();
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(aria(&page), ("false".to_owned(), "true".to_owned()));
    assert!(!page.surface.has_class(&page.menu_panel, "active"));
}

#[test]
fn install_without_panel_is_none() {
    let s = MemorySurface::new();
    s.append(s.body_id(), "button").id("hamburger-menu").build();
    assert!(Menu::install(&s, &NavConfig::default()).is_none());
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn trigger_click_opens_and_locks_scroll() {
    let (page, menu) = setup();
    page.surface.click(page.hamburger);

    assert!(menu.is_open());
    assert_eq!(aria(&page), ("true".to_owned(), "false".to_owned()));
    assert!(page.surface.has_class(&page.hamburger, "hamburger--open"));
    assert!(page.surface.has_class(&page.menu_panel, "active"));
    assert_eq!(overflow(&page), "hidden");
}

#[test]
fn aria_flags_stay_negations_over_toggle_sequence() {
    let (page, menu) = setup();
    for i in 0..7 {
        page.surface.click(page.hamburger);
        let (expanded, hidden) = aria(&page);
        assert!(expanded == "true" || expanded == "false");
        assert!(hidden == "true" || hidden == "false");
        assert_ne!(expanded, hidden);
        assert_eq!(menu.is_open(), i % 2 == 0);
    }
}

#[test]
fn click_on_trigger_child_toggles_once() {
    let (page, menu) = setup();
    page.surface.click(page.hamburger_bar);
    assert!(menu.is_open());
}

// =============================================================
// Close paths
// =============================================================

#[test]
fn trigger_click_closes_and_restores_scroll() {
    let (page, menu) = setup();
    page.surface.click(page.hamburger);
    page.surface.click(page.hamburger);
    assert!(!menu.is_open());
    assert_eq!(overflow(&page), "");
}

#[test]
fn link_click_closes() {
    let (page, menu) = setup();
    page.surface.click(page.hamburger);
    page.surface.click(page.menu_link);
    assert!(!menu.is_open());
    assert_eq!(aria(&page), ("false".to_owned(), "true".to_owned()));
    assert_eq!(overflow(&page), "");
}

#[test]
fn outside_click_closes_but_panel_click_does_not() {
    let (page, menu) = setup();
    page.surface.click(page.hamburger);

    page.surface.click(page.menu_panel);
    assert!(menu.is_open());

    page.surface.click(page.outside);
    assert!(!menu.is_open());
    assert!(!page.surface.has_class(&page.hamburger, "hamburger--open"));
}

#[test]
fn close_restores_prior_overflow_value() {
    let (page, menu) = setup();
    let body = page.surface.body_id();
    page.surface.set_style(&body, "overflow", "auto");

    menu.open();
    assert_eq!(overflow(&page), "hidden");
    menu.close();
    assert_eq!(overflow(&page), "auto");
}

#[test]
fn close_when_closed_changes_nothing() {
    let (page, menu) = setup();
    let body = page.surface.body_id();
    page.surface.set_style(&body, "overflow", "scroll");
    let before = aria(&page);

    menu.close();
    menu.close();

    assert_eq!(aria(&page), before);
    assert_eq!(overflow(&page), "scroll");
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn outside_click_while_closed_is_ignored() {
    let (page, menu) = setup();
    page.surface.click(page.outside);
    assert!(!menu.is_open());
    assert_eq!(overflow(&page), "");
}
