use super::*;

use futures::executor::LocalPool;

use crate::components::test_page::TestPage;
use crate::state::form::SubmissionPhase;
use crate::surface::memory::MemorySurface;
use crate::util::clock::FixedClock;
use crate::util::manual_timer::ManualTimer;
use crate::util::storage::MemoryStore;

struct Env {
    pool: LocalPool,
    timer: ManualTimer,
    store: Rc<MemoryStore>,
}

impl Env {
    fn new() -> Self {
        Self { pool: LocalPool::new(), timer: ManualTimer::new(), store: Rc::new(MemoryStore::new()) }
    }

    fn services(&self) -> Services {
        Services {
            store: self.store.clone(),
            timer: Rc::new(self.timer.clone()),
            spawner: Rc::new(self.pool.spawner()),
            clock: Rc::new(FixedClock(2026)),
        }
    }
}

#[test]
fn full_page_installs_everything() {
    let page = TestPage::new();
    let env = Env::new();
    let controller = PageController::install(&page.surface, &PageConfig::default(), env.services());

    assert!(controller.menu().is_some());
    assert!(controller.theme().is_some());
    assert_eq!(controller.projects().map(|p| p.bound_count()), Some(2));
    assert!(controller.contact().is_some());
    assert_eq!(controller.anchor_count(), 3);
    assert_eq!(
        controller.summary(),
        "menu=on theme=on projects=2 contact=on anchors=3 header=on footer=on"
    );
    assert_eq!(page.surface.text(&page.year), "2026");
}

#[test]
fn empty_page_installs_nothing() {
    let surface = MemorySurface::new();
    let env = Env::new();
    let controller = PageController::install(&surface, &PageConfig::default(), env.services());

    assert_eq!(
        controller.summary(),
        "menu=off theme=off projects=0 contact=off anchors=0 header=off footer=off"
    );
    controller.shutdown();
}

#[test]
fn anchor_navigation_closes_shared_menu() {
    let page = TestPage::new();
    let env = Env::new();
    let controller = PageController::install(&page.surface, &PageConfig::default(), env.services());
    let menu = controller.menu().unwrap();

    page.surface.click(page.hamburger);
    assert!(menu.is_open());
    page.surface.click(page.about_link);
    assert!(!menu.is_open());
    assert!((page.surface.scroll_y() - 780.0).abs() < f64::EPSILON);
}

#[test]
fn theme_persists_through_injected_store() {
    let page = TestPage::new();
    let env = Env::new();
    PageController::install(&page.surface, &PageConfig::default(), env.services());

    page.surface.click(page.theme_toggle);
    assert_eq!(env.store.get("theme").as_deref(), Some("light"));
}

#[test]
fn shutdown_cancels_submission_and_closes_menu() {
    let page = TestPage::new();
    let mut env = Env::new();
    let controller = PageController::install(&page.surface, &PageConfig::default(), env.services());
    let s = &page.surface;

    s.set_value(page.name, "Ada");
    s.set_value(page.email, "ada@example.com");
    s.set_value(page.message, "Hello");
    s.click(page.submit);
    env.pool.run_until_stalled();
    s.click(page.hamburger);

    controller.shutdown();
    env.timer.advance(1500);
    env.pool.run_until_stalled();

    let contact = controller.contact().unwrap();
    assert_eq!(contact.phase(), SubmissionPhase::Idle);
    assert!(!s.is_disabled(page.submit));
    assert_eq!(s.text(&page.status), "");
    assert!(!controller.menu().unwrap().is_open());
}

#[test]
fn custom_config_drives_selectors() {
    let page = TestPage::new();
    let env = Env::new();
    let cfg = PageConfig::from_json(r#"{"header": {"threshold": 10}, "scroll": {"header_offset": 0}}"#).unwrap();
    PageController::install(&page.surface, &cfg, env.services());

    page.surface.set_scroll_y(11.0);
    assert!(page.surface.has_class(&page.header, "header--scrolled"));
    page.surface.click(page.about_link);
    assert!((page.surface.scroll_y() - 900.0).abs() < f64::EPSILON);
}

#[test]
fn only_loading_state_defers_install() {
    assert!(!document_parsed("loading"));
    assert!(document_parsed("interactive"));
    assert!(document_parsed("complete"));
}
