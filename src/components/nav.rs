//! Mobile navigation menu.
//!
//! The hamburger trigger opens and closes the panel. While open, page scroll
//! is locked with `overflow: hidden` on `<body>`. Every close path (link
//! click inside the panel, click outside, trigger, smooth-scroll navigation)
//! goes through [`Menu::close`].

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::NavConfig;
use crate::state::menu::MenuState;
use crate::surface::{Event, EventKind, Surface, Target};

const OVERFLOW: &str = "overflow";

pub struct Menu<S: Surface> {
    surface: S,
    trigger: S::Element,
    panel: S::Element,
    cfg: NavConfig,
    state: Cell<MenuState>,
    /// Body `overflow` value seen just before the menu locked scrolling.
    saved_overflow: RefCell<Option<String>>,
}

impl<S: Surface> Menu<S> {
    /// Bind the menu, or `None` if the trigger or panel is missing.
    pub fn install(surface: &S, cfg: &NavConfig) -> Option<Rc<Self>> {
        let trigger = surface.element_by_id(&cfg.trigger_id);
        let panel = surface.query(&cfg.panel_selector);
        let (Some(trigger), Some(panel)) = (trigger, panel) else {
            log::debug!("nav: trigger or panel missing, menu disabled");
            return None;
        };

        let menu = Rc::new(Self {
            surface: surface.clone(),
            trigger: trigger.clone(),
            panel: panel.clone(),
            cfg: cfg.clone(),
            state: Cell::new(MenuState::Closed),
            saved_overflow: RefCell::new(None),
        });
        menu.render();

        let m = Rc::clone(&menu);
        surface.listen(Target::Element(trigger), EventKind::Click, Rc::new(move |_ev: &Event<S::Element>| m.toggle()));

        for link in surface.query_all_in(&panel, &cfg.link_selector) {
            let m = Rc::clone(&menu);
            surface.listen(Target::Element(link), EventKind::Click, Rc::new(move |_ev: &Event<S::Element>| m.close()));
        }

        let m = Rc::clone(&menu);
        surface.listen(
            Target::Document,
            EventKind::Click,
            Rc::new(move |ev: &Event<S::Element>| {
                if m.is_open() && ev.target().is_some_and(|t| !m.owns(t)) {
                    m.close();
                }
            }),
        );

        Some(menu)
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) {
        match self.state.get().toggled() {
            MenuState::Open => self.open(),
            MenuState::Closed => self.close(),
        }
    }

    pub fn open(&self) {
        if self.is_open() {
            return;
        }
        if let Some(body) = self.surface.body() {
            self.saved_overflow.replace(Some(self.surface.style(&body, OVERFLOW)));
            self.surface.set_style(&body, OVERFLOW, "hidden");
        }
        self.state.set(MenuState::Open);
        self.render();
        log::debug!("nav: menu opened");
    }

    /// Close the menu and restore page scrolling. No-op when already closed.
    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        if let Some(body) = self.surface.body() {
            let prior = self.saved_overflow.take().unwrap_or_default();
            self.surface.set_style(&body, OVERFLOW, &prior);
        }
        self.state.set(MenuState::Closed);
        self.render();
        log::debug!("nav: menu closed");
    }

    /// Whether `node` is the trigger, the panel, or inside either.
    fn owns(&self, node: &S::Element) -> bool {
        self.surface.contains(&self.trigger, node) || self.surface.contains(&self.panel, node)
    }

    fn render(&self) {
        let state = self.state.get();
        let open = state.is_open();
        self.surface.set_attribute(&self.trigger, "aria-expanded", state.aria_expanded());
        self.surface.set_attribute(&self.panel, "aria-hidden", state.aria_hidden());
        self.surface.set_class(&self.trigger, &self.cfg.trigger_open_class, open);
        self.surface.set_class(&self.panel, &self.cfg.panel_open_class, open);
    }
}
