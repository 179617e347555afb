//! Light/dark theme switch.
//!
//! The `data-theme` attribute on `<html>` is the single source of truth for
//! what is on screen; the icon class and `aria-pressed` follow it. The stored
//! value only seeds that attribute at install and records each switch.
//!
//! TRADE-OFFS
//! ==========
//! A store that rejects writes (private mode, quota) costs the preference on
//! the next visit, not the switch itself.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::state::aria_bool;
use crate::state::theme::Theme;
use crate::surface::{Event, EventKind, Surface, Target};
use crate::util::storage::Store;

/// Read the stored preference, falling back to the configured default.
pub fn read_preference(store: &dyn Store, cfg: &ThemeConfig) -> Theme {
    match store.get(&cfg.storage_key) {
        None => cfg.default_theme,
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            log::warn!("theme: ignoring stored preference: {err}");
            cfg.default_theme
        }),
    }
}

pub struct ThemeSwitch<S: Surface> {
    surface: S,
    toggle: S::Element,
    icon: Option<S::Element>,
    cfg: ThemeConfig,
    store: Rc<dyn Store>,
}

impl<S: Surface> ThemeSwitch<S> {
    /// Apply the stored theme and bind the toggle. `None` if the toggle is
    /// missing, in which case nothing is applied.
    pub fn install(surface: &S, cfg: &ThemeConfig, store: Rc<dyn Store>) -> Option<Rc<Self>> {
        let Some(toggle) = surface.element_by_id(&cfg.toggle_id) else {
            log::debug!("theme: toggle #{} missing, theme switching disabled", cfg.toggle_id);
            return None;
        };
        let icon = surface.query_in(&toggle, &cfg.icon_selector);

        let switch = Rc::new(Self { surface: surface.clone(), toggle: toggle.clone(), icon, cfg: cfg.clone(), store });
        switch.apply(read_preference(switch.store.as_ref(), &switch.cfg));

        let s = Rc::clone(&switch);
        surface.listen(
            Target::Element(toggle),
            EventKind::Click,
            Rc::new(move |_ev: &Event<S::Element>| {
                s.toggle();
            }),
        );
        Some(switch)
    }

    /// Theme currently on the root element, if it is a recognized one.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        let root = self.surface.root()?;
        let raw = self.surface.attribute(&root, &self.cfg.root_attribute)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::debug!("theme: root carries {err}");
                None
            }
        }
    }

    /// Switch to the complement of the applied theme and persist it.
    pub fn toggle(&self) -> Theme {
        let next = Theme::next_after(self.current());
        self.apply(next);
        if let Err(err) = self.store.set(&self.cfg.storage_key, next.as_str()) {
            log::warn!("theme: preference not saved: {err}");
        }
        log::debug!("theme: switched to {next}");
        next
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = self.surface.root() {
            self.surface.set_attribute(&root, &self.cfg.root_attribute, theme.as_str());
        }
        if let Some(icon) = &self.icon {
            let class = match theme {
                Theme::Dark => &self.cfg.dark_icon_class,
                Theme::Light => &self.cfg.light_icon_class,
            };
            self.surface.set_class_name(icon, class);
        }
        self.surface.set_attribute(&self.toggle, "aria-pressed", aria_bool(theme.pressed()));
    }
}
