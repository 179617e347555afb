//! Page controller: installs every component once the document is ready.
//!
//! SYSTEM CONTEXT
//! ==============
//! The boot sequence builds a browser [`Surface`] and the browser-backed
//! [`Services`], then calls [`PageController::install`] exactly once. Tests
//! call the same entry point with a `MemorySurface` and in-memory services.
//!
//! Components are independent apart from the navigation menu, which smooth
//! scroll shares so that anchor navigation closes it through the same path.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use futures::task::LocalSpawn;

use crate::components::contact_form::ContactForm;
use crate::components::nav::Menu;
use crate::components::project_switcher::ProjectSwitcher;
use crate::components::theme_toggle::ThemeSwitch;
use crate::components::{footer_year, header, smooth_scroll};
use crate::config::PageConfig;
use crate::surface::Surface;
use crate::util::clock::Clock;
use crate::util::storage::Store;
use crate::util::timer::Timer;

/// Whether a `document.readyState` value means the DOM is already parsed,
/// so installing now is safe. Only `"loading"` has to wait for
/// `DOMContentLoaded`.
#[must_use]
pub fn document_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Environment the components run against.
#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn Store>,
    pub timer: Rc<dyn Timer>,
    pub spawner: Rc<dyn LocalSpawn>,
    pub clock: Rc<dyn Clock>,
}

pub struct PageController<S: Surface> {
    menu: Option<Rc<Menu<S>>>,
    theme: Option<Rc<ThemeSwitch<S>>>,
    projects: Option<Rc<ProjectSwitcher<S>>>,
    contact: Option<Rc<ContactForm<S>>>,
    anchors: usize,
    header: bool,
    footer: bool,
}

impl<S: Surface> PageController<S> {
    /// Install every component whose markup is present.
    pub fn install(surface: &S, cfg: &PageConfig, services: Services) -> Self {
        let menu = Menu::install(surface, &cfg.nav);
        let theme = ThemeSwitch::install(surface, &cfg.theme, services.store);
        let projects = ProjectSwitcher::install(surface, &cfg.projects);
        let contact = ContactForm::install(surface, &cfg.contact, services.timer, services.spawner);
        let anchors = smooth_scroll::install(surface, &cfg.scroll, menu.clone());
        let header = header::install(surface, &cfg.header);
        let footer = footer_year::install(surface, &cfg.footer, services.clock.as_ref());

        let controller = Self { menu, theme, projects, contact, anchors, header, footer };
        log::info!("page ready: {}", controller.summary());
        controller
    }

    #[must_use]
    pub fn menu(&self) -> Option<&Rc<Menu<S>>> {
        self.menu.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> Option<&Rc<ThemeSwitch<S>>> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn projects(&self) -> Option<&Rc<ProjectSwitcher<S>>> {
        self.projects.as_ref()
    }

    #[must_use]
    pub fn contact(&self) -> Option<&Rc<ContactForm<S>>> {
        self.contact.as_ref()
    }

    /// Number of in-page anchors with smooth scrolling.
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.anchors
    }

    /// One-line description of what was installed, for the ready log.
    #[must_use]
    pub fn summary(&self) -> String {
        let flag = |on: bool| if on { "on" } else { "off" };
        format!(
            "menu={} theme={} projects={} contact={} anchors={} header={} footer={}",
            flag(self.menu.is_some()),
            flag(self.theme.is_some()),
            self.projects.as_ref().map_or(0, |p| p.bound_count()),
            flag(self.contact.is_some()),
            self.anchors,
            flag(self.header),
            flag(self.footer),
        )
    }

    /// Cancel background work. Listeners stay attached; the page is going away.
    pub fn shutdown(&self) {
        if let Some(contact) = &self.contact {
            contact.shutdown();
        }
        if let Some(menu) = &self.menu {
            menu.close();
        }
        log::debug!("page controller shut down");
    }
}
