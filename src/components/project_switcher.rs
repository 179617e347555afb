//! Project list / preview switcher.
//!
//! Each list item names a preview panel by element id through its
//! identifier attribute. Clicking an item makes it and its panel the only
//! active pair.
//!
//! Items whose identifier is missing or names no panel are reported at
//! install time and left unbound, so a bound click always activates exactly
//! one item and one panel.

#[cfg(test)]
#[path = "project_switcher_test.rs"]
mod project_switcher_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ProjectsConfig;
use crate::error::PageError;
use crate::state::aria_bool;
use crate::state::projects::ProjectSelection;
use crate::surface::{Event, EventKind, Surface, Target};

pub struct ProjectSwitcher<S: Surface> {
    surface: S,
    items: Vec<S::Element>,
    /// Items that passed the install-time check, with their identifiers.
    bound: Vec<(S::Element, String)>,
    previews: Vec<S::Element>,
    cfg: ProjectsConfig,
    selection: RefCell<ProjectSelection>,
}

impl<S: Surface> ProjectSwitcher<S> {
    /// Bind every valid list item. `None` when the page has no list items.
    pub fn install(surface: &S, cfg: &ProjectsConfig) -> Option<Rc<Self>> {
        let items = surface.query_all(&cfg.item_selector);
        if items.is_empty() {
            log::debug!("projects: no list items, switcher disabled");
            return None;
        }
        let previews = surface.query_all(&cfg.preview_selector);

        let mut bound = Vec::new();
        for item in &items {
            match check_item(surface, cfg, &previews, item) {
                Ok(id) => bound.push((item.clone(), id)),
                Err(err) => log::warn!("projects: item not bound: {err}"),
            }
        }

        let switcher = Rc::new(Self {
            surface: surface.clone(),
            items,
            bound,
            previews,
            cfg: cfg.clone(),
            selection: RefCell::new(ProjectSelection::default()),
        });

        for (item, id) in &switcher.bound {
            let s = Rc::clone(&switcher);
            let clicked = item.clone();
            let id = id.clone();
            surface.listen(
                Target::Element(item.clone()),
                EventKind::Click,
                Rc::new(move |_ev: &Event<S::Element>| s.activate(&clicked, &id)),
            );
        }
        Some(switcher)
    }

    #[must_use]
    pub fn active(&self) -> Option<String> {
        self.selection.borrow().active().map(str::to_owned)
    }

    /// Number of items that passed the install-time check.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Select by identifier. Returns `false` if no bound item carries it.
    pub fn select(&self, id: &str) -> bool {
        let Some((item, _)) = self.bound.iter().find(|(_, bound_id)| bound_id == id) else {
            return false;
        };
        self.activate(item, id);
        true
    }

    fn activate(&self, clicked: &S::Element, id: &str) {
        if self.selection.borrow_mut().select(id) {
            log::debug!("projects: showing {id}");
        }
        let active = &self.cfg.active_class;
        for item in &self.items {
            let on = item == clicked;
            self.surface.set_class(item, active, on);
            self.surface.set_attribute(item, "aria-pressed", aria_bool(on));
        }
        for preview in &self.previews {
            let on = self.surface.attribute(preview, "id").as_deref() == Some(id);
            self.surface.set_class(preview, active, on);
            self.surface.set_attribute(preview, "aria-hidden", aria_bool(!on));
        }
    }
}

fn check_item<S: Surface>(
    surface: &S,
    cfg: &ProjectsConfig,
    previews: &[S::Element],
    item: &S::Element,
) -> Result<String, PageError> {
    let id = surface
        .attribute(item, &cfg.id_attribute)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PageError::MissingProjectId { attribute: cfg.id_attribute.clone() })?;
    let has_panel = previews.iter().any(|p| surface.attribute(p, "id").as_deref() == Some(id.as_str()));
    if has_panel { Ok(id) } else { Err(PageError::UnknownProject { id }) }
}
