//! In-page anchor navigation with a fixed-header offset.
//!
//! Every anchor whose `href` starts with `#` gets a click listener. The
//! fragment is resolved when the click happens, not at install, so sections
//! added later still work. Only a fragment that resolves to an element is
//! intercepted; anything else keeps its default behaviour.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use std::rc::Rc;

use crate::components::nav::Menu;
use crate::config::ScrollConfig;
use crate::surface::{Event, EventKind, ScrollBehavior, Surface, Target};

/// Fragment id named by `href`, or `None` for a bare `#` or a non-fragment.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts an element at `top` just below the header.
#[must_use]
pub fn scroll_target(top: f64, header_offset: f64) -> f64 {
    top - header_offset
}

/// Bind every in-page anchor. Returns how many anchors were bound.
pub fn install<S: Surface>(surface: &S, cfg: &ScrollConfig, menu: Option<Rc<Menu<S>>>) -> usize {
    let anchors = surface.query_all(&cfg.anchor_selector);
    for anchor in &anchors {
        let s = surface.clone();
        let link = anchor.clone();
        let offset = cfg.header_offset;
        let menu = menu.clone();
        surface.listen(
            Target::Element(anchor.clone()),
            EventKind::Click,
            Rc::new(move |ev: &Event<S::Element>| {
                let Some(href) = s.attribute(&link, "href") else {
                    return;
                };
                let Some(section) = fragment_id(&href).and_then(|id| s.element_by_id(id)) else {
                    log::trace!("scroll: '{href}' left to the browser");
                    return;
                };
                ev.prevent_default();
                s.scroll_to(scroll_target(s.document_top(&section), offset), ScrollBehavior::Smooth);
                if let Some(menu) = menu.as_ref().filter(|m| m.is_open()) {
                    menu.close();
                }
            }),
        );
    }
    log::debug!("scroll: {} anchors bound", anchors.len());
    anchors.len()
}
