//! Header styling driven by vertical scroll position.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use std::rc::Rc;

use crate::config::HeaderConfig;
use crate::surface::{Event, EventKind, Surface, Target};

/// Whether the page has scrolled strictly past `threshold`.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Sync the scrolled class now and on every window scroll. Returns `false`
/// when the page has no header.
pub fn install<S: Surface>(surface: &S, cfg: &HeaderConfig) -> bool {
    let Some(header) = surface.query(&cfg.selector) else {
        log::debug!("header: '{}' not found, scroll styling disabled", cfg.selector);
        return false;
    };

    let sync = {
        let s = surface.clone();
        let cfg = cfg.clone();
        move || s.set_class(&header, &cfg.scrolled_class, is_scrolled(s.scroll_y(), cfg.threshold))
    };
    sync();
    surface.listen(Target::Window, EventKind::Scroll, Rc::new(move |_ev: &Event<S::Element>| sync()));
    true
}
