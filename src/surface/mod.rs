//! The element and event interface components are written against.
//!
//! ARCHITECTURE
//! ============
//! Components never touch `web_sys` directly. They look elements up, read
//! and write attributes/classes/styles, and subscribe to events through
//! [`Surface`]. The browser implementation lives in `web` (behind the
//! `hydrate` feature); `memory::MemorySurface` is a small in-memory DOM
//! used by tests and, through the `testing` feature, headless drivers.
//!
//! Handlers receive an [`Event`] carrying the event target and a
//! prevent-default flag. Implementations apply the flag to the native event
//! after the handler returns.

#[cfg(any(test, feature = "testing"))]
pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// DOM events the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Blur,
    Input,
    Submit,
    Scroll,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Blur => "blur",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::Scroll => "scroll",
        }
    }

    /// Whether the event propagates from the target up through ancestors.
    #[must_use]
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::Blur | Self::Scroll)
    }

    /// Scroll listeners never cancel, so they are registered passive.
    #[must_use]
    pub fn is_passive(self) -> bool {
        self == Self::Scroll
    }
}

/// Where a listener is attached.
#[derive(Clone, Debug, PartialEq)]
pub enum Target<E> {
    Element(E),
    Document,
    Window,
}

/// An event as seen by a handler.
pub struct Event<E> {
    kind: EventKind,
    target: Option<E>,
    default_prevented: Cell<bool>,
}

impl<E> Event<E> {
    #[must_use]
    pub fn new(kind: EventKind, target: Option<E>) -> Self {
        Self { kind, target, default_prevented: Cell::new(false) }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Element the event was dispatched to, if it was an element.
    #[must_use]
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl<E: fmt::Debug> fmt::Debug for Event<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("default_prevented", &self.default_prevented.get())
            .finish()
    }
}

pub type Handler<E> = Rc<dyn Fn(&Event<E>)>;

/// Scroll animation mode for [`Surface::scroll_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Element lookup, mutation, and event subscription.
///
/// Mutations on elements that do not support them (value on a `div`, reset
/// on a non-form) are ignored. Style values use CSS property names; an empty
/// value removes the inline property.
pub trait Surface: Clone + 'static {
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    // --- Lookup ---

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Descendants of `scope` matching `selector`, in document order.
    fn query_all_in(&self, scope: &Self::Element, selector: &str) -> Vec<Self::Element>;
    /// Document element (`<html>`).
    fn root(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    fn query(&self, selector: &str) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    fn query_in(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element> {
        self.query_all_in(scope, selector).into_iter().next()
    }

    // --- Attributes, classes, style ---

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn add_class(&self, el: &Self::Element, class: &str);
    fn remove_class(&self, el: &Self::Element, class: &str);
    /// Replace the whole class list.
    fn set_class_name(&self, el: &Self::Element, classes: &str);
    fn style(&self, el: &Self::Element, property: &str) -> String;
    fn set_style(&self, el: &Self::Element, property: &str, value: &str);

    fn set_class(&self, el: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
    }

    // --- Content and form controls ---

    fn text(&self, el: &Self::Element) -> String;
    fn set_text(&self, el: &Self::Element, text: &str);
    fn inner_html(&self, el: &Self::Element) -> String;
    fn set_inner_html(&self, el: &Self::Element, html: &str);
    fn value(&self, el: &Self::Element) -> String;
    fn set_disabled(&self, el: &Self::Element, disabled: bool);
    fn focus(&self, el: &Self::Element);
    /// Restore every control in a form to its initial value.
    fn reset_form(&self, form: &Self::Element);

    // --- Geometry ---

    /// Top edge of `el` relative to the document, in CSS pixels.
    fn document_top(&self, el: &Self::Element) -> f64;
    fn scroll_y(&self) -> f64;
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    // --- Events ---

    fn listen(&self, target: Target<Self::Element>, kind: EventKind, handler: Handler<Self::Element>);
}
