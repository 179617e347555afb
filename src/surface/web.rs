//! Browser [`Surface`] over `web_sys`.
//!
//! Listener closures are leaked with `Closure::forget`: the page controller
//! is installed once and lives as long as the document.
//!
//! DOM calls that can throw (invalid selector, class token with spaces) are
//! logged at `warn` and otherwise ignored.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Event, EventKind, Handler, ScrollBehavior, Surface, Target};

#[derive(Clone)]
pub struct WebSurface {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebSurface {
    /// Bind to the current window, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn collect(list: Result<web_sys::NodeList, wasm_bindgen::JsValue>, selector: &str) -> Vec<Element> {
        let list = match list {
            Ok(list) => list,
            Err(err) => {
                log::warn!("querySelectorAll('{selector}') failed: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }
}

fn warn_on_err<T>(what: &str, result: Result<T, wasm_bindgen::JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

impl Surface for WebSurface {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        Self::collect(self.document.query_selector_all(selector), selector)
    }

    fn query_all_in(&self, scope: &Element, selector: &str) -> Vec<Element> {
        Self::collect(scope.query_selector_all(selector), selector)
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node))
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        warn_on_err("setAttribute", el.set_attribute(name, value));
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn add_class(&self, el: &Element, class: &str) {
        warn_on_err("classList.add", el.class_list().add_1(class));
    }

    fn remove_class(&self, el: &Element, class: &str) {
        warn_on_err("classList.remove", el.class_list().remove_1(class));
    }

    fn set_class_name(&self, el: &Element, classes: &str) {
        el.set_class_name(classes);
    }

    fn style(&self, el: &Element, property: &str) -> String {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return String::new();
        };
        match html.style().get_property_value(property) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("style.getPropertyValue failed: {err:?}");
                String::new()
            }
        }
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        if value.is_empty() {
            warn_on_err("style.removeProperty", style.remove_property(property));
        } else {
            warn_on_err("style.setProperty", style.set_property(property, value));
        }
    }

    fn text(&self, el: &Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn inner_html(&self, el: &Element) -> String {
        el.inner_html()
    }

    fn set_inner_html(&self, el: &Element, html: &str) {
        el.set_inner_html(html);
    }

    fn value(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        String::new()
    }

    fn set_disabled(&self, el: &Element, disabled: bool) {
        if disabled {
            warn_on_err("setAttribute(disabled)", el.set_attribute("disabled", ""));
        } else {
            warn_on_err("removeAttribute(disabled)", el.remove_attribute("disabled"));
        }
    }

    fn focus(&self, el: &Element) {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            warn_on_err("focus", html.focus());
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn document_top(&self, el: &Element) -> f64 {
        el.get_bounding_client_rect().top() + self.scroll_y()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn listen(&self, target: Target<Element>, kind: EventKind, handler: Handler<Element>) {
        let callback = Closure::<dyn Fn(web_sys::Event)>::new(move |native: web_sys::Event| {
            let target = native.target().and_then(|t| t.dyn_ref::<Element>().cloned());
            let event = Event::new(kind, target);
            handler(&event);
            if event.default_prevented() {
                native.prevent_default();
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(kind.is_passive());
        let function = callback.as_ref().unchecked_ref();
        let result = match &target {
            Target::Element(el) => el.add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                function,
                &options,
            ),
            Target::Document => self.document.add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                function,
                &options,
            ),
            Target::Window => self.window.add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                function,
                &options,
            ),
        };
        warn_on_err("addEventListener", result);
        callback.forget();
    }
}
