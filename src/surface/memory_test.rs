use super::*;

use std::cell::Cell;

fn counter(surface: &MemorySurface, target: Target<NodeId>, kind: EventKind) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    surface.listen(target, kind, Rc::new(move |_ev: &Event<NodeId>| h.set(h.get() + 1)));
    hits
}

// =============================================================
// Selectors
// =============================================================

#[test]
fn query_by_id_class_tag_and_attribute() {
    let s = MemorySurface::new();
    let body = s.body_id();
    let header = s.append(body, "header").class("header").build();
    let nav = s.append(header, "nav").id("main-nav").class("nav").class("nav--wide").build();
    let link = s.append(nav, "a").attr("href", "#about").build();
    let external = s.append(nav, "a").attr("href", "https://example.com").build();

    assert_eq!(s.element_by_id("main-nav"), Some(nav));
    assert_eq!(s.query(".header"), Some(header));
    assert_eq!(s.query("nav.nav.nav--wide"), Some(nav));
    assert_eq!(s.query_all("a"), vec![link, external]);
    assert_eq!(s.query_all("a[href^=\"#\"]"), vec![link]);
    assert_eq!(s.query_all("a[href='https://example.com']"), vec![external]);
    assert_eq!(s.query_all("[href]"), vec![link, external]);
    assert_eq!(s.query("#missing"), None);
}

#[test]
fn comma_list_matches_in_document_order() {
    let s = MemorySurface::new();
    let form = s.append(s.body_id(), "form").build();
    let area = s.append(form, "textarea").build();
    let input = s.append(form, "input").build();
    assert_eq!(s.query_all_in(&form, "input, textarea"), vec![area, input]);
}

#[test]
fn scoped_query_excludes_scope_itself() {
    let s = MemorySurface::new();
    let outer = s.append(s.body_id(), "div").class("box").build();
    let inner = s.append(outer, "div").class("box").build();
    assert_eq!(s.query_all_in(&outer, ".box"), vec![inner]);
    assert_eq!(s.query_all(".box"), vec![outer, inner]);
}

#[test]
fn unsupported_selector_matches_nothing() {
    let s = MemorySurface::new();
    s.append(s.body_id(), "div").class("a").build();
    assert!(s.query_all(".a > .b").is_empty());
    assert!(s.query_all(":hover").is_empty());
}

// =============================================================
// Attributes, classes, style
// =============================================================

#[test]
fn class_attribute_mirrors_class_list() {
    let s = MemorySurface::new();
    let el = s.append(s.body_id(), "i").class("fas").build();
    s.add_class(&el, "fa-moon");
    s.add_class(&el, "fa-moon");
    assert_eq!(s.attribute(&el, "class").as_deref(), Some("fas fa-moon"));
    s.set_class_name(&el, "fas  fa-sun");
    assert!(s.has_class(&el, "fa-sun"));
    assert!(!s.has_class(&el, "fa-moon"));
    s.remove_class(&el, "fas");
    s.remove_class(&el, "fa-sun");
    assert_eq!(s.attribute(&el, "class"), None);
}

#[test]
fn empty_style_value_removes_property() {
    let s = MemorySurface::new();
    let body = s.body_id();
    s.set_style(&body, "overflow", "hidden");
    assert_eq!(s.style(&body, "overflow"), "hidden");
    s.set_style(&body, "overflow", "");
    assert_eq!(s.style(&body, "overflow"), "");
}

#[test]
fn inner_html_and_text_replace_each_other() {
    let s = MemorySurface::new();
    let button = s.append(s.body_id(), "button").text("Send").build();
    assert_eq!(s.inner_html(&button), "Send");
    s.set_inner_html(&button, "<i></i> Sending...");
    assert_eq!(s.inner_html(&button), "<i></i> Sending...");
    s.set_text(&button, "Send");
    assert_eq!(s.inner_html(&button), "Send");
}

#[test]
fn contains_is_inclusive() {
    let s = MemorySurface::new();
    let outer = s.append(s.body_id(), "div").build();
    let inner = s.append(outer, "span").build();
    let other = s.append(s.body_id(), "div").build();
    assert!(s.contains(&outer, &outer));
    assert!(s.contains(&outer, &inner));
    assert!(!s.contains(&outer, &other));
    assert!(!s.contains(&inner, &outer));
}

// =============================================================
// Events
// =============================================================

#[test]
fn click_bubbles_to_ancestors_and_document() {
    let s = MemorySurface::new();
    let outer = s.append(s.body_id(), "div").build();
    let inner = s.append(outer, "button").build();
    let on_outer = counter(&s, Target::Element(outer), EventKind::Click);
    let on_doc = counter(&s, Target::Document, EventKind::Click);

    s.click(inner);
    assert_eq!(on_outer.get(), 1);
    assert_eq!(on_doc.get(), 1);
}

#[test]
fn blur_does_not_bubble() {
    let s = MemorySurface::new();
    let outer = s.append(s.body_id(), "div").build();
    let input = s.append(outer, "input").build();
    let on_outer = counter(&s, Target::Element(outer), EventKind::Blur);
    let on_input = counter(&s, Target::Element(input), EventKind::Blur);

    s.blur(input);
    assert_eq!(on_input.get(), 1);
    assert_eq!(on_outer.get(), 0);
}

#[test]
fn dispatch_reports_prevent_default() {
    let s = MemorySurface::new();
    let link = s.append(s.body_id(), "a").build();
    s.listen(Target::Element(link), EventKind::Click, Rc::new(|ev: &Event<NodeId>| ev.prevent_default()));
    assert!(s.click(link));
}

#[test]
fn submit_button_click_submits_enclosing_form() {
    let s = MemorySurface::new();
    let form = s.append(s.body_id(), "form").build();
    let button = s.append(form, "button").attr("type", "submit").build();
    let submits = counter(&s, Target::Element(form), EventKind::Submit);

    s.click(button);
    assert_eq!(submits.get(), 1);

    s.set_disabled(&button, true);
    s.click(button);
    assert_eq!(submits.get(), 1);
}

#[test]
fn scroll_notifies_window_listeners() {
    let s = MemorySurface::new();
    let hits = counter(&s, Target::Window, EventKind::Scroll);
    s.set_scroll_y(120.0);
    assert_eq!(s.scroll_y(), 120.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(s.listener_count(EventKind::Scroll), 1);
}

// =============================================================
// Form controls and scrolling
// =============================================================

#[test]
fn reset_restores_initial_values() {
    let s = MemorySurface::new();
    let form = s.append(s.body_id(), "form").build();
    let name = s.append(form, "input").build();
    let topic = s.append(form, "input").value("general").build();
    s.type_text(name, "Ada");
    s.set_value(topic, "billing");

    s.reset_form(&form);
    assert_eq!(s.value(&name), "");
    assert_eq!(s.value(&topic), "general");
}

#[test]
fn scroll_to_records_request_and_clamps_position() {
    let s = MemorySurface::new();
    s.scroll_to(-40.0, ScrollBehavior::Smooth);
    assert_eq!(s.scroll_y(), 0.0);
    assert_eq!(s.scroll_requests(), vec![(-40.0, ScrollBehavior::Smooth)]);
}

#[test]
fn focus_is_tracked() {
    let s = MemorySurface::new();
    let input = s.append(s.body_id(), "input").build();
    assert_eq!(s.focused(), None);
    s.focus(&input);
    assert_eq!(s.focused(), Some(input));
}
