//! In-memory element tree implementing [`Surface`].
//!
//! Supports the subset of the DOM the page components use: id/class/tag
//! and attribute selectors (`=`, `^=`, presence) with comma lists, bubbling
//! dispatch to element and document listeners, window scroll listeners,
//! form controls with reset, focus tracking, and a log of scroll requests.
//!
//! Geometry is whatever the builder sets: each element carries a fixed
//! document-relative top.
//!
//! Focus changes do not synthesize `blur` events; call
//! [`MemorySurface::blur`] explicitly.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Event, EventKind, Handler, ScrollBehavior, Surface, Target};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    html: Option<String>,
    value: String,
    default_value: String,
    disabled: bool,
    top: f64,
}

struct Listener {
    target: Target<NodeId>,
    kind: EventKind,
    handler: Handler<NodeId>,
}

struct Dom {
    nodes: Vec<Node>,
    listeners: Vec<Listener>,
    scroll_y: f64,
    focused: Option<NodeId>,
    scroll_requests: Vec<(f64, ScrollBehavior)>,
}

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl Dom {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Pre-order traversal below `from`, optionally including `from`.
    fn walk(&self, from: NodeId, include_self: bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id != from || include_self {
                out.push(id);
            }
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            out.push(p);
            cur = self.node(p).parent;
        }
        out
    }

    fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let node = self.node(id);
        if name == "class" {
            return if node.classes.is_empty() { None } else { Some(node.classes.join(" ")) };
        }
        node.attributes.get(name).cloned()
    }

    fn handlers_for(&self, target: &Target<NodeId>, kind: EventKind) -> Vec<Handler<NodeId>> {
        self.listeners
            .iter()
            .filter(|l| l.kind == kind && &l.target == target)
            .map(|l| Rc::clone(&l.handler))
            .collect()
    }
}

/// Shared handle to an in-memory document. Clones refer to the same tree.
#[derive(Clone)]
pub struct MemorySurface {
    dom: Rc<RefCell<Dom>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Empty document with `<html>` and `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let html = Node { tag: "html".to_owned(), children: vec![BODY], ..Node::default() };
        let body = Node { tag: "body".to_owned(), parent: Some(ROOT), ..Node::default() };
        let dom = Dom {
            nodes: vec![html, body],
            listeners: Vec::new(),
            scroll_y: 0.0,
            focused: None,
            scroll_requests: Vec::new(),
        };
        Self { dom: Rc::new(RefCell::new(dom)) }
    }

    #[must_use]
    pub fn body_id(&self) -> NodeId {
        BODY
    }

    /// Append a new `tag` element under `parent`.
    pub fn append(&self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        let mut dom = self.dom.borrow_mut();
        let id = NodeId(dom.nodes.len());
        dom.nodes.push(Node { tag: tag.to_ascii_lowercase(), parent: Some(parent), ..Node::default() });
        dom.node_mut(parent).children.push(id);
        ElementBuilder { surface: self, id }
    }

    // --- User interaction ---

    /// Dispatch `kind` at `target`. Returns whether a handler prevented the
    /// default action.
    pub fn dispatch(&self, target: NodeId, kind: EventKind) -> bool {
        let event = Event::new(kind, Some(target));
        let handlers = {
            let dom = self.dom.borrow();
            let mut path = vec![target];
            if kind.bubbles() {
                path.extend(dom.ancestors(target));
            }
            let mut handlers: Vec<Handler<NodeId>> =
                path.iter().flat_map(|id| dom.handlers_for(&Target::Element(*id), kind)).collect();
            if kind.bubbles() {
                handlers.extend(dom.handlers_for(&Target::Document, kind));
            }
            handlers
        };
        for handler in handlers {
            handler(&event);
        }
        event.default_prevented()
    }

    /// Click `target`. Disabled elements swallow the click. A submit button
    /// inside a form also submits the form unless the click was cancelled.
    pub fn click(&self, target: NodeId) -> bool {
        if self.is_disabled(target) {
            return false;
        }
        let prevented = self.dispatch(target, EventKind::Click);
        if !prevented && self.is_submit_button(target) {
            if let Some(form) = self.enclosing_form(target) {
                self.dispatch(form, EventKind::Submit);
            }
        }
        prevented
    }

    pub fn submit(&self, form: NodeId) -> bool {
        self.dispatch(form, EventKind::Submit)
    }

    pub fn blur(&self, target: NodeId) {
        self.dispatch(target, EventKind::Blur);
    }

    /// Replace a control's value and fire `input`, as typing would.
    pub fn type_text(&self, target: NodeId, value: &str) {
        self.set_value(target, value);
        self.dispatch(target, EventKind::Input);
    }

    /// Replace a control's value without firing events.
    pub fn set_value(&self, target: NodeId, value: &str) {
        self.dom.borrow_mut().node_mut(target).value = value.to_owned();
    }

    /// Move the viewport and notify window scroll listeners.
    pub fn set_scroll_y(&self, y: f64) {
        self.dom.borrow_mut().scroll_y = y;
        let handlers = self.dom.borrow().handlers_for(&Target::Window, EventKind::Scroll);
        let event = Event::new(EventKind::Scroll, None);
        for handler in handlers {
            handler(&event);
        }
    }

    // --- Inspection ---

    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.dom.borrow().focused
    }

    #[must_use]
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.dom.borrow().node(id).disabled
    }

    /// Every `scroll_to` call so far, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<(f64, ScrollBehavior)> {
        self.dom.borrow().scroll_requests.clone()
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.dom.borrow().listeners.iter().filter(|l| l.kind == kind).count()
    }

    fn is_submit_button(&self, id: NodeId) -> bool {
        let dom = self.dom.borrow();
        dom.node(id).tag == "button" && dom.attribute(id, "type").as_deref() == Some("submit")
    }

    fn enclosing_form(&self, id: NodeId) -> Option<NodeId> {
        let dom = self.dom.borrow();
        dom.ancestors(id).into_iter().find(|a| dom.node(*a).tag == "form")
    }

    fn select(&self, from: NodeId, include_self: bool, selector: &str) -> Vec<NodeId> {
        let Some(groups) = parse_selector(selector) else {
            log::warn!("unsupported selector '{selector}'");
            return Vec::new();
        };
        let dom = self.dom.borrow();
        dom.walk(from, include_self)
            .into_iter()
            .filter(|id| groups.iter().any(|c| c.matches(&dom, *id)))
            .collect()
    }
}

/// Chained setup for a freshly appended element.
pub struct ElementBuilder<'a> {
    surface: &'a MemorySurface,
    id: NodeId,
}

impl ElementBuilder<'_> {
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.surface.add_class(&self.id, class);
        self
    }

    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.surface.set_attribute(&self.id, name, value);
        self
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.surface.set_text(&self.id, text);
        self
    }

    /// Initial value; also what a form reset restores.
    #[must_use]
    pub fn value(self, value: &str) -> Self {
        {
            let mut dom = self.surface.dom.borrow_mut();
            let node = dom.node_mut(self.id);
            node.value = value.to_owned();
            node.default_value = value.to_owned();
        }
        self
    }

    #[must_use]
    pub fn top(self, top: f64) -> Self {
        self.surface.dom.borrow_mut().node_mut(self.id).top = top;
        self
    }

    #[must_use]
    pub fn build(self) -> NodeId {
        self.id
    }
}

impl Surface for MemorySurface {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let dom = self.dom.borrow();
        dom.walk(ROOT, true).into_iter().find(|n| dom.node(*n).attributes.get("id").is_some_and(|v| v == id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(ROOT, true, selector)
    }

    fn query_all_in(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*scope, false, selector)
    }

    fn root(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        node == ancestor || self.dom.borrow().ancestors(*node).contains(ancestor)
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        self.dom.borrow().attribute(*el, name)
    }

    fn set_attribute(&self, el: &NodeId, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(el, value);
            return;
        }
        self.dom.borrow_mut().node_mut(*el).attributes.insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.dom.borrow().node(*el).classes.iter().any(|c| c == class)
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.node_mut(*el).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.dom.borrow_mut().node_mut(*el).classes.retain(|c| c != class);
    }

    fn set_class_name(&self, el: &NodeId, classes: &str) {
        self.dom.borrow_mut().node_mut(*el).classes = classes.split_whitespace().map(str::to_owned).collect();
    }

    fn style(&self, el: &NodeId, property: &str) -> String {
        self.dom.borrow().node(*el).style.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        let style = &mut dom.node_mut(*el).style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text(&self, el: &NodeId) -> String {
        self.dom.borrow().node(*el).text.clone()
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        let mut dom = self.dom.borrow_mut();
        let node = dom.node_mut(*el);
        node.text = text.to_owned();
        node.html = None;
    }

    fn inner_html(&self, el: &NodeId) -> String {
        let dom = self.dom.borrow();
        let node = dom.node(*el);
        node.html.clone().unwrap_or_else(|| node.text.clone())
    }

    fn set_inner_html(&self, el: &NodeId, html: &str) {
        let mut dom = self.dom.borrow_mut();
        let node = dom.node_mut(*el);
        node.html = Some(html.to_owned());
        node.text = html.to_owned();
    }

    fn value(&self, el: &NodeId) -> String {
        self.dom.borrow().node(*el).value.clone()
    }

    fn set_disabled(&self, el: &NodeId, disabled: bool) {
        self.dom.borrow_mut().node_mut(*el).disabled = disabled;
    }

    fn focus(&self, el: &NodeId) {
        self.dom.borrow_mut().focused = Some(*el);
    }

    fn reset_form(&self, form: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        if dom.node(*form).tag != "form" {
            return;
        }
        for id in dom.walk(*form, false) {
            let node = dom.node_mut(id);
            if matches!(node.tag.as_str(), "input" | "textarea" | "select") {
                node.value = node.default_value.clone();
            }
        }
    }

    fn document_top(&self, el: &NodeId) -> f64 {
        self.dom.borrow().node(*el).top
    }

    fn scroll_y(&self) -> f64 {
        self.dom.borrow().scroll_y
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let mut dom = self.dom.borrow_mut();
        dom.scroll_requests.push((top, behavior));
        dom.scroll_y = top.max(0.0);
    }

    fn listen(&self, target: Target<NodeId>, kind: EventKind, handler: Handler<NodeId>) {
        self.dom.borrow_mut().listeners.push(Listener { target, kind, handler });
    }
}

// =============================================================================
// SELECTORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrOp)>,
}

impl Compound {
    fn matches(&self, dom: &Dom, id: NodeId) -> bool {
        let node = dom.node(id);
        if self.tag.as_ref().is_some_and(|t| *t != node.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|want| node.attributes.get("id") != Some(want)) {
            return false;
        }
        if !self.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, op)| match (dom.attribute(id, name), op) {
            (None, _) => false,
            (Some(_), AttrOp::Exists) => true,
            (Some(v), AttrOp::Equals(want)) => v == *want,
            (Some(v), AttrOp::Prefix(want)) => v.starts_with(want.as_str()),
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn unquote(raw: &str) -> &str {
    let raw = raw.trim();
    for q in ['"', '\''] {
        if let Some(inner) = raw.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    raw
}

fn parse_attr(body: &str) -> Option<(String, AttrOp)> {
    if let Some((name, value)) = body.split_once("^=") {
        return Some((name.trim().to_owned(), AttrOp::Prefix(unquote(value).to_owned())));
    }
    if let Some((name, value)) = body.split_once('=') {
        return Some((name.trim().to_owned(), AttrOp::Equals(unquote(value).to_owned())));
    }
    let name = body.trim();
    if name.is_empty() { None } else { Some((name.to_owned(), AttrOp::Exists)) }
}

fn parse_compound(raw: &str) -> Option<Compound> {
    let mut out = Compound::default();
    let mut rest = raw.trim();
    if rest.is_empty() {
        return None;
    }
    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else {
        let (tag, after) = take_ident(rest);
        if !tag.is_empty() {
            out.tag = Some(tag.to_ascii_lowercase());
        }
        rest = after;
    }
    while let Some(c) = rest.chars().next() {
        match c {
            '#' | '.' => {
                let (ident, after) = take_ident(&rest[1..]);
                if ident.is_empty() {
                    return None;
                }
                if c == '#' {
                    out.id = Some(ident.to_owned());
                } else {
                    out.classes.push(ident.to_owned());
                }
                rest = after;
            }
            '[' => {
                let end = rest.find(']')?;
                out.attrs.push(parse_attr(&rest[1..end])?);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }
    Some(out)
}

/// Parse a comma-separated list of compound selectors. Combinators and
/// pseudo-classes are not supported.
fn parse_selector(selector: &str) -> Option<Vec<Compound>> {
    selector.split(',').map(parse_compound).collect()
}
