use std::cell::RefCell;
use std::rc::{Rc, Weak};

use markup5ever::{LocalName, QualName, local_name, ns};
use slab::Slab;

use crate::listener::{HostError, ScrollCallback, ScrollHost, ScrollSubscription};
use crate::state::HEADER_SELECTOR;
use crate::tree::PresentationTree;

/// A tag attribute, e.g. `class="site-header"` in `<header class="site-header">`
#[derive(PartialEq, Eq, Clone, Debug)]
struct Attribute {
    name: QualName,
    value: String,
}

#[derive(Clone, Debug)]
struct Element {
    tag: LocalName,
    attrs: Vec<Attribute>,
}

impl Element {
    fn new(tag: LocalName) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    fn attr(&self, name: LocalName) -> Option<&str> {
        let attr = self.attrs.iter().find(|attr| attr.name.local == name)?;
        Some(&attr.value)
    }

    fn set_attr(&mut self, name: LocalName, value: &str) {
        let existing_attr = self.attrs.iter_mut().find(|a| a.name.local == name);
        if let Some(existing_attr) = existing_attr {
            existing_attr.value.clear();
            existing_attr.value.push_str(value);
        } else {
            self.attrs.push(Attribute {
                name: QualName::new(None, ns!(), name),
                value: value.to_string(),
            });
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr(local_name!("class"))
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    fn set_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        let value = classes.into_iter().collect::<Vec<_>>().join(" ");
        self.set_attr(local_name!("class"), &value);
    }
}

/// A headless document holding just enough of a page for the header controller:
/// a `<body>` followed by a flat list of elements.
///
/// The body's `padding-top` is kept as a computed value rather than an inline
/// `style` string, so the body's own attributes are never rewritten.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    body_padding_top: Option<f64>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::without_header()
    }
}

impl MemoryDocument {
    const BODY: usize = 0;

    /// A document containing only an empty `<body>`
    pub fn without_header() -> Self {
        Self {
            elements: vec![Element::new(local_name!("body"))],
            body_padding_top: None,
        }
    }

    /// A document containing a `<body>` and a single `<header>`
    pub fn with_header() -> Self {
        let mut doc = Self::without_header();
        doc.create_element("header", &[]);
        doc
    }

    /// Append an element with tag `tag` and the given classes, returning its id
    pub fn create_element(&mut self, tag: &str, classes: &[&str]) -> usize {
        let mut element = Element::new(LocalName::from(tag));
        if !classes.is_empty() {
            element.set_classes(classes.iter().copied());
        }
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn body_id(&self) -> usize {
        Self::BODY
    }

    pub fn header_id(&self) -> Option<usize> {
        self.query_selector(HEADER_SELECTOR)
    }

    /// The classes on element `id`, in attribute order
    pub fn class_list(&self, id: usize) -> Vec<&str> {
        self.elements
            .get(id)
            .map(|el| el.classes().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: usize, class: &str) -> bool {
        self.elements.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn header_has_class(&self, class: &str) -> bool {
        self.header_id().is_some_and(|id| self.has_class(id, class))
    }

    /// The raw value of the attribute `name` on element `id`
    pub fn attribute(&self, id: usize, name: &str) -> Option<&str> {
        self.elements.get(id)?.attr(LocalName::from(name))
    }

    /// Set the raw attribute `name` on element `id`
    pub fn set_attribute(&mut self, id: usize, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.set_attr(LocalName::from(name), value);
        }
    }

    /// The body's `padding-top` in pixels, or `None` if it was never set
    pub fn body_padding_top(&self) -> Option<f64> {
        self.body_padding_top
    }
}

impl PresentationTree for MemoryDocument {
    type ElementId = usize;

    fn query_selector(&self, selector: &str) -> Option<usize> {
        let selector = selector.trim();
        if let Some(class) = selector.strip_prefix('.') {
            return self.elements.iter().position(|el| el.has_class(class));
        }
        let is_tag = !selector.is_empty()
            && selector
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !is_tag {
            return None;
        }
        let tag = LocalName::from(selector.to_ascii_lowercase());
        self.elements.iter().position(|el| el.tag == tag)
    }

    fn add_class(&mut self, element: usize, class: &str) {
        let Some(el) = self.elements.get_mut(element) else {
            return;
        };
        if el.has_class(class) {
            return;
        }
        let mut classes: Vec<String> = el.classes().map(str::to_string).collect();
        classes.push(class.to_string());
        el.set_classes(classes.iter().map(String::as_str));
    }

    fn remove_class(&mut self, element: usize, class: &str) {
        let Some(el) = self.elements.get_mut(element) else {
            return;
        };
        if !el.has_class(class) {
            return;
        }
        let classes: Vec<String> = el
            .classes()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        el.set_classes(classes.iter().map(String::as_str));
    }

    fn set_body_padding_top(&mut self, px: f64) {
        self.body_padding_top = Some(px);
    }
}

type Listeners = Slab<Option<ScrollCallback>>;

/// A scroll host driven by hand with [`scroll_to`](MemoryScrollHost::scroll_to).
///
/// Listeners run synchronously, in registration order.
#[derive(Default)]
pub struct MemoryScrollHost {
    offset: f64,
    listeners: Rc<RefCell<Listeners>>,
}

impl MemoryScrollHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Set the scroll offset and notify every registered listener
    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;

        let keys: Vec<usize> = self.listeners.borrow().iter().map(|(key, _)| key).collect();
        for key in keys {
            // Take the callback out so it may drop its own subscription (or
            // register new listeners) without a double borrow.
            let callback = self
                .listeners
                .borrow_mut()
                .get_mut(key)
                .and_then(Option::take);
            let Some(mut callback) = callback else {
                continue;
            };

            callback(offset);

            if let Some(slot @ None) = self.listeners.borrow_mut().get_mut(key) {
                *slot = Some(callback);
            }
        }
    }
}

impl ScrollHost for MemoryScrollHost {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn register_scroll_listener(
        &mut self,
        callback: ScrollCallback,
    ) -> Result<ScrollSubscription, HostError> {
        let key = self.listeners.borrow_mut().insert(Some(callback));
        let listeners: Weak<RefCell<Listeners>> = Rc::downgrade(&self.listeners);
        Ok(ScrollSubscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().try_remove(key);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_by_tag_and_class() {
        let mut doc = MemoryDocument::without_header();
        let nav = doc.create_element("nav", &["menu"]);
        let header = doc.create_element("header", &["site-header", "sticky"]);

        assert_eq!(doc.query_selector("header"), Some(header));
        assert_eq!(doc.query_selector("HEADER"), Some(header));
        assert_eq!(doc.query_selector(".menu"), Some(nav));
        assert_eq!(doc.query_selector(".sticky"), Some(header));
        assert_eq!(doc.query_selector("footer"), None);
        assert_eq!(doc.query_selector("body > header"), None);
        assert_eq!(doc.query_selector(""), None);
    }

    #[test]
    fn class_mutation_is_idempotent() {
        let mut doc = MemoryDocument::without_header();
        let header = doc.create_element("header", &["site-header"]);

        doc.add_class(header, "shrunken");
        doc.add_class(header, "shrunken");
        assert_eq!(doc.class_list(header), ["site-header", "shrunken"]);
        assert_eq!(doc.attribute(header, "class"), Some("site-header shrunken"));

        doc.remove_class(header, "shrunken");
        doc.remove_class(header, "shrunken");
        assert_eq!(doc.class_list(header), ["site-header"]);
    }

    #[test]
    fn padding_leaves_body_attributes_alone() {
        let mut doc = MemoryDocument::without_header();
        let body = doc.body_id();
        assert_eq!(doc.body_padding_top(), None);

        let style = r#"background: url("a;b.png"); PADDING-TOP: 10px"#;
        doc.set_attribute(body, "style", style);
        doc.set_body_padding_top(150.0);
        doc.set_body_padding_top(60.0);

        assert_eq!(doc.body_padding_top(), Some(60.0));
        assert_eq!(doc.attribute(body, "style"), Some(style));
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut host = MemoryScrollHost::new();

        let sub = {
            let seen = seen.clone();
            host.register_scroll_listener(Box::new(move |o| seen.borrow_mut().push(o)))
                .unwrap()
        };
        host.scroll_to(10.0);
        assert_eq!(host.listener_count(), 1);

        drop(sub);
        host.scroll_to(20.0);

        assert_eq!(host.listener_count(), 0);
        assert_eq!(*seen.borrow(), [10.0]);
        assert_eq!(host.scroll_offset(), 20.0);
    }

    #[test]
    fn listener_may_drop_its_own_subscription() {
        let mut host = MemoryScrollHost::new();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::default();
        let calls = Rc::new(RefCell::new(0));

        let sub = {
            let slot = slot.clone();
            let calls = calls.clone();
            host.register_scroll_listener(Box::new(move |_| {
                *calls.borrow_mut() += 1;
                slot.borrow_mut().take();
            }))
            .unwrap()
        };
        *slot.borrow_mut() = Some(sub);

        host.scroll_to(100.0);
        host.scroll_to(200.0);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(host.listener_count(), 0);
    }
}
