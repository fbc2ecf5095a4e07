//! In-memory document for tests and headless hosts.
//!
//! Elements are shared handles: cloning a `MemoryElement` gives another view
//! of the same node, so a test can keep a handle and observe what the
//! controller did to it. `click()` runs the registered click handlers in
//! registration order. Selectors are limited to a single compound
//! selector such as `a.navbar-link` or `#menu`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{NavDocument, NavElement};
use crate::shared::errors::{NavbarError, Result};

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
}

type ClickHandler = Box<dyn FnMut()>;

#[derive(Clone)]
pub struct MemoryElement {
    data: Rc<RefCell<ElementData>>,
    handlers: Rc<RefCell<Vec<ClickHandler>>>,
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("data", &self.data.borrow())
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        MemoryElement {
            data: Rc::new(RefCell::new(ElementData {
                tag: tag.to_ascii_lowercase(),
                ..Default::default()
            })),
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_class(self, class: &str) -> Self {
        {
            let mut data = self.data.borrow_mut();
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.data
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Shorthand for an anchor carrying `class` and an `href`
    pub fn link(class: &str, href: &str) -> Self {
        MemoryElement::new("a")
            .with_class(class)
            .with_attribute("href", href)
    }

    pub fn classes(&self) -> Vec<String> {
        self.data.borrow().classes.clone()
    }

    pub fn ptr_eq(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Dispatch a click to every handler registered on this element
    pub fn click(&self) {
        // Handlers may register more handlers; those run from the next click on
        let mut running = std::mem::take(&mut *self.handlers.borrow_mut());
        for handler in running.iter_mut() {
            handler();
        }
        let mut handlers = self.handlers.borrow_mut();
        running.append(&mut handlers);
        *handlers = running;
    }

    pub fn click_handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    fn matches(&self, selector: &SimpleSelector) -> bool {
        let data = self.data.borrow();
        if let Some(tag) = &selector.tag {
            if &data.tag != tag {
                return false;
            }
        }
        if let Some(id) = &selector.id {
            if data.attributes.get("id") != Some(id) {
                return false;
            }
        }
        selector
            .classes
            .iter()
            .all(|wanted| data.classes.iter().any(|c| c == wanted))
    }
}

fn validate_class(class: &str) -> Result<()> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(NavbarError::Dom(format!("invalid class token `{}`", class)));
    }
    Ok(())
}

impl NavElement for MemoryElement {
    fn toggle_class(&self, class: &str) -> Result<bool> {
        validate_class(class)?;
        let mut data = self.data.borrow_mut();
        if let Some(pos) = data.classes.iter().position(|c| c == class) {
            data.classes.remove(pos);
            Ok(false)
        } else {
            data.classes.push(class.to_string());
            Ok(true)
        }
    }

    fn add_class(&self, class: &str) -> Result<()> {
        validate_class(class)?;
        let mut data = self.data.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        validate_class(class)?;
        self.data.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.data.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.data.borrow().attributes.get(name).cloned()
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn parse_selector(selector: &str) -> Result<SimpleSelector> {
    let unsupported = || NavbarError::Dom(format!("unsupported selector `{}`", selector));
    let trimmed = selector.trim();
    if trimmed.is_empty()
        || trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '>' | '+' | '~' | ',' | '[' | ':' | '*'))
    {
        return Err(unsupported());
    }

    let mut parsed = SimpleSelector::default();
    let mut rest = trimmed;

    let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
    if tag_end > 0 {
        parsed.tag = Some(rest[..tag_end].to_ascii_lowercase());
    }
    rest = &rest[tag_end..];

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..end];
        if name.is_empty() {
            return Err(unsupported());
        }
        match marker {
            '.' => parsed.classes.push(name.to_string()),
            '#' => parsed.id = Some(name.to_string()),
            _ => return Err(unsupported()),
        }
        rest = &body[end..];
    }

    Ok(parsed)
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    path: String,
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    pub fn new(path: &str) -> Self {
        MemoryDocument {
            path: path.to_string(),
            elements: Vec::new(),
        }
    }

    /// Append `element` in document order
    pub fn with_element(mut self, element: MemoryElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: MemoryElement) {
        self.elements.push(element);
    }
}

impl NavDocument for MemoryDocument {
    type Element = MemoryElement;

    fn query_one(&self, selector: &str) -> Result<Option<MemoryElement>> {
        let parsed = parse_selector(selector)?;
        Ok(self.elements.iter().find(|e| e.matches(&parsed)).cloned())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<MemoryElement>> {
        let parsed = parse_selector(selector)?;
        Ok(self
            .elements
            .iter()
            .filter(|e| e.matches(&parsed))
            .cloned()
            .collect())
    }

    fn current_path(&self) -> Result<String> {
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound_selector() {
        let parsed = parse_selector("a.navbar-link.primary#home").unwrap();
        assert_eq!(parsed.tag.as_deref(), Some("a"));
        assert_eq!(parsed.id.as_deref(), Some("home"));
        assert_eq!(parsed.classes, vec!["navbar-link", "primary"]);
    }

    #[test]
    fn test_parse_rejects_combinators() {
        assert!(parse_selector("nav .navbar-link").is_err());
        assert!(parse_selector("nav > a").is_err());
        assert!(parse_selector("").is_err());
        assert!(parse_selector(".").is_err());
    }

    #[test]
    fn test_query_all_keeps_document_order() {
        let first = MemoryElement::link("navbar-link", "index.html");
        let second = MemoryElement::link("navbar-link", "about.html");
        let doc = MemoryDocument::new("/")
            .with_element(MemoryElement::new("div").with_class("navbar-menu"))
            .with_element(first.clone())
            .with_element(second.clone());

        let links = doc.query_all(".navbar-link").unwrap();
        assert_eq!(links.len(), 2);
        assert!(links[0].ptr_eq(&first));
        assert!(links[1].ptr_eq(&second));
    }

    #[test]
    fn test_query_one_returns_first_match() {
        let doc = MemoryDocument::new("/")
            .with_element(MemoryElement::new("button").with_class("navbar-toggle"))
            .with_element(MemoryElement::new("span").with_class("navbar-toggle"));

        let found = doc.query_one(".navbar-toggle").unwrap().unwrap();
        assert_eq!(found.data.borrow().tag, "button");
        assert!(doc.query_one("#missing").unwrap().is_none());
    }

    #[test]
    fn test_class_mutation_shared_between_handles() {
        let element = MemoryElement::new("div");
        let handle = element.clone();

        assert!(element.toggle_class("active").unwrap());
        assert!(handle.has_class("active"));
        assert!(!handle.toggle_class("active").unwrap());
        assert!(!element.has_class("active"));

        element.add_class("active").unwrap();
        element.add_class("active").unwrap();
        assert_eq!(element.classes(), vec!["active"]);

        element.remove_class("active").unwrap();
        element.remove_class("active").unwrap();
        assert!(element.classes().is_empty());
    }

    #[test]
    fn test_click_runs_handlers_in_order() {
        let element = MemoryElement::new("button");
        let log = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let log = log.clone();
            element
                .on_click(Box::new(move || log.borrow_mut().push(id)))
                .unwrap();
        }

        element.clone().click();
        element.click();
        assert_eq!(*log.borrow(), vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(element.click_handler_count(), 3);
    }

    #[test]
    fn test_click_without_handlers_is_noop() {
        let element = MemoryElement::new("a").with_class("navbar-link");
        element.click();
        assert_eq!(element.classes(), vec!["navbar-link"]);
    }

    #[test]
    fn test_invalid_class_token_rejected() {
        let element = MemoryElement::new("div");
        assert!(element.add_class("").is_err());
        assert!(element.toggle_class("two words").is_err());
    }

    #[test]
    fn test_attribute_is_raw() {
        let link = MemoryElement::link("navbar-link", "./Index.html?x=1#top");
        assert_eq!(
            link.attribute("href").as_deref(),
            Some("./Index.html?x=1#top")
        );
        assert!(link.attribute("title").is_none());
    }
}
