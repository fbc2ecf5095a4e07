//! Browser document backed by `web-sys`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

use super::{NavDocument, NavElement};
use crate::shared::errors::{NavbarError, Result};

impl NavElement for Element {
    fn toggle_class(&self, class: &str) -> Result<bool> {
        Ok(self.class_list().toggle(class)?)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().remove_1(class)?)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn on_click(&self, mut handler: Box<dyn FnMut()>) -> Result<()> {
        let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        self.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // Listeners live as long as the page
        closure.forget();
        Ok(())
    }
}

/// The live page: document plus the window it belongs to
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(NavbarError::NoWindow)?;
        let document = window.document().ok_or(NavbarError::NoDocument)?;
        Ok(WebDocument { window, document })
    }
}

impl NavDocument for WebDocument {
    type Element = Element;

    fn query_one(&self, selector: &str) -> Result<Option<Element>> {
        Ok(self.document.query_selector(selector)?)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let nodes = self.document.query_selector_all(selector)?;
        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    fn current_path(&self) -> Result<String> {
        Ok(self.window.location().pathname()?)
    }
}
