//! Host document seam.
//!
//! The controller only needs class-list mutation, one attribute read, a
//! click hook and selector queries, so that is all these traits expose.
//! The browser implementation lives in `web` (wasm32 only); `memory` backs
//! tests and headless hosts.

use crate::shared::errors::Result;

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// An element whose class list the controller can mutate
pub trait NavElement {
    /// Flip `class`, returning whether it is present afterwards
    fn toggle_class(&self, class: &str) -> Result<bool>;

    fn add_class(&self, class: &str) -> Result<()>;

    fn remove_class(&self, class: &str) -> Result<()>;

    fn has_class(&self, class: &str) -> bool;

    /// Raw attribute value, exactly as written in the markup
    fn attribute(&self, name: &str) -> Option<String>;

    /// Run `handler` on every click for the rest of the page's life
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()>;
}

/// The document the navbar lives in
pub trait NavDocument {
    type Element: NavElement + Clone;

    fn query_one(&self, selector: &str) -> Result<Option<Self::Element>>;

    /// All matches in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Path component of the current location (e.g. `/docs/about.html`)
    fn current_path(&self) -> Result<String>;
}
