//! `wasm-bindgen` entry points. The host page calls one of them once,
//! after its DOM is ready.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::controller::{initialize, NavbarController};
use crate::dom::web::WebDocument;
use crate::domain::NavbarConfig;
use crate::shared::errors::Result;

/// Initialize against the live page
pub fn mount(config: NavbarConfig) -> Result<NavbarController<Element>> {
    let document = WebDocument::current()?;
    initialize(&document, config)
}

/// Entry point with the stock selectors
#[wasm_bindgen(js_name = initNavbar)]
pub fn init_navbar() -> std::result::Result<(), JsValue> {
    mount(NavbarConfig::default())?;
    Ok(())
}

/// Entry point taking a config object; missing fields use the defaults.
#[wasm_bindgen(js_name = initNavbarWithConfig)]
pub fn init_navbar_with_config(config: JsValue) -> std::result::Result<(), JsValue> {
    let config: NavbarConfig = if config.is_undefined() || config.is_null() {
        NavbarConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    mount(config)?;
    Ok(())
}
