//! Navigation bar controller for static sites, compiled to WebAssembly.
//!
//! The host page calls `initNavbar()` once its DOM is ready. Everything
//! except the `wasm-bindgen` entry points also builds natively, against
//! the in-memory document in `dom::memory`.

pub mod app;
pub mod dom;
pub mod domain;
pub mod shared;

pub use app::{initialize, NavbarController};
pub use domain::{MissingElementPolicy, NavbarConfig};
pub use shared::errors::{NavbarError, Result};

#[cfg(target_arch = "wasm32")]
pub use app::entry::{init_navbar, init_navbar_with_config, mount};
