pub mod controller;
pub mod wiring;

// Browser-only entry points
#[cfg(target_arch = "wasm32")]
pub mod entry;

pub use controller::{initialize, MenuHandles, NavbarController};
