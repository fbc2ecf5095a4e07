// Pure Rust, no DOM dependencies
pub mod config;
pub mod page;

pub use config::{MissingElementPolicy, NavbarConfig};
pub use page::{is_current_target, page_identifier};
