// Default hooks into the page markup
pub const TOGGLE_SELECTOR: &str = ".navbar-toggle";
pub const MENU_SELECTOR: &str = ".navbar-menu";
pub const LINK_SELECTOR: &str = ".navbar-link";

pub const ACTIVE_CLASS: &str = "active";
pub const TARGET_ATTRIBUTE: &str = "href";

/// Page identifier used when the path has no segment (site root)
pub const DEFAULT_PAGE: &str = "index.html";
