use serde::Deserialize;

use crate::shared::constants::{
    ACTIVE_CLASS, DEFAULT_PAGE, LINK_SELECTOR, MENU_SELECTOR, TARGET_ATTRIBUTE, TOGGLE_SELECTOR,
};
use crate::shared::errors::{NavbarError, Result};

/// What to do when the toggle or menu element cannot be found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingElementPolicy {
    /// Abort initialization with `NavbarError::MissingElement`
    #[default]
    FailFast,
    /// Warn, leave the menu unwired, still highlight the current link
    SkipToggle,
}

/// Selectors and class names the controller binds to.
/// Every field is optional in serialized form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub link_selector: String,
    pub active_class: String,
    pub target_attribute: String,
    pub default_page: String,
    pub on_missing_element: MissingElementPolicy,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        NavbarConfig {
            toggle_selector: TOGGLE_SELECTOR.to_string(),
            menu_selector: MENU_SELECTOR.to_string(),
            link_selector: LINK_SELECTOR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            target_attribute: TARGET_ATTRIBUTE.to_string(),
            default_page: DEFAULT_PAGE.to_string(),
            on_missing_element: MissingElementPolicy::default(),
        }
    }
}

impl NavbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject settings that would only fail once the menu is clicked
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, reason: &str| {
            Err(NavbarError::InvalidConfig {
                field,
                reason: reason.to_string(),
            })
        };

        for (field, selector) in [
            ("toggle_selector", &self.toggle_selector),
            ("menu_selector", &self.menu_selector),
            ("link_selector", &self.link_selector),
        ] {
            if selector.trim().is_empty() {
                return invalid(field, "selector is empty");
            }
        }

        if self.active_class.is_empty() {
            return invalid("active_class", "class name is empty");
        }
        if self.active_class.chars().any(char::is_whitespace) {
            return invalid("active_class", "class name contains whitespace");
        }
        if self.target_attribute.is_empty()
            || self.target_attribute.chars().any(char::is_whitespace)
        {
            return invalid("target_attribute", "not a valid attribute name");
        }
        if self.default_page.is_empty() || self.default_page.contains('/') {
            return invalid("default_page", "must be a single path segment");
        }
        Ok(())
    }

    pub fn with_policy(mut self, policy: MissingElementPolicy) -> Self {
        self.on_missing_element = policy;
        self
    }
}
