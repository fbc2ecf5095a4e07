//! Structured logging for the navbar controller
//!
//! One function per event, each tagged with an `operation` field so the
//! browser console (or a native subscriber) can filter by phase.

/// Controller phases used as the `operation` field
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Initialization,
    ElementLookup,
    Toggle,
    LinkActivation,
    ActiveLink,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Initialization => "initialization",
            LogOperation::ElementLookup => "element_lookup",
            LogOperation::Toggle => "toggle",
            LogOperation::LinkActivation => "link_activation",
            LogOperation::ActiveLink => "active_link",
        }
    }
}

/// Log initialization start
pub fn log_init_start(toggle_selector: &str, menu_selector: &str, link_selector: &str) {
    tracing::debug!(
        operation = LogOperation::Initialization.as_str(),
        toggle_selector = toggle_selector,
        menu_selector = menu_selector,
        link_selector = link_selector,
        "Initializing navbar"
    );
}

/// Log initialization result
pub fn log_init_complete(link_count: usize, toggle_wired: bool) {
    tracing::info!(
        operation = LogOperation::Initialization.as_str(),
        link_count = link_count,
        toggle_wired = toggle_wired,
        "Navbar initialized"
    );
}

/// Log a required element that could not be resolved.
///
/// `fatal` selects between the fail-fast and skip-toggle policies.
pub fn log_missing_element(role: &str, selector: &str, fatal: bool) {
    if fatal {
        tracing::error!(
            operation = LogOperation::ElementLookup.as_str(),
            role = role,
            selector = selector,
            "Required navbar element not found - aborting initialization"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::ElementLookup.as_str(),
            role = role,
            selector = selector,
            "Required navbar element not found - menu toggle disabled"
        );
    }

    #[cfg(target_arch = "wasm32")]
    {
        let message = format!("[navbar] missing {} element ({})", role, selector);
        if fatal {
            web_sys::console::error_1(&message.into());
        } else {
            web_sys::console::warn_1(&message.into());
        }
    }
}

/// Log toggle activation
pub fn log_toggle(expanded: bool) {
    tracing::trace!(
        operation = LogOperation::Toggle.as_str(),
        expanded = expanded,
        "Menu toggled"
    );
}

/// Log link activation (menu collapse)
pub fn log_link_activation() {
    tracing::trace!(
        operation = LogOperation::LinkActivation.as_str(),
        "Link activated - menu collapsed"
    );
}

/// Log a click handler that could not update the class lists.
///
/// Handlers have no caller to return to, so this is the only report.
pub fn log_handler_error(operation: LogOperation, error: &str) {
    tracing::error!(
        operation = operation.as_str(),
        error = error,
        "Navbar click handler failed"
    );

    #[cfg(target_arch = "wasm32")]
    {
        let message = format!("[navbar] {} failed: {}", operation.as_str(), error);
        web_sys::console::error_1(&message.into());
    }
}

/// Log active-link pass result
pub fn log_active_link_result(page: &str, link_count: usize, matched: usize) {
    tracing::debug!(
        operation = LogOperation::ActiveLink.as_str(),
        page = page,
        link_count = link_count,
        matched = matched,
        "Active link pass completed"
    );
}

/// Log more than one link sharing the current page
pub fn log_multiple_active_links(page: &str, matched: usize) {
    tracing::warn!(
        operation = LogOperation::ActiveLink.as_str(),
        page = page,
        matched = matched,
        "Several navbar links point at the current page - all marked active"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Initialization.as_str(), "initialization");
        assert_eq!(LogOperation::ElementLookup.as_str(), "element_lookup");
        assert_eq!(LogOperation::Toggle.as_str(), "toggle");
        assert_eq!(LogOperation::LinkActivation.as_str(), "link_activation");
        assert_eq!(LogOperation::ActiveLink.as_str(), "active_link");
    }
}
