use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavbarError {
    #[error("Missing {role} element (selector `{selector}`)")]
    MissingElement { role: &'static str, selector: String },

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid navbar config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Invalid navbar config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,
}

impl NavbarError {
    pub fn missing(role: &'static str, selector: &str) -> Self {
        NavbarError::MissingElement {
            role,
            selector: selector.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavbarError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for NavbarError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        NavbarError::Dom(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<NavbarError> for wasm_bindgen::JsValue {
    fn from(error: NavbarError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message_names_role_and_selector() {
        let err = NavbarError::missing("toggle", ".navbar-toggle");
        assert_eq!(
            err.to_string(),
            "Missing toggle element (selector `.navbar-toggle`)"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = NavbarError::InvalidConfig {
            field: "active_class",
            reason: "class name is empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid navbar config `active_class`: class name is empty"
        );
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: NavbarError = parse.unwrap_err().into();
        assert!(matches!(err, NavbarError::Config(_)));
    }
}
