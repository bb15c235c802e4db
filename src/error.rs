//! Error type for the DOM shell.
//!
//! Widgets never surface failures to the visitor. Errors travel up to the
//! installer, which logs them and moves on to the next widget.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("missing node: {0}")]
    MissingNode(&'static str),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    ConfigValue { field: &'static str, reason: String },
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;
