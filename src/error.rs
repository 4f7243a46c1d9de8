//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Internal DOM helpers return `Result<_, UiError>` and propagate with `?`.
//! The [`crate::ui::Ui`] facade is the boundary: it logs errors and degrades
//! to a no-op, so callers building extension pages never see them.

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("state '{state}' is not one of the possible states {possible:?}")]
    UnknownState { state: String, possible: Vec<String> },
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logger already installed")]
    Logger,
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
