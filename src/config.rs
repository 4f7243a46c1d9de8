//! UI layer configuration.
//!
//! Every field has a default, so pages can pass a partial JSON object (or
//! nothing) and get the stock extension behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

pub const DEFAULT_SELECTOR: &str = "body";
pub const DEFAULT_OPTIONS_PAGE: &str = "options.html";
pub const DEFAULT_INDENT: &str = "\t";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Selector used when a state operation is given none.
    pub default_selector: String,
    /// Extension-relative path of the options page.
    pub options_page: String,
    /// Text inserted by a tweaked textarea on Tab.
    pub indent: String,
    /// Accept Meta+S as well as Ctrl+S for the save shortcut.
    pub save_with_meta: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_selector: DEFAULT_SELECTOR.to_owned(),
            options_page: DEFAULT_OPTIONS_PAGE.to_owned(),
            indent: DEFAULT_INDENT.to_owned(),
            save_with_meta: false,
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] on malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// `selector`, or the configured default when `None`.
    #[must_use]
    pub fn selector<'a>(&'a self, selector: Option<&'a str>) -> &'a str {
        selector.unwrap_or(&self.default_selector)
    }
}
