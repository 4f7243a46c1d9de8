//! Extension runtime bindings.

use wasm_bindgen::prelude::*;

use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL, catch)]
    fn chrome_runtime_get_url(path: &str) -> Result<String, JsValue>;
}

/// Absolute URL of an extension-relative `path`.
pub fn extension_url(path: &str) -> Result<String, UiError> {
    Ok(chrome_runtime_get_url(path)?)
}

/// Open `url` in a new tab or window. `Ok(false)` means the browser refused
/// (e.g. a popup blocker).
pub fn open_url(url: &str) -> Result<bool, UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    Ok(window.open_with_url(url)?.is_some())
}
