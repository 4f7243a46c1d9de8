//! Browser DOM glue: document access, queries, and event binding.
//!
//! Only compiled with the `browser` feature. Handlers bound here live for
//! the rest of the page, so their closures are leaked with
//! [`Closure::forget`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::error::UiError;

pub fn document() -> Result<Document, UiError> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

/// First element matching `selector`.
pub fn elem(selector: &str) -> Result<Option<Element>, UiError> {
    Ok(document()?.query_selector(selector)?)
}

/// All elements matching `selector`, in document order.
pub fn elems(selector: &str) -> Result<Vec<Element>, UiError> {
    let list = document()?.query_selector_all(selector)?;
    let mut out = Vec::new();
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<Element>() {
            out.push(el);
        }
    }
    Ok(out)
}

/// Attach `handler` for `event` to every element matching `selector`.
///
/// Returns the number of elements bound. One closure is shared by all of
/// them.
pub fn bind<F>(selector: &str, event: &str, handler: F) -> Result<usize, UiError>
where
    F: FnMut(Event) + 'static,
{
    let targets = elems(selector)?;
    if targets.is_empty() {
        return Ok(0);
    }
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let result = targets
        .iter()
        .try_for_each(|el| el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()));
    // Elements bound before a failure still reference the closure.
    closure.forget();
    result?;
    Ok(targets.len())
}

/// Run `callback` once the document has been parsed.
pub fn on_ready<F>(callback: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        callback();
        return Ok(());
    }
    let closure = Closure::once_into_js(callback);
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    Ok(())
}
