//! The UI helper facade used by extension pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page scripts construct one [`Ui`] and call into it to wire up controls.
//! The facade owns the [`UiConfig`] and the [`StateRegistry`] and forwards
//! to the browser glue in [`crate::dom`] and [`crate::runtime`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. DOM failures are logged at warn level and
//! the operation becomes a no-op, and a missing element reads as "no state".
//! Without the `browser` feature every DOM operation is a no-op, but state
//! listeners are still notified.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::UiConfig;
use crate::state::{StateRegistry, StateSet, Subscription};
use crate::textarea::TextAreaOptions;

#[cfg(feature = "browser")]
use crate::config::DEFAULT_SELECTOR;
#[cfg(feature = "browser")]
use crate::error::UiError;
#[cfg(feature = "browser")]
use crate::keyboard::{KeyPress, SaveShortcut};
#[cfg(feature = "browser")]
use crate::state::{target_current_state, target_has_state};
#[cfg(feature = "browser")]
use crate::{dom, runtime, textarea};
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{Element, Event, HtmlTextAreaElement, KeyboardEvent};

#[derive(Debug, Clone, Default)]
pub struct Ui {
    config: UiConfig,
    states: StateRegistry,
}

impl Ui {
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        Self { config, states: StateRegistry::new() }
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// The listener registry shared by every clone of this `Ui`.
    #[must_use]
    pub fn states(&self) -> &StateRegistry {
        &self.states
    }

    /// Register a listener for every state transition.
    pub fn on_state(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        self.states.subscribe(listener)
    }

    /// Run `callback` once the document's content has loaded.
    pub fn init(&self, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "browser")]
        {
            if let Err(err) = dom::on_ready(callback) {
                log::warn!("init: {err}");
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            drop(callback);
            log::debug!("init: no document");
        }
    }

    /// First element matching `selector`.
    #[cfg(feature = "browser")]
    pub fn elem(&self, selector: &str) -> Option<Element> {
        dom::elem(selector).unwrap_or_else(|err| {
            log::warn!("elem({selector}): {err}");
            None
        })
    }

    /// All elements matching `selector`.
    #[cfg(feature = "browser")]
    pub fn elems(&self, selector: &str) -> Vec<Element> {
        dom::elems(selector).unwrap_or_else(|err| {
            log::warn!("elems({selector}): {err}");
            Vec::new()
        })
    }

    /// Attach `handler` for `event` to every element matching `selector`.
    #[cfg(feature = "browser")]
    pub fn bind(&self, selector: &str, event: &str, handler: impl FnMut(Event) + 'static) -> usize {
        dom::bind(selector, event, handler).unwrap_or_else(|err| {
            log::warn!("bind({selector}, {event}): {err}");
            0
        })
    }

    /// Move every element matching `selector` (default body) into `state`,
    /// then notify state listeners.
    pub fn set_state(&self, state: &str, possible: &StateSet, selector: Option<&str>) {
        let selector = self.config.selector(selector);
        #[cfg(feature = "browser")]
        {
            let targets = self.elems(selector);
            self.states.transition(targets.iter(), state, possible);
        }
        #[cfg(not(feature = "browser"))]
        {
            log::debug!("set_state: no document for {selector}");
            self.states
                .transition(std::iter::empty::<&dyn crate::state::ClassTarget>(), state, possible);
        }
    }

    /// Whether the first element matching `selector` (default body) is in
    /// `state`. False when nothing matches.
    pub fn has_state(&self, state: &str, selector: Option<&str>) -> bool {
        let selector = self.config.selector(selector);
        #[cfg(feature = "browser")]
        {
            self.elem(selector).is_some_and(|el| target_has_state(&el, state))
        }
        #[cfg(not(feature = "browser"))]
        {
            log::trace!("has_state({state}): no document for {selector}");
            false
        }
    }

    /// The label of `possible` carried by the first element matching
    /// `selector` (default body).
    pub fn current_state<'a>(&self, possible: &'a StateSet, selector: Option<&str>) -> Option<&'a str> {
        let selector = self.config.selector(selector);
        #[cfg(feature = "browser")]
        {
            self.elem(selector).and_then(|el| target_current_state(&el, possible))
        }
        #[cfg(not(feature = "browser"))]
        {
            log::trace!("current_state({:?}): no document for {selector}", possible.labels());
            None
        }
    }

    /// Run `callback` on Ctrl+S, suppressing the browser's save dialog.
    pub fn on_ctrl_s(&self, callback: impl FnMut() + 'static) {
        #[cfg(feature = "browser")]
        {
            let mut shortcut = SaveShortcut::new(callback).with_meta(self.config.save_with_meta);
            self.bind(DEFAULT_SELECTOR, "keydown", move |ev: Event| {
                let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if shortcut.handle(&KeyPress::from(key_ev)).prevents_default() {
                    ev.prevent_default();
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            drop(callback);
            log::debug!("on_ctrl_s: no document");
        }
    }

    /// Bind `options.on_input` and Tab indentation to every textarea
    /// matching `selector`.
    pub fn tweak_text_area(&self, selector: &str, options: TextAreaOptions) {
        #[cfg(feature = "browser")]
        {
            if let Some(handler) = options.on_input.clone() {
                self.bind(selector, "input", move |ev: Event| {
                    if let Some(ta) = event_textarea(&ev) {
                        handler(&ta.value());
                    }
                });
            }
            let indent = self.config.indent.clone();
            self.bind(selector, "keydown", move |ev: Event| {
                if let Err(err) = tab_keydown(&ev, &options, &indent) {
                    log::warn!("textarea keydown: {err}");
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            log::debug!("tweak_text_area({selector}): no document for {options:?}");
        }
    }

    /// Open the extension's options page in a new tab.
    pub fn open_options(&self) {
        let page = &self.config.options_page;
        #[cfg(feature = "browser")]
        {
            match runtime::extension_url(page).and_then(|url| runtime::open_url(&url)) {
                Ok(true) => log::debug!("opened {page}"),
                Ok(false) => log::debug!("opening {page} was blocked"),
                Err(err) => log::warn!("open_options({page}): {err}"),
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            log::debug!("open_options({page}): no extension runtime");
        }
    }
}

#[cfg(feature = "browser")]
fn event_textarea(ev: &Event) -> Option<HtmlTextAreaElement> {
    match ev.current_target()?.dyn_into::<HtmlTextAreaElement>() {
        Ok(ta) => Some(ta),
        Err(other) => {
            log::debug!("{} event on a non-textarea element: {other:?}", ev.type_());
            None
        }
    }
}

#[cfg(feature = "browser")]
fn tab_keydown(ev: &Event, options: &TextAreaOptions, indent: &str) -> Result<(), UiError> {
    let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
        return Ok(());
    };
    let Some(ta) = event_textarea(ev) else {
        return Ok(());
    };
    let value = ta.value();
    let len = u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX);
    let start = ta.selection_start()?.unwrap_or(len);
    let end = ta.selection_end()?.unwrap_or(start);

    let (outcome, edit) = textarea::handle_key(options, &KeyPress::from(key_ev), &value, (start, end), indent);
    if outcome.prevents_default() {
        ev.prevent_default();
    }
    if let Some(edit) = edit {
        ta.set_value(&edit.value);
        ta.set_selection_range(edit.cursor, edit.cursor)?;
    }
    Ok(())
}
