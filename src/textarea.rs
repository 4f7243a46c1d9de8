//! Textarea tweaks: input callbacks and Tab-key indentation.
//!
//! Browsers move focus on Tab. With `can_tabs` the tweak inserts the indent
//! text at the cursor instead, replacing any selection. Selection offsets
//! are UTF-16 code units, as the DOM reports them.

#[cfg(test)]
#[path = "textarea_test.rs"]
mod textarea_test;

use std::rc::Rc;

use crate::keyboard::{KeyOutcome, KeyPress};

/// Called with the textarea's current value on every `input` event.
pub type InputHandler = Rc<dyn Fn(&str)>;

/// Options for [`crate::ui::Ui::tweak_text_area`].
///
/// Defaults: tabs off, no input handler.
#[derive(Clone, Default)]
pub struct TextAreaOptions {
    /// Insert indentation on Tab instead of moving focus.
    pub can_tabs: bool,
    pub on_input: Option<InputHandler>,
}

impl std::fmt::Debug for TextAreaOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAreaOptions")
            .field("can_tabs", &self.can_tabs)
            .field("on_input", &self.on_input.is_some())
            .finish()
    }
}

impl TextAreaOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tabs(mut self, can_tabs: bool) -> Self {
        self.can_tabs = can_tabs;
        self
    }

    #[must_use]
    pub fn on_input(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_input = Some(Rc::new(handler));
        self
    }
}

/// Result of splicing text into a textarea value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub value: String,
    /// Collapsed cursor position, in UTF-16 code units.
    pub cursor: u32,
}

fn to_index(offset: u32, len: usize) -> usize {
    usize::try_from(offset).unwrap_or(usize::MAX).min(len)
}

/// Replace the `start..end` selection of `value` with `indent`.
///
/// Offsets are clamped to the value and put in order first.
#[must_use]
pub fn insert_indent(value: &str, start: u32, end: u32, indent: &str) -> Insertion {
    let units: Vec<u16> = value.encode_utf16().collect();
    let a = to_index(start, units.len());
    let b = to_index(end, units.len());
    let (from, to) = if a <= b { (a, b) } else { (b, a) };

    let indent_units: Vec<u16> = indent.encode_utf16().collect();
    let mut out = Vec::with_capacity(units.len() - (to - from) + indent_units.len());
    out.extend_from_slice(&units[..from]);
    out.extend_from_slice(&indent_units);
    out.extend_from_slice(&units[to..]);

    let cursor = from + indent_units.len();
    Insertion {
        value: String::from_utf16_lossy(&out),
        cursor: u32::try_from(cursor).unwrap_or(u32::MAX),
    }
}

/// Key-down logic for a tweaked textarea.
///
/// Returns the edit to apply when the key is Tab and tabs are enabled.
#[must_use]
pub fn handle_key(
    options: &TextAreaOptions,
    key: &KeyPress,
    value: &str,
    selection: (u32, u32),
    indent: &str,
) -> (KeyOutcome, Option<Insertion>) {
    if !options.can_tabs || !key.is_tab() {
        return (KeyOutcome::Ignored, None);
    }
    let (start, end) = selection;
    (KeyOutcome::Handled, Some(insert_indent(value, start, end, indent)))
}
