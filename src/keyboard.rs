//! Key press model and the save-shortcut matcher.
//!
//! [`KeyPress`] is a browser-independent copy of the fields of a `keydown`
//! event that the shortcut helpers look at.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Legacy `keyCode` of the S key.
pub const KEY_CODE_S: u32 = 83;
/// Legacy `keyCode` of the Tab key.
pub const KEY_CODE_TAB: u32 = 9;

/// A single key-down as seen by the helpers.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key` (e.g. `"s"`, `"Tab"`).
    pub key: String,
    /// `KeyboardEvent.keyCode`, kept for layouts where `key` is not Latin.
    pub key_code: u32,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_code(mut self, key_code: u32) -> Self {
        self.key_code = key_code;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn is_tab(&self) -> bool {
        self.key == "Tab" || self.key_code == KEY_CODE_TAB
    }

    fn is_s(&self) -> bool {
        self.key.eq_ignore_ascii_case("s") || self.key_code == KEY_CODE_S
    }
}

#[cfg(feature = "browser")]
impl From<&web_sys::KeyboardEvent> for KeyPress {
    fn from(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            key_code: ev.key_code(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        }
    }
}

/// What a key handler did with a key press.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the browser's default action must be cancelled.
    Handled,
    /// Not ours; let the event through untouched.
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == Self::Handled
    }
}

/// Matches Ctrl+S (and optionally Meta+S) and runs a save callback.
pub struct SaveShortcut<F> {
    callback: F,
    allow_meta: bool,
}

impl<F: FnMut()> SaveShortcut<F> {
    #[must_use]
    pub fn new(callback: F) -> Self {
        Self { callback, allow_meta: false }
    }

    /// Also accept Meta+S (Cmd+S on macOS).
    #[must_use]
    pub fn with_meta(mut self, allow_meta: bool) -> Self {
        self.allow_meta = allow_meta;
        self
    }

    #[must_use]
    pub fn matches(&self, key: &KeyPress) -> bool {
        (key.ctrl || (self.allow_meta && key.meta)) && key.is_s()
    }

    /// Run the callback if `key` is the save chord.
    pub fn handle(&mut self, key: &KeyPress) -> KeyOutcome {
        if !self.matches(key) {
            return KeyOutcome::Ignored;
        }
        (self.callback)();
        KeyOutcome::Handled
    }
}
