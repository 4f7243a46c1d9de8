//! UI helpers for browser extension pages.
//!
//! This crate is compiled to WebAssembly and used by the scripts that build
//! an extension's popup and options pages. It covers the small set of chores
//! every such page repeats: looking up and binding elements, switching a
//! widget between CSS-class states, the Ctrl+S save habit, Tab indentation
//! in textareas, and opening the options page.
//!
//! The decision logic lives in plain Rust and is tested natively. The
//! `browser` feature adds the `web-sys` glue that applies it to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ui`] | [`Ui`] facade used by page scripts |
//! | [`state`] | State sets, listener registry, and class-based transitions |
//! | [`classes`] | Token-set view over a `class` attribute |
//! | [`keyboard`] | Key press model and the save shortcut |
//! | [`textarea`] | Textarea options and Tab insertion |
//! | [`config`] | [`UiConfig`] defaults |
//! | [`error`] | [`UiError`] |
//! | [`logging`] | Console logger setup |
//! | `dom` | DOM queries and event binding (`browser` only) |
//! | `runtime` | Extension runtime bindings (`browser` only) |

pub mod classes;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod logging;
pub mod state;
pub mod textarea;
pub mod ui;

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod runtime;

pub use config::UiConfig;
pub use error::UiError;
pub use logging::init_logging;
pub use state::{StateRegistry, StateSet, Subscription};
pub use textarea::TextAreaOptions;
pub use ui::Ui;
