//! CSS-class state machine for widgets.
//!
//! DESIGN
//! ======
//! A widget's mode is one label out of a [`StateSet`], stored as a class
//! token on one or more elements. A transition strips every label of the set
//! from each target and adds the new one, then notifies the listeners of a
//! [`StateRegistry`]. Targets are anything implementing [`ClassTarget`], so
//! the same code drives DOM elements in the browser and plain fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Transitioning to a label outside the set is a diagnostic, not a failure:
//! it is logged at error level (the devtools console in the browser) and
//! the transition still happens.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::classes::{ClassTokens, normalize_label};
use crate::error::UiError;

// =============================================================================
// TARGETS
// =============================================================================

/// Something with a mutable `class` attribute.
pub trait ClassTarget {
    fn class_name(&self) -> String;
    fn set_class_name(&self, value: &str);
}

#[cfg(feature = "browser")]
impl ClassTarget for web_sys::Element {
    fn class_name(&self) -> String {
        web_sys::Element::class_name(self)
    }

    fn set_class_name(&self, value: &str) {
        web_sys::Element::set_class_name(self, value);
    }
}

/// Replace whichever label of `set` `target` carries with `state`.
pub fn apply_state<T: ClassTarget + ?Sized>(target: &T, state: &str, set: &StateSet) {
    let mut tokens = ClassTokens::parse(&target.class_name());
    tokens.remove_all(set.labels());
    if !tokens.add(state) && normalize_label(state).is_none() {
        log::error!("state '{state}' is not a single class token");
    }
    target.set_class_name(&tokens.to_string());
}

/// Whether `target` carries `state` as a class token.
pub fn target_has_state<T: ClassTarget + ?Sized>(target: &T, state: &str) -> bool {
    ClassTokens::parse(&target.class_name()).contains(state)
}

/// The first label of `set` that `target` carries.
pub fn target_current_state<'a, T: ClassTarget + ?Sized>(target: &T, set: &'a StateSet) -> Option<&'a str> {
    let tokens = ClassTokens::parse(&target.class_name());
    set.labels()
        .iter()
        .map(String::as_str)
        .find(|label| tokens.contains(label))
}

// =============================================================================
// STATE SETS
// =============================================================================

/// Ordered labels a widget may be in; at most one is applied at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSet {
    labels: Vec<String>,
}

impl StateSet {
    /// Labels are trimmed; blank ones and ones with inner whitespace are
    /// dropped with an error log.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().collect()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn contains(&self, state: &str) -> bool {
        normalize_label(state).is_some_and(|state| self.labels.iter().any(|l| l == state))
    }

    /// Membership check used before a transition.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownState`] if `state` is not in the set.
    pub fn check(&self, state: &str) -> Result<(), UiError> {
        if self.contains(state) {
            Ok(())
        } else {
            Err(UiError::UnknownState { state: state.to_owned(), possible: self.labels.clone() })
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut labels: Vec<String> = Vec::new();
        for label in iter {
            let label = label.into();
            let Some(token) = normalize_label(&label) else {
                log::error!("dropping state label '{label}': not a single class token");
                continue;
            };
            if !labels.iter().any(|l| l == token) {
                labels.push(token.to_owned());
            }
        }
        Self { labels }
    }
}

// =============================================================================
// LISTENER REGISTRY
// =============================================================================

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Insertion-ordered state listeners, shared by clones of the registry.
#[derive(Clone, Default)]
pub struct StateRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl std::fmt::Debug for StateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRegistry").field("listeners", &self.len()).finish()
    }
}

impl StateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it is called with the new label on every
    /// transition until the returned handle is unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Rc::new(listener)));
        Subscription { id, registry: Rc::downgrade(&self.inner) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every listener with `state`, in registration order.
    ///
    /// Listeners are snapshotted first, so one that subscribes or
    /// unsubscribes during notification affects the next transition only.
    pub fn notify(&self, state: &str) {
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(state);
        }
    }

    /// Apply `state` to every target, then notify listeners once.
    ///
    /// Returns the number of targets updated.
    pub fn transition<'a, T, I>(&self, targets: I, state: &str, set: &StateSet) -> usize
    where
        T: ClassTarget + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        if let Err(err) = set.check(state) {
            log::error!("{err}");
        }
        let mut count = 0;
        for target in targets {
            apply_state(target, state, set);
            count += 1;
        }
        log::debug!("state -> {state} ({count} element(s))");
        self.notify(state);
        count
    }
}

/// Handle returned by [`StateRegistry::subscribe`].
///
/// Dropping it leaves the listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Remove the listener. Returns `false` if the registry is gone or the
    /// listener was already removed.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut inner = registry.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|(id, _)| *id != self.id);
        inner.entries.len() != before
    }
}
