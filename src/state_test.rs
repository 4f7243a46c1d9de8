use super::*;
use std::cell::Cell;

struct FakeElement {
    class: RefCell<String>,
}

impl FakeElement {
    fn new(class: &str) -> Self {
        Self { class: RefCell::new(class.to_owned()) }
    }

    fn class(&self) -> String {
        self.class.borrow().clone()
    }
}

impl ClassTarget for FakeElement {
    fn class_name(&self) -> String {
        self.class.borrow().clone()
    }

    fn set_class_name(&self, value: &str) {
        *self.class.borrow_mut() = value.to_owned();
    }
}

fn editor_states() -> StateSet {
    StateSet::new(["textChangedState", "textSavedState"])
}

fn present<'a>(el: &FakeElement, set: &'a StateSet) -> Vec<&'a str> {
    let tokens = ClassTokens::parse(&el.class());
    set.labels()
        .iter()
        .map(String::as_str)
        .filter(|l| tokens.contains(l))
        .collect()
}

// =============================================================
// StateSet
// =============================================================

#[test]
fn state_set_keeps_order_and_drops_duplicates() {
    let set = StateSet::new(["b", "a", "b"]);
    assert_eq!(set.labels(), ["b".to_owned(), "a".to_owned()]);
}

#[test]
fn state_set_check_rejects_unknown_label() {
    let set = editor_states();
    assert!(set.check("textSavedState").is_ok());
    let err = set.check("bogus").unwrap_err();
    assert!(matches!(err, UiError::UnknownState { ref state, .. } if state == "bogus"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn transition_leaves_exactly_the_new_label() {
    let set = editor_states();
    let registry = StateRegistry::new();
    let els = [FakeElement::new("textSavedState"), FakeElement::new("")];
    for state in set.labels() {
        registry.transition(&els, state, &set);
        for el in &els {
            assert_eq!(present(el, &set), vec![state.as_str()]);
            assert!(target_has_state(el, state));
        }
    }
}

#[test]
fn second_transition_replaces_first() {
    let set = editor_states();
    let registry = StateRegistry::new();
    let el = FakeElement::new("panel");
    registry.transition([&el], "textChangedState", &set);
    registry.transition([&el], "textSavedState", &set);
    assert_eq!(el.class(), "panel textSavedState");
    assert!(!target_has_state(&el, "textChangedState"));
}

#[test]
fn transition_keeps_classes_containing_a_label() {
    let set = StateSet::new(["active", "idle"]);
    let registry = StateRegistry::new();
    let el = FakeElement::new("inactive idle-ish active");
    registry.transition([&el], "idle", &set);
    assert_eq!(el.class(), "inactive idle-ish idle");
}

#[test]
fn transition_to_unknown_state_still_applies() {
    let set = editor_states();
    let registry = StateRegistry::new();
    let el = FakeElement::new("textSavedState");
    registry.transition([&el], "offline", &set);
    assert_eq!(el.class(), "offline");
    assert!(target_has_state(&el, "offline"));
}

#[test]
fn transition_reports_target_count() {
    let set = editor_states();
    let registry = StateRegistry::new();
    let els = [FakeElement::new(""), FakeElement::new(""), FakeElement::new("")];
    assert_eq!(registry.transition(&els, "textSavedState", &set), 3);
}

#[test]
fn current_state_reads_first_label_present() {
    let set = editor_states();
    let el = FakeElement::new("x textSavedState");
    assert_eq!(target_current_state(&el, &set), Some("textSavedState"));
    let bare = FakeElement::new("x");
    assert_eq!(target_current_state(&bare, &set), None);
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn listeners_run_once_each_in_registration_order() {
    let set = editor_states();
    let registry = StateRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        registry.subscribe(move |state| log.borrow_mut().push(format!("{name}:{state}")));
    }
    registry.transition([&FakeElement::new("")], "textChangedState", &set);
    assert_eq!(
        *log.borrow(),
        vec!["first:textChangedState", "second:textChangedState", "third:textChangedState"]
    );
}

#[test]
fn listeners_run_even_without_targets() {
    let set = editor_states();
    let registry = StateRegistry::new();
    let calls = Rc::new(Cell::new(0));
    let calls_in = Rc::clone(&calls);
    registry.subscribe(move |_| calls_in.set(calls_in.get() + 1));
    let none: [FakeElement; 0] = [];
    assert_eq!(registry.transition(&none, "textSavedState", &set), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let registry = StateRegistry::new();
    let calls = Rc::new(Cell::new(0));
    let calls_in = Rc::clone(&calls);
    let sub = registry.subscribe(move |_| calls_in.set(calls_in.get() + 1));
    registry.notify("a");
    assert!(sub.unsubscribe());
    registry.notify("b");
    assert_eq!(calls.get(), 1);
    assert!(registry.is_empty());
}

#[test]
fn dropped_subscription_keeps_listener() {
    let registry = StateRegistry::new();
    drop(registry.subscribe(|_| {}));
    assert_eq!(registry.len(), 1);
}

#[test]
fn unsubscribe_after_registry_dropped_is_false() {
    let registry = StateRegistry::new();
    let sub = registry.subscribe(|_| {});
    drop(registry);
    assert!(!sub.unsubscribe());
}

#[test]
fn clones_share_listeners() {
    let registry = StateRegistry::new();
    let other = registry.clone();
    let seen = Rc::new(RefCell::new(String::new()));
    let seen_in = Rc::clone(&seen);
    other.subscribe(move |state| seen_in.borrow_mut().push_str(state));
    registry.notify("on");
    assert_eq!(*seen.borrow(), "on");
}

#[test]
fn listener_added_during_notify_waits_for_next_transition() {
    let registry = StateRegistry::new();
    let late_calls = Rc::new(Cell::new(0));
    let registry_in = registry.clone();
    let late_in = Rc::clone(&late_calls);
    registry.subscribe(move |_| {
        let late = Rc::clone(&late_in);
        registry_in.subscribe(move |_| late.set(late.get() + 1));
    });
    registry.notify("a");
    assert_eq!(late_calls.get(), 0);
    registry.notify("b");
    assert_eq!(late_calls.get(), 1);
}

#[test]
fn state_set_normalizes_labels() {
    let set = StateSet::new([" saved", "changed ", "saved", "", "two words"]);
    assert_eq!(set.labels(), ["saved".to_owned(), "changed".to_owned()]);
    assert!(set.contains(" saved"));
}

#[test]
fn padded_labels_keep_one_state_per_element() {
    let set = StateSet::new([" saved", "changed"]);
    let registry = StateRegistry::new();
    let el = FakeElement::new("panel");
    registry.transition([&el], " saved", &set);
    assert!(target_has_state(&el, " saved"));
    registry.transition([&el], "changed", &set);
    assert_eq!(el.class(), "panel changed");
    assert_eq!(present(&el, &set), vec!["changed"]);
}
