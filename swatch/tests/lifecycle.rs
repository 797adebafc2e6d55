//! Tests for initialization, validator composition and teardown.

use std::sync::{Arc, Mutex};

use formbind::{FormControl, FormValue, UpdateOptions, ValueAccessor, Validator};
use swatch::{ColorSelector, PALETTE_MEMBER, Swatch, palette_member};

fn palette_checks(control: &FormControl) -> usize {
    let check = palette_member();
    control.validators().iter().filter(|v| **v == check).count()
}

#[test]
fn test_standalone_initialize_creates_control() {
    let selector = ColorSelector::new();
    selector.initialize(None);

    let control = selector.control().unwrap();
    assert!(selector.is_initialized());
    assert!(selector.is_subscribed());
    assert_eq!(selector.selection(), None);
    assert!(!selector.required());
    assert_eq!(palette_checks(&control), 1);
}

#[test]
fn test_initialize_adopts_host_control() {
    let host = FormControl::new().with_validators(Validator::required().into());
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));

    assert_eq!(selector.control().unwrap().id(), host.id());
    assert!(selector.required());
    assert_eq!(host.validators().len(), 2);
    assert_eq!(palette_checks(&host), 1);
}

#[test]
fn test_compose_validators_is_idempotent() {
    let host = FormControl::new();
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));

    selector.compose_validators();
    selector.compose_validators();

    assert_eq!(palette_checks(&host), 1);
    assert_eq!(host.validators().len(), 1);
}

#[test]
fn test_compose_revalidates_silently() {
    let host = FormControl::new().with_value("purple");
    let emitted = Arc::new(Mutex::new(0));
    let emitted_clone = Arc::clone(&emitted);
    let _sub = host
        .status_changes()
        .subscribe(move |_| *emitted_clone.lock().unwrap() += 1);

    let selector = ColorSelector::new();
    selector.initialize(Some(&host));

    assert!(host.has_error(PALETTE_MEMBER));
    assert_eq!(*emitted.lock().unwrap(), 0);
}

#[test]
fn test_compose_before_initialize_is_noop() {
    let selector = ColorSelector::new();
    selector.compose_validators();
    selector.refresh_derived_state();
    assert!(!selector.is_required());
    assert!(selector.control().is_none());
}

#[test]
fn test_required_follows_host_validators() {
    let host = FormControl::new();
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));
    assert!(!selector.required());

    host.set_validators(Validator::required().into());
    host.update_value_and_validity(UpdateOptions::default());
    assert!(selector.required());
    assert_eq!(palette_checks(&host), 1);

    host.clear_validators();
    host.update_value_and_validity(UpdateOptions::default());
    assert!(!selector.required());
    assert_eq!(palette_checks(&host), 1);
}

#[test]
fn test_refresh_picks_up_silent_validator_changes() {
    let host = FormControl::new();
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));

    host.add_validator(Validator::required());
    assert!(!selector.required());
    assert!(selector.is_required());

    selector.refresh_derived_state();
    assert!(selector.required());
}

#[test]
fn test_required_true_counts_as_required() {
    let host = FormControl::new().with_validators(Validator::required_true().into());
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));
    assert!(selector.required());
}

#[test]
fn test_other_validators_are_not_required() {
    let host = FormControl::new().with_validators(Validator::max_length(3).into());
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));
    assert!(!selector.required());
}

#[test]
fn test_teardown_releases_subscription() {
    let host = FormControl::new();
    let selector = ColorSelector::new();
    selector.initialize(Some(&host));
    assert_eq!(host.status_changes().listener_count(), 1);

    selector.teardown();

    assert!(!selector.is_subscribed());
    assert_eq!(host.status_changes().listener_count(), 0);

    host.set_validators(Validator::required().into());
    host.update_value_and_validity(UpdateOptions::default());
    assert!(!selector.required());
    assert_eq!(palette_checks(&host), 0);
}

#[test]
fn test_teardown_without_initialize() {
    let selector = ColorSelector::new();
    selector.teardown();
    selector.teardown();
    assert!(!selector.is_subscribed());
}

#[test]
fn test_teardown_twice_after_initialize() {
    let selector = ColorSelector::new();
    selector.initialize(None);
    selector.teardown();
    selector.teardown();
    assert!(!selector.is_subscribed());
}

#[test]
fn test_reinitialize_replaces_subscription() {
    let first = FormControl::new();
    let second = FormControl::new();
    let selector = ColorSelector::new();

    selector.initialize(Some(&first));
    selector.initialize(Some(&second));

    assert_eq!(first.status_changes().listener_count(), 0);
    assert_eq!(second.status_changes().listener_count(), 1);
    assert_eq!(selector.control().unwrap().id(), second.id());
}

#[test]
fn test_dropping_selector_releases_subscription() {
    let host = FormControl::new();
    {
        let selector = ColorSelector::new();
        selector.initialize(Some(&host));
        assert_eq!(host.status_changes().listener_count(), 1);
    }
    assert_eq!(host.status_changes().listener_count(), 0);
    host.update_value_and_validity(UpdateOptions::default());
}

#[test]
fn test_attach_round_trip() {
    let host = FormControl::new().with_value("red");
    let selector = ColorSelector::new();
    let _binding = selector.attach(&host);
    assert_eq!(selector.selection(), Some(Swatch::Red));

    selector.select(Swatch::Blue);
    assert_eq!(host.value(), FormValue::from("blue"));
    assert!(host.is_touched());
    assert!(host.is_dirty());

    selector.select(Swatch::Blue);
    assert_eq!(host.value(), FormValue::Null);

    host.set_value("green", UpdateOptions::default());
    assert_eq!(selector.selection(), Some(Swatch::Green));

    selector.teardown();
}

#[test]
fn test_attach_out_of_palette_host_value() {
    let host = FormControl::new();
    let selector = ColorSelector::new();
    let _binding = selector.attach(&host);
    selector.select(Swatch::Red);

    host.set_value("purple", UpdateOptions::default());

    assert_eq!(selector.selection(), Some(Swatch::Red));
    assert!(host.has_error(PALETTE_MEMBER));
    assert!(!host.is_valid());
}

#[test]
fn test_attach_disable_suppresses_host_updates() {
    let host = FormControl::new();
    let selector = ColorSelector::new();
    let _binding = selector.attach(&host);

    host.disable();
    assert!(selector.is_disabled());

    selector.select(Swatch::Green);
    assert_eq!(selector.selection(), Some(Swatch::Green));
    assert_eq!(host.value(), FormValue::Null);
    assert!(!host.is_touched());

    host.enable();
    assert!(!selector.is_disabled());
}

#[test]
fn test_standalone_scenario() {
    let selector = ColorSelector::new();
    selector.initialize(None);
    assert_eq!(selector.selection(), None);
    assert!(!selector.required());

    let changes = Arc::new(Mutex::new(Vec::new()));
    let touches = Arc::new(Mutex::new(0));
    let changes_clone = Arc::clone(&changes);
    selector.register_on_change(Arc::new(move |v| changes_clone.lock().unwrap().push(v)));
    let touches_clone = Arc::clone(&touches);
    selector.register_on_touched(Arc::new(move || *touches_clone.lock().unwrap() += 1));

    selector.select(Swatch::Green);
    assert_eq!(selector.selection(), Some(Swatch::Green));
    selector.select(Swatch::Green);
    assert_eq!(selector.selection(), None);

    selector.set_disabled_state(true);
    selector.select(Swatch::Blue);
    assert_eq!(selector.selection(), Some(Swatch::Blue));

    assert_eq!(*changes.lock().unwrap(), vec![Some(Swatch::Green), None]);
    assert_eq!(*touches.lock().unwrap(), 2);

    let control = selector.control().unwrap();
    selector.teardown();
    control.set_validators(Validator::required().into());
    control.update_value_and_validity(UpdateOptions::default());
    assert!(!selector.required());
    assert_eq!(selector.selection(), Some(Swatch::Blue));
}
