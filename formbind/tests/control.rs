//! Tests for form controls and their notifications.

use std::sync::{Arc, Mutex};

use formbind::{ControlStatus, FormControl, FormValue, UpdateOptions, Validator, keys};

#[test]
fn test_new_control_is_valid_and_empty() {
    let control = FormControl::new();
    assert_eq!(control.value(), FormValue::Null);
    assert_eq!(control.status(), ControlStatus::Valid);
    assert!(control.errors().is_none());
    assert!(!control.is_touched());
    assert!(!control.is_dirty());
}

#[test]
fn test_with_validators_validates_initial_value() {
    let control = FormControl::new().with_validators(Validator::required().into());
    assert_eq!(control.status(), ControlStatus::Invalid);
    assert!(control.has_error(keys::REQUIRED));

    let control = FormControl::new()
        .with_value("x")
        .with_validators(Validator::required().into());
    assert!(control.is_valid());
}

#[test]
fn test_set_validators_waits_for_update() {
    let control = FormControl::new();
    control.set_validators(Validator::required().into());
    assert!(control.is_valid());

    control.update_value_and_validity(UpdateOptions::default());
    assert!(!control.is_valid());

    control.clear_validators();
    control.update_value_and_validity(UpdateOptions::default());
    assert!(control.is_valid());
}

#[test]
fn test_add_and_remove_validator() {
    let control = FormControl::new();
    let required = Validator::required();
    control.add_validator(required.clone());
    control.add_validator(required.clone());
    assert_eq!(control.validators().len(), 1);
    assert!(control.has_validator(&required));

    control.remove_validator(&required);
    assert!(!control.has_validator(&required));
}

#[test]
fn test_status_changes_respect_emit_event() {
    let control = FormControl::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = control
        .status_changes()
        .subscribe(move |status| seen_clone.lock().unwrap().push(*status));

    control.set_validators(Validator::required().into());
    control.update_value_and_validity(UpdateOptions::silent());
    assert!(seen.lock().unwrap().is_empty());

    control.update_value_and_validity(UpdateOptions::default());
    control.set_value("x", UpdateOptions::default());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![ControlStatus::Invalid, ControlStatus::Valid]
    );
}

#[test]
fn test_value_changes() {
    let control = FormControl::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = control
        .value_changes()
        .subscribe(move |value| seen_clone.lock().unwrap().push(value.clone()));

    control.set_value("a", UpdateOptions::default());
    control.set_value("b", UpdateOptions::silent());
    assert_eq!(*seen.lock().unwrap(), vec![FormValue::from("a")]);
    assert_eq!(control.value(), FormValue::from("b"));
}

#[test]
fn test_dropped_subscription_stops_notifications() {
    let control = FormControl::new();
    let count = Arc::new(Mutex::new(0));
    let count_clone = Arc::clone(&count);
    let sub = control
        .status_changes()
        .subscribe(move |_| *count_clone.lock().unwrap() += 1);

    control.update_value_and_validity(UpdateOptions::default());
    drop(sub);
    control.update_value_and_validity(UpdateOptions::default());

    assert_eq!(*count.lock().unwrap(), 1);
    assert_eq!(control.status_changes().listener_count(), 0);
}

#[test]
fn test_listener_may_reenter_control() {
    let control = FormControl::new();
    let reader = control.clone();
    let seen = Arc::new(Mutex::new(None));
    let seen_clone = Arc::clone(&seen);
    let _sub = control.status_changes().subscribe(move |_| {
        reader.set_validators(reader.validators());
        *seen_clone.lock().unwrap() = Some(reader.value());
    });

    control.set_value("y", UpdateOptions::default());
    assert_eq!(*seen.lock().unwrap(), Some(FormValue::from("y")));
}

#[test]
fn test_disable_and_enable() {
    let control = FormControl::new().with_validators(Validator::required().into());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = control
        .status_changes()
        .subscribe(move |status| seen_clone.lock().unwrap().push(*status));

    control.disable();
    assert!(control.is_disabled());
    assert!(control.errors().is_none());

    control.enable();
    assert!(!control.is_disabled());
    assert!(control.has_error(keys::REQUIRED));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![ControlStatus::Disabled, ControlStatus::Invalid]
    );
}

#[test]
fn test_disabled_control_skips_validation_on_set() {
    let control = FormControl::new().with_validators(Validator::required().into());
    control.disable();
    control.set_value(FormValue::Null, UpdateOptions::default());
    assert_eq!(control.status(), ControlStatus::Disabled);
}

#[test]
fn test_reset() {
    let control = FormControl::new().with_value("z");
    control.mark_as_touched();
    control.mark_as_dirty();
    control.reset();
    assert_eq!(control.value(), FormValue::Null);
    assert!(!control.is_touched());
    assert!(!control.is_dirty());
}
