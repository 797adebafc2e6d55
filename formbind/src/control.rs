//! The form control object shared between a form and its widget.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::subscription::{Notifier, Subscription};
use crate::validation::{ValidationErrors, Validator, ValidatorSet};
use crate::value::FormValue;

/// Unique identifier for a FormControl instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(usize);

impl ControlId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__form_control_{}", self.0)
    }
}

/// Validation status of a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlStatus {
    /// All validators pass.
    #[default]
    Valid,
    /// At least one validator failed.
    Invalid,
    /// The control is disabled and excluded from validation.
    Disabled,
}

/// Options for value and validity updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Emit value and status change notifications.
    pub emit_event: bool,
    /// Push the new value to the bound widget.
    pub emit_model_to_view_change: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            emit_event: true,
            emit_model_to_view_change: true,
        }
    }
}

impl UpdateOptions {
    /// Update without emitting any notification.
    pub fn silent() -> Self {
        Self {
            emit_event: false,
            emit_model_to_view_change: false,
        }
    }

    /// Update everything except the bound widget (changes that came from it).
    pub fn from_view() -> Self {
        Self {
            emit_event: true,
            emit_model_to_view_change: false,
        }
    }
}

/// Internal state for a FormControl
#[derive(Debug, Default)]
struct ControlInner {
    value: FormValue,
    validators: ValidatorSet,
    errors: Option<ValidationErrors>,
    status: ControlStatus,
    touched: bool,
    dirty: bool,
}

impl ControlInner {
    /// Recompute errors and status from the current value and validators.
    fn revalidate(&mut self) -> ControlStatus {
        if self.status == ControlStatus::Disabled {
            self.errors = None;
            return self.status;
        }
        self.errors = self.validators.run(&self.value);
        self.status = if self.errors.is_some() {
            ControlStatus::Invalid
        } else {
            ControlStatus::Valid
        };
        self.status
    }
}

/// A form control with reactive state.
///
/// `FormControl` owns a value, a validator set, and the validity derived from
/// them. It is a cheap-to-clone handle: a form and the widget bound to it hold
/// clones of the same control.
///
/// Notifications are delivered after the internal lock is released, so a
/// listener may read or write the control it is listening to.
///
/// # Example
///
/// ```
/// use formbind::{ControlStatus, FormControl, UpdateOptions, Validator};
///
/// let control = FormControl::new();
/// control.set_validators(Validator::required().into());
/// control.update_value_and_validity(UpdateOptions::default());
/// assert_eq!(control.status(), ControlStatus::Invalid);
///
/// control.set_value("green", UpdateOptions::default());
/// assert!(control.is_valid());
/// ```
pub struct FormControl {
    id: ControlId,
    inner: Arc<RwLock<ControlInner>>,
    status_changes: Notifier<ControlStatus>,
    value_changes: Notifier<FormValue>,
    view_updates: Notifier<FormValue>,
    disabled_changes: Notifier<bool>,
}

impl FormControl {
    /// Create a control with no value and no validators.
    pub fn new() -> Self {
        Self {
            id: ControlId::new(),
            inner: Arc::new(RwLock::new(ControlInner::default())),
            status_changes: Notifier::new(),
            value_changes: Notifier::new(),
            view_updates: Notifier::new(),
            disabled_changes: Notifier::new(),
        }
    }

    /// Set the initial value.
    pub fn with_value(self, value: impl Into<FormValue>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.revalidate();
        }
        self
    }

    /// Set the initial validators.
    pub fn with_validators(self, validators: ValidatorSet) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.validators = validators;
            guard.revalidate();
        }
        self
    }

    /// Get the unique ID for this control
    pub fn id(&self) -> ControlId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Get a clone of the current value
    pub fn value(&self) -> FormValue {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Set a new value and recompute validity.
    pub fn set_value(&self, value: impl Into<FormValue>, opts: UpdateOptions) {
        let value = value.into();
        let status = match self.inner.write() {
            Ok(mut guard) => {
                guard.value = value.clone();
                guard.revalidate()
            }
            Err(_) => return,
        };
        trace!("{}: value set to {} ({:?})", self.id, value, status);

        if opts.emit_model_to_view_change {
            self.view_updates.emit(&value);
        }
        if opts.emit_event {
            self.value_changes.emit(&value);
            self.status_changes.emit(&status);
        }
    }

    /// Reset the value to `Null` and clear the touched and dirty flags.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.touched = false;
            guard.dirty = false;
        }
        self.set_value(FormValue::Null, UpdateOptions::default());
    }

    // -------------------------------------------------------------------------
    // Validators
    // -------------------------------------------------------------------------

    /// Get a clone of the installed validator set
    pub fn validators(&self) -> ValidatorSet {
        self.inner
            .read()
            .map(|guard| guard.validators.clone())
            .unwrap_or_default()
    }

    /// Replace the validator set.
    ///
    /// Does not revalidate; follow up with
    /// [`update_value_and_validity`](Self::update_value_and_validity).
    pub fn set_validators(&self, validators: ValidatorSet) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validators = validators;
        }
    }

    /// Add a validator (no-op if already installed). Does not revalidate.
    pub fn add_validator(&self, validator: Validator) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validators.insert(validator);
        }
    }

    /// Remove a validator by identity. Does not revalidate.
    pub fn remove_validator(&self, validator: &Validator) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validators.remove(validator);
        }
    }

    /// Remove all validators. Does not revalidate.
    pub fn clear_validators(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validators = ValidatorSet::new();
        }
    }

    /// Check if a validator is installed.
    pub fn has_validator(&self, validator: &Validator) -> bool {
        self.inner
            .read()
            .map(|guard| guard.validators.contains(validator))
            .unwrap_or(false)
    }

    /// Recompute errors and status from the current value and validators.
    pub fn update_value_and_validity(&self, opts: UpdateOptions) {
        let (value, status) = match self.inner.write() {
            Ok(mut guard) => {
                let status = guard.revalidate();
                (guard.value.clone(), status)
            }
            Err(_) => return,
        };
        trace!("{}: revalidated ({:?})", self.id, status);

        if opts.emit_event {
            self.value_changes.emit(&value);
            self.status_changes.emit(&status);
        }
    }

    // -------------------------------------------------------------------------
    // Status
    // -------------------------------------------------------------------------

    /// Get the current validation status
    pub fn status(&self) -> ControlStatus {
        self.inner
            .read()
            .map(|guard| guard.status)
            .unwrap_or_default()
    }

    /// Get the current errors (if any).
    pub fn errors(&self) -> Option<ValidationErrors> {
        self.inner
            .read()
            .map(|guard| guard.errors.clone())
            .unwrap_or(None)
    }

    /// Check if a specific error key is currently reported.
    pub fn has_error(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.errors.as_ref().is_some_and(|e| e.contains(key)))
            .unwrap_or(false)
    }

    /// Check if the control is valid.
    pub fn is_valid(&self) -> bool {
        self.status() == ControlStatus::Valid
    }

    /// Check if the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.status() == ControlStatus::Disabled
    }

    /// Disable the control.
    ///
    /// A disabled control reports no errors. The bound widget is told through
    /// the disabled-change listeners.
    pub fn disable(&self) {
        match self.inner.write() {
            Ok(mut guard) => {
                guard.status = ControlStatus::Disabled;
                guard.errors = None;
            }
            Err(_) => return,
        }
        debug!("{}: disabled", self.id);
        self.disabled_changes.emit(&true);
        self.status_changes.emit(&ControlStatus::Disabled);
    }

    /// Enable the control and recompute validity.
    pub fn enable(&self) {
        let status = match self.inner.write() {
            Ok(mut guard) => {
                guard.status = ControlStatus::Valid;
                guard.revalidate()
            }
            Err(_) => return,
        };
        debug!("{}: enabled ({:?})", self.id, status);
        self.disabled_changes.emit(&false);
        self.status_changes.emit(&status);
    }

    // -------------------------------------------------------------------------
    // Interaction flags
    // -------------------------------------------------------------------------

    /// Mark the control as touched (the user interacted with it).
    pub fn mark_as_touched(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.touched = true;
        }
    }

    /// Mark the control as dirty (the user changed its value).
    pub fn mark_as_dirty(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.dirty = true;
        }
    }

    /// Check if the control has been touched.
    pub fn is_touched(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.touched)
            .unwrap_or(false)
    }

    /// Check if the control value has been changed by the user.
    pub fn is_dirty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.dirty)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Notifier fired whenever validity is recomputed with `emit_event`.
    pub fn status_changes(&self) -> &Notifier<ControlStatus> {
        &self.status_changes
    }

    /// Notifier fired whenever the value is set with `emit_event`.
    pub fn value_changes(&self) -> &Notifier<FormValue> {
        &self.value_changes
    }

    /// Listen for values the bound widget should display.
    pub(crate) fn on_view_update<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FormValue) + Send + Sync + 'static,
    {
        self.view_updates.subscribe(listener)
    }

    /// Listen for enable/disable transitions.
    pub(crate) fn on_disabled_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.disabled_changes.subscribe(listener)
    }
}

impl Clone for FormControl {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            status_changes: self.status_changes.clone(),
            value_changes: self.value_changes.clone(),
            view_updates: self.view_updates.clone(),
            disabled_changes: self.disabled_changes.clone(),
        }
    }
}

impl Default for FormControl {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormControl")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("status", &self.status())
            .finish()
    }
}
