//! Form binding for the ColorSelector widget.

use std::sync::atomic::Ordering;

use formbind::{
    Binding, FormControl, FormValue, OnChange, OnTouched, UpdateOptions, ValueAccessor, compose,
    keys,
};
use log::debug;

use super::ColorSelector;
use crate::palette::{Swatch, palette_member};

impl ColorSelector {
    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Bind the selector to its control and start following it.
    ///
    /// Adopts `host` when given; otherwise the selector creates a private
    /// control so it behaves the same standalone. The derived state is
    /// refreshed once, then again on every status change of the control.
    /// Calling this again replaces the previous control and subscription.
    pub fn initialize(&self, host: Option<&FormControl>) {
        let control = match host {
            Some(control) => control.clone(),
            None => {
                debug!("{}: no host control, using a standalone one", self.id);
                FormControl::new()
            }
        };

        let previous = match self.inner.write() {
            Ok(mut guard) => {
                guard.control = Some(control.clone());
                guard.subscription.take()
            }
            Err(_) => return,
        };
        drop(previous);

        self.refresh_derived_state();

        let weak = self.downgrade();
        let subscription = control.status_changes().subscribe(move |_status| {
            if let Some(selector) = weak.upgrade() {
                selector.refresh_derived_state();
            }
        });
        if let Ok(mut guard) = self.inner.write() {
            guard.subscription = Some(subscription);
        }

        debug!(
            "{}: initialized on {} (required: {})",
            self.id,
            control.id(),
            self.required()
        );
    }

    /// Release the status-change subscription.
    ///
    /// Safe to call before `initialize` and more than once.
    pub fn teardown(&self) {
        let subscription = self
            .inner
            .write()
            .ok()
            .and_then(|mut guard| guard.subscription.take());
        if let Some(mut subscription) = subscription {
            subscription.unsubscribe();
            debug!("{}: torn down", self.id);
        }
    }

    /// Bind to a form control and initialize against it.
    ///
    /// Equivalent to [`formbind::bind`] followed by
    /// [`initialize`](Self::initialize). Drop the returned binding (and call
    /// [`teardown`](Self::teardown)) when the selector goes away.
    pub fn attach(&self, control: &FormControl) -> Binding {
        let binding = formbind::bind(control, self);
        self.initialize(Some(control));
        binding
    }

    // -------------------------------------------------------------------------
    // Validators
    // -------------------------------------------------------------------------

    /// Install the palette-membership check on the bound control.
    ///
    /// Keeps whatever validators the control already has. The control is
    /// revalidated silently.
    pub fn compose_validators(&self) {
        let Some(control) = self.control() else {
            return;
        };
        let composed = compose(&control.validators(), &palette_member());
        control.set_validators(composed);
        control.update_value_and_validity(UpdateOptions::silent());
    }

    /// Check whether the bound control's validators reject an empty value
    /// as missing.
    pub fn is_required(&self) -> bool {
        self.control().is_some_and(|control| {
            control
                .validators()
                .run(&FormValue::Null)
                .is_some_and(|errors| errors.contains(keys::REQUIRED))
        })
    }

    /// Recompose validators and recompute the required flag.
    pub fn refresh_derived_state(&self) {
        self.compose_validators();
        let required = self.is_required();
        if let Ok(mut guard) = self.inner.write()
            && guard.required != required
        {
            guard.required = required;
            self.dirty.store(true, Ordering::SeqCst);
            debug!("{}: required is now {}", self.id, required);
        }
    }
}

// -----------------------------------------------------------------------------
// ValueAccessor implementation
// -----------------------------------------------------------------------------

impl ValueAccessor for ColorSelector {
    type Value = Swatch;

    fn write_value(&self, value: &FormValue) {
        if let Err(err) = self.try_write_value(value) {
            self.reject_external(&err);
        }
    }

    fn register_on_change(&self, f: OnChange<Swatch>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(f);
        }
    }

    fn register_on_touched(&self, f: OnTouched) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_touched = Some(f);
        }
    }

    fn set_disabled_state(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }
}
