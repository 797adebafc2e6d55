//! The extension contract between a form control and a custom widget.

use std::sync::Arc;

use log::debug;

use crate::control::{FormControl, UpdateOptions};
use crate::subscription::Subscription;
use crate::value::FormValue;

/// Callback a widget invokes when the user changes its value.
pub type OnChange<T> = Arc<dyn Fn(Option<T>) + Send + Sync>;

/// Callback a widget invokes when the user interacts with it.
pub type OnTouched = Arc<dyn Fn() + Send + Sync>;

/// Trait for widgets that can be bound to a [`FormControl`].
///
/// The form pushes values and the disabled state into the widget; the widget
/// reports user-driven changes through the registered callbacks. Values
/// pushed in by the form must never be reported back through `on_change`.
pub trait ValueAccessor {
    /// The typed value the widget reports.
    type Value: Into<FormValue> + 'static;

    /// Accept a value set on the control from outside the widget.
    fn write_value(&self, value: &FormValue);

    /// Store the change callback, replacing any previous one.
    fn register_on_change(&self, f: OnChange<Self::Value>);

    /// Store the touch callback, replacing any previous one.
    fn register_on_touched(&self, f: OnTouched);

    /// Tell the widget whether the control is disabled.
    fn set_disabled_state(&self, disabled: bool);
}

/// Live connection between a control and a widget, created by [`bind`].
///
/// Dropping the binding (or calling [`unbind`](Self::unbind)) stops forwarding
/// control updates to the widget.
#[derive(Debug)]
pub struct Binding {
    subscriptions: Vec<Subscription>,
}

impl Binding {
    /// Stop forwarding control updates to the widget.
    pub fn unbind(&mut self) {
        for sub in &mut self.subscriptions {
            sub.unsubscribe();
        }
        self.subscriptions.clear();
    }

    /// Check if the binding still forwards updates.
    pub fn is_bound(&self) -> bool {
        self.subscriptions.iter().any(Subscription::is_active)
    }
}

/// Wire a widget to a control the way a form directive does.
///
/// - the control's current value and disabled state are pushed to the widget
/// - widget changes are stored on the control (without echoing them back to
///   the widget) and mark it dirty
/// - widget touches mark the control touched
/// - later programmatic values and enable/disable calls reach the widget
pub fn bind<A>(control: &FormControl, accessor: &A) -> Binding
where
    A: ValueAccessor + Clone + Send + Sync + 'static,
{
    debug!("binding accessor to {}", control.id());

    accessor.write_value(&control.value());
    if control.is_disabled() {
        accessor.set_disabled_state(true);
    }

    let on_change_control = control.clone();
    accessor.register_on_change(Arc::new(move |value: Option<A::Value>| {
        on_change_control.mark_as_dirty();
        on_change_control.set_value(FormValue::from(value), UpdateOptions::from_view());
    }));

    let on_touched_control = control.clone();
    accessor.register_on_touched(Arc::new(move || {
        on_touched_control.mark_as_touched();
    }));

    let view_accessor = accessor.clone();
    let view_sub = control.on_view_update(move |value| view_accessor.write_value(value));

    let disabled_accessor = accessor.clone();
    let disabled_sub =
        control.on_disabled_change(move |disabled| disabled_accessor.set_disabled_state(*disabled));

    Binding {
        subscriptions: vec![view_sub, disabled_sub],
    }
}
