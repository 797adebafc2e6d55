//! Reactive form controls and the contract custom widgets bind to.
//!
//! A [`FormControl`] holds a value, a [`ValidatorSet`] and the validity derived
//! from them. Widgets implement [`ValueAccessor`] and are connected to a
//! control with [`bind`]. Interested parties follow a control through its
//! [`status_changes`](FormControl::status_changes) notifier, which hands out
//! [`Subscription`] guards.

mod accessor;
mod control;
mod error;
mod subscription;
pub mod validation;
mod value;

pub use accessor::{Binding, OnChange, OnTouched, ValueAccessor, bind};
pub use control::{ControlId, ControlStatus, FormControl, UpdateOptions};
pub use error::FormError;
pub use subscription::{Notifier, Subscription};
pub use validation::{ValidationErrors, Validator, ValidatorId, ValidatorSet, compose, keys};
pub use value::FormValue;
