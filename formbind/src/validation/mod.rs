//! Validation rules for form controls.
//!
//! A [`Validator`] checks a single [`FormValue`](crate::FormValue) and reports
//! [`ValidationErrors`] keyed by error kind. Controls hold a [`ValidatorSet`],
//! and widgets that need an intrinsic rule merge it in with [`compose`].
//!
//! # Example
//!
//! ```
//! use formbind::{FormValue, Validator, ValidatorSet, compose, keys};
//!
//! let required = Validator::required();
//! let short = Validator::max_length(3);
//!
//! let set = compose(&ValidatorSet::from(required), &short);
//! let set = compose(&set, &short);
//! assert_eq!(set.len(), 2);
//!
//! let errors = set.run(&FormValue::Null).unwrap();
//! assert!(errors.contains(keys::REQUIRED));
//! ```

mod errors;
mod set;
mod validator;

pub use errors::{ValidationErrors, keys};
pub use set::{ValidatorSet, compose};
pub use validator::{Validator, ValidatorId};
