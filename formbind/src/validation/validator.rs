//! Single validation rules.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::errors::{ValidationErrors, keys};
use crate::FormError;
use crate::value::FormValue;

/// Type alias for the check closure behind a [`Validator`].
type Check = Arc<dyn Fn(&FormValue) -> Option<ValidationErrors> + Send + Sync>;

/// Unique identity of a validator.
///
/// Clones of a [`Validator`] share the same id; two validators built from the
/// same rule separately do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorId(usize);

impl ValidatorId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__validator_{}", self.0)
    }
}

/// A named validation rule for a form value.
///
/// The check returns `None` when the value passes and the errors it found
/// otherwise.
///
/// # Example
///
/// ```
/// use formbind::{FormValue, Validator, keys};
///
/// let required = Validator::required();
/// let errors = required.validate(&FormValue::Null).unwrap();
/// assert!(errors.contains(keys::REQUIRED));
/// assert!(required.validate(&FormValue::from("blue")).is_none());
/// ```
#[derive(Clone)]
pub struct Validator {
    id: ValidatorId,
    name: &'static str,
    check: Check,
}

impl Validator {
    /// Create a validator from a closure.
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&FormValue) -> Option<ValidationErrors> + Send + Sync + 'static,
    {
        Self {
            id: ValidatorId::new(),
            name,
            check: Arc::new(check),
        }
    }

    /// Create a validator that reports `key` whenever `predicate` fails.
    pub fn rule<F>(name: &'static str, key: &'static str, predicate: F) -> Self
    where
        F: Fn(&FormValue) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| {
            if predicate(value) {
                None
            } else {
                Some(ValidationErrors::with(key, format!("{} failed", name)))
            }
        })
    }

    /// Get the identity of this validator.
    pub fn id(&self) -> ValidatorId {
        self.id
    }

    /// Get the validator name (for logs).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the check against a value.
    pub fn validate(&self, value: &FormValue) -> Option<ValidationErrors> {
        (self.check)(value)
    }

    // -------------------------------------------------------------------------
    // Built-in rules
    // -------------------------------------------------------------------------

    /// Require a present (non-empty) value.
    pub fn required() -> Self {
        Self::new("required", |value| {
            if value.is_empty() {
                Some(ValidationErrors::with(keys::REQUIRED, "value is required"))
            } else {
                None
            }
        })
    }

    /// Require the value to be exactly `true` (accept-the-terms checkboxes).
    pub fn required_true() -> Self {
        Self::new("required_true", |value| {
            if value.as_bool() == Some(true) {
                None
            } else {
                Some(ValidationErrors::with(keys::REQUIRED, "value must be checked"))
            }
        })
    }

    /// Require text of at least `min` characters. Empty values pass.
    pub fn min_length(min: usize) -> Self {
        Self::new("min_length", move |value| {
            let len = value.as_text()?.chars().count();
            if value.is_present() && len < min {
                Some(ValidationErrors::with(
                    keys::MIN_LENGTH,
                    format!("expected at least {} characters, got {}", min, len),
                ))
            } else {
                None
            }
        })
    }

    /// Require text of at most `max` characters.
    pub fn max_length(max: usize) -> Self {
        Self::new("max_length", move |value| {
            let len = value.as_text()?.chars().count();
            if len > max {
                Some(ValidationErrors::with(
                    keys::MAX_LENGTH,
                    format!("expected at most {} characters, got {}", max, len),
                ))
            } else {
                None
            }
        })
    }

    /// Require text to match a regex pattern. Empty values pass.
    pub fn pattern(pattern: &str) -> Result<Self, FormError> {
        let re = regex::Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let shown = pattern.to_string();
        Ok(Self::new("pattern", move |value| {
            let text = value.as_text()?;
            if text.is_empty() || re.is_match(text) {
                None
            } else {
                Some(ValidationErrors::with(
                    keys::PATTERN,
                    format!("does not match {}", shown),
                ))
            }
        }))
    }

    /// Require a valid email address. Empty values pass.
    pub fn email() -> Self {
        Self::new("email", |value| {
            let text = value.as_text()?;
            if text.is_empty() || email_address::EmailAddress::is_valid(text) {
                None
            } else {
                Some(ValidationErrors::with(keys::EMAIL, "not a valid email address"))
            }
        })
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Validator {}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
