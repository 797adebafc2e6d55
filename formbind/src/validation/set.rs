//! Validator sets and composition.

use super::errors::ValidationErrors;
use super::validator::Validator;
use crate::value::FormValue;

/// An ordered collection of validators with no duplicate identities.
///
/// Running the set merges the errors of every failing validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
}

impl ValidatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validator unless one with the same identity is already present.
    ///
    /// Returns true if the set changed.
    pub fn insert(&mut self, validator: Validator) -> bool {
        if self.contains(&validator) {
            return false;
        }
        self.validators.push(validator);
        true
    }

    /// Remove a validator by identity. Returns true if it was present.
    pub fn remove(&mut self, validator: &Validator) -> bool {
        let before = self.validators.len();
        self.validators.retain(|v| v != validator);
        self.validators.len() != before
    }

    /// Check if a validator with the same identity is present.
    pub fn contains(&self, validator: &Validator) -> bool {
        self.validators.iter().any(|v| v == validator)
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the set has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Iterate over the validators in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.iter()
    }

    /// Run every validator against a value.
    ///
    /// Returns `None` when all pass.
    pub fn run(&self, value: &FormValue) -> Option<ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for validator in &self.validators {
            if let Some(found) = validator.validate(value) {
                errors.merge(found);
            }
        }
        if errors.is_empty() { None } else { Some(errors) }
    }
}

impl From<Validator> for ValidatorSet {
    fn from(validator: Validator) -> Self {
        Self {
            validators: vec![validator],
        }
    }
}

impl FromIterator<Validator> for ValidatorSet {
    fn from_iter<I: IntoIterator<Item = Validator>>(iter: I) -> Self {
        let mut set = Self::new();
        for validator in iter {
            set.insert(validator);
        }
        set
    }
}

/// Compose an existing set with one extra validator.
///
/// Union keyed by validator identity, so composing the same validator again
/// yields an equal set.
pub fn compose(existing: &ValidatorSet, extra: &Validator) -> ValidatorSet {
    let mut set = existing.clone();
    set.insert(extra.clone());
    set
}
