use std::collections::BTreeMap;

/// Well-known error keys produced by the built-in validators.
pub mod keys {
    /// Value is empty but must be present.
    pub const REQUIRED: &str = "required";
    /// Text is shorter than the minimum length.
    pub const MIN_LENGTH: &str = "minlength";
    /// Text is longer than the maximum length.
    pub const MAX_LENGTH: &str = "maxlength";
    /// Text does not match the pattern.
    pub const PATTERN: &str = "pattern";
    /// Text is not a valid email address.
    pub const EMAIL: &str = "email";
}

/// Errors reported by failing validators, keyed by error kind.
///
/// Each entry carries a short human-readable detail. Keys are kept in sorted
/// order so that merged results are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error map with a single entry.
    pub fn with(key: impl Into<String>, detail: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(key, detail);
        errors
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, detail: impl Into<String>) {
        self.entries.insert(key.into(), detail.into());
    }

    /// Check if an error key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the detail for an error key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate over the error keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of error entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another error map into this one. Later entries win on key clashes.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (key, detail) in &self.entries {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}: {}", key, detail)?;
        }
        Ok(())
    }
}
