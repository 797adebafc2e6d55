//! The host's generic form value.

use serde::{Deserialize, Serialize};

/// A value held by a [`FormControl`](crate::FormControl).
///
/// Controls are untyped on the host side: a control may hold text, a number,
/// a flag, or nothing at all. Widgets translate between this and their own
/// typed state through a [`ValueAccessor`](crate::ValueAccessor).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// No value.
    #[default]
    Null,
    /// A boolean flag (checkbox-like controls).
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
}

impl FormValue {
    /// Check whether the value is empty.
    ///
    /// `Null`, `false`, `0`, `NaN` and the empty string are empty. Everything
    /// else counts as a present value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Check whether the value is present (the opposite of [`is_empty`](Self::is_empty)).
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Borrow the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the flag if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FormValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl std::fmt::Display for FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}
