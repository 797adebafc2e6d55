//! The fixed color palette and its membership check.

use std::str::FromStr;
use std::sync::LazyLock;

use formbind::{FormValue, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};

use crate::SwatchError;

/// Error key reported when a control value is not a palette color.
pub const PALETTE_MEMBER: &str = "paletteMember";

/// A color the selector can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Red,
    Green,
    Blue,
}

impl Swatch {
    /// Every palette color, in display order.
    pub const ALL: [Swatch; 3] = [Swatch::Red, Swatch::Green, Swatch::Blue];

    /// The token used for this color in form values.
    pub fn as_str(self) -> &'static str {
        match self {
            Swatch::Red => "red",
            Swatch::Green => "green",
            Swatch::Blue => "blue",
        }
    }

    /// Get the palette color a form value names, if any.
    pub fn from_value(value: &FormValue) -> Option<Swatch> {
        value.as_text().and_then(|text| text.parse().ok())
    }

    /// Check whether a form value names a palette color.
    pub fn is_member(value: &FormValue) -> bool {
        Self::from_value(value).is_some()
    }
}

impl std::fmt::Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Swatch {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Swatch::ALL
            .into_iter()
            .find(|swatch| swatch.as_str() == s)
            .ok_or_else(|| SwatchError::UnknownToken(s.to_string()))
    }
}

impl From<Swatch> for FormValue {
    fn from(swatch: Swatch) -> Self {
        FormValue::Text(swatch.as_str().to_string())
    }
}

static PALETTE_MEMBER_CHECK: LazyLock<Validator> = LazyLock::new(|| {
    Validator::new("palette_member", |value| {
        if value.is_empty() || Swatch::is_member(value) {
            None
        } else {
            Some(ValidationErrors::with(
                PALETTE_MEMBER,
                format!("{} is not a palette color", value),
            ))
        }
    })
});

/// The palette-membership validator.
///
/// Passes empty values and palette colors. Every call returns the same
/// validator, so composing it into a set more than once has no effect.
pub fn palette_member() -> Validator {
    PALETTE_MEMBER_CHECK.clone()
}
