//! A palette color selector that plugs into `formbind` forms.
//!
//! [`ColorSelector`] holds at most one [`Swatch`] and implements
//! [`formbind::ValueAccessor`], so a form can set its value, disable it, and
//! receive the user's picks like any native input. While bound, the selector
//! keeps a single [`palette_member`] check installed on the control and
//! tracks whether the control's validators make it required.

mod config;
mod error;
mod palette;
mod selector;

pub use config::{DisabledGestures, ExternalValuePolicy, SelectorConfig};
pub use error::SwatchError;
pub use palette::{PALETTE_MEMBER, Swatch, palette_member};
pub use selector::{ColorSelector, SelectorId};

pub mod prelude {
    pub use crate::{ColorSelector, SelectorConfig, Swatch};
    pub use formbind::{FormControl, FormValue, UpdateOptions, ValueAccessor, Validator};
}
