//! ColorSelector widget - pick one color from the palette.

mod accessor;
mod state;

pub use state::{ColorSelector, SelectorId};
