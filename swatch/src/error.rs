use formbind::FormValue;
use thiserror::Error;

/// Errors from palette parsing and strict value writes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwatchError {
    /// The token does not name a palette color.
    #[error("unknown color token '{0}'")]
    UnknownToken(String),
    /// An external value is neither empty nor a palette color.
    #[error("value {0} is not a palette color")]
    NotInPalette(FormValue),
}
