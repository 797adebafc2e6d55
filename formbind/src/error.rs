//! Error types for form setup.

use thiserror::Error;

/// Errors raised while building form validators.
///
/// Validation failures themselves are not errors; they are reported as
/// [`ValidationErrors`](crate::ValidationErrors) on the control.
#[derive(Debug, Error)]
pub enum FormError {
    /// A `pattern` validator was given a regex that does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
