//! Selector configuration.

/// Per-selector configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorConfig {
    /// What to do with external values that are not palette colors.
    pub external_values: ExternalValuePolicy,

    /// What user gestures do while the selector is disabled.
    pub disabled_gestures: DisabledGestures,
}

impl SelectorConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for out-of-palette external values.
    pub fn external_values(mut self, policy: ExternalValuePolicy) -> Self {
        self.external_values = policy;
        self
    }

    /// Set the behavior of gestures on a disabled selector.
    pub fn disabled_gestures(mut self, behavior: DisabledGestures) -> Self {
        self.disabled_gestures = behavior;
        self
    }
}

/// Handling of an external value that is neither empty nor a palette color.
///
/// Either way the control's palette-membership check reports the value as
/// invalid; this only decides what the selector displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExternalValuePolicy {
    /// Keep the previous selection.
    #[default]
    Ignore,
    /// Drop the previous selection.
    Clear,
}

/// Behavior of a pick gesture while the selector is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisabledGestures {
    /// Update the selection but don't notify the form.
    #[default]
    SuppressCallbacks,
    /// Ignore the gesture entirely.
    Block,
}
