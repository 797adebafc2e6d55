//! Color selector widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use formbind::{FormControl, FormValue, OnChange, OnTouched, Subscription};
use log::trace;

use crate::config::{DisabledGestures, ExternalValuePolicy, SelectorConfig};
use crate::palette::Swatch;
use crate::SwatchError;

/// Unique identifier for a ColorSelector widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorId(usize);

impl SelectorId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__color_selector_{}", self.0)
    }
}

/// Internal state for a ColorSelector widget
#[derive(Default)]
pub(super) struct SelectorInner {
    /// The selected color (if any)
    pub(super) selection: Option<Swatch>,
    /// Set by the form; gestures consult it
    pub(super) disabled: bool,
    /// Last result of the required probe
    pub(super) required: bool,
    /// The bound control (host-supplied or fabricated)
    pub(super) control: Option<FormControl>,
    /// Status-change subscription on the bound control
    pub(super) subscription: Option<Subscription>,
    pub(super) on_change: Option<OnChange<Swatch>>,
    pub(super) on_touched: Option<OnTouched>,
    pub(super) config: SelectorConfig,
}

impl SelectorInner {
    fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }
}

/// A palette color selector that behaves like a native form input.
///
/// `ColorSelector` holds at most one [`Swatch`]. Picking the selected color
/// again clears it. The selector binds to a
/// [`FormControl`](formbind::FormControl) through the
/// [`ValueAccessor`](formbind::ValueAccessor) contract and keeps the control's
/// validators in sync with its palette.
///
/// # Example
///
/// ```
/// use formbind::{FormControl, FormValue, UpdateOptions, Validator};
/// use swatch::{ColorSelector, Swatch};
///
/// let control = FormControl::new();
/// let selector = ColorSelector::new();
/// let _binding = selector.attach(&control);
///
/// selector.select(Swatch::Green);
/// assert_eq!(control.value(), FormValue::from("green"));
///
/// control.set_validators(Validator::required().into());
/// control.update_value_and_validity(UpdateOptions::default());
/// assert!(selector.required());
///
/// selector.teardown();
/// ```
pub struct ColorSelector {
    /// Unique identifier for this selector instance
    pub(super) id: SelectorId,
    /// Internal state
    pub(super) inner: Arc<RwLock<SelectorInner>>,
    /// Dirty flag for re-render
    pub(super) dirty: Arc<AtomicBool>,
}

impl ColorSelector {
    /// Create a new selector with no selection and the default config
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create a selector with a custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            id: SelectorId::new(),
            inner: Arc::new(RwLock::new(SelectorInner {
                config,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this selector
    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// Get the ID as a string (for logs)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the selected color (if any)
    pub fn selection(&self) -> Option<Swatch> {
        self.inner
            .read()
            .map(|guard| guard.selection)
            .unwrap_or(None)
    }

    /// Check if a specific color is selected
    pub fn is_selected(&self, swatch: Swatch) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selection == Some(swatch))
            .unwrap_or(false)
    }

    /// Check if the form disabled this selector
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Get the required flag as of the last refresh (for display)
    pub fn required(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.required)
            .unwrap_or(false)
    }

    /// Get the bound control, once initialized
    pub fn control(&self) -> Option<FormControl> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.control.clone())
    }

    /// Check if `initialize` has bound a control
    pub fn is_initialized(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.control.is_some())
            .unwrap_or(false)
    }

    /// Check if the status-change subscription is live
    pub fn is_subscribed(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.subscription.as_ref().is_some_and(Subscription::is_active))
            .unwrap_or(false)
    }

    /// Get the selector config
    pub fn config(&self) -> SelectorConfig {
        self.inner
            .read()
            .map(|guard| guard.config)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Handle a user pick.
    ///
    /// Picking the selected color clears the selection; picking another one
    /// replaces it. Unless the selector is disabled, the form is then told
    /// through the change callback followed by the touch callback.
    pub fn select(&self, swatch: Swatch) {
        let (selection, notify) = match self.inner.write() {
            Ok(mut guard) => {
                if guard.disabled && guard.config.disabled_gestures == DisabledGestures::Block {
                    trace!("{}: blocked pick of {} while disabled", self.id, swatch);
                    return;
                }
                if guard.selection == Some(swatch) {
                    guard.clear_selection();
                } else {
                    guard.selection = Some(swatch);
                }
                self.dirty.store(true, Ordering::SeqCst);

                let notify = if guard.disabled {
                    None
                } else {
                    Some((guard.on_change.clone(), guard.on_touched.clone()))
                };
                (guard.selection, notify)
            }
            Err(_) => return,
        };
        trace!("{}: picked {}, selection now {:?}", self.id, swatch, selection);

        // Callbacks run without the lock; they usually write back into the control.
        if let Some((on_change, on_touched)) = notify {
            if let Some(on_change) = on_change {
                on_change(selection);
            }
            if let Some(on_touched) = on_touched {
                on_touched();
            }
        }
    }

    /// Clear the selection. Never notifies the form.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.clear_selection()
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // External writes
    // -------------------------------------------------------------------------

    /// Accept a value set on the control, failing on out-of-palette values.
    ///
    /// A palette color is adopted and an empty value clears the selection.
    /// Anything else leaves the selection untouched and returns
    /// [`SwatchError::NotInPalette`]. Never notifies the form.
    pub fn try_write_value(&self, value: &FormValue) -> Result<(), SwatchError> {
        if let Some(swatch) = Swatch::from_value(value) {
            if let Ok(mut guard) = self.inner.write()
                && guard.selection != Some(swatch)
            {
                guard.selection = Some(swatch);
                self.dirty.store(true, Ordering::SeqCst);
            }
            Ok(())
        } else if value.is_empty() {
            self.clear();
            Ok(())
        } else {
            Err(SwatchError::NotInPalette(value.clone()))
        }
    }

    /// Apply the configured policy to a rejected external value.
    pub(super) fn reject_external(&self, err: &SwatchError) {
        match self.config().external_values {
            ExternalValuePolicy::Ignore => {
                log::debug!("{}: ignoring external value: {}", self.id, err);
            }
            ExternalValuePolicy::Clear => {
                log::warn!("{}: clearing selection: {}", self.id, err);
                self.clear();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the selection changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// A handle that does not keep the selector alive.
    pub(super) fn downgrade(&self) -> WeakSelector {
        WeakSelector {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Non-owning handle held by the status-change listener.
pub(super) struct WeakSelector {
    id: SelectorId,
    inner: Weak<RwLock<SelectorInner>>,
    dirty: Arc<AtomicBool>,
}

impl WeakSelector {
    pub(super) fn upgrade(&self) -> Option<ColorSelector> {
        self.inner.upgrade().map(|inner| ColorSelector {
            id: self.id,
            inner,
            dirty: Arc::clone(&self.dirty),
        })
    }
}

impl Clone for ColorSelector {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for ColorSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ColorSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSelector")
            .field("id", &self.id)
            .field("selection", &self.selection())
            .field("disabled", &self.is_disabled())
            .field("required", &self.required())
            .finish()
    }
}
