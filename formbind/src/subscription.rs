//! Listener registries with cancellable subscriptions.
//!
//! A [`Notifier`] keeps listeners in registration order. Subscribing returns a
//! [`Subscription`] guard; the listener stays registered until the guard is
//! unsubscribed or dropped.

use std::sync::{Arc, RwLock, Weak};

/// Type alias for listener closures.
type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: usize,
    entries: Vec<(usize, Listener<T>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

/// A registry of listeners for events of type `T`.
///
/// Cheap to clone; clones share the same listeners.
pub struct Notifier<T> {
    inner: Arc<RwLock<Listeners<T>>>,
}

impl<T: 'static> Notifier<T> {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Listeners::default())),
        }
    }

    /// Register a listener.
    ///
    /// The listener is called for every emitted event until the returned
    /// [`Subscription`] is unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = match self.inner.write() {
            Ok(mut guard) => {
                let id = guard.next_id;
                guard.next_id += 1;
                guard.entries.push((id, Arc::new(listener)));
                id
            }
            Err(_) => return Subscription::inactive(),
        };

        let weak: Weak<RwLock<Listeners<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade()
                    && let Ok(mut guard) = inner.write()
                {
                    guard.entries.retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Deliver an event to every listener, in registration order.
    ///
    /// The listener list is snapshotted first and no lock is held while
    /// listeners run, so a listener may subscribe, unsubscribe or emit again.
    pub fn emit(&self, event: &T) {
        let listeners: Vec<Listener<T>> = match self.inner.read() {
            Ok(guard) => guard.entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.entries.len())
            .unwrap_or(0)
    }
}

impl<T: 'static> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.inner.read().map(|g| g.entries.len()).unwrap_or(0);
        f.debug_struct("Notifier").field("listeners", &count).finish()
    }
}

/// Guard for a registered listener.
///
/// Unsubscribes on drop. [`unsubscribe`](Self::unsubscribe) may be called
/// any number of times.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// A subscription that is not attached to anything.
    pub fn inactive() -> Self {
        Self { cancel: None }
    }

    /// Remove the listener from its notifier.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Check if the listener is still registered through this guard.
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_listeners_run_in_registration_order() {
        let notifier: Notifier<u32> = Notifier::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s1 = Arc::clone(&seen);
        let _a = notifier.subscribe(move |v| s1.lock().unwrap().push(("a", *v)));
        let s2 = Arc::clone(&seen);
        let _b = notifier.subscribe(move |v| s2.lock().unwrap().push(("b", *v)));

        notifier.emit(&7);
        assert_eq!(*seen.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let notifier: Notifier<()> = Notifier::new();
        let mut sub = notifier.subscribe(|_| {});
        assert_eq!(notifier.listener_count(), 1);

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let notifier: Notifier<()> = Notifier::new();
        {
            let _sub = notifier.subscribe(|_| {});
            assert_eq!(notifier.listener_count(), 1);
        }
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_notifier() {
        let notifier: Notifier<()> = Notifier::new();
        let mut sub = notifier.subscribe(|_| {});
        drop(notifier);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
