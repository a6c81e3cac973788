//! Named one-way notifications with scoped listener registration.
//!
//! Stands in for the host's device event emitter. [`NotificationHub::listen`]
//! returns a [`Subscription`] guard; the listener stays registered for as long
//! as the guard lives.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// Capture path produced by the native recorder (payload: locator string)
pub const UPDATE_FILE_PATH: &str = "updateFilePath";
/// Soft keyboard became visible
pub const KEYBOARD_DID_SHOW: &str = "keyboardDidShow";
/// Soft keyboard was dismissed
pub const KEYBOARD_DID_HIDE: &str = "keyboardDidHide";

type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

#[derive(Default)]
struct Registry {
    listeners: HashMap<u64, (String, Listener)>,
}

/// Cloneable handle to a set of named listeners.
#[derive(Clone, Default)]
pub struct NotificationHub {
    registry: Arc<Mutex<Registry>>,
    next_id: Arc<AtomicU64>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`.
    pub fn listen<F>(&self, event: &str, listener: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock()
            .listeners
            .insert(id, (event.to_string(), Arc::new(listener)));
        log::trace!("listener {id} registered for {event}");

        Subscription {
            id,
            event: event.to_string(),
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `payload` to every listener of `event`.
    ///
    /// Returns the number of listeners reached. Listeners run outside the
    /// registry lock, so they may register or drop subscriptions themselves.
    pub fn emit(&self, event: &str, payload: Value) -> usize {
        let targets: Vec<Listener> = self
            .lock()
            .listeners
            .values()
            .filter(|(name, _)| name == event)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &targets {
            listener(&payload);
        }
        targets.len()
    }

    /// Number of live listeners for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.lock()
            .listeners
            .values()
            .filter(|(name, _)| name == event)
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        // Listeners run outside the lock, so the map is consistent even if poisoned
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Guard for a registered listener. Dropping it unregisters the listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    event: String,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Unregister now. Equivalent to dropping the guard.
    pub fn remove(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Dropped after the lock is released: the listener may own guards too
        let removed = registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .listeners
            .remove(&self.id);
        drop(removed);
        log::trace!("listener {} removed from {}", self.id, self.event);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .finish()
    }
}
