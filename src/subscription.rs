//! Subscription handles for store change notifications.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::state::State;

/// Unique identifier for a registered subscriber.
///
/// Generated from an atomic counter, so identity is stable under
/// concurrent subscribe/unsubscribe. Removal goes through this id
/// rather than a positional index, which would be fragile when the
/// subscriber list changes concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

pub(crate) type SubscriberFn<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Ordered subscriber registry. Iteration order is registration order.
pub(crate) struct SubscriberSet<S> {
    entries: Vec<(SubscriberId, SubscriberFn<S>)>,
}

impl<S> SubscriberSet<S> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, id: SubscriberId, callback: SubscriberFn<S>) {
        self.entries.push((id, callback));
    }

    pub(crate) fn remove(&mut self, id: SubscriberId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Snapshot the callbacks for invocation outside the lock.
    pub(crate) fn callbacks(&self) -> Vec<SubscriberFn<S>> {
        self.entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Holds a weak reference to the subscriber registry, so a live handle
/// does not keep the store alive. Dropping the handle does not remove
/// the callback; call [`Subscription::unsubscribe`] explicitly.
pub struct Subscription<S: State> {
    id: SubscriberId,
    registry: Weak<RwLock<SubscriberSet<S>>>,
}

impl<S: State> Subscription<S> {
    pub(crate) fn new(id: SubscriberId, registry: Weak<RwLock<SubscriberSet<S>>>) -> Self {
        Self { id, registry }
    }

    /// The subscriber's stable identity.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove exactly this callback from the store.
    ///
    /// Idempotent: calling it again (or after the store is gone) is a
    /// safe no-op and never touches another subscriber.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.write().remove(self.id);
            tracing::trace!(subscriber = self.id.0, "subscriber removed");
        }
    }
}
