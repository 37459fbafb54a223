use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: AtomicU64,
    listeners: DashMap<u64, Listener<E>>,
}

/// Broadcast hub for one stream of page events (scroll, pointer, timer ticks...).
///
/// Listeners run synchronously inside [`EventSource::emit`], in the order they
/// subscribed. Clones share the same listener set.
pub struct EventSource<E> {
    registry: Arc<Registry<E>>,
}

impl<E> Clone for EventSource<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Registry {
                next_id: AtomicU64::new(0),
                listeners: DashMap::new(),
            }),
        }
    }
}

impl<E> std::fmt::Debug for EventSource<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.registry.listeners.len())
            .finish()
    }
}

impl<E: 'static> EventSource<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + Send + Sync + 'static) -> Subscription {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners.insert(id, Arc::new(listener));

        let registry = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.listeners.remove(&id);
            }
        })
    }

    pub fn emit(&self, event: &E) {
        // snapshot first so listeners may (un)subscribe while we deliver
        let mut snapshot = self
            .registry
            .listeners
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect::<Vec<_>>();
        snapshot.sort_by_key(|(id, _)| *id);

        for (id, listener) in snapshot {
            // skip anything cancelled earlier in this same emission
            if self.registry.listeners.contains_key(&id) {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.len()
    }
}

type CancelFn = Box<dyn FnOnce() + Send + Sync>;

/// A scoped registration against an [`EventSource`] or a periodic task.
///
/// Cancelling is idempotent, and dropping the subscription cancels it, so a
/// subscription owned by a component is released when the component is.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Mutex<Option<CancelFn>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Mutex::new(Some(Box::new(cancel))),
        }
    }

    /// A subscription with nothing to release.
    pub fn inert() -> Self {
        Self {
            cancel: Mutex::new(None),
        }
    }

    pub fn cancel(&self) {
        let cancel = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(cancel) = cancel {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Holds a subscription that the subscribed callback may need to cancel itself.
///
/// The callback is created before the subscription exists, so it captures a
/// (weak) reference to the slot and the subscription is parked here afterwards.
#[derive(Debug, Default)]
pub struct SubscriptionSlot {
    inner: Mutex<Option<Subscription>>,
}

impl SubscriptionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self, subscription: Subscription) {
        let previous = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(subscription);
        drop(previous);
    }

    pub fn cancel(&self) {
        let current = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(current) = current {
            current.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(Subscription::is_active)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
