//! Synchronous event bus
//!
//! Listeners run on the emitting thread, in registration order. A listener
//! may unsubscribe itself or others while an emit is in progress: a listener
//! removed mid-emit is skipped for the rest of that emit. Listeners added
//! mid-emit are first called on the next emit.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Cloning shares the listener list
pub struct EventBus<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut registry = self.registry.lock();
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != subscription.0);
        registry.listeners.len() != before
    }

    /// Deliver `event` to every listener; returns how many were called
    pub fn emit(&self, event: &T) -> usize {
        // Snapshot so listeners can touch the bus without deadlocking
        let snapshot: Vec<(u64, Listener<T>)> = self.registry.lock().listeners.clone();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            listener(event);
            delivered += 1;
        }
        delivered
    }

    fn is_registered(&self, id: u64) -> bool {
        self.registry.lock().listeners.iter().any(|(l, _)| *l == id)
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().listeners.len()
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let bus = EventBus::<u32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let log = log.clone();
            bus.subscribe(move |v| log.lock().push(format!("{}:{}", tag, v)));
        }

        assert_eq!(bus.emit(&7), 3);
        assert_eq!(*log.lock(), vec!["first:7", "second:7", "third:7"]);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::<u32>::new();
        let hits = Arc::new(Mutex::new(0));
        let h = hits.clone();
        let sub = bus.subscribe(move |_| *h.lock() += 1);

        bus.emit(&1);
        assert!(bus.unsubscribe(sub));
        assert!(!bus.unsubscribe(sub));
        bus.emit(&2);

        assert_eq!(*hits.lock(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_emit() {
        let bus = EventBus::<u32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let second: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        // The first listener removes the second one mid-emit
        let b = bus.clone();
        let target = second.clone();
        let l = log.clone();
        bus.subscribe(move |_| {
            l.lock().push("first");
            if let Some(sub) = target.lock().take() {
                b.unsubscribe(sub);
            }
        });
        let l = log.clone();
        let sub = bus.subscribe(move |_| l.lock().push("second"));
        *second.lock() = Some(sub);

        assert_eq!(bus.emit(&0), 1);
        assert_eq!(*log.lock(), vec!["first"]);
    }

    #[test]
    fn test_self_unsubscribe_during_emit() {
        let bus = EventBus::<u32>::new();
        let own: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let hits = Arc::new(Mutex::new(0));

        let b = bus.clone();
        let o = own.clone();
        let h = hits.clone();
        let sub = bus.subscribe(move |_| {
            *h.lock() += 1;
            if let Some(sub) = *o.lock() {
                b.unsubscribe(sub);
            }
        });
        *own.lock() = Some(sub);

        bus.emit(&0);
        bus.emit(&0);
        assert_eq!(*hits.lock(), 1);
    }

    #[test]
    fn test_subscribe_during_emit_waits_for_next() {
        let bus = EventBus::<u32>::new();
        let hits = Arc::new(Mutex::new(0));

        let b = bus.clone();
        let h = hits.clone();
        let added = Arc::new(Mutex::new(false));
        bus.subscribe(move |_| {
            let mut added = added.lock();
            if !*added {
                *added = true;
                let h = h.clone();
                b.subscribe(move |_| *h.lock() += 1);
            }
        });

        assert_eq!(bus.emit(&0), 1);
        assert_eq!(*hits.lock(), 0);
        assert_eq!(bus.emit(&0), 2);
        assert_eq!(*hits.lock(), 1);
    }
}
