//! Observer registry

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::hotkey::HotKey;

/// Something that wants to hear about a triggered hotkey
pub trait HotKeyObserver: Send + Sync {
    /// Called once per dispatch with the hotkey that fired
    fn hot_key_triggered(&self, hot_key: &HotKey);
}

impl<F> HotKeyObserver for F
where
    F: Fn(&HotKey) + Send + Sync,
{
    fn hot_key_triggered(&self, hot_key: &HotKey) {
        self(hot_key)
    }
}

/// Handle returned by `Observers::register`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

/// Errors that can occur when managing observers
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ObserverError {
    #[error("no observer registered as {0}")]
    UnknownObserver(ObserverId),
}

/// Ordered set of hotkey observers
#[derive(Default)]
pub struct Observers {
    entries: Vec<(ObserverId, Arc<dyn HotKeyObserver>)>,
    next_id: u64,
}

impl Observers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer; it is notified after every observer added before it
    pub fn register<O>(&mut self, observer: O) -> ObserverId
    where
        O: HotKeyObserver + 'static,
    {
        self.register_shared(Arc::new(observer))
    }

    /// Add an observer that is also held elsewhere
    pub fn register_shared(&mut self, observer: Arc<dyn HotKeyObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        debug!(%id, count = self.entries.len(), "observer registered");
        id
    }

    /// Remove a previously registered observer
    pub fn unregister(&mut self, id: ObserverId) -> Result<(), ObserverError> {
        let index = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or_else(|| {
                warn!(%id, "unregister for unknown observer");
                ObserverError::UnknownObserver(id)
            })?;

        self.entries.remove(index);
        debug!(%id, count = self.entries.len(), "observer unregistered");
        Ok(())
    }

    /// Notify every observer of `hot_key`, returning how many were called
    pub fn notify(&self, hot_key: &HotKey) -> usize {
        debug!(%hot_key, observers = self.entries.len(), "dispatching hotkey");
        for (_, observer) in &self.entries {
            observer.hot_key_triggered(hot_key);
        }
        self.entries.len()
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no observer is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<_> = self.entries.iter().map(|(id, _)| *id).collect();
        f.debug_struct("Observers").field("ids", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::hotkey::keys::{codes, flags};

    struct Counter(AtomicUsize);

    impl HotKeyObserver for Counter {
        fn hot_key_triggered(&self, _hot_key: &HotKey) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_empty_registry() {
        let observers = Observers::new();
        assert!(observers.is_empty());
        assert_eq!(observers.notify(&HotKey::new(0, 0)), 0);
    }

    #[test]
    fn test_closure_observer_receives_hotkey() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut observers = Observers::new();
        observers.register(move |hot_key: &HotKey| sink.lock().unwrap().push(*hot_key));

        let hot_key = HotKey::new(codes::SPACE, flags::COMMAND);
        assert_eq!(observers.notify(&hot_key), 1);
        assert_eq!(*seen.lock().unwrap(), vec![hot_key]);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::new();

        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            observers.register(move |_: &HotKey| order.lock().unwrap().push(label));
        }

        observers.notify(&HotKey::new(codes::ESCAPE, 0));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_shared_observer() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut observers = Observers::new();
        observers.register_shared(counter.clone());
        observers.register_shared(counter.clone());

        observers.notify(&HotKey::new(codes::RETURN, flags::SHIFT));
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unregister() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut observers = Observers::new();
        let id = observers.register_shared(counter.clone());
        assert_eq!(observers.len(), 1);

        observers.unregister(id).unwrap();
        assert!(observers.is_empty());

        observers.notify(&HotKey::new(codes::TAB, 0));
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unregister_unknown_id() {
        let mut observers = Observers::new();
        let id = observers.register(|_: &HotKey| {});
        observers.unregister(id).unwrap();

        assert_eq!(
            observers.unregister(id),
            Err(ObserverError::UnknownObserver(id))
        );
    }

    #[test]
    fn test_ids_not_reused() {
        let mut observers = Observers::new();
        let first = observers.register(|_: &HotKey| {});
        observers.unregister(first).unwrap();
        let second = observers.register(|_: &HotKey| {});
        assert_ne!(first, second);
    }
}
