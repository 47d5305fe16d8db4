//! Observer module for hotkey notification dispatch
//!
//! Observers implement `HotKeyObserver` (closures do so automatically) and
//! are kept in an `Observers` registry that notifies them in registration
//! order.

mod registry;

pub use registry::{HotKeyObserver, ObserverError, ObserverId, Observers};
