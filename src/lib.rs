//! hotkey-recorder: keyboard shortcut value type for macOS recorders
//!
//! Provides:
//! - `HotKey`, an immutable key code + modifier mask compared by value
//! - macOS modifier flag bits, virtual key codes and display glyphs
//! - an observer registry for dispatching a triggered hotkey
//!
//! Capturing hotkeys from the system and recorder UI live elsewhere.

pub mod config;
pub mod hotkey;
pub mod observer;

pub use config::Config;
pub use hotkey::{HotKey, ModifierState};
pub use observer::{HotKeyObserver, ObserverError, ObserverId, Observers};
